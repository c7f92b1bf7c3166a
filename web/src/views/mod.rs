pub mod admin;

mod shell;
pub use shell::AppShell;

mod home;
pub use home::Home;

mod event_details;
pub use event_details::EventDetails;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod cart;
pub use cart::Cart;

mod payment;
pub use payment::{PaymentCancel, PaymentSuccess};

mod orders;
pub use orders::{OrderDetail, Orders};

mod not_found;
pub use not_found::NotFound;
