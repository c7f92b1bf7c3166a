//! Shared UI for the EventTickets workspace.

pub mod browser;
pub mod format;
pub mod guard;
pub mod session;

mod navbar;
pub use navbar::Navbar;

mod quantity;
pub use quantity::QuantityPicker;

mod widgets;
pub use widgets::{EmptyState, ErrorBanner, LoadingIndicator, NoticeBanner, Pager};

pub use session::{use_api, use_session, SessionProvider};
