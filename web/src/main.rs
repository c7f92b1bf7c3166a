use dioxus::prelude::*;

use ui::SessionProvider;

use guards::{AdminGuard, AuthGuard, GuestGuard};
use views::admin::{
    AdminDashboard, AdminShell, EditEvent, ManageArtists, ManageEventTypes, ManageEvents,
    ManageVenues, NewEvent,
};
use views::{
    AppShell, Cart, EventDetails, Home, Login, NotFound, OrderDetail, Orders, PaymentCancel,
    PaymentSuccess, Register,
};

mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/events/:id")]
        EventDetails { id: i64 },
        #[layout(GuestGuard)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]
        #[layout(AuthGuard)]
            #[route("/cart")]
            Cart {},
            #[route("/orders")]
            Orders {},
            #[route("/orders/:id")]
            OrderDetail { id: i64 },
            #[route("/payment/success")]
            PaymentSuccess {},
            #[route("/payment/cancel")]
            PaymentCancel {},
        #[end_layout]
        #[layout(AdminGuard)]
            #[layout(AdminShell)]
                #[nest("/admin")]
                    #[route("/")]
                    AdminDashboard {},
                    #[route("/events")]
                    ManageEvents {},
                    #[route("/events/new")]
                    NewEvent {},
                    #[route("/events/edit/:id")]
                    EditEvent { id: i64 },
                    #[route("/event-types")]
                    ManageEventTypes {},
                    #[route("/venues")]
                    ManageVenues {},
                    #[route("/artists")]
                    ManageArtists {},
                #[end_nest]
            #[end_layout]
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}
