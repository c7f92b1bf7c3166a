//! # api — REST gateway and client-side state for EventTickets
//!
//! Everything that talks to the backend lives here, along with the state
//! that has to survive across views: the session, the ticket selection,
//! and the checkout orchestration. The crate has no UI dependency and
//! compiles natively, so all of its behavior is exercised by plain
//! `cargo test`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Backend base address, compiled in via `API_BASE_URL` |
//! | [`error`] | [`ApiError`] — the failure taxonomy every call surfaces |
//! | [`models`] | Wire types for auth, catalog, cart, orders, and admin |
//! | [`storage`] | [`TokenStore`] — localStorage in the browser, a map elsewhere |
//! | [`session`] | [`Session`] — who the current user is, persisted write-through |
//! | [`client`] | [`ApiClient`] — bearer injection, JSON, the 401 tap |
//! | [`auth`] | login / register / verify / logout operations |
//! | [`events`] | public catalog reads and filter lookups |
//! | [`cart`] | ticket selection, cart mutation, checkout, payment return |
//! | [`orders`] | order history reads |
//! | [`admin`] | back-office CRUD and dashboard statistics |

pub mod admin;
pub mod auth;
pub mod cart;
pub mod client;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod orders;
pub mod session;
pub mod storage;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::{Session, SessionState};
pub use storage::{make_token_store, MemoryStore, TokenStore};
