//! Wire types shared with the backend.
//!
//! Field names follow the JSON the backend emits; unknown fields are
//! ignored so the client tolerates additive backend changes. Optional
//! fields carry `#[serde(default)]` because the backend omits them
//! rather than sending `null` in several places.

use serde::{Deserialize, Serialize};

/// Access level carried inside the user profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// The authenticated user's profile, as issued by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Registration payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct VerifyResponse {
    pub user: User,
}

/// Generic `{"message": ...}` acknowledgement used by mutations.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageAck {
    pub message: String,
}

/// Paging envelope returned next to any paged collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, per_page: 12, total: 0, pages: 0 }
    }
}

/// A page of events plus its paging envelope. The row type differs
/// between the public grid and the admin table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventPage<T> {
    pub events: Vec<T>,
    pub pagination: Pagination,
}

/// Row of the public event grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub venue_city: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub min_price: f64,
    #[serde(default)]
    pub max_price: f64,
}

/// Full event detail with its purchasable tiers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub venue_address: String,
    #[serde(default)]
    pub venue_city: String,
    #[serde(default)]
    pub artist_name: String,
    #[serde(default)]
    pub artist_bio: Option<String>,
    #[serde(default)]
    pub tickets: Vec<TicketTier>,
}

/// A ticket category for an event, with its own price and remaining
/// availability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketTier {
    pub id: i64,
    pub location: String,
    pub price: f64,
    /// Remaining seats; the ceiling for any selection of this tier.
    #[serde(default)]
    pub available: u32,
}

/// One line of the backend cart, denormalized for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: i64,
    pub ticket_id: i64,
    #[serde(default)]
    pub event_id: i64,
    pub event_title: String,
    pub event_date: String,
    pub event_time: String,
    #[serde(default)]
    pub venue_name: String,
    pub location: String,
    pub price: f64,
    pub quantity: u32,
}

/// The cart as the backend sees it. The client renders this verbatim and
/// never derives an authoritative total of its own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutResponse {
    pub order_id: i64,
    #[serde(default)]
    pub payment_id: String,
    /// Provider-hosted page to redirect the buyer to. Absence is a
    /// checkout failure, never a silent success.
    #[serde(default)]
    pub approval_url: Option<String>,
    #[serde(default)]
    pub total_amount: f64,
}

/// Row of the order history list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub order_date: String,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub total_tickets: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub id: i64,
    pub order_date: String,
    pub status: String,
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub quantity: u32,
    pub price: f64,
    pub location: String,
    pub event_title: String,
    pub event_date: String,
    pub event_time: String,
    #[serde(default)]
    pub venue_name: String,
}

/// Reference lookups used to populate selectors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Row of the admin event table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminEventRow {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub artist_name: String,
}

/// Full event record for the admin edit form, with foreign keys intact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminEventDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub type_id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub tickets: Vec<AdminTicketRow>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminTicketRow {
    pub id: i64,
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub quantity_available: u32,
    #[serde(default)]
    pub quantity_sold: u32,
}

/// Create/update payload for an event, tiers included.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub event_date: String,
    pub event_time: String,
    pub type_id: i64,
    pub venue_id: i64,
    pub artist_id: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: String,
    #[serde(default)]
    pub tickets: Vec<TicketPayload>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicketPayload {
    pub location: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventTypePayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VenuePayload {
    pub name: String,
    pub address: String,
    pub city: String,
    #[serde(default)]
    pub capacity: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistPayload {
    pub name: String,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub bio: String,
}

/// Aggregate counters for the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub active_events: u64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_orders: u64,
    #[serde(default)]
    pub completed_orders: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: i64,
    pub order_date: String,
    pub total_amount: f64,
    pub status: String,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
}
