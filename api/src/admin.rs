//! Back-office calls. Every endpoint here requires the admin role; a 401
//! behaves like anywhere else and a 403 surfaces as a business error.

use futures::join;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    AdminEventDetail, AdminEventRow, Artist, ArtistPayload, DashboardStats, EventPage,
    EventPayload, EventType, EventTypePayload, MessageAck, Venue, VenuePayload,
};

/// `GET /admin/dashboard/stats`.
pub async fn dashboard_stats(api: &ApiClient) -> Result<DashboardStats, ApiError> {
    api.get("/admin/dashboard/stats").await
}

fn paging(page: u32, per_page: u32) -> [(&'static str, String); 2] {
    [("page", page.to_string()), ("per_page", per_page.to_string())]
}

// Events

pub async fn list_events(
    api: &ApiClient,
    page: u32,
    per_page: u32,
) -> Result<EventPage<AdminEventRow>, ApiError> {
    api.get_query("/admin/events", &paging(page, per_page)).await
}

pub async fn get_event(api: &ApiClient, event_id: i64) -> Result<AdminEventDetail, ApiError> {
    api.get(&format!("/admin/events/{event_id}")).await
}

pub async fn create_event(api: &ApiClient, payload: &EventPayload) -> Result<(), ApiError> {
    let _: MessageAck = api.post("/admin/events", payload).await?;
    Ok(())
}

pub async fn update_event(
    api: &ApiClient,
    event_id: i64,
    payload: &EventPayload,
) -> Result<(), ApiError> {
    let _: MessageAck = api.put(&format!("/admin/events/{event_id}"), payload).await?;
    Ok(())
}

pub async fn delete_event(api: &ApiClient, event_id: i64) -> Result<(), ApiError> {
    let _: MessageAck = api.delete(&format!("/admin/events/{event_id}")).await?;
    Ok(())
}

// Event types

pub async fn list_event_types(api: &ApiClient) -> Result<Vec<EventType>, ApiError> {
    api.get("/admin/event-types").await
}

pub async fn create_event_type(
    api: &ApiClient,
    payload: &EventTypePayload,
) -> Result<(), ApiError> {
    let _: MessageAck = api.post("/admin/event-types", payload).await?;
    Ok(())
}

pub async fn update_event_type(
    api: &ApiClient,
    type_id: i64,
    payload: &EventTypePayload,
) -> Result<(), ApiError> {
    let _: MessageAck = api.put(&format!("/admin/event-types/{type_id}"), payload).await?;
    Ok(())
}

pub async fn delete_event_type(api: &ApiClient, type_id: i64) -> Result<(), ApiError> {
    let _: MessageAck = api.delete(&format!("/admin/event-types/{type_id}")).await?;
    Ok(())
}

// Venues

pub async fn list_venues(api: &ApiClient) -> Result<Vec<Venue>, ApiError> {
    api.get("/admin/venues").await
}

pub async fn create_venue(api: &ApiClient, payload: &VenuePayload) -> Result<(), ApiError> {
    let _: MessageAck = api.post("/admin/venues", payload).await?;
    Ok(())
}

pub async fn update_venue(
    api: &ApiClient,
    venue_id: i64,
    payload: &VenuePayload,
) -> Result<(), ApiError> {
    let _: MessageAck = api.put(&format!("/admin/venues/{venue_id}"), payload).await?;
    Ok(())
}

pub async fn delete_venue(api: &ApiClient, venue_id: i64) -> Result<(), ApiError> {
    let _: MessageAck = api.delete(&format!("/admin/venues/{venue_id}")).await?;
    Ok(())
}

// Artists

pub async fn list_artists(api: &ApiClient) -> Result<Vec<Artist>, ApiError> {
    api.get("/admin/artists").await
}

pub async fn create_artist(api: &ApiClient, payload: &ArtistPayload) -> Result<(), ApiError> {
    let _: MessageAck = api.post("/admin/artists", payload).await?;
    Ok(())
}

pub async fn update_artist(
    api: &ApiClient,
    artist_id: i64,
    payload: &ArtistPayload,
) -> Result<(), ApiError> {
    let _: MessageAck = api.put(&format!("/admin/artists/{artist_id}"), payload).await?;
    Ok(())
}

pub async fn delete_artist(api: &ApiClient, artist_id: i64) -> Result<(), ApiError> {
    let _: MessageAck = api.delete(&format!("/admin/artists/{artist_id}")).await?;
    Ok(())
}

/// The three reference lookups the event form needs, fetched
/// concurrently. Unlike the public filter bar, a failure here fails the
/// form — an event cannot be created without its references.
pub async fn form_lookups(
    api: &ApiClient,
) -> Result<(Vec<EventType>, Vec<Venue>, Vec<Artist>), ApiError> {
    let (types, venues, artists) = join!(
        list_event_types(api),
        list_venues(api),
        list_artists(api)
    );
    Ok((types?, venues?, artists?))
}
