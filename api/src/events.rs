//! Public catalog reads.

use futures::join;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{EventDetail, EventPage, EventSummary, EventType, Venue};

/// Filter-bar state for the public grid. Empty fields are omitted from
/// the query string entirely.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilters {
    pub search: String,
    pub event_type: String,
    pub venue: String,
    pub date: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventQuery {
    pub page: u32,
    pub per_page: u32,
    pub filters: EventFilters,
}

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 12,
            filters: EventFilters::default(),
        }
    }
}

impl EventQuery {
    /// Query pairs with empty filters dropped.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        let filters = [
            ("search", &self.filters.search),
            ("type", &self.filters.event_type),
            ("venue", &self.filters.venue),
            ("date", &self.filters.date),
        ];
        for (key, value) in filters {
            if !value.is_empty() {
                pairs.push((key, value.clone()));
            }
        }
        pairs
    }
}

/// `GET /api/events`.
pub async fn list_events(
    api: &ApiClient,
    query: &EventQuery,
) -> Result<EventPage<EventSummary>, ApiError> {
    api.get_query("/api/events", &query.to_pairs()).await
}

/// `GET /api/events/:id`, tickets included.
pub async fn event_details(api: &ApiClient, event_id: i64) -> Result<EventDetail, ApiError> {
    api.get(&format!("/api/events/{event_id}")).await
}

/// `GET /api/event-types`.
pub async fn event_types(api: &ApiClient) -> Result<Vec<EventType>, ApiError> {
    api.get("/api/event-types").await
}

/// `GET /api/venues`.
pub async fn venues(api: &ApiClient) -> Result<Vec<Venue>, ApiError> {
    api.get("/api/venues").await
}

/// Fetch the filter-bar lookups concurrently; neither depends on the
/// other. A failing lookup degrades to an empty list so the grid stays
/// usable without its selectors.
pub async fn filter_lookups(api: &ApiClient) -> (Vec<EventType>, Vec<Venue>) {
    let (types, venues) = join!(event_types(api), venues(api));
    (
        types.unwrap_or_else(|err| {
            tracing::warn!(%err, "event type lookup failed");
            Vec::new()
        }),
        venues.unwrap_or_else(|err| {
            tracing::warn!(%err, "venue lookup failed");
            Vec::new()
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_includes_paging_and_skips_empty_filters() {
        let query = EventQuery::default();
        assert_eq!(
            query.to_pairs(),
            vec![("page", "1".to_string()), ("per_page", "12".to_string())]
        );
    }

    #[test]
    fn query_carries_set_filters_only() {
        let query = EventQuery {
            page: 3,
            per_page: 12,
            filters: EventFilters {
                search: "jazz".to_string(),
                event_type: String::new(),
                venue: "5".to_string(),
                date: String::new(),
            },
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("search", "jazz".to_string())));
        assert!(pairs.contains(&("venue", "5".to_string())));
        assert!(!pairs.iter().any(|(key, _)| *key == "type" || *key == "date"));
    }
}
