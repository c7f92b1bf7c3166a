//! Ticket selection, cart mutation, checkout, and the payment return leg.

use serde_json::json;
use thiserror::Error;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Cart, CheckoutResponse, MessageAck, TicketTier};

/// One pending add-to-cart call.
#[derive(Clone, Debug, PartialEq)]
pub struct CartAddition {
    pub ticket_id: i64,
    pub quantity: u32,
}

/// Ephemeral tier selection, scoped to one event-details view.
///
/// Quantities only move through [`increment`](Self::increment) and
/// [`decrement`](Self::decrement), bounded to `[0, available]`. The
/// selection is never persisted; it is cleared on a successful
/// submission and simply dropped when the view goes away.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TicketSelection {
    // first-pick order doubles as submission order
    picks: Vec<(i64, u32)>,
}

impl TicketSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quantity(&self, ticket_id: i64) -> u32 {
        self.picks
            .iter()
            .find(|(id, _)| *id == ticket_id)
            .map(|(_, quantity)| *quantity)
            .unwrap_or(0)
    }

    /// Bump a tier by one, capped at its availability ceiling.
    pub fn increment(&mut self, ticket_id: i64, available: u32) {
        let current = self.quantity(ticket_id);
        if current >= available {
            return;
        }
        self.set(ticket_id, current + 1);
    }

    /// Drop a tier by one; zero is the floor.
    pub fn decrement(&mut self, ticket_id: i64) {
        let current = self.quantity(ticket_id);
        if current == 0 {
            return;
        }
        self.set(ticket_id, current - 1);
    }

    fn set(&mut self, ticket_id: i64, quantity: u32) {
        match self.picks.iter_mut().find(|(id, _)| *id == ticket_id) {
            Some(entry) => entry.1 = quantity,
            None => self.picks.push((ticket_id, quantity)),
        }
    }

    pub fn total_tickets(&self) -> u32 {
        self.picks.iter().map(|(_, quantity)| quantity).sum()
    }

    /// Price preview against the tiers on display. Immediate UI feedback
    /// only — the authoritative total always comes back from the cart
    /// endpoint after submission.
    pub fn total_price(&self, tiers: &[TicketTier]) -> f64 {
        self.picks
            .iter()
            .map(|(id, quantity)| {
                tiers
                    .iter()
                    .find(|tier| tier.id == *id)
                    .map(|tier| tier.price * f64::from(*quantity))
                    .unwrap_or(0.0)
            })
            .sum()
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Tiers to submit, in selection order, zero-quantity picks dropped.
    pub fn submission_plan(&self) -> Vec<CartAddition> {
        self.picks
            .iter()
            .filter(|(_, quantity)| *quantity > 0)
            .map(|&(ticket_id, quantity)| CartAddition { ticket_id, quantity })
            .collect()
    }
}

/// Seam between the orchestration and the transport, so the ordering
/// contracts below are testable without a backend.
pub trait CartBackend {
    async fn add_to_cart(&self, addition: &CartAddition) -> Result<(), ApiError>;
    async fn create_checkout(&self) -> Result<CheckoutResponse, ApiError>;
}

impl CartBackend for ApiClient {
    async fn add_to_cart(&self, addition: &CartAddition) -> Result<(), ApiError> {
        let _: MessageAck = self
            .post(
                "/api/cart",
                &json!({
                    "ticket_id": addition.ticket_id,
                    "quantity": addition.quantity,
                }),
            )
            .await?;
        Ok(())
    }

    async fn create_checkout(&self) -> Result<CheckoutResponse, ApiError> {
        self.post_empty("/api/checkout").await
    }
}

/// Outcome of a tier-by-tier submission.
///
/// Additions made before a failure stay in the backend cart; there is no
/// compensating rollback. The report makes that partial state explicit
/// instead of losing it.
#[derive(Debug)]
pub struct SubmissionReport {
    pub added: Vec<CartAddition>,
    pub failure: Option<(CartAddition, ApiError)>,
}

impl SubmissionReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn tickets_added(&self) -> u32 {
        self.added.iter().map(|addition| addition.quantity).sum()
    }

    pub fn error_message(&self) -> Option<String> {
        self.failure.as_ref().map(|(_, error)| error.to_string())
    }
}

/// Submit a selection one tier at a time, in selection order, each call
/// awaited before the next is issued. The loop stops at the first
/// failure, so everything before the failing tier has been added.
pub async fn submit_selection<B: CartBackend>(
    backend: &B,
    selection: &TicketSelection,
) -> SubmissionReport {
    let mut added = Vec::new();
    for addition in selection.submission_plan() {
        match backend.add_to_cart(&addition).await {
            Ok(()) => added.push(addition),
            Err(err) => {
                tracing::warn!(ticket_id = addition.ticket_id, %err, "add to cart failed");
                return SubmissionReport {
                    added,
                    failure: Some((addition, err)),
                };
            }
        }
    }
    SubmissionReport { added, failure: None }
}

/// Why a checkout did not reach the payment provider.
#[derive(Clone, Debug, Error)]
pub enum CheckoutError {
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("The payment provider did not return an approval link")]
    MissingApprovalUrl,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Start a checkout. An empty cart fails locally without touching the
/// network; a response without an approval URL is an error, never a
/// silent success. On success the caller redirects the browser to the
/// returned provider URL.
pub async fn begin_checkout<B: CartBackend>(
    backend: &B,
    cart: &Cart,
) -> Result<String, CheckoutError> {
    if cart.items.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    let response = backend.create_checkout().await?;
    response
        .approval_url
        .filter(|url| !url.is_empty())
        .ok_or(CheckoutError::MissingApprovalUrl)
}

/// `GET /api/cart`.
pub async fn fetch_cart(api: &ApiClient) -> Result<Cart, ApiError> {
    api.get("/api/cart").await
}

/// `DELETE /api/cart/:id`.
pub async fn remove_item(api: &ApiClient, item_id: i64) -> Result<(), ApiError> {
    let _: MessageAck = api.delete(&format!("/api/cart/{item_id}")).await?;
    Ok(())
}

/// Identifiers the payment provider appends to the success-callback URL.
/// Both must be present and non-empty; anything less is terminal for the
/// navigation that carried it.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentCallback {
    pub payment_id: String,
    pub payer_id: String,
}

impl PaymentCallback {
    /// Parse from a raw query string (`?paymentId=...&PayerID=...`).
    /// The identifiers are opaque and URL-safe, so no decoding is applied.
    pub fn from_query(query: &str) -> Option<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut payment_id = None;
        let mut payer_id = None;
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "paymentId" => payment_id = Some(value.to_string()),
                "PayerID" => payer_id = Some(value.to_string()),
                _ => {}
            }
        }
        match (payment_id, payer_id) {
            (Some(payment_id), Some(payer_id))
                if !payment_id.is_empty() && !payer_id.is_empty() =>
            {
                Some(Self { payment_id, payer_id })
            }
            _ => None,
        }
    }
}

/// `POST /api/payment/execute` — exactly one call per valid callback.
pub async fn execute_payment(
    api: &ApiClient,
    callback: &PaymentCallback,
) -> Result<String, ApiError> {
    let ack: MessageAck = api
        .post(
            "/api/payment/execute",
            &json!({
                "payment_id": callback.payment_id,
                "payer_id": callback.payer_id,
            }),
        )
        .await?;
    Ok(ack.message)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::models::CartItem;

    fn tier(id: i64, price: f64, available: u32) -> TicketTier {
        TicketTier {
            id,
            location: format!("Tier {id}"),
            price,
            available,
        }
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut selection = TicketSelection::new();
        selection.decrement(1);
        assert_eq!(selection.quantity(1), 0);

        selection.increment(1, 5);
        selection.decrement(1);
        selection.decrement(1);
        assert_eq!(selection.quantity(1), 0);
    }

    #[test]
    fn increment_stops_at_the_availability_ceiling() {
        let mut selection = TicketSelection::new();
        for _ in 0..10 {
            selection.increment(1, 3);
        }
        assert_eq!(selection.quantity(1), 3);
    }

    #[test]
    fn totals_track_the_selection() {
        let tiers = [tier(1, 25.0, 10), tier(2, 80.0, 4)];
        let mut selection = TicketSelection::new();
        selection.increment(1, 10);
        selection.increment(1, 10);
        selection.increment(2, 4);

        assert_eq!(selection.total_tickets(), 3);
        assert!((selection.total_price(&tiers) - 130.0).abs() < f64::EPSILON);
    }

    #[test]
    fn plan_keeps_selection_order_and_drops_zeroes() {
        let mut selection = TicketSelection::new();
        selection.increment(10, 5);
        selection.increment(10, 5);
        selection.increment(20, 5); // picked then deselected
        selection.decrement(20);
        selection.increment(30, 5);

        let plan = selection.submission_plan();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0], CartAddition { ticket_id: 10, quantity: 2 });
        assert_eq!(plan[1], CartAddition { ticket_id: 30, quantity: 1 });
    }

    /// Records add calls, failing on a chosen tier; checkout is scripted
    /// separately.
    struct ScriptedBackend {
        calls: RefCell<Vec<i64>>,
        fail_on: Option<i64>,
        checkout: Option<CheckoutResponse>,
    }

    impl ScriptedBackend {
        fn new() -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_on: None,
                checkout: None,
            }
        }
    }

    impl CartBackend for ScriptedBackend {
        async fn add_to_cart(&self, addition: &CartAddition) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(addition.ticket_id);
            if self.fail_on == Some(addition.ticket_id) {
                return Err(ApiError::Api {
                    status: 400,
                    message: "Only 1 tickets available".to_string(),
                });
            }
            Ok(())
        }

        async fn create_checkout(&self) -> Result<CheckoutResponse, ApiError> {
            match &self.checkout {
                Some(response) => Ok(response.clone()),
                None => panic!("checkout must not be reached"),
            }
        }
    }

    #[tokio::test]
    async fn submission_issues_one_call_per_nonzero_tier_in_order() {
        let backend = ScriptedBackend::new();
        let mut selection = TicketSelection::new();
        selection.increment(1, 5);
        selection.increment(1, 5);
        selection.increment(2, 5);
        selection.decrement(2);
        selection.increment(3, 5);

        let report = submit_selection(&backend, &selection).await;
        assert!(report.is_success());
        assert_eq!(report.tickets_added(), 3);
        assert_eq!(*backend.calls.borrow(), vec![1, 3]);
    }

    #[tokio::test]
    async fn submission_stops_at_the_first_failure() {
        let mut backend = ScriptedBackend::new();
        backend.fail_on = Some(1);
        let mut selection = TicketSelection::new();
        selection.increment(1, 5);
        selection.increment(3, 5);

        let report = submit_selection(&backend, &selection).await;
        assert!(!report.is_success());
        // the failing tier was attempted, the later tier never was
        assert_eq!(*backend.calls.borrow(), vec![1]);
        assert!(report.added.is_empty());
        assert_eq!(report.error_message().unwrap(), "Only 1 tickets available");
    }

    #[tokio::test]
    async fn earlier_successes_are_reported_when_a_later_tier_fails() {
        let mut backend = ScriptedBackend::new();
        backend.fail_on = Some(3);
        let mut selection = TicketSelection::new();
        selection.increment(1, 5);
        selection.increment(3, 5);

        let report = submit_selection(&backend, &selection).await;
        assert_eq!(report.added.len(), 1);
        assert_eq!(report.added[0].ticket_id, 1);
        assert!(report.failure.is_some());
    }

    #[tokio::test]
    async fn empty_cart_checkout_never_reaches_the_backend() {
        // the scripted backend panics if create_checkout is called
        let backend = ScriptedBackend::new();
        let result = begin_checkout(&backend, &Cart::default()).await;
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[tokio::test]
    async fn checkout_without_an_approval_url_is_a_failure() {
        let mut backend = ScriptedBackend::new();
        backend.checkout = Some(CheckoutResponse {
            order_id: 7,
            payment_id: "PAY-1".to_string(),
            approval_url: None,
            total_amount: 50.0,
        });
        let cart = Cart {
            items: vec![CartItem {
                id: 1,
                ticket_id: 1,
                event_id: 1,
                event_title: "Show".to_string(),
                event_date: "2026-09-01".to_string(),
                event_time: "20:00:00".to_string(),
                venue_name: "Hall".to_string(),
                location: "GA".to_string(),
                price: 50.0,
                quantity: 1,
            }],
            total: 50.0,
        };

        let result = begin_checkout(&backend, &cart).await;
        assert!(matches!(result, Err(CheckoutError::MissingApprovalUrl)));

        backend.checkout = Some(CheckoutResponse {
            order_id: 7,
            payment_id: "PAY-1".to_string(),
            approval_url: Some("https://pay.example/approve".to_string()),
            total_amount: 50.0,
        });
        let url = begin_checkout(&backend, &cart).await.unwrap();
        assert_eq!(url, "https://pay.example/approve");
    }

    #[test]
    fn callback_requires_both_parameters() {
        let both = PaymentCallback::from_query("?paymentId=PAY-1&PayerID=BUYER-9");
        assert_eq!(
            both,
            Some(PaymentCallback {
                payment_id: "PAY-1".to_string(),
                payer_id: "BUYER-9".to_string(),
            })
        );

        assert_eq!(PaymentCallback::from_query("?paymentId=PAY-1"), None);
        assert_eq!(PaymentCallback::from_query("?PayerID=BUYER-9"), None);
        assert_eq!(PaymentCallback::from_query("?paymentId=&PayerID=BUYER-9"), None);
        assert_eq!(PaymentCallback::from_query(""), None);
    }

    #[test]
    fn callback_ignores_unrelated_parameters_and_the_leading_mark() {
        let parsed = PaymentCallback::from_query("token=EC-123&paymentId=PAY-1&PayerID=B9");
        assert_eq!(parsed.unwrap().payment_id, "PAY-1");
    }
}
