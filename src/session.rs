//! Planner session: owns the in-flight guard and the itinerary on display

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info, instrument};

use crate::client::{ItineraryTransport, failure_response};
use crate::guard::InFlightGuard;
use crate::models::{TripRequest, ViewModel};
use crate::normalize::normalize;
use crate::progress::{ProgressDisplay, ProgressPresenter};

/// What happened to a submission
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The request settled and its view model is now on display
    Settled(ViewModel),
    /// Another request was outstanding; nothing was sent
    Ignored,
}

/// One user's planning session.
///
/// Only one request may be outstanding at a time and the last settled
/// response is the single piece of state held until [`PlannerSession::reset`].
pub struct PlannerSession {
    transport: Arc<dyn ItineraryTransport>,
    guard: InFlightGuard,
    current: Mutex<Option<ViewModel>>,
    show_progress: bool,
}

impl PlannerSession {
    #[must_use]
    pub fn new(transport: Arc<dyn ItineraryTransport>) -> Self {
        Self {
            transport,
            guard: InFlightGuard::new(),
            current: Mutex::new(None),
            show_progress: false,
        }
    }

    /// Draw the loading animation on the terminal while requests run
    #[must_use]
    pub fn with_progress(mut self, visible: bool) -> Self {
        self.show_progress = visible;
        self
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// Send the request unless one is already outstanding.
    ///
    /// Transport failures never escape: they are turned into the generic
    /// failure response and normalized like any other body.
    #[instrument(skip(self, request), fields(destination = %request.destination()))]
    pub async fn submit(&self, request: TripRequest) -> SubmitOutcome {
        let Some(permit) = self.guard.try_begin() else {
            debug!("Request already in progress, ignoring duplicate submission");
            return SubmitOutcome::Ignored;
        };

        let presenter = ProgressPresenter::start();
        let display = ProgressDisplay::attach(&presenter, self.show_progress);

        let response = match self.transport.submit(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Itinerary request failed: {}", e);
                failure_response()
            }
        };
        drop(display);
        drop(presenter);

        let view = normalize(Some(&response));
        info!(failure = view.is_failure(), "Itinerary request settled");
        *self.lock_current() = Some(view.clone());

        permit.end();
        SubmitOutcome::Settled(view)
    }

    /// Itinerary currently on display
    #[must_use]
    pub fn current(&self) -> Option<ViewModel> {
        self.lock_current().clone()
    }

    /// Discard the displayed itinerary; an outstanding request keeps running
    pub fn reset(&self) {
        debug!("Resetting planner session");
        self.lock_current().take();
    }

    fn lock_current(&self) -> MutexGuard<'_, Option<ViewModel>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::models::{Interest, TripForm};
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FakeTransport {
        calls: AtomicUsize,
        delay: Duration,
        response: Option<Value>,
    }

    impl FakeTransport {
        fn answering(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                delay: Duration::from_millis(250),
                response: Some(response),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                delay: Duration::from_millis(250),
                response: None,
            })
        }
    }

    #[async_trait]
    impl ItineraryTransport for FakeTransport {
        async fn submit(&self, _request: &TripRequest) -> Result<Value, RequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            self.response
                .clone()
                .ok_or_else(|| RequestError::Network("connection refused".to_string()))
        }
    }

    fn request() -> TripRequest {
        TripForm {
            destination: "Kyoto, Japan".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 11, 2),
            end_date: NaiveDate::from_ymd_opt(2026, 11, 4),
            interests: vec![Interest::Culture],
            ..TripForm::default()
        }
        .submit()
        .unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_submission_sends_one_request() {
        let transport = FakeTransport::answering(json!({"success": true, "destination": "Kyoto"}));
        let session = PlannerSession::new(transport.clone());

        let (first, second) = tokio::join!(session.submit(request()), session.submit(request()));

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(first, SubmitOutcome::Settled(_)));
        assert_eq!(second, SubmitOutcome::Ignored);
        assert!(!session.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_released_after_failure() {
        let transport = FakeTransport::failing();
        let session = PlannerSession::new(transport.clone());

        let outcome = session.submit(request()).await;
        let SubmitOutcome::Settled(view) = outcome else {
            panic!("expected settled outcome");
        };
        assert!(view.is_failure());
        assert!(!session.is_busy());

        session.submit(request()).await;
        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_while_outstanding() {
        let transport = FakeTransport::answering(json!({"success": true}));
        let session = PlannerSession::new(transport);

        let check = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            session.is_busy()
        };
        let (_, busy_midway) = tokio::join!(session.submit(request()), check);

        assert!(busy_midway);
        assert!(!session.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_current_itinerary() {
        let transport = FakeTransport::answering(json!({"success": true, "destination": "Kyoto"}));
        let session = PlannerSession::new(transport);
        assert!(session.current().is_none());

        session.submit(request()).await;
        let current = session.current().unwrap();
        assert_eq!(current.itinerary().unwrap().destination, "Kyoto");

        session.reset();
        assert!(session.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_does_not_cancel_outstanding_request() {
        let transport = FakeTransport::answering(json!({"success": true, "destination": "Kyoto"}));
        let session = PlannerSession::new(transport.clone());

        let reset_midway = async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            session.reset();
            session.is_busy()
        };
        let (outcome, busy_after_reset) = tokio::join!(session.submit(request()), reset_midway);

        assert!(busy_after_reset);
        assert!(matches!(outcome, SubmitOutcome::Settled(_)));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(session.current().unwrap().itinerary().unwrap().destination, "Kyoto");
        assert!(!session.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_domain_failure_is_stored_as_failure_view() {
        let transport = FakeTransport::answering(json!({"success": false, "error": "quota"}));
        let session = PlannerSession::new(transport);

        session.submit(request()).await;
        assert!(session.current().unwrap().is_failure());
    }
}
