//! Order submission flow
//!
//! Runs the cheap structural checks, validates the draft against a fresh
//! catalog snapshot, then hands it to the backend, which re-validates stock
//! and decrements it inside its own transaction. The local pass is
//! advisory; the backend verdict always wins.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use thiserror::Error;

use shared::models::{OrderDraft, OrderRequest, OrderResponse, Product};
use shared::validation::{self, OrderValidationError};

use crate::error::ClientError;

/// Read side of the product catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch a point-in-time snapshot of the product catalog
    async fn fetch_catalog(&self) -> Result<Vec<Product>, ClientError>;
}

/// Accepts validated order drafts for authoritative creation
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn create_order(&self, request: &OrderRequest) -> Result<OrderResponse, ClientError>;
}

/// Why an order submission did not produce a created order
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A submission from this controller is already running
    #[error("an order submission is already in progress")]
    AlreadyInFlight,

    /// The draft failed a local check; nothing was sent
    #[error(transparent)]
    Invalid(#[from] OrderValidationError),

    /// The catalog snapshot could not be loaded, so stock validation never
    /// ran and the draft was not sent
    #[error("unable to load product catalog: {0}")]
    CatalogUnavailable(ClientError),

    /// The backend rejected the order over stock availability
    #[error("insufficient stock, please check product availability")]
    InsufficientStock { server: ClientError },

    /// The backend rejected the order for another reason
    #[error("order submission failed: {0}")]
    Rejected(ClientError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
}

/// Serializes order submissions from one controller.
///
/// At most one submission is in flight at a time; further attempts are
/// rejected until the running one finishes. This only guards against
/// duplicate user-triggered submissions from this client instance, not
/// against other clients or concurrent stock changes on the server.
#[derive(Debug)]
pub struct OrderSubmitter {
    phase: Mutex<Phase>,
}

impl OrderSubmitter {
    pub fn new() -> Self {
        Self {
            phase: Mutex::new(Phase::Idle),
        }
    }

    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        *self.phase.lock().unwrap_or_else(PoisonError::into_inner) == Phase::Submitting
    }

    fn begin(&self) -> Result<FlightGuard<'_>, SubmitError> {
        let mut phase = self.phase.lock().unwrap_or_else(PoisonError::into_inner);
        if *phase == Phase::Submitting {
            return Err(SubmitError::AlreadyInFlight);
        }
        *phase = Phase::Submitting;
        Ok(FlightGuard { submitter: self })
    }

    /// Validate a draft against a fresh catalog snapshot and submit it.
    ///
    /// Retried submissions must come back through this method: the snapshot
    /// is re-fetched every time, so a stale local pass is never reused.
    pub async fn submit<C, S>(
        &self,
        catalog: &C,
        sink: &S,
        draft: &OrderDraft,
    ) -> Result<OrderResponse, SubmitError>
    where
        C: CatalogSource,
        S: OrderSink,
    {
        // Released by FlightGuard::drop on every exit path
        let _flight = self.begin()?;

        validation::validate_draft(&draft.lines)?;

        let products = catalog
            .fetch_catalog()
            .await
            .map_err(SubmitError::CatalogUnavailable)?;
        validation::validate_stock(&draft.lines, &products)?;

        let request = draft.to_request();
        match sink.create_order(&request).await {
            Ok(order) => {
                tracing::info!(order_id = order.order_id, "order created");
                Ok(order)
            }
            Err(err) if err.is_stock_related() => {
                tracing::warn!("order rejected by backend over stock availability");
                Err(SubmitError::InsufficientStock { server: err })
            }
            Err(err) => Err(SubmitError::Rejected(err)),
        }
    }
}

impl Default for OrderSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Resets the submitter to idle when a submission finishes, whatever the
/// outcome, so the guard cannot stay stuck after a failure.
struct FlightGuard<'a> {
    submitter: &'a OrderSubmitter,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        *self
            .submitter
            .phase
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Phase::Idle;
    }
}
