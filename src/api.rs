//! `Gattling` API Functions
//!
//! Channel-backed async functions for interacting with the processing task.
//! They are transport-agnostic and can be called from any application task;
//! the processing loop spawned via [`crate::processor::run`] executes them
//! one at a time.
//!
//! # Usage
//!
//! ```rust,no_run
//! use gattling::ConnectionHandle;
//!
//! # async fn example() -> Result<(), gattling::DiscoveryError> {
//! gattling::api::start_discovery(ConnectionHandle::new(0x0001)).await?;
//! # Ok(())
//! # }
//! ```

use crate::handle::ConnectionHandle;
use crate::{DiscoveryError, EVENT_CHANNEL, GattcEvent, REQUEST_CHANNEL, RESPONSE_CHANNEL, Request, Response};

/// Start service discovery for a connection.
///
/// # Errors
///
/// Returns `AlreadyInProgress` if a session is already active, `Submission`
/// if the transport rejects the first request, or `InvalidState` on an
/// unexpected internal response.
pub async fn start_discovery(conn_handle: ConnectionHandle) -> Result<(), DiscoveryError> {
    REQUEST_CHANNEL
        .sender()
        .send(Request::StartDiscovery(conn_handle))
        .await;
    match RESPONSE_CHANNEL.receiver().receive().await {
        Response::DiscoveryStarted => Ok(()),
        Response::Error(e) => Err(e),
        Response::DiscoveryCancelled => Err(DiscoveryError::InvalidState),
    }
}

/// Cancel the active discovery session, if any.
///
/// Used when the owning connection is dropped; no further requests are
/// issued.
///
/// # Errors
///
/// Returns `InvalidState` on an unexpected internal response.
pub async fn cancel_discovery() -> Result<(), DiscoveryError> {
    REQUEST_CHANNEL.sender().send(Request::CancelDiscovery).await;
    match RESPONSE_CHANNEL.receiver().receive().await {
        Response::DiscoveryCancelled => Ok(()),
        Response::Error(e) => Err(e),
        Response::DiscoveryStarted => Err(DiscoveryError::InvalidState),
    }
}

/// Queue one inbound transport event for processing.
///
/// Waits for queue space; use [`try_deliver_event`] from interrupt context.
pub async fn deliver_event(event: GattcEvent) {
    EVENT_CHANNEL.sender().send(event).await;
}

/// Queue one inbound transport event without waiting.
///
/// Safe to call from interrupt context.
///
/// # Errors
///
/// Returns the event back if the queue is full.
pub fn try_deliver_event(event: GattcEvent) -> Result<(), GattcEvent> {
    EVENT_CHANNEL
        .sender()
        .try_send(event)
        .map_err(|embassy_sync::channel::TrySendError::Full(event)| event)
}
