//! GATT client event dispatcher
//!
//! `GattClient` ties the pieces together: it owns the outbound requester,
//! the discovery session, and the callback router, and demultiplexes every
//! inbound event to exactly one consumer. Discovery responses go through
//! the three-way status split (success page, end-of-range, protocol error)
//! and are followed by exactly one synchronous progression step; read/write
//! and handle-value traffic is forwarded verbatim to the router.

use crate::DiscoveryError;
use crate::discovery::{DiscoveryListener, DiscoverySession, GattRequester};
use crate::event::GattcEvent;
use crate::handle::ConnectionHandle;
use crate::router::CallbackRouter;

/// GATT client engine for one connection at a time
pub struct GattClient<'cb, R: GattRequester> {
    requester: R,
    session: DiscoverySession,
    router: CallbackRouter<'cb>,
}

impl<'cb, R: GattRequester> GattClient<'cb, R> {
    /// Create a client around an outbound requester
    #[must_use]
    pub fn new(requester: R) -> Self {
        Self {
            requester,
            session: DiscoverySession::new(),
            router: CallbackRouter::new(),
        }
    }

    /// Access the discovery session state
    #[must_use]
    pub fn session(&self) -> &DiscoverySession {
        &self.session
    }

    /// Access the callback router to register or clear handlers
    pub fn router_mut(&mut self) -> &mut CallbackRouter<'cb> {
        &mut self.router
    }

    /// Start service discovery for `conn_handle`
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInProgress` if a session is active, or `Submission`
    /// if the transport rejects the first request.
    pub fn start_discovery(&mut self, conn_handle: ConnectionHandle) -> Result<(), DiscoveryError> {
        self.session.start(conn_handle, &mut self.requester)
    }

    /// Cancel the active session, if any, without issuing further requests
    ///
    /// Called when the owning connection is dropped externally.
    pub fn cancel_discovery(&mut self) {
        self.session.reset();
    }

    /// Process one inbound event, routing it to exactly one consumer
    ///
    /// Discovery responses for a connection other than the active session's
    /// are ignored. After any discovery-affecting event the progression
    /// step runs exactly once before this returns.
    pub fn handle_event<L: DiscoveryListener>(&mut self, event: &GattcEvent, listener: &mut L) {
        match event {
            GattcEvent::PrimaryServiceDiscovery(response) => {
                if !self.session.is_active_for(response.conn_handle) {
                    return;
                }
                if response.status.is_success() {
                    if let Err(e) = self.session.on_service_page(&response.services) {
                        listener.discovery_failed(response.conn_handle, e);
                    }
                } else if response.status.is_attribute_not_found() {
                    self.session.on_service_discovery_exhausted(listener);
                } else {
                    self.session.reset();
                    listener.discovery_failed(
                        response.conn_handle,
                        DiscoveryError::Protocol(response.status),
                    );
                }
                self.session.progress(&mut self.requester, listener);
            }
            GattcEvent::CharacteristicDiscovery(response) => {
                if !self.session.is_active_for(response.conn_handle) {
                    return;
                }
                if response.status.is_success() {
                    if let Err(e) = self
                        .session
                        .on_characteristic_page(&response.characteristics)
                    {
                        listener.discovery_failed(response.conn_handle, e);
                    }
                } else if response.status.is_attribute_not_found() {
                    self.session.on_characteristic_discovery_exhausted();
                } else {
                    self.session.reset();
                    listener.discovery_failed(
                        response.conn_handle,
                        DiscoveryError::Protocol(response.status),
                    );
                }
                self.session.progress(&mut self.requester, listener);
            }
            GattcEvent::Read(response) => self.router.dispatch_read(response),
            GattcEvent::Write(response) => self.router.dispatch_write(response),
            GattcEvent::HandleValue(event) => self.router.dispatch_handle_value(event),
        }
    }
}
