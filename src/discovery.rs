//! Discovery engine
//!
//! The state machine driving paginated service and characteristic discovery
//! over one connection. It owns one bounded page of services and one of
//! characteristics, tracks how far each page has been consumed, and decides
//! the next outbound request after every processed event.
//!
//! # State machine
//!
//! `Idle → DiscoveringServices ⇄ DiscoveringCharacteristics → Idle`
//!
//! Exactly one mode is active at a time. The outer loop pages through the
//! remote service table; for each service found, an inner characteristic
//! sub-discovery runs to completion before the outer loop resumes. At most
//! one discovery request is outstanding per connection; responses are matched
//! implicitly to that request.
//!
//! All methods run to completion without blocking. The progression step
//! (`progress`) is idempotent: once a request has been issued it does
//! nothing until the matching response arrives.

use crate::DiscoveryError;
use crate::constants::{
    MAX_CHARACTERISTICS_PER_SERVICE, MAX_DISCOVERED_SERVICES, SERVICE_DISCOVERY_START_HANDLE,
};
use crate::handle::{AttHandle, ConnectionHandle, HandleRange};
use crate::page::ResultPage;
use crate::record::{DiscoveredCharacteristic, DiscoveredService};

/// Error code returned by the transport when an outbound request cannot be
/// submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct SubmitError(pub u32);

/// Outbound request sink implemented by the underlying transport
///
/// Requests are fire-and-forget: a successful return means the request was
/// accepted for transmission, not that a response has arrived. A submission
/// failure is fatal for the current discovery session.
pub trait GattRequester {
    /// Request discovery of primary services starting at `start_handle`,
    /// with no upper bound and no UUID filter
    ///
    /// # Errors
    ///
    /// Returns the transport's error code if the request cannot be
    /// submitted.
    fn request_primary_services(
        &mut self,
        conn_handle: ConnectionHandle,
        start_handle: AttHandle,
    ) -> Result<(), SubmitError>;

    /// Request discovery of characteristics within `range`
    ///
    /// # Errors
    ///
    /// Returns the transport's error code if the request cannot be
    /// submitted.
    fn request_characteristics(
        &mut self,
        conn_handle: ConnectionHandle,
        range: HandleRange,
    ) -> Result<(), SubmitError>;
}

/// Consumer of discovery results and session outcome signals
pub trait DiscoveryListener {
    /// A primary service has been discovered
    fn service_discovered(&mut self, conn_handle: ConnectionHandle, service: &DiscoveredService);

    /// A characteristic of the service currently under discovery has been
    /// discovered
    fn characteristic_discovered(
        &mut self,
        conn_handle: ConnectionHandle,
        characteristic: &DiscoveredCharacteristic,
    );

    /// Discovery for the connection finished successfully
    fn discovery_complete(&mut self, conn_handle: ConnectionHandle);

    /// Discovery for the connection was aborted
    ///
    /// Reported exactly once per failed session; the session is back in
    /// `Idle` when this fires.
    fn discovery_failed(&mut self, conn_handle: ConnectionHandle, error: DiscoveryError);
}

/// Discovery engine mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum DiscoveryMode {
    /// No discovery session is active
    Idle,
    /// Paging through the remote primary service table
    DiscoveringServices,
    /// Running the characteristic sub-discovery of one service
    DiscoveringCharacteristics,
}

/// Discovery session state for one connection
///
/// Created once and reused across sessions; `start` resets it for a new
/// connection. Mutated only in response to dispatched events and its own
/// progression step.
#[derive(Debug)]
pub struct DiscoverySession {
    conn_handle: Option<ConnectionHandle>,
    mode: DiscoveryMode,
    services: ResultPage<DiscoveredService, MAX_DISCOVERED_SERVICES>,
    characteristics: ResultPage<DiscoveredCharacteristic, MAX_CHARACTERISTICS_PER_SERVICE>,
    request_in_flight: bool,
}

impl DiscoverySession {
    /// Create an idle session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            conn_handle: None,
            mode: DiscoveryMode::Idle,
            services: ResultPage::new(),
            characteristics: ResultPage::new(),
            request_in_flight: false,
        }
    }

    /// Current engine mode
    #[must_use]
    pub fn mode(&self) -> DiscoveryMode {
        self.mode
    }

    /// Connection of the active session, if any
    #[must_use]
    pub fn connection(&self) -> Option<ConnectionHandle> {
        self.conn_handle
    }

    /// Check whether no session is active
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.mode == DiscoveryMode::Idle
    }

    /// Check whether a session is active for `conn_handle`
    #[must_use]
    pub fn is_active_for(&self, conn_handle: ConnectionHandle) -> bool {
        self.mode != DiscoveryMode::Idle && self.conn_handle == Some(conn_handle)
    }

    /// Start discovery for `conn_handle`
    ///
    /// Resets the session state and issues the first primary service
    /// discovery request at the lowest attribute handle.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyInProgress` if a session is active (the running
    /// session is untouched), or `Submission` if the transport rejects the
    /// request (the session stays idle).
    pub fn start<R: GattRequester>(
        &mut self,
        conn_handle: ConnectionHandle,
        requester: &mut R,
    ) -> Result<(), DiscoveryError> {
        if self.mode != DiscoveryMode::Idle {
            return Err(DiscoveryError::AlreadyInProgress);
        }

        self.conn_handle = Some(conn_handle);
        self.services.clear();
        self.characteristics.clear();
        self.mode = DiscoveryMode::DiscoveringServices;

        match requester.request_primary_services(conn_handle, SERVICE_DISCOVERY_START_HANDLE) {
            Ok(()) => {
                self.request_in_flight = true;
                Ok(())
            }
            Err(e) => {
                self.reset();
                Err(DiscoveryError::Submission(e))
            }
        }
    }

    /// Tear the session down to `Idle` without issuing any request
    ///
    /// Used for external cancellation (connection dropped) and internally
    /// on fatal errors.
    pub fn reset(&mut self) {
        self.conn_handle = None;
        self.mode = DiscoveryMode::Idle;
        self.services.clear();
        self.characteristics.clear();
        self.request_in_flight = false;
    }

    /// Store one successful service discovery response page
    ///
    /// Resets the service read cursor; the mode stays
    /// `DiscoveringServices`. No request is issued here, that is the
    /// progression step's job.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the page is larger than the engine
    /// capacity; the session is aborted to `Idle` in that case.
    pub fn on_service_page(
        &mut self,
        services: &[DiscoveredService],
    ) -> Result<(), DiscoveryError> {
        if self.mode != DiscoveryMode::DiscoveringServices {
            return Ok(());
        }
        self.request_in_flight = false;

        match self.services.replace(services) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    /// Store one successful characteristic discovery response page
    ///
    /// Analogous to [`Self::on_service_page`]; the mode stays
    /// `DiscoveringCharacteristics`.
    ///
    /// # Errors
    ///
    /// Returns `CapacityExceeded` if the page is larger than the engine
    /// capacity; the session is aborted to `Idle` in that case.
    pub fn on_characteristic_page(
        &mut self,
        characteristics: &[DiscoveredCharacteristic],
    ) -> Result<(), DiscoveryError> {
        if self.mode != DiscoveryMode::DiscoveringCharacteristics {
            return Ok(());
        }
        self.request_in_flight = false;

        match self.characteristics.replace(characteristics) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.reset();
                Err(e)
            }
        }
    }

    /// The remote reported no more primary services in the requested range
    ///
    /// Discovery for this connection is complete.
    pub fn on_service_discovery_exhausted<L: DiscoveryListener>(&mut self, listener: &mut L) {
        if self.mode != DiscoveryMode::DiscoveringServices {
            return;
        }
        self.request_in_flight = false;
        self.complete(listener);
    }

    /// The remote reported no more characteristics in the requested range
    ///
    /// Ends the current service's sub-discovery and moves the outer loop to
    /// the next service.
    pub fn on_characteristic_discovery_exhausted(&mut self) {
        if self.mode != DiscoveryMode::DiscoveringCharacteristics {
            return;
        }
        self.request_in_flight = false;
        self.finish_characteristic_discovery();
    }

    /// Drive the state machine after an event has been processed
    ///
    /// Emits any unread records to the listener and decides the next step:
    /// issue a follow-up request, descend into or return from a
    /// characteristic sub-discovery, or terminate the session. Runs to
    /// completion in time bounded by the page capacities and does nothing
    /// while a request is outstanding.
    pub fn progress<R: GattRequester, L: DiscoveryListener>(
        &mut self,
        requester: &mut R,
        listener: &mut L,
    ) {
        if self.request_in_flight {
            return;
        }
        let Some(conn_handle) = self.conn_handle else {
            return;
        };

        loop {
            match self.mode {
                DiscoveryMode::Idle => return,
                DiscoveryMode::DiscoveringCharacteristics => {
                    while let Some(characteristic) = self.characteristics.next_unread() {
                        listener.characteristic_discovered(conn_handle, characteristic);
                    }

                    let Some(service) = self.services.current().copied() else {
                        // No service under discovery; fall back to the
                        // outer loop
                        self.mode = DiscoveryMode::DiscoveringServices;
                        continue;
                    };

                    match self.characteristics.last().copied() {
                        Some(last)
                            if last.value_handle.saturating_add(1) < service.handle_range.end =>
                        {
                            let range =
                                HandleRange::new(last.value_handle + 1, service.handle_range.end);
                            self.characteristics.clear();
                            if let Err(e) = requester.request_characteristics(conn_handle, range) {
                                self.fail(listener, conn_handle, DiscoveryError::Submission(e));
                                return;
                            }
                            self.request_in_flight = true;
                            return;
                        }
                        _ => {
                            // Page exhausted with no handles left to query:
                            // equivalent to the remote terminating the
                            // sub-discovery
                            self.finish_characteristic_discovery();
                        }
                    }
                }
                DiscoveryMode::DiscoveringServices => {
                    if let Some(service) = self.services.current().copied() {
                        listener.service_discovered(conn_handle, &service);

                        if service.handle_range.start < service.handle_range.end {
                            self.characteristics.clear();
                            self.mode = DiscoveryMode::DiscoveringCharacteristics;
                            if let Err(e) = requester
                                .request_characteristics(conn_handle, service.handle_range)
                            {
                                self.fail(listener, conn_handle, DiscoveryError::Submission(e));
                                return;
                            }
                            self.request_in_flight = true;
                            return;
                        }

                        // Declaration-only service, nothing to discover
                        // inside it; count it as visited
                        self.services.advance();
                        continue;
                    }

                    // Page fully consumed; page further into the service
                    // table, or terminate if this round found nothing
                    let Some(last) = self.services.last().copied() else {
                        self.complete(listener);
                        return;
                    };
                    if let Err(e) =
                        requester.request_primary_services(conn_handle, last.handle_range.end)
                    {
                        self.fail(listener, conn_handle, DiscoveryError::Submission(e));
                        return;
                    }
                    self.request_in_flight = true;
                    return;
                }
            }
        }
    }

    fn finish_characteristic_discovery(&mut self) {
        self.mode = DiscoveryMode::DiscoveringServices;
        self.services.advance();
        self.characteristics.clear();
    }

    fn complete<L: DiscoveryListener>(&mut self, listener: &mut L) {
        if let Some(conn_handle) = self.conn_handle {
            listener.discovery_complete(conn_handle);
        }
        self.reset();
    }

    fn fail<L: DiscoveryListener>(
        &mut self,
        listener: &mut L,
        conn_handle: ConnectionHandle,
        error: DiscoveryError,
    ) {
        self.reset();
        listener.discovery_failed(conn_handle, error);
    }
}

impl Default for DiscoverySession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::CharacteristicProperties;
    use crate::uuid::ShortUuid;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum SentRequest {
        Services {
            conn_handle: ConnectionHandle,
            start_handle: AttHandle,
        },
        Characteristics {
            conn_handle: ConnectionHandle,
            range: HandleRange,
        },
    }

    #[derive(Default)]
    struct MockRequester {
        sent: Vec<SentRequest, 16>,
        fail_all: bool,
    }

    impl GattRequester for MockRequester {
        fn request_primary_services(
            &mut self,
            conn_handle: ConnectionHandle,
            start_handle: AttHandle,
        ) -> Result<(), SubmitError> {
            if self.fail_all {
                return Err(SubmitError(4));
            }
            self.sent
                .push(SentRequest::Services {
                    conn_handle,
                    start_handle,
                })
                .unwrap();
            Ok(())
        }

        fn request_characteristics(
            &mut self,
            conn_handle: ConnectionHandle,
            range: HandleRange,
        ) -> Result<(), SubmitError> {
            if self.fail_all {
                return Err(SubmitError(4));
            }
            self.sent
                .push(SentRequest::Characteristics { conn_handle, range })
                .unwrap();
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockListener {
        services: Vec<DiscoveredService, 16>,
        characteristics: Vec<DiscoveredCharacteristic, 16>,
        completed: usize,
        failures: Vec<DiscoveryError, 4>,
    }

    impl DiscoveryListener for MockListener {
        fn service_discovered(&mut self, _conn: ConnectionHandle, service: &DiscoveredService) {
            self.services.push(*service).unwrap();
        }

        fn characteristic_discovered(
            &mut self,
            _conn: ConnectionHandle,
            characteristic: &DiscoveredCharacteristic,
        ) {
            self.characteristics.push(*characteristic).unwrap();
        }

        fn discovery_complete(&mut self, _conn: ConnectionHandle) {
            self.completed += 1;
        }

        fn discovery_failed(&mut self, _conn: ConnectionHandle, error: DiscoveryError) {
            self.failures.push(error).unwrap();
        }
    }

    const CONN: ConnectionHandle = ConnectionHandle(0x0010);

    fn service(uuid: u16, start: AttHandle, end: AttHandle) -> DiscoveredService {
        DiscoveredService::new(ShortUuid::new(uuid), HandleRange::new(start, end))
    }

    fn characteristic(uuid: u16, decl: AttHandle, value: AttHandle) -> DiscoveredCharacteristic {
        DiscoveredCharacteristic::new(
            ShortUuid::new(uuid),
            CharacteristicProperties::from_raw(0x02),
            decl,
            value,
        )
    }

    #[test]
    fn test_start_issues_first_request_at_lowest_handle() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();

        session.start(CONN, &mut requester).unwrap();

        assert_eq!(session.mode(), DiscoveryMode::DiscoveringServices);
        assert_eq!(session.connection(), Some(CONN));
        assert_eq!(
            requester.sent.as_slice(),
            &[SentRequest::Services {
                conn_handle: CONN,
                start_handle: 0x0001,
            }]
        );
    }

    #[test]
    fn test_start_while_active_is_rejected_without_state_change() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();

        session.start(CONN, &mut requester).unwrap();
        let result = session.start(ConnectionHandle(0x0011), &mut requester);

        assert_eq!(result, Err(DiscoveryError::AlreadyInProgress));
        assert_eq!(session.connection(), Some(CONN));
        assert_eq!(session.mode(), DiscoveryMode::DiscoveringServices);
        assert_eq!(requester.sent.len(), 1);
    }

    #[test]
    fn test_start_submission_failure_leaves_session_idle() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester {
            fail_all: true,
            ..Default::default()
        };

        let result = session.start(CONN, &mut requester);

        assert_eq!(result, Err(DiscoveryError::Submission(SubmitError(4))));
        assert!(session.is_idle());
        assert_eq!(session.connection(), None);
    }

    #[test]
    fn test_full_discovery_walkthrough() {
        // One service [1,5] with a characteristic at value handle 3: the
        // engine must page characteristics once more over [4,5], then page
        // the service table from handle 5, then complete on exhaustion.
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();

        session.on_service_page(&[service(0x1800, 1, 5)]).unwrap();
        session.progress(&mut requester, &mut listener);

        assert_eq!(listener.services.len(), 1);
        assert_eq!(session.mode(), DiscoveryMode::DiscoveringCharacteristics);
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Characteristics {
                conn_handle: CONN,
                range: HandleRange::new(1, 5),
            })
        );

        session
            .on_characteristic_page(&[characteristic(0x2A00, 2, 3)])
            .unwrap();
        session.progress(&mut requester, &mut listener);

        assert_eq!(listener.characteristics.len(), 1);
        // value handle 3 + 1 = 4 < 5: one more characteristic round
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Characteristics {
                conn_handle: CONN,
                range: HandleRange::new(4, 5),
            })
        );

        session.on_characteristic_discovery_exhausted();
        session.progress(&mut requester, &mut listener);

        // Service page consumed, one service found: page the table further
        assert_eq!(session.mode(), DiscoveryMode::DiscoveringServices);
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Services {
                conn_handle: CONN,
                start_handle: 5,
            })
        );

        let mut listener_after = MockListener::default();
        session.on_service_discovery_exhausted(&mut listener_after);

        assert!(session.is_idle());
        assert_eq!(listener_after.completed, 1);
        assert_eq!(requester.sent.len(), 4);
    }

    #[test]
    fn test_every_service_visited_once_in_order() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session
            .on_service_page(&[
                service(0x1800, 1, 5),
                service(0x1801, 6, 6),
                service(0x180F, 7, 9),
            ])
            .unwrap();
        session.progress(&mut requester, &mut listener);

        // First service descends into characteristic discovery
        assert_eq!(listener.services.len(), 1);

        // Sub-discovery of [1,5] ends immediately
        session.on_characteristic_discovery_exhausted();
        session.progress(&mut requester, &mut listener);

        // [6,6] is declaration-only: visited but skipped, [7,9] descends
        assert_eq!(listener.services.len(), 3);
        assert_eq!(listener.services[0].handle_range.start, 1);
        assert_eq!(listener.services[1].handle_range.start, 6);
        assert_eq!(listener.services[2].handle_range.start, 7);
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Characteristics {
                conn_handle: CONN,
                range: HandleRange::new(7, 9),
            })
        );

        session.on_characteristic_discovery_exhausted();
        session.progress(&mut requester, &mut listener);

        // All three visited; the engine pages the service table onward
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Services {
                conn_handle: CONN,
                start_handle: 9,
            })
        );

        session.on_service_discovery_exhausted(&mut listener);
        assert!(session.is_idle());
        assert_eq!(listener.completed, 1);
    }

    #[test]
    fn test_declaration_only_service_never_requests_characteristics() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session.on_service_page(&[service(0x1801, 6, 6)]).unwrap();
        session.progress(&mut requester, &mut listener);

        assert_eq!(listener.services.len(), 1);
        assert!(
            requester
                .sent
                .iter()
                .all(|r| !matches!(r, SentRequest::Characteristics { .. }))
        );
        // Counted as visited: the engine pages the service table onward
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Services {
                conn_handle: CONN,
                start_handle: 6,
            })
        );
    }

    #[test]
    fn test_empty_characteristic_page_ends_sub_discovery() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session.on_service_page(&[service(0x1800, 1, 5)]).unwrap();
        session.progress(&mut requester, &mut listener);

        // Success response with zero characteristics
        session.on_characteristic_page(&[]).unwrap();
        session.progress(&mut requester, &mut listener);

        assert_eq!(session.mode(), DiscoveryMode::DiscoveringServices);
        assert_eq!(listener.characteristics.len(), 0);
        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Services {
                conn_handle: CONN,
                start_handle: 5,
            })
        );
    }

    #[test]
    fn test_characteristic_range_never_revisits_consumed_handles() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session.on_service_page(&[service(0x180D, 1, 10)]).unwrap();
        session.progress(&mut requester, &mut listener);

        session
            .on_characteristic_page(&[characteristic(0x2A37, 2, 3), characteristic(0x2A38, 4, 5)])
            .unwrap();
        session.progress(&mut requester, &mut listener);

        assert_eq!(
            requester.sent.last(),
            Some(&SentRequest::Characteristics {
                conn_handle: CONN,
                range: HandleRange::new(6, 10),
            })
        );

        session
            .on_characteristic_page(&[characteristic(0x2A39, 8, 9)])
            .unwrap();
        session.progress(&mut requester, &mut listener);

        // value handle 9 + 1 = 10 is not < 10: sub-discovery over, no
        // request for a range ending where the previous one did
        assert_eq!(session.mode(), DiscoveryMode::DiscoveringServices);
        assert_eq!(listener.characteristics.len(), 3);
    }

    #[test]
    fn test_value_handle_at_range_end_terminates_without_overflow() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session
            .on_service_page(&[service(0x1800, 0xFFF0, 0xFFFF)])
            .unwrap();
        session.progress(&mut requester, &mut listener);

        session
            .on_characteristic_page(&[characteristic(0x2A00, 0xFFFE, 0xFFFF)])
            .unwrap();
        session.progress(&mut requester, &mut listener);

        assert_eq!(session.mode(), DiscoveryMode::DiscoveringServices);
    }

    #[test]
    fn test_capacity_exceeded_aborts_session() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();

        let oversized = [
            service(0x1800, 1, 2),
            service(0x1801, 3, 4),
            service(0x180A, 5, 6),
            service(0x180D, 7, 8),
            service(0x180F, 9, 10),
        ];
        let result = session.on_service_page(&oversized);

        assert_eq!(result, Err(DiscoveryError::CapacityExceeded));
        assert!(session.is_idle());

        // No further outbound traffic until the next start
        let sent_before = requester.sent.len();
        session.progress(&mut requester, &mut listener);
        assert_eq!(requester.sent.len(), sent_before);
    }

    #[test]
    fn test_zero_services_found_terminates() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session.on_service_page(&[]).unwrap();
        session.progress(&mut requester, &mut listener);

        assert!(session.is_idle());
        assert_eq!(listener.completed, 1);
        assert_eq!(requester.sent.len(), 1);
    }

    #[test]
    fn test_progress_is_idempotent_while_request_outstanding() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session.on_service_page(&[service(0x1800, 1, 5)]).unwrap();
        session.progress(&mut requester, &mut listener);
        let sent = requester.sent.len();

        session.progress(&mut requester, &mut listener);
        session.progress(&mut requester, &mut listener);

        assert_eq!(requester.sent.len(), sent);
        assert_eq!(listener.services.len(), 1);
    }

    #[test]
    fn test_submission_failure_during_progress_fails_session() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();
        let mut listener = MockListener::default();

        session.start(CONN, &mut requester).unwrap();
        session.on_service_page(&[service(0x1800, 1, 5)]).unwrap();

        requester.fail_all = true;
        session.progress(&mut requester, &mut listener);

        assert!(session.is_idle());
        assert_eq!(
            listener.failures.as_slice(),
            &[DiscoveryError::Submission(SubmitError(4))]
        );
    }

    #[test]
    fn test_reset_cancels_without_requests() {
        let mut session = DiscoverySession::new();
        let mut requester = MockRequester::default();

        session.start(CONN, &mut requester).unwrap();
        let sent = requester.sent.len();

        session.reset();

        assert!(session.is_idle());
        assert_eq!(session.connection(), None);
        assert_eq!(requester.sent.len(), sent);
    }
}
