#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![allow(dead_code)]

pub mod api;
mod client;
pub mod constants;
mod discovery;
mod event;
mod handle;
mod page;
pub mod processor;
mod record;
mod router;
mod uuid;

use crate::constants::{API_QUEUE_DEPTH, EVENT_QUEUE_DEPTH};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

pub use client::GattClient;
pub use discovery::{
    DiscoveryListener, DiscoveryMode, DiscoverySession, GattRequester, SubmitError,
};
pub use event::{
    CharacteristicDiscoveryResponse, GattStatus, GattcEvent, HandleValueEvent, HandleValueKind,
    ReadResponse, ServiceDiscoveryResponse, WriteOperation, WriteResponse,
};
pub use handle::{AttHandle, ConnectionHandle, HandleRange};
pub use page::ResultPage;
pub use record::{CharacteristicProperties, DiscoveredCharacteristic, DiscoveredService};
pub use router::CallbackRouter;
pub use uuid::ShortUuid;

pub(crate) static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, GattcEvent, EVENT_QUEUE_DEPTH> =
    Channel::new();

pub(crate) static REQUEST_CHANNEL: Channel<CriticalSectionRawMutex, Request, API_QUEUE_DEPTH> =
    Channel::new();

pub(crate) static RESPONSE_CHANNEL: Channel<CriticalSectionRawMutex, Response, API_QUEUE_DEPTH> =
    Channel::new();

/// Discovery-related errors with detailed error information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscoveryError {
    /// A discovery session is already active for this engine
    AlreadyInProgress,
    /// A discovery response carried a fatal GATT status
    Protocol(GattStatus),
    /// The transport rejected an outbound request
    Submission(SubmitError),
    /// A response page carried more entries than the compile-time capacity
    CapacityExceeded,
    /// Invalid raw value at the event boundary (e.g., unknown write
    /// operation code)
    InvalidParameter,
    /// Unexpected internal state or response
    InvalidState,
}

/// API requests sent to the processing task
#[derive(Debug, Clone)]
pub(crate) enum Request {
    /// Start service discovery for a connection
    StartDiscovery(ConnectionHandle),
    /// Cancel the active discovery session
    CancelDiscovery,
}

/// API responses sent back from the processing task
#[derive(Debug, Clone)]
pub(crate) enum Response {
    /// Discovery started successfully
    DiscoveryStarted,
    /// Discovery session cancelled
    DiscoveryCancelled,
    /// Error occurred
    Error(DiscoveryError),
}
