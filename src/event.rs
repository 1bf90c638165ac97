//! Inbound GATT client events
//!
//! Everything the transport can deliver on its single asynchronous event
//! path: discovery response pages, attribute read/write responses, and
//! handle-value notifications/indications. Events are owned values with
//! bounded payload buffers so they can be queued from interrupt context and
//! sent through the static event channel.

use crate::DiscoveryError;
use crate::constants::{MAX_ATTRIBUTE_VALUE_LENGTH, MAX_RESPONSE_ENTRIES};
use crate::handle::{AttHandle, ConnectionHandle};
use crate::record::{DiscoveredCharacteristic, DiscoveredService};
use heapless::Vec;

/// 16-bit GATT status word carried by a discovery response
///
/// Attribute protocol errors are encoded as `0x0100 | error_code`, matching
/// the wire-level status reporting of common BLE controller stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, defmt::Format)]
pub struct GattStatus(pub u16);

impl GattStatus {
    /// Operation completed successfully
    pub const SUCCESS: GattStatus = GattStatus(0x0000);
    /// ATT error: invalid attribute handle
    pub const INVALID_HANDLE: GattStatus = GattStatus(0x0101);
    /// ATT error: read not permitted
    pub const READ_NOT_PERMITTED: GattStatus = GattStatus(0x0102);
    /// ATT error: write not permitted
    pub const WRITE_NOT_PERMITTED: GattStatus = GattStatus(0x0103);
    /// ATT error: insufficient authentication
    pub const INSUFFICIENT_AUTHENTICATION: GattStatus = GattStatus(0x0105);
    /// ATT error: no attribute found within the requested range
    ///
    /// This is the defined end-of-range signal during discovery, not an
    /// error.
    pub const ATTRIBUTE_NOT_FOUND: GattStatus = GattStatus(0x010A);
    /// ATT error: unlikely error
    pub const UNLIKELY_ERROR: GattStatus = GattStatus(0x010E);

    /// Create a status from its raw 16-bit value
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw 16-bit status value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check whether the status reports success
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Check whether the status is the end-of-range discovery signal
    #[must_use]
    pub const fn is_attribute_not_found(self) -> bool {
        self.0 == Self::ATTRIBUTE_NOT_FOUND.0
    }
}

impl From<u16> for GattStatus {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

/// Write operation reported by an attribute write response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WriteOperation {
    /// Write request
    WriteRequest = 0x01,
    /// Write command (no response expected)
    WriteCommand = 0x02,
    /// Signed write command
    SignedWriteCommand = 0x03,
    /// Prepare write request
    PrepareWriteRequest = 0x04,
    /// Execute write request
    ExecuteWriteRequest = 0x05,
}

impl TryFrom<u8> for WriteOperation {
    type Error = DiscoveryError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0x01 => Ok(Self::WriteRequest),
            0x02 => Ok(Self::WriteCommand),
            0x03 => Ok(Self::SignedWriteCommand),
            0x04 => Ok(Self::PrepareWriteRequest),
            0x05 => Ok(Self::ExecuteWriteRequest),
            _ => Err(DiscoveryError::InvalidParameter),
        }
    }
}

/// Kind of unsolicited handle-value push from the remote device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum HandleValueKind {
    /// Notification, no confirmation expected
    Notification = 0x01,
    /// Indication, confirmed by the stack
    Indication = 0x02,
}

impl TryFrom<u8> for HandleValueKind {
    type Error = DiscoveryError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0x01 => Ok(Self::Notification),
            0x02 => Ok(Self::Indication),
            _ => Err(DiscoveryError::InvalidParameter),
        }
    }
}

/// One page of a primary service discovery response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceDiscoveryResponse {
    /// Connection the response belongs to
    pub conn_handle: ConnectionHandle,
    /// GATT status of the discovery round
    pub status: GattStatus,
    /// Services found in this round, ascending handle order
    pub services: Vec<DiscoveredService, MAX_RESPONSE_ENTRIES>,
}

/// One page of a characteristic discovery response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacteristicDiscoveryResponse {
    /// Connection the response belongs to
    pub conn_handle: ConnectionHandle,
    /// GATT status of the discovery round
    pub status: GattStatus,
    /// Characteristics found in this round, ascending handle order
    pub characteristics: Vec<DiscoveredCharacteristic, MAX_RESPONSE_ENTRIES>,
}

/// Attribute read response parameters, forwarded verbatim to the consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadResponse {
    /// Connection the response belongs to
    pub conn_handle: ConnectionHandle,
    /// Attribute that was read
    pub handle: AttHandle,
    /// Offset of the returned data within the attribute value
    pub offset: u16,
    /// Returned data
    pub data: Vec<u8, MAX_ATTRIBUTE_VALUE_LENGTH>,
}

/// Attribute write response parameters, forwarded verbatim to the consumer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResponse {
    /// Connection the response belongs to
    pub conn_handle: ConnectionHandle,
    /// Attribute that was written
    pub handle: AttHandle,
    /// Write operation that completed
    pub write_op: WriteOperation,
    /// Offset of the written data within the attribute value
    pub offset: u16,
    /// Written data as echoed by the stack
    pub data: Vec<u8, MAX_ATTRIBUTE_VALUE_LENGTH>,
}

/// Handle-value notification or indication pushed by the remote device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleValueEvent {
    /// Connection the push arrived on
    pub conn_handle: ConnectionHandle,
    /// Attribute whose value is pushed
    pub handle: AttHandle,
    /// Notification or indication
    pub kind: HandleValueKind,
    /// Pushed value
    pub data: Vec<u8, MAX_ATTRIBUTE_VALUE_LENGTH>,
}

/// One inbound event on the GATT client's asynchronous event path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GattcEvent {
    /// Response to a primary service discovery request
    PrimaryServiceDiscovery(ServiceDiscoveryResponse),
    /// Response to a characteristic discovery request
    CharacteristicDiscovery(CharacteristicDiscoveryResponse),
    /// Response to an attribute read
    Read(ReadResponse),
    /// Response to an attribute write
    Write(WriteResponse),
    /// Unsolicited handle-value notification or indication
    HandleValue(HandleValueEvent),
}
