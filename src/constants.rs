//! `Gattling` Constants
//!
//! This module contains the compile-time limits and protocol defaults used
//! throughout the library. Page capacities bound the amount of state the
//! discovery engine keeps per connection; everything is sized for small
//! embedded targets.

use crate::handle::AttHandle;

/// Maximum number of services held in one discovery result page
pub const MAX_DISCOVERED_SERVICES: usize = 4;

/// Maximum number of characteristics per service held in one result page
pub const MAX_CHARACTERISTICS_PER_SERVICE: usize = 4;

/// Maximum number of entries one inbound discovery response event can carry
///
/// This is a transport-side bound, deliberately larger than the engine page
/// capacities: a response claiming more entries than the engine can hold is
/// a protocol violation and is rejected with `CapacityExceeded`.
pub const MAX_RESPONSE_ENTRIES: usize = 8;

/// Attribute handle at which primary service discovery starts
pub const SERVICE_DISCOVERY_START_HANDLE: AttHandle = 0x0001;

/// Highest valid attribute handle
pub const ATT_HANDLE_MAX: AttHandle = 0xFFFF;

/// Maximum attribute payload carried by one read/write/notification event
///
/// Default `ATT_MTU` of 23 bytes minus the one-byte response opcode.
pub const MAX_ATTRIBUTE_VALUE_LENGTH: usize = 22;

/// Depth of the inbound event queue
pub const EVENT_QUEUE_DEPTH: usize = 8;

/// Depth of the API request/response queues
pub const API_QUEUE_DEPTH: usize = 2;
