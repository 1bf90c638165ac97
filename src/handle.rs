//! Attribute and connection handle types
//!
//! Attribute handles are 16-bit indices into the remote device's attribute
//! table. A `HandleRange` is the inclusive span a service occupies and the
//! unit characteristic discovery requests operate on.

use crate::DiscoveryError;

/// A 16-bit attribute handle indexing the remote attribute table
pub type AttHandle = u16;

/// Identifier of one established link, as reported by the connection layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, defmt::Format)]
pub struct ConnectionHandle(pub u16);

impl ConnectionHandle {
    /// Create a connection handle from its raw value
    #[must_use]
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Get the raw handle value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl From<u16> for ConnectionHandle {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<ConnectionHandle> for u16 {
    fn from(handle: ConnectionHandle) -> Self {
        handle.0
    }
}

impl From<bt_hci::param::ConnHandle> for ConnectionHandle {
    fn from(handle: bt_hci::param::ConnHandle) -> Self {
        Self(handle.raw())
    }
}

impl TryFrom<ConnectionHandle> for bt_hci::param::ConnHandle {
    type Error = DiscoveryError;

    fn try_from(handle: ConnectionHandle) -> Result<Self, Self::Error> {
        // HCI connection handles are 12 bit
        if handle.0 > 0x0EFF {
            return Err(DiscoveryError::InvalidParameter);
        }
        Ok(bt_hci::param::ConnHandle::new(handle.0))
    }
}

/// Inclusive range over the attribute handle space
///
/// A service occupies `[start, end]` where `start` is the handle of the
/// service declaration itself. A range with `start == end` holds only the
/// declaration and cannot contain characteristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, defmt::Format)]
pub struct HandleRange {
    /// First attribute handle of the range
    pub start: AttHandle,
    /// Last attribute handle of the range, inclusive
    pub end: AttHandle,
}

impl HandleRange {
    /// Create a new handle range
    #[must_use]
    pub const fn new(start: AttHandle, end: AttHandle) -> Self {
        Self { start, end }
    }

    /// Check whether `handle` falls within this range
    #[must_use]
    pub const fn contains(&self, handle: AttHandle) -> bool {
        self.start <= handle && handle <= self.end
    }

    /// Number of attribute handles covered by the range
    #[must_use]
    pub const fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Check whether the range covers no handles at all
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start > self.end
    }
}
