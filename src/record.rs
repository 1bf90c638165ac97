//! Discovery result records
//!
//! Value types capturing one entry of a discovery response: a primary
//! service with its handle range, or a characteristic with its declaration
//! and value handles plus the access property bits from its declaration.
//! Records are immutable once stored and are overwritten wholesale when the
//! next response page replaces the current one.

use crate::handle::{AttHandle, HandleRange};
use crate::uuid::ShortUuid;

/// Access property bits from a characteristic declaration
///
/// The raw byte is carried verbatim from the discovery response; accessors
/// decode the individual permission bits defined by the GATT profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, defmt::Format)]
pub struct CharacteristicProperties(u8);

impl CharacteristicProperties {
    /// Create from the raw property byte of a characteristic declaration
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// Get the raw property byte
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Characteristic value may be broadcast
    #[must_use]
    pub const fn broadcast(self) -> bool {
        self.0 & 0x01 != 0
    }

    /// Characteristic value may be read
    #[must_use]
    pub const fn read(self) -> bool {
        self.0 & 0x02 != 0
    }

    /// Characteristic value may be written without response
    #[must_use]
    pub const fn write_without_response(self) -> bool {
        self.0 & 0x04 != 0
    }

    /// Characteristic value may be written with response
    #[must_use]
    pub const fn write(self) -> bool {
        self.0 & 0x08 != 0
    }

    /// Characteristic value may be notified
    #[must_use]
    pub const fn notify(self) -> bool {
        self.0 & 0x10 != 0
    }

    /// Characteristic value may be indicated
    #[must_use]
    pub const fn indicate(self) -> bool {
        self.0 & 0x20 != 0
    }

    /// Characteristic supports authenticated signed writes
    #[must_use]
    pub const fn authenticated_signed_writes(self) -> bool {
        self.0 & 0x40 != 0
    }

    /// Characteristic declaration carries an extended properties descriptor
    #[must_use]
    pub const fn extended_properties(self) -> bool {
        self.0 & 0x80 != 0
    }
}

/// One primary service found during discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct DiscoveredService {
    /// Short UUID of the service type
    pub uuid: ShortUuid,
    /// Attribute handles occupied by the service, declaration included
    pub handle_range: HandleRange,
}

impl DiscoveredService {
    /// Create a new discovered service record
    #[must_use]
    pub const fn new(uuid: ShortUuid, handle_range: HandleRange) -> Self {
        Self { uuid, handle_range }
    }
}

/// One characteristic found during per-service discovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub struct DiscoveredCharacteristic {
    /// Short UUID of the characteristic type
    pub uuid: ShortUuid,
    /// Access property bits from the declaration
    pub properties: CharacteristicProperties,
    /// Handle of the characteristic declaration attribute
    pub declaration_handle: AttHandle,
    /// Handle of the characteristic value attribute
    pub value_handle: AttHandle,
}

impl DiscoveredCharacteristic {
    /// Create a new discovered characteristic record
    #[must_use]
    pub const fn new(
        uuid: ShortUuid,
        properties: CharacteristicProperties,
        declaration_handle: AttHandle,
        value_handle: AttHandle,
    ) -> Self {
        Self {
            uuid,
            properties,
            declaration_handle,
            value_handle,
        }
    }
}
