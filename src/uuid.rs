//! Short-form (16-bit) Bluetooth UUIDs
//!
//! Discovery works on the 16-bit short form of Bluetooth SIG assigned UUIDs.
//! Long-form 128-bit UUIDs are out of scope for this crate.

/// A 16-bit Bluetooth SIG assigned UUID identifying a service or
/// characteristic type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, defmt::Format)]
pub struct ShortUuid(pub u16);

impl ShortUuid {
    /// Generic Access service
    pub const GENERIC_ACCESS: ShortUuid = ShortUuid(0x1800);
    /// Generic Attribute service
    pub const GENERIC_ATTRIBUTE: ShortUuid = ShortUuid(0x1801);
    /// Device Information service
    pub const DEVICE_INFORMATION: ShortUuid = ShortUuid(0x180A);
    /// Battery service
    pub const BATTERY_SERVICE: ShortUuid = ShortUuid(0x180F);
    /// Heart Rate service
    pub const HEART_RATE: ShortUuid = ShortUuid(0x180D);
    /// Device Name characteristic
    pub const DEVICE_NAME: ShortUuid = ShortUuid(0x2A00);
    /// Appearance characteristic
    pub const APPEARANCE: ShortUuid = ShortUuid(0x2A01);
    /// Battery Level characteristic
    pub const BATTERY_LEVEL: ShortUuid = ShortUuid(0x2A19);

    /// Create a short UUID from its raw 16-bit value
    #[must_use]
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw 16-bit value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Parse a short UUID from its on-air little-endian encoding
    #[must_use]
    pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Encode the short UUID in its on-air little-endian form
    #[must_use]
    pub const fn to_le_bytes(self) -> [u8; 2] {
        self.0.to_le_bytes()
    }
}

impl From<u16> for ShortUuid {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<ShortUuid> for u16 {
    fn from(uuid: ShortUuid) -> Self {
        uuid.0
    }
}
