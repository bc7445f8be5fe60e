//! The 128-bit Bluetooth UUID value type

use std::ffi::CStr;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{Error, ErrorKind};
use crate::Result;

/// This is the Bluetooth Base UUID. It is used with 16-bit and 32-bit UUIDs
/// [defined](https://www.bluetooth.com/specifications/assigned-numbers/) by the Bluetooth SIG.
pub const BLUETOOTH_BASE_UUID: u128 = 0x00000000_0000_1000_8000_00805f9b34fb;

/// The Bluetooth Base UUID as a [`BtUuid`].
pub const BASE_UUID: BtUuid = BtUuid::from_u128(BLUETOOTH_BASE_UUID);

/// Length of the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form.
pub const UUID_STRING_LEN: usize = 36;

const DASH_OFFSETS: [usize; 4] = [8, 13, 18, 23];

// Bytes 0..4 hold the short UUID, the rest must match the base UUID.
const SHORT_LEN: usize = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// A 128-bit UUID stored as 16 big-endian bytes.
///
/// The all-zero value ([`BtUuid::EMPTY`], also the [`Default`]) stands for "no UUID".
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BtUuid([u8; 16]);

impl BtUuid {
    /// The all-zero UUID.
    pub const EMPTY: BtUuid = BtUuid([0; 16]);

    /// Creates a UUID from its 16 big-endian bytes.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        BtUuid(bytes)
    }

    /// Creates a UUID from a `u128`, most significant byte first.
    pub const fn from_u128(value: u128) -> Self {
        BtUuid(value.to_be_bytes())
    }

    /// The 16 big-endian bytes of this UUID.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// This UUID as a `u128`, byte 0 most significant.
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Parses the canonical hyphenated form, e.g. `00001101-0000-1000-8000-00805f9b34fb`.
    ///
    /// Only the first 36 characters are read. Dashes must sit at offsets 8, 13, 18 and 23 and every other
    /// position must be a hex digit (either case). Anything else fails with
    /// [`MalformedInput`][ErrorKind::MalformedInput].
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.as_bytes();
        if s.len() < UUID_STRING_LEN {
            debug!(len = s.len(), "uuid string too short");
            return Err(Error::with_message(
                ErrorKind::MalformedInput,
                format!("expected at least {UUID_STRING_LEN} characters, got {}", s.len()),
            ));
        }

        if let Some(&offset) = DASH_OFFSETS.iter().find(|&&i| s[i] != b'-') {
            debug!(offset, "uuid string missing dash");
            return Err(Error::with_message(
                ErrorKind::MalformedInput,
                format!("expected '-' at offset {offset}"),
            ));
        }

        let mut bytes = [0u8; 16];
        let mut pos = 0;
        for (i, byte) in bytes.iter_mut().enumerate() {
            let (hi, lo) = match (hex_value(s[pos]), hex_value(s[pos + 1])) {
                (Some(hi), Some(lo)) => (hi, lo),
                _ => {
                    debug!(offset = pos, "uuid string has invalid hex digit");
                    return Err(Error::with_message(
                        ErrorKind::MalformedInput,
                        format!("invalid hex digit near offset {pos}"),
                    ));
                }
            };
            *byte = (hi << 4) | lo;
            pos += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                pos += 1;
            }
        }

        Ok(BtUuid(bytes))
    }

    /// Returns `true` if every byte is zero.
    pub fn is_empty(&self) -> bool {
        self.0 == [0; 16]
    }

    /// Overwrites `self` with the bytes of `src` and returns `self` for chaining.
    pub fn copy_from(&mut self, src: &BtUuid) -> &mut Self {
        self.0 = src.0;
        self
    }

    /// Returns `true` if bytes 4..16 match the Bluetooth Base UUID, i.e. this UUID has a 16- or 32-bit short
    /// form. Bytes 0..4 are not examined.
    pub fn is_base_derived(&self) -> bool {
        self.0[SHORT_LEN..] == BASE_UUID.0[SHORT_LEN..]
    }

    /// The 16-bit short form taken from bytes 2 and 3.
    ///
    /// Bytes 0 and 1 are not checked, so a 32-bit short UUID yields its low half. Use
    /// [`BluetoothUuidExt::is_u16_uuid`][crate::BluetoothUuidExt::is_u16_uuid] for the strict test.
    pub fn to_uuid16(&self) -> Result<u16> {
        if !self.is_base_derived() {
            trace!(uuid = %self, "not representable as a 16-bit uuid");
            return Err(ErrorKind::NotRepresentable.into());
        }
        Ok(u16::from_be_bytes([self.0[2], self.0[3]]))
    }

    /// The 32-bit short form taken from bytes 0..4, byte 0 most significant.
    pub fn to_uuid32(&self) -> Result<u32> {
        if !self.is_base_derived() {
            trace!(uuid = %self, "not representable as a 32-bit uuid");
            return Err(ErrorKind::NotRepresentable.into());
        }
        Ok(u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]]))
    }

    /// Writes the canonical lowercase form into `out`, including the NUL terminator.
    pub fn write_to(&self, out: &mut UuidString) {
        let buf = &mut out.0;
        let mut pos = 0;
        for (i, &byte) in self.0.iter().enumerate() {
            buf[pos] = HEX_DIGITS[usize::from(byte >> 4)];
            buf[pos + 1] = HEX_DIGITS[usize::from(byte & 0x0f)];
            pos += 2;
            if matches!(i, 3 | 5 | 7 | 9) {
                buf[pos] = b'-';
                pos += 1;
            }
        }
        buf[UUID_STRING_LEN] = 0;
    }

    /// The canonical lowercase form in a fresh [`UuidString`].
    pub fn to_uuid_string(&self) -> UuidString {
        let mut out = UuidString::new();
        self.write_to(&mut out);
        out
    }
}

fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Returns `true` if `uuid` is absent or all zero.
pub fn is_empty(uuid: Option<&BtUuid>) -> bool {
    uuid.map_or(true, BtUuid::is_empty)
}

/// Returns `true` if `uuid` is present and derived from the Bluetooth Base UUID.
pub fn is_base_derived(uuid: Option<&BtUuid>) -> bool {
    uuid.map_or(false, BtUuid::is_base_derived)
}

impl FromStr for BtUuid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BtUuid::parse(s)
    }
}

impl fmt::Display for BtUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_uuid_string().as_str())
    }
}

impl fmt::Debug for BtUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<[u8; 16]> for BtUuid {
    fn from(bytes: [u8; 16]) -> Self {
        BtUuid(bytes)
    }
}

impl TryFrom<&[u8]> for BtUuid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        <[u8; 16]>::try_from(bytes).map(BtUuid).map_err(|err| {
            Error::new(
                ErrorKind::InvalidParameter,
                Some(Box::new(err)),
                format!("expected 16 bytes, got {}", bytes.len()),
            )
        })
    }
}

impl From<::uuid::Uuid> for BtUuid {
    fn from(uuid: ::uuid::Uuid) -> Self {
        BtUuid(*uuid.as_bytes())
    }
}

impl From<BtUuid> for ::uuid::Uuid {
    fn from(uuid: BtUuid) -> Self {
        ::uuid::Uuid::from_bytes(uuid.0)
    }
}

/// A bounded buffer for the canonical string form: 36 characters plus a NUL terminator.
///
/// A new buffer is zero-filled and reads as the empty string until a UUID is written into it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UuidString([u8; UUID_STRING_LEN + 1]);

impl UuidString {
    /// Creates a zeroed buffer.
    pub const fn new() -> Self {
        UuidString([0; UUID_STRING_LEN + 1])
    }

    /// The text up to the first NUL.
    pub fn as_str(&self) -> &str {
        // only ASCII is ever written
        std::str::from_utf8(&self.0[..self.len()]).unwrap_or_default()
    }

    /// The NUL-terminated view of the buffer.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.0).unwrap_or_default()
    }

    /// Number of characters before the terminator; 0 or 36.
    pub fn len(&self) -> usize {
        self.0.iter().position(|&b| b == 0).unwrap_or(UUID_STRING_LEN)
    }

    /// Returns `true` if nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.0[0] == 0
    }
}

impl Default for UuidString {
    fn default() -> Self {
        UuidString::new()
    }
}

impl fmt::Display for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for UuidString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl AsRef<str> for UuidString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::BtUuid;

    impl Serialize for BtUuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.to_uuid_string().as_str())
        }
    }

    struct BtUuidVisitor;

    impl<'de> Visitor<'de> for BtUuidVisitor {
        type Value = BtUuid;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a UUID string of the form xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<BtUuid, E> {
            BtUuid::parse(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for BtUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<BtUuid, D::Error> {
            deserializer.deserialize_str(BtUuidVisitor)
        }
    }
}
