#![warn(missing_docs)]

//! `btcore-uuid` is a 128-bit [Bluetooth] UUID value type for [Rust]. It identifies services and attributes in SDP
//! and GATT, and understands the 16-bit and 32-bit "short" UUIDs that are derived from the Bluetooth Base UUID.
//!
//! [Rust]: https://www.rust-lang.org/
//! [Bluetooth]: https://www.bluetooth.com/specifications/specs/
//!
//! # Usage
//!
//! ```rust
//!# use btcore_uuid::{BtUuid, BluetoothUuidExt};
//!# fn main() -> Result<(), btcore_uuid::Error> {
//!let uuid: BtUuid = "00001101-0000-1000-8000-00805f9b34fb".parse()?;
//!assert!(uuid.is_base_derived());
//!assert_eq!(uuid.to_uuid16()?, 0x1101);
//!assert_eq!(uuid, btcore_uuid::btuuid::service_classes::SERIAL_PORT);
//!assert_eq!(uuid.as_bluetooth_bytes(), &[0x11, 0x01]);
//!#
//!#    Ok(())
//!# }
//! ```
//!
//! # Overview
//!
//! - [Parsing][BtUuid::parse] the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form and
//!   [formatting][BtUuid::to_uuid_string] it back, lowercase, into a bounded [`UuidString`]
//! - Byte-wise equality, [emptiness][BtUuid::is_empty] and [copying][BtUuid::copy_from]
//! - [Detecting][BtUuid::is_base_derived] Base-UUID-derived values and narrowing them to
//!   [16-bit][BtUuid::to_uuid16] or [32-bit][BtUuid::to_uuid32] short UUIDs
//! - [Constructing][btuuid::bluetooth_uuid_from_u16] full UUIDs from short ones, plus tables of assigned numbers in
//!   [`btuuid`]
//!
//! Conversions to and from [`uuid::Uuid`](::uuid::Uuid) are provided, and [`BluetoothUuidExt`] works on both types.
//!
//! # Feature flags
//!
//! The `serde` feature is available to enable serializing/deserializing UUIDs in their canonical string form.
//!
//! # Logging
//!
//! Rejected input and failed narrowing are reported through [`tracing`] at `debug` and `trace` level. No
//! subscriber is installed by this crate.

pub mod btuuid;
pub mod error;
pub mod uuid;

pub use btuuid::BluetoothUuidExt;
pub use error::Error;
pub use crate::uuid::{BtUuid, UuidString, BASE_UUID, BLUETOOTH_BASE_UUID};

/// Convenience alias for a result with [`Error`]
pub type Result<T, E = Error> = core::result::Result<T, E>;
