//! Short-form (16-bit and 32-bit) Bluetooth UUIDs

use crate::error::{Error, ErrorKind};
use crate::uuid::{BtUuid, BLUETOOTH_BASE_UUID};
use crate::Result;

/// Const function to create a 16-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u16(uuid: u16) -> BtUuid {
    BtUuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Const function to create a 32-bit Bluetooth UUID
pub const fn bluetooth_uuid_from_u32(uuid: u32) -> BtUuid {
    BtUuid::from_u128(((uuid as u128) << 96) | BLUETOOTH_BASE_UUID)
}

/// Extension trait with helper methods for dealing with Bluetooth 16-bit and 32-bit UUIDs
///
/// Implemented for [`BtUuid`] and [`uuid::Uuid`].
pub trait BluetoothUuidExt: private::Sealed + Sized {
    /// Creates a 16-bit Bluetooth UUID
    fn from_u16(uuid: u16) -> Self;

    /// Creates a 32-bit Bluetooth UUID
    fn from_u32(uuid: u32) -> Self;

    /// Creates a UUID from its on-air encoding: 2, 4 or 16 big-endian octets.
    ///
    /// Other lengths fail with [`InvalidParameter`][ErrorKind::InvalidParameter].
    fn from_bluetooth_bytes(bytes: &[u8]) -> Result<Self>;

    /// Returns `true` if bytes 4..16 match the Bluetooth Base UUID
    fn is_base_derived(&self) -> bool;

    /// Returns `true` if self is a valid 16-bit Bluetooth UUID
    fn is_u16_uuid(&self) -> bool;

    /// Returns `true` if self is a valid 32-bit Bluetooth UUID
    fn is_u32_uuid(&self) -> bool;

    /// Converts self into a 16-bit Bluetooth UUID, see [`BtUuid::to_uuid16`]
    fn to_uuid16(&self) -> Result<u16>;

    /// Converts self into a 32-bit Bluetooth UUID, see [`BtUuid::to_uuid32`]
    fn to_uuid32(&self) -> Result<u32>;

    /// Returns a slice of octets representing the UUID. If the UUID is a valid 16- or 32-bit Bluetooth UUID, the
    /// returned slice will be 2 or 4 octets long, respectively. Otherwise the slice will be 16-octets in length.
    fn as_bluetooth_bytes(&self) -> &[u8];
}

fn short_bytes(bytes: &[u8; 16], u16_uuid: bool, u32_uuid: bool) -> &[u8] {
    if u16_uuid {
        &bytes[2..4]
    } else if u32_uuid {
        &bytes[0..4]
    } else {
        &bytes[..]
    }
}

impl BluetoothUuidExt for BtUuid {
    fn from_u16(uuid: u16) -> Self {
        bluetooth_uuid_from_u16(uuid)
    }

    fn from_u32(uuid: u32) -> Self {
        bluetooth_uuid_from_u32(uuid)
    }

    fn from_bluetooth_bytes(bytes: &[u8]) -> Result<Self> {
        match bytes.len() {
            2 => Ok(Self::from_u16(u16::from_be_bytes([bytes[0], bytes[1]]))),
            4 => Ok(Self::from_u32(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))),
            16 => BtUuid::try_from(bytes),
            len => Err(Error::with_message(
                ErrorKind::InvalidParameter,
                format!("invalid byte slice length {len} for bluetooth UUID"),
            )),
        }
    }

    fn is_base_derived(&self) -> bool {
        BtUuid::is_base_derived(self)
    }

    fn is_u16_uuid(&self) -> bool {
        self.is_base_derived() && self.as_bytes()[..2] == [0, 0]
    }

    fn is_u32_uuid(&self) -> bool {
        self.is_base_derived()
    }

    fn to_uuid16(&self) -> Result<u16> {
        BtUuid::to_uuid16(self)
    }

    fn to_uuid32(&self) -> Result<u32> {
        BtUuid::to_uuid32(self)
    }

    fn as_bluetooth_bytes(&self) -> &[u8] {
        short_bytes(self.as_bytes(), self.is_u16_uuid(), self.is_u32_uuid())
    }
}

impl BluetoothUuidExt for uuid::Uuid {
    fn from_u16(uuid: u16) -> Self {
        bluetooth_uuid_from_u16(uuid).into()
    }

    fn from_u32(uuid: u32) -> Self {
        bluetooth_uuid_from_u32(uuid).into()
    }

    fn from_bluetooth_bytes(bytes: &[u8]) -> Result<Self> {
        BtUuid::from_bluetooth_bytes(bytes).map(Into::into)
    }

    fn is_base_derived(&self) -> bool {
        BtUuid::from(*self).is_base_derived()
    }

    fn is_u16_uuid(&self) -> bool {
        BluetoothUuidExt::is_u16_uuid(&BtUuid::from(*self))
    }

    fn is_u32_uuid(&self) -> bool {
        BluetoothUuidExt::is_u32_uuid(&BtUuid::from(*self))
    }

    fn to_uuid16(&self) -> Result<u16> {
        BtUuid::from(*self).to_uuid16()
    }

    fn to_uuid32(&self) -> Result<u32> {
        BtUuid::from(*self).to_uuid32()
    }

    fn as_bluetooth_bytes(&self) -> &[u8] {
        short_bytes(self.as_bytes(), self.is_u16_uuid(), self.is_u32_uuid())
    }
}

mod private {
    use crate::uuid::BtUuid;

    pub trait Sealed {}

    impl Sealed for BtUuid {}
    impl Sealed for uuid::Uuid {}
}

/// SDP protocol identifier 16-bit UUIDs
pub mod protocols {
    #![allow(missing_docs)]

    use super::bluetooth_uuid_from_u16;
    use crate::uuid::BtUuid;

    pub const SDP: BtUuid = bluetooth_uuid_from_u16(0x0001);
    pub const UDP: BtUuid = bluetooth_uuid_from_u16(0x0002);
    pub const RFCOMM: BtUuid = bluetooth_uuid_from_u16(0x0003);
    pub const TCP: BtUuid = bluetooth_uuid_from_u16(0x0004);
    pub const TCS_BIN: BtUuid = bluetooth_uuid_from_u16(0x0005);
    pub const TCS_AT: BtUuid = bluetooth_uuid_from_u16(0x0006);
    pub const ATT: BtUuid = bluetooth_uuid_from_u16(0x0007);
    pub const OBEX: BtUuid = bluetooth_uuid_from_u16(0x0008);
    pub const IP: BtUuid = bluetooth_uuid_from_u16(0x0009);
    pub const FTP: BtUuid = bluetooth_uuid_from_u16(0x000A);
    pub const HTTP: BtUuid = bluetooth_uuid_from_u16(0x000C);
    pub const WSP: BtUuid = bluetooth_uuid_from_u16(0x000E);
    pub const BNEP: BtUuid = bluetooth_uuid_from_u16(0x000F);
    pub const UPNP: BtUuid = bluetooth_uuid_from_u16(0x0010);
    pub const HIDP: BtUuid = bluetooth_uuid_from_u16(0x0011);
    pub const HARDCOPY_CONTROL_CHANNEL: BtUuid = bluetooth_uuid_from_u16(0x0012);
    pub const HARDCOPY_DATA_CHANNEL: BtUuid = bluetooth_uuid_from_u16(0x0014);
    pub const HARDCOPY_NOTIFICATION: BtUuid = bluetooth_uuid_from_u16(0x0016);
    pub const AVCTP: BtUuid = bluetooth_uuid_from_u16(0x0017);
    pub const AVDTP: BtUuid = bluetooth_uuid_from_u16(0x0019);
    pub const CMTP: BtUuid = bluetooth_uuid_from_u16(0x001B);
    pub const MCAP_CONTROL_CHANNEL: BtUuid = bluetooth_uuid_from_u16(0x001E);
    pub const MCAP_DATA_CHANNEL: BtUuid = bluetooth_uuid_from_u16(0x001F);
    pub const L2CAP: BtUuid = bluetooth_uuid_from_u16(0x0100);
}

/// SDP service class 16-bit UUIDs
pub mod service_classes {
    #![allow(missing_docs)]

    use super::bluetooth_uuid_from_u16;
    use crate::uuid::BtUuid;

    pub const SERVICE_DISCOVERY_SERVER: BtUuid = bluetooth_uuid_from_u16(0x1000);
    pub const BROWSE_GROUP_DESCRIPTOR: BtUuid = bluetooth_uuid_from_u16(0x1001);
    pub const PUBLIC_BROWSE_ROOT: BtUuid = bluetooth_uuid_from_u16(0x1002);
    pub const SERIAL_PORT: BtUuid = bluetooth_uuid_from_u16(0x1101);
    pub const LAN_ACCESS_USING_PPP: BtUuid = bluetooth_uuid_from_u16(0x1102);
    pub const DIALUP_NETWORKING: BtUuid = bluetooth_uuid_from_u16(0x1103);
    pub const IRMC_SYNC: BtUuid = bluetooth_uuid_from_u16(0x1104);
    pub const OBEX_OBJECT_PUSH: BtUuid = bluetooth_uuid_from_u16(0x1105);
    pub const OBEX_FILE_TRANSFER: BtUuid = bluetooth_uuid_from_u16(0x1106);
    pub const IRMC_SYNC_COMMAND: BtUuid = bluetooth_uuid_from_u16(0x1107);
    pub const HEADSET: BtUuid = bluetooth_uuid_from_u16(0x1108);
    pub const CORDLESS_TELEPHONY: BtUuid = bluetooth_uuid_from_u16(0x1109);
    pub const AUDIO_SOURCE: BtUuid = bluetooth_uuid_from_u16(0x110A);
    pub const AUDIO_SINK: BtUuid = bluetooth_uuid_from_u16(0x110B);
    pub const AV_REMOTE_CONTROL_TARGET: BtUuid = bluetooth_uuid_from_u16(0x110C);
    pub const ADVANCED_AUDIO_DISTRIBUTION: BtUuid = bluetooth_uuid_from_u16(0x110D);
    pub const AV_REMOTE_CONTROL: BtUuid = bluetooth_uuid_from_u16(0x110E);
    pub const AV_REMOTE_CONTROL_CONTROLLER: BtUuid = bluetooth_uuid_from_u16(0x110F);
    pub const INTERCOM: BtUuid = bluetooth_uuid_from_u16(0x1110);
    pub const FAX: BtUuid = bluetooth_uuid_from_u16(0x1111);
    pub const HEADSET_AUDIO_GATEWAY: BtUuid = bluetooth_uuid_from_u16(0x1112);
    pub const PANU: BtUuid = bluetooth_uuid_from_u16(0x1115);
    pub const NAP: BtUuid = bluetooth_uuid_from_u16(0x1116);
    pub const GN: BtUuid = bluetooth_uuid_from_u16(0x1117);
    pub const DIRECT_PRINTING: BtUuid = bluetooth_uuid_from_u16(0x1118);
    pub const REFERENCE_PRINTING: BtUuid = bluetooth_uuid_from_u16(0x1119);
    pub const BASIC_IMAGING_PROFILE: BtUuid = bluetooth_uuid_from_u16(0x111A);
    pub const IMAGING_RESPONDER: BtUuid = bluetooth_uuid_from_u16(0x111B);
    pub const IMAGING_AUTOMATIC_ARCHIVE: BtUuid = bluetooth_uuid_from_u16(0x111C);
    pub const IMAGING_REFERENCED_OBJECTS: BtUuid = bluetooth_uuid_from_u16(0x111D);
    pub const HANDSFREE: BtUuid = bluetooth_uuid_from_u16(0x111E);
    pub const HANDSFREE_AUDIO_GATEWAY: BtUuid = bluetooth_uuid_from_u16(0x111F);
    pub const DIRECT_PRINTING_REFERENCE_OBJECTS: BtUuid = bluetooth_uuid_from_u16(0x1120);
    pub const REFLECTED_UI: BtUuid = bluetooth_uuid_from_u16(0x1121);
    pub const BASIC_PRINTING: BtUuid = bluetooth_uuid_from_u16(0x1122);
    pub const PRINTING_STATUS: BtUuid = bluetooth_uuid_from_u16(0x1123);
    pub const HUMAN_INTERFACE_DEVICE: BtUuid = bluetooth_uuid_from_u16(0x1124);
    pub const HARDCOPY_CABLE_REPLACEMENT: BtUuid = bluetooth_uuid_from_u16(0x1125);
    pub const HCR_PRINT: BtUuid = bluetooth_uuid_from_u16(0x1126);
    pub const HCR_SCAN: BtUuid = bluetooth_uuid_from_u16(0x1127);
    pub const COMMON_ISDN_ACCESS: BtUuid = bluetooth_uuid_from_u16(0x1128);
    pub const SIM_ACCESS: BtUuid = bluetooth_uuid_from_u16(0x112D);
    pub const PHONEBOOK_ACCESS_PCE: BtUuid = bluetooth_uuid_from_u16(0x112E);
    pub const PHONEBOOK_ACCESS_PSE: BtUuid = bluetooth_uuid_from_u16(0x112F);
    pub const PHONEBOOK_ACCESS: BtUuid = bluetooth_uuid_from_u16(0x1130);
    pub const HEADSET_HS: BtUuid = bluetooth_uuid_from_u16(0x1131);
    pub const MESSAGE_ACCESS_SERVER: BtUuid = bluetooth_uuid_from_u16(0x1132);
    pub const MESSAGE_NOTIFICATION_SERVER: BtUuid = bluetooth_uuid_from_u16(0x1133);
    pub const MESSAGE_ACCESS_PROFILE: BtUuid = bluetooth_uuid_from_u16(0x1134);
    pub const GNSS: BtUuid = bluetooth_uuid_from_u16(0x1135);
    pub const GNSS_SERVER: BtUuid = bluetooth_uuid_from_u16(0x1136);
    pub const PNP_INFORMATION: BtUuid = bluetooth_uuid_from_u16(0x1200);
    pub const GENERIC_NETWORKING: BtUuid = bluetooth_uuid_from_u16(0x1201);
    pub const GENERIC_FILE_TRANSFER: BtUuid = bluetooth_uuid_from_u16(0x1202);
    pub const GENERIC_AUDIO: BtUuid = bluetooth_uuid_from_u16(0x1203);
    pub const GENERIC_TELEPHONY: BtUuid = bluetooth_uuid_from_u16(0x1204);
    pub const VIDEO_SOURCE: BtUuid = bluetooth_uuid_from_u16(0x1303);
    pub const VIDEO_SINK: BtUuid = bluetooth_uuid_from_u16(0x1304);
    pub const VIDEO_DISTRIBUTION: BtUuid = bluetooth_uuid_from_u16(0x1305);
    pub const HDP: BtUuid = bluetooth_uuid_from_u16(0x1400);
    pub const HDP_SOURCE: BtUuid = bluetooth_uuid_from_u16(0x1401);
    pub const HDP_SINK: BtUuid = bluetooth_uuid_from_u16(0x1402);
}

/// Bluetooth GATT Service 16-bit UUIDs
pub mod services {
    #![allow(missing_docs)]

    use super::bluetooth_uuid_from_u16;
    use crate::uuid::BtUuid;

    pub const GENERIC_ACCESS: BtUuid = bluetooth_uuid_from_u16(0x1800);
    pub const GENERIC_ATTRIBUTE: BtUuid = bluetooth_uuid_from_u16(0x1801);
    pub const IMMEDIATE_ALERT: BtUuid = bluetooth_uuid_from_u16(0x1802);
    pub const LINK_LOSS: BtUuid = bluetooth_uuid_from_u16(0x1803);
    pub const TX_POWER: BtUuid = bluetooth_uuid_from_u16(0x1804);
    pub const DEVICE_INFORMATION: BtUuid = bluetooth_uuid_from_u16(0x180A);
    pub const HEART_RATE: BtUuid = bluetooth_uuid_from_u16(0x180D);
    pub const BATTERY: BtUuid = bluetooth_uuid_from_u16(0x180F);
    pub const HUMAN_INTERFACE_DEVICE: BtUuid = bluetooth_uuid_from_u16(0x1812);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uuid::BASE_UUID;

    #[test]
    fn short_constructors() {
        assert_eq!(bluetooth_uuid_from_u16(0), BASE_UUID);
        assert_eq!(
            service_classes::SERIAL_PORT.to_string(),
            "00001101-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(
            bluetooth_uuid_from_u32(0x1234_5678).to_string(),
            "12345678-0000-1000-8000-00805f9b34fb"
        );
        assert_eq!(services::HEART_RATE.to_uuid16().unwrap(), 0x180d);
        assert_eq!(protocols::L2CAP.to_uuid16().unwrap(), 0x0100);
    }

    #[test]
    fn reconstruction_law() {
        let uuid: BtUuid = "0000110a-0000-1000-8000-00805f9b34fb".parse().unwrap();
        let short = uuid.to_uuid16().unwrap();
        assert_eq!(<BtUuid as BluetoothUuidExt>::from_u16(short), uuid);
        assert_eq!(<BtUuid as BluetoothUuidExt>::from_u32(uuid.to_uuid32().unwrap()), uuid);
    }

    #[test]
    fn u16_vs_u32() {
        let u16_uuid = services::BATTERY;
        assert!(u16_uuid.is_u16_uuid());
        assert!(u16_uuid.is_u32_uuid());
        assert_eq!(u16_uuid.as_bluetooth_bytes(), &[0x18, 0x0f]);

        let u32_uuid = bluetooth_uuid_from_u32(0xabcd_0001);
        assert!(!u32_uuid.is_u16_uuid());
        assert!(u32_uuid.is_u32_uuid());
        assert_eq!(u32_uuid.as_bluetooth_bytes(), &[0xab, 0xcd, 0x00, 0x01]);
        // narrowing only checks the base, so the low half comes back
        assert_eq!(u32_uuid.to_uuid16().unwrap(), 0x0001);

        let long: BtUuid = "6e400001-b5a3-f393-e0a9-e50e24dcca9e".parse().unwrap();
        assert!(!long.is_u32_uuid());
        assert_eq!(long.as_bluetooth_bytes().len(), 16);
    }

    #[test]
    fn from_bluetooth_bytes() {
        assert_eq!(BtUuid::from_bluetooth_bytes(&[0x11, 0x01]).unwrap(), service_classes::SERIAL_PORT);
        assert_eq!(
            BtUuid::from_bluetooth_bytes(&[0x00, 0x00, 0x18, 0x0d]).unwrap(),
            services::HEART_RATE
        );
        assert_eq!(BtUuid::from_bluetooth_bytes(BASE_UUID.as_bytes()).unwrap(), BASE_UUID);

        let err = BtUuid::from_bluetooth_bytes(&[0x11, 0x01, 0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn uuid_crate_extension() {
        let uuid = <uuid::Uuid as BluetoothUuidExt>::from_u16(0x1101);
        assert_eq!(uuid.to_string(), "00001101-0000-1000-8000-00805f9b34fb");
        assert!(BluetoothUuidExt::is_base_derived(&uuid));
        assert!(uuid.is_u16_uuid());
        assert_eq!(BluetoothUuidExt::to_uuid16(&uuid).unwrap(), 0x1101);
        assert_eq!(uuid.as_bluetooth_bytes(), &[0x11, 0x01]);

        let nil = uuid::Uuid::nil();
        assert_eq!(
            BluetoothUuidExt::to_uuid32(&nil).unwrap_err().kind(),
            ErrorKind::NotRepresentable
        );
        assert_eq!(
            <uuid::Uuid as BluetoothUuidExt>::from_bluetooth_bytes(&[0x18, 0x0f]).unwrap(),
            uuid::Uuid::from(services::BATTERY)
        );
    }
}
