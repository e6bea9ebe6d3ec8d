//! Native byte order of the host, probed once per process.
//!
//! Every request carries the sender's byte order in its first byte so the
//! engine can swap doubles when it runs on a different architecture.

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

const PROBE_VALUE: u16 = 0x0100;

/// Byte order tag as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Endianness {
    Little = 0,
    Big = 1,
}

impl Endianness {
    pub const fn tag(self) -> u8 {
        self as u8
    }

    pub const fn try_from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Endianness::Little),
            1 => Some(Endianness::Big),
            _ => None,
        }
    }

    pub const fn is_little(self) -> bool {
        matches!(self, Endianness::Little)
    }

    pub const fn opposite(self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }

    pub fn write_f64(self, value: f64) -> [u8; 8] {
        match self {
            Endianness::Little => value.to_le_bytes(),
            Endianness::Big => value.to_be_bytes(),
        }
    }

    pub fn read_f64(self, bytes: [u8; 8]) -> f64 {
        match self {
            Endianness::Little => f64::from_le_bytes(bytes),
            Endianness::Big => f64::from_be_bytes(bytes),
        }
    }
}

/// Result of the host probe. Immutable for the life of the process.
#[derive(Debug)]
pub struct HostByteOrder {
    endianness: Endianness,
}

impl HostByteOrder {
    /// Lay `0x0100` out in native order and look at the first byte:
    /// `1` means the most significant byte comes first.
    fn probe() -> Self {
        let layout = PROBE_VALUE.to_ne_bytes();
        let endianness = if layout[0] == 1 {
            Endianness::Big
        } else {
            Endianness::Little
        };

        debug!("Host byte order probed: {endianness:?} (tag {})", endianness.tag());

        Self { endianness }
    }

    pub fn endianness(&self) -> Endianness {
        self.endianness
    }

    /// Tag byte written at offset 0 of every request.
    pub fn tag(&self) -> u8 {
        self.endianness.tag()
    }

    /// Whether doubles go out least significant byte first.
    pub fn little_endian_doubles(&self) -> bool {
        self.endianness.is_little()
    }
}

static HOST_BYTE_ORDER: Lazy<HostByteOrder> = Lazy::new(HostByteOrder::probe);

pub fn host_byte_order() -> &'static HostByteOrder {
    &HOST_BYTE_ORDER
}
