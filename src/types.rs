use core::convert::TryFrom;

use crate::SrecError;

/// The record types understood by the codec.
///
/// S4 is reserved and S6 has no address width in the classic format, so
/// neither has a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Header, 16-bit address.
    S0,
    /// Data, 16-bit address.
    S1,
    /// Data, 24-bit address.
    S2,
    /// Data, 32-bit address.
    S3,
    /// Record count, 16-bit field.
    S5,
    /// Termination / start address, 32-bit.
    S7,
    /// Termination / start address, 24-bit.
    S8,
    /// Termination / start address, 16-bit.
    S9,
}

impl RecordType {
    /// Decimal digit following the leading `S`.
    pub fn digit(self) -> u8 {
        match self {
            Self::S0 => 0,
            Self::S1 => 1,
            Self::S2 => 2,
            Self::S3 => 3,
            Self::S5 => 5,
            Self::S7 => 7,
            Self::S8 => 8,
            Self::S9 => 9,
        }
    }

    /// Width of the address field in bytes.
    pub fn address_width(self) -> usize {
        match self {
            Self::S0 | Self::S1 | Self::S5 | Self::S9 => 2,
            Self::S2 | Self::S8 => 3,
            Self::S3 | Self::S7 => 4,
        }
    }

    /// Width of the address field in hex digits.
    pub fn address_digits(self) -> usize {
        self.address_width() * 2
    }

    /// Largest payload a record of this type can carry: the byte count
    /// field tops out at 0xFF and also covers the address and checksum.
    pub fn max_payload(self) -> usize {
        0xFF - self.address_width() - 1
    }

    pub fn is_data(self) -> bool {
        matches!(self, Self::S1 | Self::S2 | Self::S3)
    }

    pub fn is_header(self) -> bool {
        self == Self::S0
    }

    pub fn is_count(self) -> bool {
        self == Self::S5
    }

    pub fn is_termination(self) -> bool {
        matches!(self, Self::S7 | Self::S8 | Self::S9)
    }
}

impl TryFrom<u8> for RecordType {
    type Error = SrecError;

    fn try_from(digit: u8) -> Result<Self, Self::Error> {
        match digit {
            0 => Ok(Self::S0),
            1 => Ok(Self::S1),
            2 => Ok(Self::S2),
            3 => Ok(Self::S3),
            5 => Ok(Self::S5),
            7 => Ok(Self::S7),
            8 => Ok(Self::S8),
            9 => Ok(Self::S9),
            other => Err(SrecError::InvalidRecordType(other)),
        }
    }
}

impl From<RecordType> for u8 {
    fn from(record_type: RecordType) -> u8 {
        record_type.digit()
    }
}
