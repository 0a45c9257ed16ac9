use core::fmt;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::{Record, SrecError};

impl Record {
    /// Canonical upper-case text form, without a line terminator.
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Writes the canonical line into `buffer` and returns its length.
    pub fn serialize_into<T>(&self, buffer: &mut T) -> Result<usize, SrecError>
    where
        T: AsMut<[u8]>,
    {
        let buffer = buffer.as_mut();
        let bytes = self.line_bytes();

        let line_length = 2 + 2 * bytes.len();
        if buffer.len() < line_length {
            return Err(SrecError::BufferTooSmall {
                needed: line_length,
                available: buffer.len(),
            });
        }

        buffer[0] = b'S';
        buffer[1] = b'0' + self.record_type().digit();

        let fields = &mut buffer[2..line_length];
        hex::encode_to_slice(&bytes, fields).map_err(|_| SrecError::BufferTooSmall {
            needed: line_length,
            available: line_length,
        })?;
        fields.make_ascii_uppercase();

        Ok(line_length)
    }

    /// Byte count, address, payload and checksum as raw bytes.
    fn line_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_count() as usize + 1);
        bytes.push(self.byte_count());
        bytes.extend_from_slice(&self.address_bytes());
        bytes.extend_from_slice(self.payload());
        bytes.push(self.checksum());

        bytes
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        log::trace!(
            "serializing S{} record at {:#X}",
            self.record_type().digit(),
            self.address()
        );

        write!(
            f,
            "S{}{}",
            self.record_type().digit(),
            hex::encode_upper(self.line_bytes())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::checksum::calculate_checksum;
    use alloc::{format, vec};

    #[test]
    fn serialize_data() {
        let record = Record::new(1, 0x0000, vec![0x21, 0x46, 0x01, 0x36, 0x01, 0x21, 0x47]).unwrap();

        assert_eq!(record.serialize(), "S10A000021460136012147EE");
    }

    #[test]
    fn serialize_header() {
        let record = Record::new(0, 0x0000, b"hello     \0\0".to_vec()).unwrap();

        assert_eq!(record.serialize(), "S00F000068656C6C6F202020202000003C");
    }

    #[test]
    fn serialize_address_widths() {
        let s0 = Record::new(0, 0, vec![]).unwrap().serialize();
        let s2 = Record::new(2, 0x12_3456, vec![0x01, 0x02, 0x03]).unwrap().serialize();
        let s3 = Record::new(3, 0x1234_5678, vec![0xAA]).unwrap().serialize();

        assert_eq!(s0, "S0030000FC");
        assert_eq!(&s0[4..8], "0000");
        assert_eq!(s2, "S20712345601020356");
        assert_eq!(&s2[4..10], "123456");
        assert_eq!(s3, "S30612345678AA3B");
        assert_eq!(&s3[4..12], "12345678");
    }

    #[test]
    fn serialize_termination() {
        assert_eq!(Record::new(9, 0, vec![]).unwrap().serialize(), "S9030000FC");
        assert_eq!(
            Record::new(8, 0x01_0000, vec![]).unwrap().serialize(),
            "S804010000FA"
        );
        assert_eq!(
            Record::new(7, 0x1234_5678, vec![]).unwrap().serialize(),
            "S70512345678E6"
        );
    }

    #[test]
    fn serialize_truncates_wide_address() {
        let record = Record::new(1, 0x0001_0010, vec![0x01, 0x02, 0x03, 0x04]).unwrap();

        assert_eq!(record.serialize(), "S107001001020304DE");
    }

    #[test]
    fn serialized_checksum_matches_recomputation() {
        let record = Record::new(2, 0x00_ABCD, vec![0xDE, 0xAD, 0xBE, 0xEF]).unwrap();
        let line = record.serialize();
        let (fields, embedded) = line[2..].split_at(line.len() - 4);

        let recomputed = calculate_checksum(fields).unwrap();

        assert_eq!(format!("{:02X}", recomputed), embedded);
    }

    #[test]
    fn round_trip() {
        let records = vec![
            Record::new(0, 0, b"header".to_vec()).unwrap(),
            Record::new(1, 0xFFFF, vec![0x00, 0xFF]).unwrap(),
            Record::new(2, 0xFF_FFFF, vec![0x7F; 32]).unwrap(),
            Record::new(3, 0xFFFF_FFFF, vec![]).unwrap(),
            Record::new(5, 3, vec![]).unwrap(),
            Record::new(7, 0x0800_0000, vec![]).unwrap(),
        ];

        for record in records {
            assert_eq!(Record::parse(record.serialize()), Ok(record));
        }
    }

    #[test]
    fn serialize_into_buffer() {
        let record = Record::new(5, 3, vec![]).unwrap();

        let mut buffer = [0; 0x200];
        let length = record.serialize_into(&mut buffer).unwrap();

        assert_eq!(&buffer[..length], b"S5030003F9");
    }

    #[test]
    fn serialize_into_small_buffer() {
        let record = Record::new(5, 3, vec![]).unwrap();

        let mut buffer = [0; 8];

        assert_eq!(
            record.serialize_into(&mut buffer),
            Err(SrecError::BufferTooSmall {
                needed: 10,
                available: 8,
            })
        );
    }
}
