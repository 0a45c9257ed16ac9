use core::convert::TryFrom;

use alloc::vec::Vec;

use crate::checksum::checksum;
use crate::types::RecordType;
use crate::SrecError;

/// A single S-Record line.
///
/// Fields are fixed at construction; the byte count is derived once from the
/// record type and payload length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    record_type: RecordType,
    address: u32,
    payload: Vec<u8>,
    byte_count: u8,
}

impl Record {
    /// Builds a record from a numeric type digit.
    ///
    /// The address is not checked against the width of the type. Bits that
    /// do not fit are dropped when the record is serialized.
    pub fn new(record_type: u8, address: u32, payload: Vec<u8>) -> Result<Self, SrecError> {
        Self::with_type(RecordType::try_from(record_type)?, address, payload)
    }

    pub fn with_type(
        record_type: RecordType,
        address: u32,
        payload: Vec<u8>,
    ) -> Result<Self, SrecError> {
        let max = record_type.max_payload();
        if payload.len() > max {
            return Err(SrecError::PayloadTooLong {
                len: payload.len(),
                max,
            });
        }

        let byte_count = (record_type.address_width() + payload.len() + 1) as u8;

        Ok(Record {
            record_type,
            address,
            payload,
            byte_count,
        })
    }

    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Number of bytes covered by the count field: address, payload and
    /// checksum.
    pub fn byte_count(&self) -> u8 {
        self.byte_count
    }

    /// True for S1, S2 and S3 records.
    pub fn is_data_record(&self) -> bool {
        self.record_type.is_data()
    }

    /// Address bytes as they appear on the line, big endian and truncated to
    /// the width of the record type.
    pub fn address_bytes(&self) -> Vec<u8> {
        let width = self.record_type.address_width();
        self.address.to_be_bytes()[4 - width..].to_vec()
    }

    pub fn checksum(&self) -> u8 {
        let mut bytes = Vec::with_capacity(self.byte_count as usize);
        bytes.push(self.byte_count);
        bytes.extend_from_slice(&self.address_bytes());
        bytes.extend_from_slice(&self.payload);

        checksum(&bytes)
    }

    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::vec;

    #[test]
    fn byte_count_follows_address_width() {
        let payload = vec![0x21, 0x46, 0x01, 0x36, 0x01, 0x21, 0x47];

        assert_eq!(Record::new(1, 0, payload.clone()).unwrap().byte_count(), 0x0A);
        assert_eq!(Record::new(2, 0, payload.clone()).unwrap().byte_count(), 0x0B);
        assert_eq!(Record::new(3, 0, payload).unwrap().byte_count(), 0x0C);
        assert_eq!(Record::new(9, 0, vec![]).unwrap().byte_count(), 0x03);
    }

    #[test]
    fn rejects_invalid_type() {
        assert_eq!(
            Record::new(4, 0, vec![]),
            Err(SrecError::InvalidRecordType(4))
        );
        assert_eq!(
            Record::new(12, 0, vec![]),
            Err(SrecError::InvalidRecordType(12))
        );
    }

    #[test]
    fn rejects_oversized_payload() {
        assert!(Record::new(1, 0, vec![0; 252]).is_ok());
        assert_eq!(
            Record::new(1, 0, vec![0; 253]),
            Err(SrecError::PayloadTooLong { len: 253, max: 252 })
        );
        assert_eq!(
            Record::new(3, 0, vec![0; 251]),
            Err(SrecError::PayloadTooLong { len: 251, max: 250 })
        );
    }

    #[test]
    fn data_records() {
        assert!(!Record::new(0, 0, vec![]).unwrap().is_data_record());
        assert!(Record::new(1, 0, vec![]).unwrap().is_data_record());
        assert!(Record::new(2, 0, vec![]).unwrap().is_data_record());
        assert!(Record::new(3, 0, vec![]).unwrap().is_data_record());
        assert!(!Record::new(5, 0, vec![]).unwrap().is_data_record());
        assert!(!Record::new(7, 0, vec![]).unwrap().is_data_record());
    }

    #[test]
    fn checksum_matches_known_lines() {
        assert_eq!(Record::new(9, 0, vec![]).unwrap().checksum(), 0xFC);
        assert_eq!(Record::new(5, 3, vec![]).unwrap().checksum(), 0xF9);
        assert_eq!(
            Record::new(1, 0, vec![0x21, 0x46, 0x01, 0x36, 0x01, 0x21, 0x47])
                .unwrap()
                .checksum(),
            0xEE
        );
    }

    #[test]
    fn address_is_truncated_to_width() {
        let record = Record::new(1, 0x0001_2345, vec![]).unwrap();

        assert_eq!(record.address(), 0x0001_2345);
        assert_eq!(record.address_bytes(), vec![0x23, 0x45]);
    }
}
