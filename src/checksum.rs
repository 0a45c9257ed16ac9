use crate::SrecError;

/// One's complement of the low byte of the sum of `bytes`.
pub fn checksum(bytes: &[u8]) -> u8 {
    !bytes.iter().fold(0u8, |acc, &byte| acc.wrapping_add(byte))
}

/// Checksum over hex-pair text, e.g. the byte count, address and payload
/// fields of a line concatenated as they appear.
pub fn calculate_checksum<T: AsRef<[u8]>>(fields: T) -> Result<u8, SrecError> {
    let fields = fields.as_ref();

    if fields.len() % 2 != 0 {
        return Err(SrecError::MalformedHex { field: "checksum input" });
    }

    let mut sum = 0u8;
    for pair in fields.chunks(2) {
        let mut byte = [0u8; 1];
        hex::decode_to_slice(pair, &mut byte)
            .map_err(|_| SrecError::MalformedHex { field: "checksum input" })?;
        sum = sum.wrapping_add(byte[0]);
    }

    Ok(!sum)
}
