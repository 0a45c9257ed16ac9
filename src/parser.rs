use core::convert::TryFrom;
use core::iter::FusedIterator;
use core::str::FromStr;

use alloc::vec;

use crate::checksum::calculate_checksum;
use crate::types::RecordType;
use crate::{ParseOptions, Record, SrecError};

type ParseResult = Result<Record, SrecError>;

impl Record {
    /// Parses a single line, with or without its trailing line terminator.
    pub fn parse<T: AsRef<[u8]>>(line: T) -> ParseResult {
        Self::parse_with(line, &ParseOptions::default())
    }

    pub fn parse_with<T: AsRef<[u8]>>(line: T, options: &ParseOptions) -> ParseResult {
        let mut line = strip_terminator(line.as_ref());

        match line.first() {
            Some(b'S') | Some(b's') => line = &line[1..],
            _ => return Err(SrecError::MalformedLine("line without leading S")),
        }

        let digit = take(&mut line, 1)?[0];
        let record_type = RecordType::try_from(digit.wrapping_sub(b'0'))?;

        // Everything between the type digit and the checksum feeds the sum.
        let fields = line;

        let count_field = take(&mut line, 2)?;
        let address_field = take(&mut line, record_type.address_digits())?;

        if line.len() < 2 {
            return Err(SrecError::MalformedLine("missing checksum"));
        }
        let (payload_field, checksum_field) = line.split_at(line.len() - 2);

        let declared = decode_byte(count_field, "byte count")?;
        let address = decode_address(address_field)?;

        if payload_field.len() % 2 != 0 {
            return Err(SrecError::MalformedHex { field: "payload" });
        }
        let mut payload = vec![0; payload_field.len() / 2];
        hex::decode_to_slice(payload_field, &mut payload)
            .map_err(|_| SrecError::MalformedHex { field: "payload" })?;

        let embedded = decode_byte(checksum_field, "checksum")?;
        let calculated = calculate_checksum(&fields[..fields.len() - 2])?;

        if calculated != embedded {
            log::debug!(
                "rejecting S{} record at {:#X}: checksum {:02X} instead of {:02X}",
                record_type.digit(),
                address,
                calculated,
                embedded
            );
            return Err(SrecError::ChecksumMismatch {
                calculated,
                embedded,
            });
        }

        let record = Record::with_type(record_type, address, payload)?;

        if options.strict_byte_count && declared != record.byte_count() {
            return Err(SrecError::ByteCountMismatch {
                declared,
                computed: record.byte_count(),
            });
        }

        log::trace!(
            "parsed S{} record at {:#X} with {} payload bytes",
            record_type.digit(),
            address,
            record.payload().len()
        );

        Ok(record)
    }
}

impl FromStr for Record {
    type Err = SrecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::parse(s)
    }
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn take<'a>(line: &mut &'a [u8], count: usize) -> Result<&'a [u8], SrecError> {
    if line.len() < count {
        return Err(SrecError::MalformedLine("line too short"));
    }

    let (head, tail) = line.split_at(count);
    *line = tail;

    Ok(head)
}

fn decode_byte(field: &[u8], name: &'static str) -> Result<u8, SrecError> {
    let mut byte = [0; 1];
    hex::decode_to_slice(field, &mut byte).map_err(|_| SrecError::MalformedHex { field: name })?;

    Ok(byte[0])
}

fn decode_address(field: &[u8]) -> Result<u32, SrecError> {
    let mut word = [0; 4];
    let width = field.len() / 2;
    hex::decode_to_slice(field, &mut word[4 - width..])
        .map_err(|_| SrecError::MalformedHex { field: "address" })?;

    Ok(u32::from_be_bytes(word))
}

/// Lazily parses every non-empty line of a text.
pub struct Parser<'a> {
    inner: core::str::Lines<'a>,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self::with_options(s, ParseOptions::default())
    }

    pub fn with_options(s: &'a str, options: ParseOptions) -> Self {
        Parser {
            inner: s.lines(),
            options,
        }
    }

    fn next_line(&mut self) -> Option<&'a str> {
        for line in &mut self.inner {
            if !line.is_empty() {
                return Some(line);
            }
        }

        None
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = ParseResult;

    fn next(&mut self) -> Option<Self::Item> {
        let options = self.options;
        self.next_line()
            .map(|line| Record::parse_with(line, &options))
    }
}

impl<'a> FusedIterator for Parser<'a> {}
