/// Knobs for [`Record::parse_with`](crate::Record::parse_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Reject lines whose declared byte count differs from the one implied
    /// by the address width and payload length. Off by default: the count
    /// field is read but otherwise ignored, and only the checksum guards the
    /// line.
    pub strict_byte_count: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            strict_byte_count: true,
        }
    }
}
