//! Motorola S-Record parser and serializer.
//!
//! ```
//! use micro_srec::{Document, Record};
//!
//! let record = Record::new(1, 0x0010, vec![0x01, 0x02, 0x03, 0x04]).unwrap();
//! assert_eq!(record.to_string(), "S107001001020304DE");
//! assert_eq!("S107001001020304DE".parse(), Ok(record));
//!
//! let document = Document::parse("S107001001020304DE\nS9030000FC\n").unwrap();
//! assert_eq!(document.image_size(), Ok(4));
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod checksum;
mod document;
mod error;
mod options;
mod parser;
mod record;
mod serializer;
pub mod types;

pub use document::Document;
#[cfg(feature = "std")]
pub use error::Error;
pub use error::SrecError;
pub use options::ParseOptions;
pub use parser::Parser;
pub use record::Record;
pub use types::RecordType;
