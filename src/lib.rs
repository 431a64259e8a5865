// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::significant_drop_tightening)]

//! TNEF Extractor
//!
//! A strongly-typed decoder for Microsoft TNEF (`winmail.dat`) streams: the
//! record-level attribute stream, the MAPI property lists embedded in it and
//! attachments that carry another TNEF stream.
//!
//! # Features
//!
//! - Bounds-checked decoding of untrusted, possibly truncated input
//! - Named properties resolved to their property set and map value
//! - Typed views over every stored attribute (strings, integers, times, GUIDs)
//! - Depth and size limits on nested stream decoding
//! - JSON export of the decoded model
//!
//! # Example
//!
//! ```rust
//! use tnef_extract::decode;
//!
//! let mut stream = vec![0x78, 0x9F, 0x3E, 0x22, 0x00, 0x00];
//! stream.push(0x01); // message level
//! stream.extend_from_slice(&0x0007_8008_u32.to_le_bytes()); // attMessageClass
//! stream.extend_from_slice(&12_u32.to_le_bytes());
//! stream.extend_from_slice(b"IPM.Contact\0");
//! stream.extend_from_slice(&[0x00, 0x00]); // checksum
//!
//! let document = decode(&stream).unwrap();
//! assert_eq!(document.message_class().as_deref(), Some("IPM.Contact"));
//! assert!(document.is_contact());
//! assert!(document.attachments().is_empty());
//! ```

mod config;
pub mod constants;
mod dispatch;
mod document;
mod error;
mod nested;
mod parser;
mod properties;
mod reader;
mod rtf;
mod types;
mod value;

pub use config::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_NESTED_SIZE, DecodeOptions};
pub use dispatch::{TypeInfo, TypeSize, is_array_type, type_info};
pub use document::{Attachment, Document, RenderingSummary};
pub use error::{Result, TnefError};
pub use nested::embedded_stream;
pub use parser::{Decoder, decode, decode_with};
pub use properties::decode_property_list;
pub use reader::{ByteReader, bool_from, padding_for, string8, uint_from, utf16le};
pub use rtf::RtfDecompressor;
pub use types::*;
pub use value::filetime_to_utc;
