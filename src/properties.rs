//! MAPI property-list decoding
//!
//! ```text
//! PropertyList  = Count(u32) Count*PropertyEntry
//! PropertyEntry = TypeCode(u16) PropId(u16) [NamedPropSpec] PropertyValue
//! NamedPropSpec = GUID(16) ValueKind(u32) (u32 | Len(u32) Utf16(Len) [pad])
//! PropertyValue = [Count(u32)] Count*Element
//! Element       = [Len(u32)] bytes [pad to a multiple of 4]
//! ```
//!
//! Padding is consumed after every element. The stored raw form keeps the
//! element count and per-element lengths but never the padding.

use crate::constants::NAMED_PROPERTY_MIN;
use crate::dispatch::{TypeSize, type_info};
use crate::error::{Result, TnefError};
use crate::reader::{ByteReader, utf16le};
use crate::types::{NamedPropMapValue, NamedPropertySpec, RawAttribute};
use tracing::trace;

/// Smallest possible property entry: type code plus id
const MIN_ENTRY_LEN: usize = 4;

/// Decode a property-list blob (the data of a message-properties or
/// attachment-properties record)
pub fn decode_property_list(blob: &[u8]) -> Result<Vec<RawAttribute>> {
    decode_property_list_at(blob, 0)
}

/// Decode a property-list blob that sits at `base` inside a larger buffer;
/// error offsets are reported relative to that buffer
pub(crate) fn decode_property_list_at(blob: &[u8], base: usize) -> Result<Vec<RawAttribute>> {
    if blob.len() < 4 {
        return Err(TnefError::MalformedPropertyList {
            offset: base,
            reason: format!("need a 4-byte property count, have {} bytes", blob.len()),
        });
    }

    let mut reader = ByteReader::with_base(blob, base);
    let count = reader.read_len()?;
    let mut properties = Vec::with_capacity(count.min(reader.remaining() / MIN_ENTRY_LEN));

    for _ in 0..count {
        properties.push(decode_property(&mut reader)?);
    }

    Ok(properties)
}

fn decode_property(reader: &mut ByteReader<'_>) -> Result<RawAttribute> {
    let tag_offset = reader.offset();
    let data_type = reader.read_u16()?;
    let id = reader.read_u16()?;

    let named = if id >= NAMED_PROPERTY_MIN {
        Some(decode_named_spec(reader)?)
    } else {
        None
    };

    let info = type_info(data_type).ok_or_else(|| TnefError::MalformedPropertyList {
        offset: tag_offset,
        reason: format!("unsupported property type {data_type:#06X} for property {id:#06X}"),
    })?;

    let mut raw = Vec::new();
    let count = if info.is_multivalue {
        let count = reader.read_u32()?;
        raw.extend_from_slice(&count.to_le_bytes());
        count as usize
    } else {
        1
    };

    for _ in 0..count {
        let len = match info.size {
            TypeSize::Fixed(width) => width,
            TypeSize::Variable => {
                let len = reader.read_u32()?;
                raw.extend_from_slice(&len.to_le_bytes());
                len as usize
            }
        };
        raw.extend_from_slice(reader.take(len)?);
        reader.skip_padding(len)?;
    }

    trace!(
        offset = tag_offset,
        id = format_args!("{id:#06X}"),
        data_type = format_args!("{data_type:#06X}"),
        elements = count,
        "Decoded MAPI property"
    );

    Ok(RawAttribute::mapi(id, data_type, raw, named))
}

fn decode_named_spec(reader: &mut ByteReader<'_>) -> Result<NamedPropertySpec> {
    let guid = reader.read_array::<16>()?;
    let value_kind = reader.read_u32()?;

    let value = if value_kind == 0 {
        NamedPropMapValue::Int(reader.read_u32()?)
    } else {
        // the length already covers the terminating NUL code unit
        let len = reader.read_len()?;
        let name = utf16le(reader.take(len)?);
        reader.skip_padding(len)?;
        NamedPropMapValue::Text(name.trim_end_matches('\0').to_owned())
    };

    Ok(NamedPropertySpec { guid, value })
}
