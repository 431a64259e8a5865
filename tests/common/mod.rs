//! Synthetic TNEF encoder for building test inputs
#![allow(dead_code, clippy::cast_possible_truncation)]

use tnef_extract::constants::{EMBEDDED_MESSAGE_PREFIX, TNEF_SIGNATURE, attribute, prop_type};

pub const MESSAGE: u8 = 0x01;
pub const ATTACHMENT: u8 = 0x02;

fn pad(buf: &mut Vec<u8>, len: usize) {
    let rem = len % 4;
    if rem != 0 {
        buf.extend(std::iter::repeat_n(0u8, 4 - rem));
    }
}

fn tag(data_type: u16, id: u32) -> Vec<u8> {
    let mut buf = data_type.to_le_bytes().to_vec();
    buf.extend_from_slice(&(id as u16).to_le_bytes());
    buf
}

/// Property with a fixed-width value, padded to 4 bytes
pub fn fixed(data_type: u16, id: u32, value: &[u8]) -> Vec<u8> {
    let mut buf = tag(data_type, id);
    buf.extend_from_slice(value);
    pad(&mut buf, value.len());
    buf
}

/// Property of type Null: tag only, no value bytes
pub fn null(id: u32) -> Vec<u8> {
    tag(prop_type::NULL, id)
}

pub fn int16(id: u32, value: i16) -> Vec<u8> {
    fixed(prop_type::INT16, id, &value.to_le_bytes())
}

pub fn int32(id: u32, value: i32) -> Vec<u8> {
    fixed(prop_type::INT32, id, &value.to_le_bytes())
}

pub fn boolean(id: u32, value: bool) -> Vec<u8> {
    fixed(prop_type::BOOLEAN, id, &u16::from(value).to_le_bytes())
}

pub fn systime(id: u32, ticks: i64) -> Vec<u8> {
    fixed(prop_type::SYSTIME, id, &ticks.to_le_bytes())
}

/// Property with one length-prefixed element (count of 1)
pub fn variable(data_type: u16, id: u32, value: &[u8]) -> Vec<u8> {
    let mut buf = tag(data_type, id);
    buf.extend_from_slice(&1u32.to_le_bytes());
    push_element(&mut buf, value);
    buf
}

fn push_element(buf: &mut Vec<u8>, value: &[u8]) {
    buf.extend_from_slice(&(value.len() as u32).to_le_bytes());
    buf.extend_from_slice(value);
    pad(buf, value.len());
}

pub fn string8(id: u32, value: &str) -> Vec<u8> {
    let mut bytes = value.as_bytes().to_vec();
    bytes.push(0);
    variable(prop_type::STRING8, id, &bytes)
}

pub fn utf16_bytes(value: &str) -> Vec<u8> {
    value
        .encode_utf16()
        .chain(std::iter::once(0))
        .flat_map(u16::to_le_bytes)
        .collect()
}

pub fn unicode(id: u32, value: &str) -> Vec<u8> {
    variable(prop_type::UNICODE, id, &utf16_bytes(value))
}

pub fn binary(id: u32, value: &[u8]) -> Vec<u8> {
    variable(prop_type::BINARY, id, value)
}

pub fn object(id: u32, value: &[u8]) -> Vec<u8> {
    variable(prop_type::OBJECT, id, value)
}

/// Array of Int16 values, each padded to 4 bytes
pub fn mv_int16(id: u32, values: &[i16]) -> Vec<u8> {
    let mut buf = tag(prop_type::MV_INT16, id);
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        buf.extend_from_slice(&value.to_le_bytes());
        pad(&mut buf, 2);
    }
    buf
}

pub fn mv_int32(id: u32, values: &[i32]) -> Vec<u8> {
    let mut buf = tag(prop_type::MV_INT32, id);
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        buf.extend_from_slice(&value.to_le_bytes());
    }
    buf
}

pub fn mv_string8(id: u32, values: &[&str]) -> Vec<u8> {
    let mut buf = tag(prop_type::MV_STRING8, id);
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        push_element(&mut buf, &bytes);
    }
    buf
}

pub fn mv_unicode(id: u32, values: &[&str]) -> Vec<u8> {
    let mut buf = tag(prop_type::MV_UNICODE, id);
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        push_element(&mut buf, &utf16_bytes(value));
    }
    buf
}

pub fn mv_binary(id: u32, values: &[&[u8]]) -> Vec<u8> {
    let mut buf = tag(prop_type::MV_BINARY, id);
    buf.extend_from_slice(&(values.len() as u32).to_le_bytes());
    for value in values {
        push_element(&mut buf, value);
    }
    buf
}

/// Insert a numeric named-property spec after the tag of `entry`
pub fn named_id(entry: Vec<u8>, guid: [u8; 16], id: u32) -> Vec<u8> {
    let mut spec = guid.to_vec();
    spec.extend_from_slice(&0u32.to_le_bytes());
    spec.extend_from_slice(&id.to_le_bytes());
    splice_spec(entry, &spec)
}

/// Insert a string named-property spec after the tag of `entry`
pub fn named_str(entry: Vec<u8>, guid: [u8; 16], name: &str) -> Vec<u8> {
    let mut spec = guid.to_vec();
    spec.extend_from_slice(&1u32.to_le_bytes());
    push_element(&mut spec, &utf16_bytes(name));
    splice_spec(entry, &spec)
}

fn splice_spec(entry: Vec<u8>, spec: &[u8]) -> Vec<u8> {
    let mut buf = entry[..4].to_vec();
    buf.extend_from_slice(spec);
    buf.extend_from_slice(&entry[4..]);
    buf
}

pub fn property_list(entries: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = (entries.len() as u32).to_le_bytes().to_vec();
    for entry in entries {
        buf.extend_from_slice(entry);
    }
    buf
}

pub fn record(level: u8, id: u32, data: &[u8]) -> Vec<u8> {
    let mut buf = vec![level];
    buf.extend_from_slice(&id.to_le_bytes());
    buf.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buf.extend_from_slice(data);
    let checksum = data.iter().fold(0u16, |sum, b| sum.wrapping_add(u16::from(*b)));
    buf.extend_from_slice(&checksum.to_le_bytes());
    buf
}

pub fn stream(records: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = TNEF_SIGNATURE.to_le_bytes().to_vec();
    buf.extend_from_slice(&0x0001u16.to_le_bytes());
    for record in records {
        buf.extend_from_slice(record);
    }
    buf
}

/// Rendering summary data: file attachment, hidden position, 32x32 icon
pub fn rend_data_bytes() -> Vec<u8> {
    let mut buf = 1u16.to_le_bytes().to_vec();
    buf.extend_from_slice(&(-1i32).to_le_bytes());
    buf.extend_from_slice(&32i16.to_le_bytes());
    buf.extend_from_slice(&32i16.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf
}

pub fn rend_data() -> Vec<u8> {
    record(ATTACHMENT, attribute::ATTACH_REND_DATA, &rend_data_bytes())
}

pub fn message_class(class: &str) -> Vec<u8> {
    let mut bytes = class.as_bytes().to_vec();
    bytes.push(0);
    record(MESSAGE, attribute::MESSAGE_CLASS, &bytes)
}

pub fn msg_props(entries: &[Vec<u8>]) -> Vec<u8> {
    record(MESSAGE, attribute::MSG_PROPS, &property_list(entries))
}

pub fn attach_props(entries: &[Vec<u8>]) -> Vec<u8> {
    record(ATTACHMENT, attribute::ATTACHMENT, &property_list(entries))
}

/// Object payload wrapping `inner` behind the embedded-message prefix
pub fn embedded_object(inner: &[u8]) -> Vec<u8> {
    let mut buf = EMBEDDED_MESSAGE_PREFIX.to_vec();
    buf.extend_from_slice(inner);
    buf
}
