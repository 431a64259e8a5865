//! Typed projections of stored attribute bytes
//!
//! Nothing here is cached: every call re-reads the framed bytes kept on the
//! [`RawAttribute`]. Requests that do not fit the attribute's type or framing
//! fail with [`TnefError::TypeMismatch`]; they never affect the document.

use crate::constants::prop_type;
use crate::dispatch::{TypeSize, type_info};
use crate::error::{Result, TnefError};
use crate::reader::{ByteReader, bool_from, string8, uint_from, utf16le};
use crate::types::{AttributeKind, MappedType, RawAttribute, Value};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// 100 ns ticks between 1601-01-01 and 1970-01-01
const FILETIME_UNIX_OFFSET: i64 = 116_444_736_000_000_000;
const FILETIME_TICKS_PER_SECOND: i64 = 10_000_000;

/// Byte length of a TNEF date (seven u16 fields)
const TNEF_DATE_LEN: usize = 14;

impl RawAttribute {
    const fn mismatch(&self, requested: &'static str) -> TnefError {
        TnefError::TypeMismatch {
            id: self.id,
            data_type: self.data_type,
            requested,
        }
    }

    /// Split the stored bytes into their framed elements
    fn elements(&self, requested: &'static str) -> Result<Vec<&[u8]>> {
        let info = type_info(self.data_type).ok_or_else(|| self.mismatch(requested))?;
        if !info.is_multivalue {
            return Ok(vec![self.raw.as_slice()]);
        }

        let mut reader = ByteReader::new(&self.raw);
        let count = reader.read_len().map_err(|_| self.mismatch(requested))?;
        let mut items = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            let len = match info.size {
                TypeSize::Fixed(width) => width,
                TypeSize::Variable => reader.read_len().map_err(|_| self.mismatch(requested))?,
            };
            items.push(reader.take(len).map_err(|_| self.mismatch(requested))?);
        }
        if !reader.is_at_end() {
            return Err(self.mismatch(requested));
        }
        Ok(items)
    }

    fn first_element(&self, requested: &'static str) -> Result<&[u8]> {
        self.elements(requested)?
            .into_iter()
            .next()
            .ok_or_else(|| self.mismatch(requested))
    }

    fn expect_type(&self, accepted: &[u16], requested: &'static str) -> Result<()> {
        if self.kind == AttributeKind::MapiProperty && accepted.contains(&self.data_type) {
            Ok(())
        } else {
            Err(self.mismatch(requested))
        }
    }

    /// String value with one trailing NUL removed
    pub fn string_value(&self) -> Result<String> {
        if self.kind == AttributeKind::TopLevel {
            return Ok(trim_nul(string8(&self.raw)));
        }
        match self.data_type {
            prop_type::STRING8 => Ok(trim_nul(string8(self.first_element("string")?))),
            prop_type::UNICODE => Ok(trim_nul(utf16le(self.first_element("string")?))),
            _ => Err(self.mismatch("string")),
        }
    }

    /// Every element of a multi-value string property, in wire order
    pub fn string_values(&self) -> Result<Vec<String>> {
        let decode: fn(&[u8]) -> String = match self.data_type {
            prop_type::MV_STRING8 => string8,
            prop_type::MV_UNICODE => utf16le,
            _ => return Err(self.mismatch("string list")),
        };
        Ok(self
            .elements("string list")?
            .into_iter()
            .map(|item| trim_nul(decode(item)))
            .collect())
    }

    /// Integer value.
    ///
    /// Int16/Int32/Int64/Systime/Currency are read as signed integers of their
    /// width; any other scalar (and every top-level record) is read as an
    /// unsigned little-endian integer of its length.
    pub fn int_value(&self) -> Result<i64> {
        if self.kind == AttributeKind::TopLevel {
            return unsigned_as_i64(&self.raw).ok_or_else(|| self.mismatch("integer"));
        }
        let info = type_info(self.data_type).ok_or_else(|| self.mismatch("integer"))?;
        if info.is_multivalue {
            return Err(self.mismatch("integer"));
        }
        signed_scalar(self.data_type, &self.raw).ok_or_else(|| self.mismatch("integer"))
    }

    pub fn int_values(&self) -> Result<Vec<i64>> {
        self.expect_type(
            &[
                prop_type::MV_INT16,
                prop_type::MV_INT32,
                prop_type::MV_INT64,
                prop_type::MV_SYSTIME,
                prop_type::MV_CURRENCY,
            ],
            "integer list",
        )?;
        let scalar = self.data_type & !prop_type::MV_FLAG;
        self.elements("integer list")?
            .into_iter()
            .map(|item| signed_scalar(scalar, item).ok_or_else(|| self.mismatch("integer list")))
            .collect()
    }

    pub fn float_value(&self) -> Result<f64> {
        self.expect_type(
            &[prop_type::FLT32, prop_type::FLT64, prop_type::APP_TIME],
            "float",
        )?;
        float_scalar(&self.raw).ok_or_else(|| self.mismatch("float"))
    }

    pub fn float_values(&self) -> Result<Vec<f64>> {
        self.expect_type(
            &[
                prop_type::MV_FLT32,
                prop_type::MV_FLT64,
                prop_type::MV_APP_TIME,
            ],
            "float list",
        )?;
        self.elements("float list")?
            .into_iter()
            .map(|item| float_scalar(item).ok_or_else(|| self.mismatch("float list")))
            .collect()
    }

    /// Boolean value: any nonzero byte in the 2-byte value
    pub fn bool_value(&self) -> Result<bool> {
        if self.kind == AttributeKind::TopLevel {
            return Ok(bool_from(&self.raw));
        }
        self.expect_type(&[prop_type::BOOLEAN], "boolean")?;
        let width = self.raw.len().min(2);
        Ok(bool_from(&self.raw[..width]))
    }

    /// Bytes of a Binary or Object property, or of a top-level record
    pub fn binary_value(&self) -> Result<&[u8]> {
        if self.kind == AttributeKind::TopLevel {
            return Ok(&self.raw);
        }
        self.expect_type(&[prop_type::BINARY, prop_type::OBJECT], "binary")?;
        self.first_element("binary")
    }

    pub fn binary_values(&self) -> Result<Vec<&[u8]>> {
        self.expect_type(&[prop_type::MV_BINARY], "binary list")?;
        self.elements("binary list")
    }

    /// Payload of an Object property, starting with the object's interface id
    pub fn object_value(&self) -> Result<&[u8]> {
        self.expect_type(&[prop_type::OBJECT], "object")?;
        let items = self.elements("object")?;
        match items.as_slice() {
            [payload] => Ok(*payload),
            _ => Err(self.mismatch("object")),
        }
    }

    pub fn guid_value(&self) -> Result<Uuid> {
        self.expect_type(&[prop_type::CLSID], "guid")?;
        guid_from(&self.raw).ok_or_else(|| self.mismatch("guid"))
    }

    /// Timestamp of a Systime property (FILETIME) or a top-level date record
    pub fn time_value(&self) -> Result<DateTime<Utc>> {
        if self.kind == AttributeKind::TopLevel {
            return tnef_date(&self.raw).ok_or_else(|| self.mismatch("time"));
        }
        self.expect_type(&[prop_type::SYSTIME], "time")?;
        let ticks = signed_scalar(prop_type::SYSTIME, &self.raw);
        ticks
            .and_then(filetime_to_utc)
            .ok_or_else(|| self.mismatch("time"))
    }

    pub fn time_values(&self) -> Result<Vec<DateTime<Utc>>> {
        self.expect_type(&[prop_type::MV_SYSTIME], "time list")?;
        self.elements("time list")?
            .into_iter()
            .map(|item| {
                signed_scalar(prop_type::SYSTIME, item)
                    .and_then(filetime_to_utc)
                    .ok_or_else(|| self.mismatch("time list"))
            })
            .collect()
    }

    /// Decode into the semantic value matching the attribute's type
    pub fn value(&self) -> Result<Value> {
        if self.kind == AttributeKind::TopLevel {
            return self.mapped_value();
        }
        let value = match self.data_type {
            prop_type::INT16
            | prop_type::INT32
            | prop_type::INT64
            | prop_type::CURRENCY
            | prop_type::ERROR_CODE => Value::Integer(self.int_value()?),
            prop_type::FLT32 | prop_type::FLT64 | prop_type::APP_TIME => {
                Value::Float(self.float_value()?)
            }
            prop_type::BOOLEAN => Value::Boolean(self.bool_value()?),
            prop_type::SYSTIME => Value::Time(self.time_value()?),
            prop_type::CLSID => Value::Guid(self.guid_value()?),
            prop_type::STRING8 | prop_type::UNICODE => Value::Text(self.string_value()?),
            prop_type::BINARY => Value::Binary(self.binary_value()?.to_vec()),
            prop_type::OBJECT => Value::Object(self.object_value()?.to_vec()),
            prop_type::MV_INT16
            | prop_type::MV_INT32
            | prop_type::MV_INT64
            | prop_type::MV_CURRENCY => Value::IntegerList(self.int_values()?),
            prop_type::MV_FLT32 | prop_type::MV_FLT64 | prop_type::MV_APP_TIME => {
                Value::FloatList(self.float_values()?)
            }
            prop_type::MV_SYSTIME => Value::TimeList(self.time_values()?),
            prop_type::MV_CLSID => Value::GuidList(
                self.elements("guid list")?
                    .into_iter()
                    .map(|item| guid_from(item).ok_or_else(|| self.mismatch("guid list")))
                    .collect::<Result<_>>()?,
            ),
            prop_type::MV_STRING8 | prop_type::MV_UNICODE => {
                Value::TextList(self.string_values()?)
            }
            prop_type::MV_BINARY => Value::BinaryList(
                self.binary_values()?
                    .into_iter()
                    .map(<[u8]>::to_vec)
                    .collect(),
            ),
            _ => return Err(self.mismatch("value")),
        };
        Ok(value)
    }

    fn mapped_value(&self) -> Result<Value> {
        let value = match MappedType::from_id(self.id) {
            MappedType::Date => Value::Time(self.time_value()?),
            MappedType::Short | MappedType::Long | MappedType::Dword => {
                Value::Integer(self.int_value()?)
            }
            MappedType::Word if self.raw.len() == 2 => Value::Integer(self.int_value()?),
            MappedType::String | MappedType::Text | MappedType::Word => {
                Value::Text(self.string_value()?)
            }
            MappedType::Byte | MappedType::Triples | MappedType::Other(_) => {
                Value::Binary(self.raw.clone())
            }
        };
        Ok(value)
    }
}

fn trim_nul(mut text: String) -> String {
    if text.ends_with('\0') {
        text.pop();
    }
    text
}

fn unsigned_as_i64(bytes: &[u8]) -> Option<i64> {
    uint_from(bytes).map(u64::cast_signed)
}

/// Read `bytes` as the signed integer matching `data_type`, falling back to
/// an unsigned integer of the available length for other types
fn signed_scalar(data_type: u16, bytes: &[u8]) -> Option<i64> {
    match data_type {
        prop_type::INT16 => <[u8; 2]>::try_from(bytes)
            .ok()
            .map(|b| i64::from(i16::from_le_bytes(b))),
        prop_type::INT32 => <[u8; 4]>::try_from(bytes)
            .ok()
            .map(|b| i64::from(i32::from_le_bytes(b))),
        prop_type::INT64 | prop_type::SYSTIME | prop_type::CURRENCY => {
            <[u8; 8]>::try_from(bytes).ok().map(i64::from_le_bytes)
        }
        _ => unsigned_as_i64(bytes),
    }
}

fn float_scalar(bytes: &[u8]) -> Option<f64> {
    match bytes.len() {
        4 => <[u8; 4]>::try_from(bytes)
            .ok()
            .map(|b| f64::from(f32::from_le_bytes(b))),
        8 => <[u8; 8]>::try_from(bytes).ok().map(f64::from_le_bytes),
        _ => None,
    }
}

fn guid_from(bytes: &[u8]) -> Option<Uuid> {
    <[u8; 16]>::try_from(bytes).ok().map(Uuid::from_bytes_le)
}

/// Convert FILETIME ticks to UTC
#[must_use]
pub fn filetime_to_utc(ticks: i64) -> Option<DateTime<Utc>> {
    let since_unix = ticks.checked_sub(FILETIME_UNIX_OFFSET)?;
    let secs = since_unix.div_euclid(FILETIME_TICKS_PER_SECOND);
    let nanos = u32::try_from(since_unix.rem_euclid(FILETIME_TICKS_PER_SECOND) * 100).ok()?;
    DateTime::from_timestamp(secs, nanos)
}

/// Decode a TNEF date: year, month, day, hour, minute, second, weekday.
/// The weekday is redundant and ignored; the value is taken as UTC.
fn tnef_date(bytes: &[u8]) -> Option<DateTime<Utc>> {
    if bytes.len() < TNEF_DATE_LEN {
        return None;
    }
    let mut reader = ByteReader::new(bytes);
    let mut fields = [0u16; 6];
    for field in &mut fields {
        *field = reader.read_u16().ok()?;
    }
    let [year, month, day, hour, minute, second] = fields;
    NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))?
        .and_hms_opt(u32::from(hour), u32::from(minute), u32::from(second))
        .map(|naive| naive.and_utc())
}
