//! Core types for decoded TNEF attributes

use crate::constants::{LEVEL_ATTACHMENT, LEVEL_MESSAGE};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Scope of a top-level attribute record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Level {
    Message,
    Attachment,
}

impl Level {
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            LEVEL_MESSAGE => Some(Self::Message),
            LEVEL_ATTACHMENT => Some(Self::Attachment),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Message => LEVEL_MESSAGE,
            Self::Attachment => LEVEL_ATTACHMENT,
        }
    }
}

/// Where an attribute came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// A record of the top-level attribute stream
    TopLevel,
    /// A property decoded from an embedded MAPI property list
    MapiProperty,
}

/// Lookup namespace of the attribute-lookup API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Decoded MAPI properties
    Mapi,
    /// Top-level TNEF attributes mapped from MAPI
    Mapped,
}

impl Namespace {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mapi => "mapi",
            Self::Mapped => "mapped",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mapi" => Ok(Self::Mapi),
            "mapped" => Ok(Self::Mapped),
            other => Err(format!("unknown attribute namespace: {other}")),
        }
    }
}

impl From<AttributeKind> for Namespace {
    fn from(kind: AttributeKind) -> Self {
        match kind {
            AttributeKind::TopLevel => Self::Mapped,
            AttributeKind::MapiProperty => Self::Mapi,
        }
    }
}

/// Data type of a top-level attribute, carried in the high word of its id
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MappedType {
    Triples,
    String,
    Text,
    Date,
    Short,
    Long,
    Byte,
    Word,
    Dword,
    Other(u16),
}

impl MappedType {
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_id(id: u32) -> Self {
        match (id >> 16) as u16 {
            0x0000 => Self::Triples,
            0x0001 => Self::String,
            0x0002 => Self::Text,
            0x0003 => Self::Date,
            0x0004 => Self::Short,
            0x0005 => Self::Long,
            0x0006 => Self::Byte,
            0x0007 => Self::Word,
            0x0008 => Self::Dword,
            other => Self::Other(other),
        }
    }
}

/// Identifier of a named property inside its property set
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum NamedPropMapValue {
    Int(u32),
    Text(String),
}

impl fmt::Display for NamedPropMapValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id:#06X}"),
            Self::Text(name) => f.write_str(name),
        }
    }
}

/// GUID-qualified identity of a property with id >= 0x8000
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NamedPropertySpec {
    /// Property set GUID exactly as it appeared on the wire
    pub guid: [u8; 16],

    /// Numeric id or string name within the property set
    pub value: NamedPropMapValue,
}

impl NamedPropertySpec {
    /// Property set GUID, reading the wire bytes in mixed-endian order
    #[must_use]
    pub const fn property_set(&self) -> Uuid {
        Uuid::from_bytes_le(self.guid)
    }
}

/// A single attribute: either a top-level record or a decoded MAPI property.
///
/// For MAPI properties `raw` keeps the element count and per-element length
/// fields (padding removed), so every typed projection can be re-derived
/// from it. See the `value` module for the projections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawAttribute {
    pub(crate) kind: AttributeKind,
    pub(crate) level: Option<Level>,
    pub(crate) id: u32,
    pub(crate) data_type: u16,
    pub(crate) raw: Vec<u8>,
    pub(crate) named: Option<NamedPropertySpec>,
}

impl RawAttribute {
    pub(crate) fn top_level(level: Level, id: u32, raw: &[u8]) -> Self {
        Self {
            kind: AttributeKind::TopLevel,
            level: Some(level),
            id,
            data_type: 0,
            raw: raw.to_vec(),
            named: None,
        }
    }

    pub(crate) const fn mapi(
        id: u16,
        data_type: u16,
        raw: Vec<u8>,
        named: Option<NamedPropertySpec>,
    ) -> Self {
        Self {
            kind: AttributeKind::MapiProperty,
            level: None,
            id: id as u32,
            data_type,
            raw,
            named,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> AttributeKind {
        self.kind
    }

    #[must_use]
    pub fn namespace(&self) -> Namespace {
        self.kind.into()
    }

    /// Record level; `None` for MAPI properties
    #[must_use]
    pub const fn level(&self) -> Option<Level> {
        self.level
    }

    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// MAPI property type code; 0 for top-level records
    #[must_use]
    pub const fn data_type(&self) -> u16 {
        self.data_type
    }

    /// Stored bytes, including internal count/length framing for MAPI values
    #[must_use]
    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    #[must_use]
    pub const fn named(&self) -> Option<&NamedPropertySpec> {
        self.named.as_ref()
    }

    #[must_use]
    pub const fn is_named(&self) -> bool {
        self.named.is_some()
    }

    #[must_use]
    pub const fn is_mapi(&self) -> bool {
        matches!(self.kind, AttributeKind::MapiProperty)
    }

    /// Type carried in the id of a top-level record
    #[must_use]
    pub const fn mapped_type(&self) -> Option<MappedType> {
        match self.kind {
            AttributeKind::TopLevel => Some(MappedType::from_id(self.id)),
            AttributeKind::MapiProperty => None,
        }
    }

    /// Full MAPI property tag (`id << 16 | type`)
    #[must_use]
    pub const fn prop_tag(&self) -> Option<u32> {
        match self.kind {
            AttributeKind::MapiProperty => Some((self.id << 16) | self.data_type as u32),
            AttributeKind::TopLevel => None,
        }
    }

    pub(crate) const fn matches(&self, id: u32, namespace: Namespace) -> bool {
        self.id == id
            && matches!(
                (self.kind, namespace),
                (AttributeKind::TopLevel, Namespace::Mapped)
                    | (AttributeKind::MapiProperty, Namespace::Mapi)
            )
    }
}

/// Semantic value of an attribute
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Time(DateTime<Utc>),
    Guid(Uuid),
    Binary(Vec<u8>),
    /// Payload of an embedded COM object, interface id included
    Object(Vec<u8>),
    TextList(Vec<String>),
    IntegerList(Vec<i64>),
    FloatList(Vec<f64>),
    TimeList(Vec<DateTime<Utc>>),
    GuidList(Vec<Uuid>),
    BinaryList(Vec<Vec<u8>>),
}

impl Value {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) | Self::Object(bytes) => Some(bytes),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(
            self,
            Self::TextList(_)
                | Self::IntegerList(_)
                | Self::FloatList(_)
                | Self::TimeList(_)
                | Self::GuidList(_)
                | Self::BinaryList(_)
        )
    }
}

/// Best available body format (`PidTagNativeBody`)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BodyFormat {
    #[default]
    Undefined,
    PlainText,
    Rtf,
    Html,
    ClearSigned,
    Other(i64),
}

impl BodyFormat {
    #[must_use]
    pub const fn from_value(value: i64) -> Self {
        match value {
            0 => Self::Undefined,
            1 => Self::PlainText,
            2 => Self::Rtf,
            3 => Self::Html,
            4 => Self::ClearSigned,
            other => Self::Other(other),
        }
    }
}

/// How an attachment's content is stored (`PidTagAttachMethod`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttachMethod {
    None,
    ByValue,
    ByReference,
    ByReferenceOnly,
    EmbeddedMessage,
    Ole,
    Other(i64),
}

impl AttachMethod {
    #[must_use]
    pub const fn from_value(value: i64) -> Self {
        match value {
            0 => Self::None,
            1 => Self::ByValue,
            2 => Self::ByReference,
            4 => Self::ByReferenceOnly,
            5 => Self::EmbeddedMessage,
            6 => Self::Ole,
            other => Self::Other(other),
        }
    }

    /// Methods whose binary data may hold an embedded TNEF stream
    #[must_use]
    pub const fn may_embed_stream(self) -> bool {
        matches!(self, Self::EmbeddedMessage | Self::Ole)
    }
}

/// Attachment kind from the rendering summary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AttachType {
    File,
    Ole,
    Other(u16),
}

impl AttachType {
    #[must_use]
    pub const fn from_value(value: u16) -> Self {
        match value {
            1 => Self::File,
            2 => Self::Ole,
            other => Self::Other(other),
        }
    }
}

/// Encoding flags from the rendering summary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DataFlags {
    Default,
    MacBinary,
    Other(u32),
}

impl DataFlags {
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        match value {
            0 => Self::Default,
            1 => Self::MacBinary,
            other => Self::Other(other),
        }
    }
}
