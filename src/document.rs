//! Decoded TNEF documents and their attachments

use crate::constants::{
    CONTACT_MESSAGE_CLASS, LEGACY_MESSAGE_CLASS_PREFIX, attribute, prop_type, property,
};
use crate::error::{Result, TnefError};
use crate::reader::{ByteReader, string8};
use crate::types::{
    AttachMethod, AttachType, BodyFormat, DataFlags, NamedPropMapValue, Namespace, RawAttribute,
    Value,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn find(attributes: &[RawAttribute], id: u32, namespace: Namespace) -> Option<&RawAttribute> {
    attributes.iter().find(|attr| attr.matches(id, namespace))
}

fn find_named<'a>(
    attributes: &'a [RawAttribute],
    guid: &[u8; 16],
    value: &NamedPropMapValue,
) -> Option<&'a RawAttribute> {
    attributes
        .iter()
        .find(|attr| attr.named().is_some_and(|spec| spec.guid == *guid && spec.value == *value))
}

fn non_empty_string(attr: &RawAttribute) -> Option<String> {
    attr.string_value().ok().filter(|s| !s.is_empty())
}

/// A decoded TNEF stream: message-level attributes plus attachments.
///
/// Attribute order is record order. Lookups return the first match; later
/// duplicates stay reachable through [`Document::attributes_with_id`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    pub(crate) attributes: Vec<RawAttribute>,
    pub(crate) attachments: Vec<Attachment>,
}

impl Document {
    /// Message-level attributes: top-level records and decoded MAPI properties
    #[must_use]
    pub fn attributes(&self) -> &[RawAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn attachments(&self) -> &[Attachment] {
        &self.attachments
    }

    /// Attachments, mutable so a naming step can assign filenames in place
    pub fn attachments_mut(&mut self) -> &mut [Attachment] {
        &mut self.attachments
    }

    /// First attribute with `id` in `namespace`
    #[must_use]
    pub fn attribute(&self, id: u32, namespace: Namespace) -> Option<&RawAttribute> {
        find(&self.attributes, id, namespace)
    }

    /// Every attribute with `id` in `namespace`, in record order
    pub fn attributes_with_id(
        &self,
        id: u32,
        namespace: Namespace,
    ) -> impl Iterator<Item = &RawAttribute> {
        self.attributes
            .iter()
            .filter(move |attr| attr.matches(id, namespace))
    }

    /// Decoded value of the first attribute with `id` in `namespace`
    #[must_use]
    pub fn get(&self, id: u32, namespace: Namespace) -> Option<Value> {
        self.attribute(id, namespace)?.value().ok()
    }

    /// Named property identified by its property set and map value
    #[must_use]
    pub fn named_attribute(
        &self,
        guid: &[u8; 16],
        value: &NamedPropMapValue,
    ) -> Option<&RawAttribute> {
        find_named(&self.attributes, guid, value)
    }

    /// Message class with the legacy "Microsoft Mail v3.0 " prefix removed
    #[must_use]
    pub fn message_class(&self) -> Option<String> {
        let class = self
            .attribute(attribute::MESSAGE_CLASS, Namespace::Mapped)
            .and_then(non_empty_string)
            .or_else(|| {
                self.attribute(attribute::ORIGINAL_MESSAGE_CLASS, Namespace::Mapped)
                    .and_then(non_empty_string)
            })?;
        Some(
            class
                .strip_prefix(LEGACY_MESSAGE_CLASS_PREFIX)
                .unwrap_or(&class)
                .to_owned(),
        )
    }

    /// Whether this document carries a contact item
    #[must_use]
    pub fn is_contact(&self) -> bool {
        self.message_class().as_deref() == Some(CONTACT_MESSAGE_CLASS)
    }

    #[must_use]
    pub fn subject(&self) -> Option<String> {
        self.attribute(attribute::SUBJECT, Namespace::Mapped)
            .and_then(non_empty_string)
            .or_else(|| {
                self.attribute(property::SUBJECT, Namespace::Mapi)
                    .and_then(non_empty_string)
            })
    }

    #[must_use]
    pub fn body_format(&self) -> BodyFormat {
        self.attribute(property::NATIVE_BODY, Namespace::Mapi)
            .and_then(|attr| attr.int_value().ok())
            .map_or(BodyFormat::Undefined, BodyFormat::from_value)
    }

    /// Plain-text body (`PidTagBody`)
    #[must_use]
    pub fn text_body(&self) -> Option<String> {
        self.attribute(property::BODY, Namespace::Mapi)
            .and_then(body_text)
    }

    /// HTML body (`PidTagBodyHtml`), which is often carried as binary
    #[must_use]
    pub fn html_body(&self) -> Option<String> {
        self.attribute(property::BODY_HTML, Namespace::Mapi)
            .and_then(body_text)
    }

    /// Compressed RTF body, still compressed
    #[must_use]
    pub fn compressed_rtf(&self) -> Option<&[u8]> {
        self.attribute(property::RTF_COMPRESSED, Namespace::Mapi)
            .and_then(|attr| attr.binary_value().ok())
            .filter(|bytes| !bytes.is_empty())
    }

    #[must_use]
    pub fn rtf_in_sync(&self) -> Option<bool> {
        self.attribute(property::RTF_IN_SYNC, Namespace::Mapi)
            .and_then(|attr| attr.bool_value().ok())
    }

    #[must_use]
    pub fn internet_codepage(&self) -> Option<i64> {
        self.attribute(property::INTERNET_CODEPAGE, Namespace::Mapi)
            .and_then(|attr| attr.int_value().ok())
    }

    /// Primary OEM code page from the `attOemCodepage` record
    #[must_use]
    pub fn oem_codepage(&self) -> Option<u32> {
        let attr = self.attribute(attribute::OEM_CODEPAGE, Namespace::Mapped)?;
        ByteReader::new(attr.raw()).read_u32().ok()
    }

    #[must_use]
    pub fn tnef_version(&self) -> Option<u32> {
        let attr = self.attribute(attribute::TNEF_VERSION, Namespace::Mapped)?;
        ByteReader::new(attr.raw()).read_u32().ok()
    }

    #[must_use]
    pub fn date_sent(&self) -> Option<DateTime<Utc>> {
        self.attribute(attribute::DATE_SENT, Namespace::Mapped)
            .and_then(|attr| attr.time_value().ok())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn body_text(attr: &RawAttribute) -> Option<String> {
    match attr.data_type() {
        prop_type::BINARY => attr.binary_value().ok().map(|bytes| {
            let text = string8(bytes);
            text.strip_suffix('\0').unwrap_or(&text).to_owned()
        }),
        _ => attr.string_value().ok(),
    }
}

/// Decoded `attAttachRendData` record
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderingSummary {
    pub attach_type: AttachType,
    /// Character position of the attachment in the body; -1 when hidden
    pub position: i32,
    pub width: i16,
    pub height: i16,
    pub data_flags: DataFlags,
}

impl RenderingSummary {
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let mut reader = ByteReader::new(bytes);
        Ok(Self {
            attach_type: AttachType::from_value(reader.read_u16()?),
            position: reader.read_i32()?,
            width: reader.read_i16()?,
            height: reader.read_i16()?,
            data_flags: DataFlags::from_value(reader.read_u32()?),
        })
    }
}

/// One attachment: its attribute records, payload and, when the payload is
/// itself a TNEF stream, the nested document
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attachment {
    pub(crate) attributes: Vec<RawAttribute>,
    pub(crate) payload: Vec<u8>,
    pub(crate) filename: Option<String>,
    pub(crate) embedded: Option<Box<Document>>,
    #[serde(skip)]
    pub(crate) embedded_error: Option<TnefError>,
}

impl Attachment {
    /// Attributes scoped to this attachment; the rendering summary comes first
    #[must_use]
    pub fn attributes(&self) -> &[RawAttribute] {
        &self.attributes
    }

    #[must_use]
    pub fn attribute(&self, id: u32, namespace: Namespace) -> Option<&RawAttribute> {
        find(&self.attributes, id, namespace)
    }

    pub fn attributes_with_id(
        &self,
        id: u32,
        namespace: Namespace,
    ) -> impl Iterator<Item = &RawAttribute> {
        self.attributes
            .iter()
            .filter(move |attr| attr.matches(id, namespace))
    }

    #[must_use]
    pub fn get(&self, id: u32, namespace: Namespace) -> Option<Value> {
        self.attribute(id, namespace)?.value().ok()
    }

    #[must_use]
    pub fn named_attribute(
        &self,
        guid: &[u8; 16],
        value: &NamedPropMapValue,
    ) -> Option<&RawAttribute> {
        find_named(&self.attributes, guid, value)
    }

    /// Attachment content bytes
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Filename assigned by a naming step outside the decoder
    #[must_use]
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, filename: impl Into<String>) {
        self.filename = Some(filename.into());
    }

    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.set_filename(filename);
        self
    }

    /// Document decoded from an embedded TNEF stream
    #[must_use]
    pub fn embedded(&self) -> Option<&Document> {
        self.embedded.as_deref()
    }

    /// Why an embedded stream was detected but left undecoded
    #[must_use]
    pub const fn embedded_error(&self) -> Option<&TnefError> {
        self.embedded_error.as_ref()
    }

    /// Decode the rendering summary record that opened this attachment
    pub fn rendering(&self) -> Result<RenderingSummary> {
        let attr = self
            .attribute(attribute::ATTACH_REND_DATA, Namespace::Mapped)
            .ok_or(TnefError::TypeMismatch {
                id: attribute::ATTACH_REND_DATA,
                data_type: 0,
                requested: "rendering summary",
            })?;
        RenderingSummary::parse(attr.raw())
    }

    #[must_use]
    pub fn attach_method(&self) -> Option<AttachMethod> {
        self.attribute(property::ATTACH_METHOD, Namespace::Mapi)
            .and_then(|attr| attr.int_value().ok())
            .map(AttachMethod::from_value)
    }

    /// Content id referenced as `cid:` from an HTML body
    #[must_use]
    pub fn content_id(&self) -> Option<String> {
        self.attribute(property::ATTACH_CONTENT_ID, Namespace::Mapi)
            .and_then(non_empty_string)
    }

    #[must_use]
    pub fn has_content_id(&self) -> bool {
        self.content_id().is_some()
    }

    #[must_use]
    pub fn mime_tag(&self) -> Option<String> {
        self.attribute(property::ATTACH_MIME_TAG, Namespace::Mapi)
            .and_then(non_empty_string)
    }

    #[must_use]
    pub fn is_contact_photo(&self) -> bool {
        self.attribute(property::ATTACHMENT_CONTACT_PHOTO, Namespace::Mapi)
            .and_then(|attr| attr.bool_value().ok())
            .unwrap_or(false)
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.attribute(property::ATTACHMENT_HIDDEN, Namespace::Mapi)
            .and_then(|attr| attr.bool_value().ok())
            .unwrap_or(false)
    }
}
