//! TNEF attribute stream parser
//!
//! Walks the top-level records after the signature and groups them into a
//! message and its attachments. Attachment-level records always belong to
//! the attachment opened by the most recent rendering summary record.

use crate::config::DecodeOptions;
use crate::constants::{TNEF_SIGNATURE, attribute};
use crate::document::{Attachment, Document};
use crate::error::{Result, TnefError};
use crate::nested;
use crate::properties::decode_property_list_at;
use crate::reader::ByteReader;
use crate::types::{Level, RawAttribute};
use tracing::{debug, trace, warn};

/// Decode a TNEF buffer with default options
pub fn decode(data: &[u8]) -> Result<Document> {
    Decoder::default().decode(data)
}

/// Decode a TNEF buffer with the given options
pub fn decode_with(data: &[u8], options: &DecodeOptions) -> Result<Document> {
    Decoder::new(*options).decode(data)
}

/// Reusable decoder holding its options
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    #[must_use]
    pub const fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    pub fn decode(&self, data: &[u8]) -> Result<Document> {
        self.decode_at_depth(data, 0)
    }

    /// Decode a (possibly nested) stream; `depth` is 0 for the outermost one
    pub(crate) fn decode_at_depth(&self, data: &[u8], depth: usize) -> Result<Document> {
        let mut reader = ByteReader::new(data);
        read_header(&mut reader)?;

        let mut stream = StreamState::new(self, depth);
        while !reader.is_at_end() {
            let record = Record::read(&mut reader)?;
            stream.apply(&record)?;
        }

        stream.finish(reader.offset())
    }
}

fn read_header(reader: &mut ByteReader<'_>) -> Result<()> {
    let signature = reader.read_u32()?;
    if signature != TNEF_SIGNATURE {
        return Err(TnefError::NotTnef { found: signature });
    }
    // legacy key, unused
    reader.skip(2)
}

/// One top-level record: `level id length data checksum`
struct Record<'a> {
    offset: usize,
    level: u8,
    id: u32,
    data: &'a [u8],
    data_offset: usize,
}

impl<'a> Record<'a> {
    fn read(reader: &mut ByteReader<'a>) -> Result<Self> {
        let offset = reader.offset();
        let level = reader.read_u8()?;
        let id = reader.read_u32()?;
        let len = reader.read_len()?;
        let data_offset = reader.offset();
        let data = reader.take(len)?;
        // checksum, not verified
        reader.skip(2)?;

        trace!(
            offset,
            level,
            id = format_args!("{id:#010X}"),
            len,
            "Read attribute record"
        );

        Ok(Self {
            offset,
            level,
            id,
            data,
            data_offset,
        })
    }
}

/// Streaming state: the document under construction and the attachment that
/// attachment-level records currently belong to
struct StreamState<'d> {
    decoder: &'d Decoder,
    depth: usize,
    document: Document,
    current_attachment: Option<usize>,
    records: usize,
}

impl<'d> StreamState<'d> {
    fn new(decoder: &'d Decoder, depth: usize) -> Self {
        Self {
            decoder,
            depth,
            document: Document::default(),
            current_attachment: None,
            records: 0,
        }
    }

    fn apply(&mut self, record: &Record<'_>) -> Result<()> {
        self.records += 1;
        match Level::from_byte(record.level) {
            Some(Level::Message) => self.apply_message(record),
            Some(Level::Attachment) => self.apply_attachment(record),
            None => {
                warn!(
                    offset = record.offset,
                    level = record.level,
                    "Skipping record with unknown level"
                );
                Ok(())
            }
        }
    }

    fn apply_message(&mut self, record: &Record<'_>) -> Result<()> {
        self.current_attachment = None;
        self.document
            .attributes
            .push(RawAttribute::top_level(Level::Message, record.id, record.data));

        if record.id == attribute::MSG_PROPS {
            let properties = decode_property_list_at(record.data, record.data_offset)?;
            debug!(
                offset = record.offset,
                count = properties.len(),
                "Decoded message properties"
            );
            self.document.attributes.extend(properties);
        }
        Ok(())
    }

    fn apply_attachment(&mut self, record: &Record<'_>) -> Result<()> {
        if record.id == attribute::ATTACH_REND_DATA {
            let attachment = Attachment {
                attributes: vec![RawAttribute::top_level(
                    Level::Attachment,
                    record.id,
                    record.data,
                )],
                ..Attachment::default()
            };
            self.document.attachments.push(attachment);
            self.current_attachment = Some(self.document.attachments.len() - 1);
            debug!(
                offset = record.offset,
                index = self.document.attachments.len() - 1,
                "Opened attachment"
            );
            return Ok(());
        }

        let attachment = self
            .current_attachment
            .and_then(|index| self.document.attachments.get_mut(index))
            .ok_or(TnefError::AttachmentRecordWithoutOpenAttachment {
                id: record.id,
                offset: record.offset,
            })?;

        match record.id {
            attribute::ATTACH_DATA => {
                attachment.payload = record.data.to_vec();
            }
            attribute::ATTACHMENT => {
                let properties = decode_property_list_at(record.data, record.data_offset)?;
                debug!(
                    offset = record.offset,
                    count = properties.len(),
                    "Decoded attachment properties"
                );
                attachment.attributes.extend(properties);
                nested::resolve_embedded(attachment, self.decoder, self.depth);
            }
            _ => {
                attachment.attributes.push(RawAttribute::top_level(
                    Level::Attachment,
                    record.id,
                    record.data,
                ));
            }
        }
        Ok(())
    }

    fn finish(self, end: usize) -> Result<Document> {
        if self.records == 0 {
            return Err(TnefError::TruncatedInput {
                offset: end,
                needed: 1,
                available: 0,
            });
        }
        debug!(
            depth = self.depth,
            records = self.records,
            attributes = self.document.attributes.len(),
            attachments = self.document.attachments.len(),
            "Decoded TNEF stream"
        );
        Ok(self.document)
    }
}
