//! Attachments that carry another TNEF stream
//!
//! An embedded message or OLE attachment stores its content as an Object
//! property whose payload starts with the `IMessage` interface id. The bytes
//! after that prefix are a complete TNEF stream of their own.

use crate::constants::{EMBEDDED_MESSAGE_PREFIX, prop_type, property};
use crate::document::{Attachment, Document};
use crate::error::{Result, TnefError};
use crate::parser::Decoder;
use crate::types::{AttachMethod, Namespace, RawAttribute};
use tracing::{debug, warn};

/// Locate the embedded TNEF stream in an attachment's attributes, with the
/// object-class prefix already stripped
#[must_use]
pub fn embedded_stream(attributes: &[RawAttribute]) -> Option<&[u8]> {
    let method = attributes
        .iter()
        .find(|attr| attr.matches(property::ATTACH_METHOD, Namespace::Mapi))?
        .int_value()
        .ok()
        .map(AttachMethod::from_value)?;
    if !method.may_embed_stream() {
        return None;
    }

    let data = attributes
        .iter()
        .find(|attr| attr.matches(property::ATTACH_DATA_BINARY, Namespace::Mapi))?;
    if data.data_type() != prop_type::OBJECT {
        return None;
    }

    data.object_value()
        .ok()?
        .strip_prefix(&EMBEDDED_MESSAGE_PREFIX)
}

/// Decode `stream` one level below `depth` if the configured guards allow it
fn decode_nested(decoder: &Decoder, stream: &[u8], depth: usize) -> Result<Document> {
    let options = decoder.options();
    let nested_depth = depth + 1;
    if nested_depth > options.max_depth || stream.len() > options.max_nested_size {
        return Err(TnefError::RecursionLimitExceeded {
            depth: nested_depth,
            max_depth: options.max_depth,
            size: stream.len(),
            max_size: options.max_nested_size,
        });
    }
    decoder.decode_at_depth(stream, nested_depth)
}

/// Run the embedded-stream check on a freshly decoded attachment.
///
/// Failures never propagate: the attachment keeps its undecoded bytes and
/// records the error instead.
pub(crate) fn resolve_embedded(attachment: &mut Attachment, decoder: &Decoder, depth: usize) {
    let Some(stream) = embedded_stream(&attachment.attributes) else {
        return;
    };

    match decode_nested(decoder, stream, depth) {
        Ok(document) => {
            debug!(
                depth = depth + 1,
                size = stream.len(),
                attachments = document.attachments().len(),
                "Decoded embedded TNEF stream"
            );
            if attachment.payload.is_empty() {
                attachment.payload = stream.to_vec();
            }
            attachment.embedded = Some(Box::new(document));
            attachment.embedded_error = None;
        }
        Err(e) => {
            warn!(
                depth = depth + 1,
                size = stream.len(),
                error = %e,
                "Leaving embedded TNEF stream undecoded"
            );
            attachment.embedded_error = Some(e);
        }
    }
}
