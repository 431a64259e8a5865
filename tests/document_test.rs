mod common;

use common::*;
use tnef_extract::constants::{attribute, prop_type, property};
use tnef_extract::*;

// --- Message helpers ---

#[test]
fn test_message_class_strips_legacy_prefix() {
    let data = stream(&[message_class("Microsoft Mail v3.0 IPM.Note")]);
    let document = decode(&data).unwrap();
    assert_eq!(document.message_class().as_deref(), Some("IPM.Note"));
    assert!(!document.is_contact());
}

#[test]
fn test_message_class_falls_back_to_original_class() {
    let data = stream(&[record(
        MESSAGE,
        attribute::ORIGINAL_MESSAGE_CLASS,
        b"IPM.Contact\0",
    )]);
    let document = decode(&data).unwrap();
    assert!(document.is_contact());
}

#[test]
fn test_subject_prefers_mapped_attribute() {
    let data = stream(&[
        record(MESSAGE, attribute::SUBJECT, b"Mapped\0"),
        msg_props(&[common::string8(property::SUBJECT, "Mapi")]),
    ]);
    assert_eq!(decode(&data).unwrap().subject().as_deref(), Some("Mapped"));

    let data = stream(&[msg_props(&[common::unicode(property::SUBJECT, "Mapi")])]);
    assert_eq!(decode(&data).unwrap().subject().as_deref(), Some("Mapi"));
}

#[test]
fn test_bodies() {
    let data = stream(&[msg_props(&[
        common::unicode(property::BODY, "plain text"),
        binary(property::BODY_HTML, b"<p>hi</p>\0"),
        int32(property::NATIVE_BODY, 3),
        int32(property::INTERNET_CODEPAGE, 65001),
        boolean(property::RTF_IN_SYNC, true),
    ])]);
    let document = decode(&data).unwrap();

    assert_eq!(document.text_body().as_deref(), Some("plain text"));
    assert_eq!(document.html_body().as_deref(), Some("<p>hi</p>"));
    assert_eq!(document.body_format(), BodyFormat::Html);
    assert_eq!(document.internet_codepage(), Some(65001));
    assert_eq!(document.rtf_in_sync(), Some(true));
    assert!(document.compressed_rtf().is_none());
}

#[test]
fn test_body_format_defaults_to_undefined() {
    let document = decode(&stream(&[message_class("IPM.Note")])).unwrap();
    assert_eq!(document.body_format(), BodyFormat::Undefined);
    assert!(document.text_body().is_none());
}

#[test]
fn test_version_and_codepage_records() {
    let mut codepages = 1252u32.to_le_bytes().to_vec();
    codepages.extend_from_slice(&0u32.to_le_bytes());
    let data = stream(&[
        record(MESSAGE, attribute::TNEF_VERSION, &0x0001_0000u32.to_le_bytes()),
        record(MESSAGE, attribute::OEM_CODEPAGE, &codepages),
    ]);
    let document = decode(&data).unwrap();
    assert_eq!(document.tnef_version(), Some(0x0001_0000));
    assert_eq!(document.oem_codepage(), Some(1252));
}

// --- Lookup ---

#[test]
fn test_lookup_by_namespace() {
    let data = stream(&[
        record(MESSAGE, 0x0000_0037, b"top\0"),
        msg_props(&[common::string8(0x0037, "mapi")]),
    ]);
    let document = decode(&data).unwrap();
    assert_eq!(
        document.get(0x0037, Namespace::Mapped),
        Some(Value::Binary(b"top\0".to_vec()))
    );
    assert_eq!(
        document.get(0x0037, Namespace::Mapi),
        Some(Value::Text("mapi".to_string()))
    );
    assert!(document.get(0x0038, Namespace::Mapi).is_none());
}

#[test]
fn test_duplicates_are_reachable() {
    let data = stream(&[
        msg_props(&[int32(property::ATTACH_NUMBER, 1)]),
        msg_props(&[int32(property::ATTACH_NUMBER, 2)]),
    ]);
    let document = decode(&data).unwrap();
    let values: Vec<i64> = document
        .attributes_with_id(property::ATTACH_NUMBER, Namespace::Mapi)
        .map(|attr| attr.int_value().unwrap())
        .collect();
    assert_eq!(values, vec![1, 2]);
    assert_eq!(
        document
            .attribute(property::ATTACH_NUMBER, Namespace::Mapi)
            .unwrap()
            .int_value()
            .unwrap(),
        1
    );
    assert_eq!(
        document
            .attributes_with_id(attribute::MSG_PROPS, Namespace::Mapped)
            .count(),
        2
    );
}

#[test]
fn test_named_attribute_lookup() {
    let guid = [7u8; 16];
    let data = stream(&[msg_props(&[
        named_id(int32(0x8001, 10), guid, 0x8520),
        named_str(common::string8(0x8002, "x"), guid, "Custom"),
    ])]);
    let document = decode(&data).unwrap();

    let by_id = document
        .named_attribute(&guid, &NamedPropMapValue::Int(0x8520))
        .unwrap();
    assert_eq!(by_id.int_value().unwrap(), 10);

    let by_name = document
        .named_attribute(&guid, &NamedPropMapValue::Text("Custom".to_string()))
        .unwrap();
    assert_eq!(by_name.string_value().unwrap(), "x");
    assert!(
        document
            .named_attribute(&[0u8; 16], &NamedPropMapValue::Int(0x8520))
            .is_none()
    );
}

// --- Namespace ---

#[test]
fn test_namespace_parse_and_display() {
    assert_eq!("mapi".parse::<Namespace>().unwrap(), Namespace::Mapi);
    assert_eq!("mapped".parse::<Namespace>().unwrap(), Namespace::Mapped);
    assert!("tnef".parse::<Namespace>().is_err());
    assert_eq!(Namespace::Mapped.to_string(), "mapped");
    assert_eq!(Namespace::from(AttributeKind::MapiProperty), Namespace::Mapi);
}

// --- Attachment helpers ---

#[test]
fn test_attachment_helpers() {
    let data = stream(&[
        rend_data(),
        attach_props(&[
            int32(property::ATTACH_METHOD, 1),
            common::string8(property::ATTACH_MIME_TAG, "image/png"),
            common::string8(property::ATTACH_CONTENT_ID, "logo@example"),
            boolean(property::ATTACHMENT_HIDDEN, true),
        ]),
        record(ATTACHMENT, attribute::ATTACH_DATA, b"\x89PNG"),
    ]);
    let document = decode(&data).unwrap();
    let attachment = &document.attachments()[0];

    assert_eq!(attachment.attach_method(), Some(AttachMethod::ByValue));
    assert_eq!(attachment.mime_tag().as_deref(), Some("image/png"));
    assert_eq!(attachment.content_id().as_deref(), Some("logo@example"));
    assert!(attachment.has_content_id());
    assert!(attachment.is_hidden());
    assert!(!attachment.is_contact_photo());
    assert!(attachment.filename().is_none());

    let named = attachment.clone().with_filename("logo.png");
    assert_eq!(named.filename(), Some("logo.png"));
}

#[test]
fn test_filenames_assigned_in_place() {
    let data = stream(&[
        rend_data(),
        record(ATTACHMENT, attribute::ATTACH_DATA, b"one"),
        rend_data(),
        record(ATTACHMENT, attribute::ATTACH_DATA, b"two"),
    ]);
    let mut document = decode(&data).unwrap();
    for (index, attachment) in document.attachments_mut().iter_mut().enumerate() {
        attachment.set_filename(format!("part{index}.bin"));
    }

    let names: Vec<_> = document
        .attachments()
        .iter()
        .map(|attachment| attachment.filename().unwrap())
        .collect();
    assert_eq!(names, vec!["part0.bin", "part1.bin"]);
    assert_eq!(document.attachments()[1].payload(), b"two");
}

#[test]
fn test_rendering_summary() {
    let document = decode(&stream(&[rend_data()])).unwrap();
    let rendering = document.attachments()[0].rendering().unwrap();
    assert_eq!(
        rendering,
        RenderingSummary {
            attach_type: AttachType::File,
            position: -1,
            width: 32,
            height: 32,
            data_flags: DataFlags::Default,
        }
    );
}

#[test]
fn test_short_rendering_summary_is_truncated() {
    let data = stream(&[record(ATTACHMENT, attribute::ATTACH_REND_DATA, &[1, 0])]);
    let document = decode(&data).unwrap();
    assert!(matches!(
        document.attachments()[0].rendering(),
        Err(TnefError::TruncatedInput { .. })
    ));
}

// --- RTF ---

struct Reverse;

impl RtfDecompressor for Reverse {
    type Error = String;

    fn decompress(&self, compressed: &[u8]) -> std::result::Result<Vec<u8>, String> {
        if compressed.is_empty() {
            return Err("empty".to_string());
        }
        Ok(compressed.iter().rev().copied().collect())
    }
}

#[test]
fn test_decompress_rtf_uses_collaborator() {
    let data = stream(&[msg_props(&[binary(property::RTF_COMPRESSED, b"abc")])]);
    let document = decode(&data).unwrap();
    assert_eq!(document.compressed_rtf(), Some(&b"abc"[..]));
    assert_eq!(document.decompress_rtf(&Reverse), Some(Ok(b"cba".to_vec())));
}

#[test]
fn test_decompress_rtf_without_body() {
    let document = decode(&stream(&[message_class("IPM.Note")])).unwrap();
    assert!(document.decompress_rtf(&Reverse).is_none());
}

// --- Serialization ---

#[test]
fn test_json_export() {
    let data = stream(&[
        message_class("IPM.Note"),
        msg_props(&[common::string8(property::DISPLAY_NAME, "Bob")]),
        rend_data(),
    ]);
    let document = decode(&data).unwrap();

    let json = document.to_json().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["attributes"].as_array().unwrap().len(), 3);
    assert_eq!(parsed["attachments"].as_array().unwrap().len(), 1);

    let restored: Document = serde_json::from_str(&document.to_json_pretty().unwrap()).unwrap();
    assert_eq!(restored, document);
}

#[test]
fn test_options_fill_missing_fields() {
    let options: DecodeOptions = serde_json::from_str(r#"{"max_depth": 1}"#).unwrap();
    assert_eq!(options.max_depth, 1);
    assert_eq!(options.max_nested_size, DEFAULT_MAX_NESTED_SIZE);
    assert_eq!(DecodeOptions::default().max_depth, DEFAULT_MAX_DEPTH);
}

#[test]
fn test_type_values() {
    assert_eq!(prop_type::MV_STRING8, 0x101E);
    assert_eq!(Level::from_byte(0x02), Some(Level::Attachment));
    assert_eq!(Level::Message.as_byte(), 0x01);
    assert!(Level::from_byte(0x03).is_none());
    assert_eq!(MappedType::from_id(attribute::DATE_SENT), MappedType::Date);
    assert_eq!(AttachMethod::from_value(5), AttachMethod::EmbeddedMessage);
    assert!(AttachMethod::Ole.may_embed_stream());
    assert!(!AttachMethod::ByValue.may_embed_stream());
}
