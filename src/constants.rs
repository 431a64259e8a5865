//! Wire constants: signature, levels, attribute ids, MAPI type codes and
//! property ids

/// First four bytes of every TNEF stream
pub const TNEF_SIGNATURE: u32 = 0x223E_9F78;

/// Record level byte for message attributes
pub const LEVEL_MESSAGE: u8 = 0x01;

/// Record level byte for attachment attributes
pub const LEVEL_ATTACHMENT: u8 = 0x02;

/// Property ids at or above this value carry a named-property spec
pub const NAMED_PROPERTY_MIN: u16 = 0x8000;

/// Interface id of `IMessage` as it prefixes an embedded-message object
/// stream (`00020307-0000-0000-C000-000000000046`, little-endian layout)
pub const EMBEDDED_MESSAGE_PREFIX: [u8; 16] = [
    0x07, 0x03, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x46,
];

/// Message class prefix a reader ignores when matching message classes
pub const LEGACY_MESSAGE_CLASS_PREFIX: &str = "Microsoft Mail v3.0 ";

/// Message class of a contact item
pub const CONTACT_MESSAGE_CLASS: &str = "IPM.Contact";

/// Top-level TNEF attribute ids (type in the high word, id in the low word)
pub mod attribute {
    pub const OWNER: u32 = 0x0006_0000;
    pub const SENT_FOR: u32 = 0x0006_0001;
    pub const DELEGATE: u32 = 0x0006_0002;
    pub const DATE_START: u32 = 0x0003_0006;
    pub const DATE_END: u32 = 0x0003_0007;
    pub const AID_OWNER: u32 = 0x0005_0008;
    pub const REQUEST_RES: u32 = 0x0004_0009;
    pub const ORIGINAL_MESSAGE_CLASS: u32 = 0x0007_0600;
    pub const FROM: u32 = 0x0000_8000;
    pub const SUBJECT: u32 = 0x0001_8004;
    pub const DATE_SENT: u32 = 0x0003_8005;
    pub const DATE_RECEIVED: u32 = 0x0003_8006;
    pub const MESSAGE_STATUS: u32 = 0x0006_8007;
    pub const MESSAGE_CLASS: u32 = 0x0007_8008;
    pub const MESSAGE_ID: u32 = 0x0001_8009;
    pub const BODY: u32 = 0x0002_800C;
    pub const PRIORITY: u32 = 0x0004_800D;
    pub const DATE_MODIFIED: u32 = 0x0003_8020;
    pub const TNEF_VERSION: u32 = 0x0008_9006;
    pub const OEM_CODEPAGE: u32 = 0x0006_9007;
    pub const MSG_PROPS: u32 = 0x0006_9003;
    pub const RECIP_TABLE: u32 = 0x0006_9004;

    pub const ATTACH_DATA: u32 = 0x0006_800F;
    pub const ATTACH_TITLE: u32 = 0x0001_8010;
    pub const ATTACH_META_FILE: u32 = 0x0006_8011;
    pub const ATTACH_CREATE_DATE: u32 = 0x0003_8012;
    pub const ATTACH_MODIFY_DATE: u32 = 0x0003_8013;
    pub const ATTACH_TRANSPORT_FILENAME: u32 = 0x0006_9001;
    pub const ATTACH_REND_DATA: u32 = 0x0006_9002;
    pub const ATTACHMENT: u32 = 0x0006_9005;
}

/// MAPI property type codes
pub mod prop_type {
    pub const UNSPECIFIED: u16 = 0x0000;
    pub const NULL: u16 = 0x0001;
    pub const INT16: u16 = 0x0002;
    pub const INT32: u16 = 0x0003;
    pub const FLT32: u16 = 0x0004;
    pub const FLT64: u16 = 0x0005;
    pub const CURRENCY: u16 = 0x0006;
    pub const APP_TIME: u16 = 0x0007;
    pub const ERROR_CODE: u16 = 0x000A;
    pub const BOOLEAN: u16 = 0x000B;
    pub const OBJECT: u16 = 0x000D;
    pub const INT64: u16 = 0x0014;
    pub const STRING8: u16 = 0x001E;
    pub const UNICODE: u16 = 0x001F;
    pub const SYSTIME: u16 = 0x0040;
    pub const CLSID: u16 = 0x0048;
    pub const BINARY: u16 = 0x0102;

    /// Set on every array type
    pub const MV_FLAG: u16 = 0x1000;

    pub const MV_INT16: u16 = MV_FLAG | INT16;
    pub const MV_INT32: u16 = MV_FLAG | INT32;
    pub const MV_FLT32: u16 = MV_FLAG | FLT32;
    pub const MV_FLT64: u16 = MV_FLAG | FLT64;
    pub const MV_CURRENCY: u16 = MV_FLAG | CURRENCY;
    pub const MV_APP_TIME: u16 = MV_FLAG | APP_TIME;
    pub const MV_INT64: u16 = MV_FLAG | INT64;
    pub const MV_STRING8: u16 = MV_FLAG | STRING8;
    pub const MV_UNICODE: u16 = MV_FLAG | UNICODE;
    pub const MV_SYSTIME: u16 = MV_FLAG | SYSTIME;
    pub const MV_CLSID: u16 = MV_FLAG | CLSID;
    pub const MV_BINARY: u16 = MV_FLAG | BINARY;
}

/// MAPI property ids used by the decoder and the document helpers
pub mod property {
    pub const SUBJECT: u32 = 0x0037;
    pub const TNEF_CORRELATION_KEY: u32 = 0x007F;
    pub const RTF_IN_SYNC: u32 = 0x0E1F;
    pub const BODY: u32 = 0x1000;
    pub const RTF_COMPRESSED: u32 = 0x1009;
    pub const BODY_HTML: u32 = 0x1013;
    pub const BODY_CONTENT_ID: u32 = 0x1015;
    pub const NATIVE_BODY: u32 = 0x1016;
    pub const DISPLAY_NAME: u32 = 0x3001;
    pub const INTERNET_CODEPAGE: u32 = 0x3FDE;

    pub const ATTACH_SIZE: u32 = 0x0E20;
    pub const ATTACH_NUMBER: u32 = 0x0E21;
    pub const ATTACH_DATA_BINARY: u32 = 0x3701;
    pub const ATTACH_ENCODING: u32 = 0x3702;
    pub const ATTACH_EXTENSION: u32 = 0x3703;
    pub const ATTACH_FILENAME: u32 = 0x3704;
    pub const ATTACH_METHOD: u32 = 0x3705;
    pub const ATTACH_LONG_FILENAME: u32 = 0x3707;
    pub const RENDERING_POSITION: u32 = 0x370B;
    pub const ATTACH_MIME_TAG: u32 = 0x370E;
    pub const ATTACH_CONTENT_ID: u32 = 0x3712;
    pub const ATTACH_FLAGS: u32 = 0x3714;
    pub const ATTACHMENT_HIDDEN: u32 = 0x7FFE;
    pub const ATTACHMENT_CONTACT_PHOTO: u32 = 0x7FFF;
}
