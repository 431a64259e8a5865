//! MAPI property type metadata
//!
//! Maps a property type code to the width of one value on the wire and to
//! whether the value is framed by an element count. Variable-length types
//! (String8, Unicode, Binary, Object) share the array framing with a count
//! of one, so the property-list walk runs a single element loop for both.

use crate::constants::prop_type;
use serde::{Deserialize, Serialize};

/// Width of one element of a property value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TypeSize {
    /// Fixed number of bytes, before padding
    Fixed(usize),
    /// Length-prefixed
    Variable,
}

/// Wire shape of a property type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeInfo {
    pub size: TypeSize,
    pub is_multivalue: bool,
}

impl TypeInfo {
    #[must_use]
    pub const fn is_variable(&self) -> bool {
        matches!(self.size, TypeSize::Variable)
    }
}

/// Look up the wire shape of `type_code`.
///
/// Returns `None` for codes whose framing is unknown; such a property cannot
/// be skipped safely.
#[must_use]
pub const fn type_info(type_code: u16) -> Option<TypeInfo> {
    let size = match type_code {
        // no value bytes at all
        prop_type::NULL => TypeSize::Fixed(0),
        prop_type::INT16 | prop_type::MV_INT16 | prop_type::BOOLEAN => TypeSize::Fixed(2),
        prop_type::INT32
        | prop_type::MV_INT32
        | prop_type::FLT32
        | prop_type::MV_FLT32
        | prop_type::ERROR_CODE => TypeSize::Fixed(4),
        prop_type::FLT64
        | prop_type::MV_FLT64
        | prop_type::CURRENCY
        | prop_type::MV_CURRENCY
        | prop_type::APP_TIME
        | prop_type::MV_APP_TIME
        | prop_type::INT64
        | prop_type::MV_INT64
        | prop_type::SYSTIME
        | prop_type::MV_SYSTIME => TypeSize::Fixed(8),
        prop_type::CLSID | prop_type::MV_CLSID => TypeSize::Fixed(16),
        prop_type::STRING8
        | prop_type::MV_STRING8
        | prop_type::UNICODE
        | prop_type::MV_UNICODE
        | prop_type::BINARY
        | prop_type::MV_BINARY
        | prop_type::OBJECT => TypeSize::Variable,
        _ => return None,
    };

    let is_multivalue = type_code & prop_type::MV_FLAG != 0 || matches!(size, TypeSize::Variable);

    Some(TypeInfo {
        size,
        is_multivalue,
    })
}

/// Whether the array bit is set on `type_code`
#[must_use]
pub const fn is_array_type(type_code: u16) -> bool {
    type_code & prop_type::MV_FLAG != 0
}
