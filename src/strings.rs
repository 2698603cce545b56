// alcloader/src/strings.rs
//
//! Decoding of the strings ALC returns.

use crate::ffi::ALCchar;

use std::ffi::CStr;
use std::slice;

/// Splits a device extension string into extension names.
///
/// Names are separated by any run of ASCII whitespace; empty names are never produced.
pub fn extension_names(extensions: &str) -> impl Iterator<Item = &str> {
    extensions.split_ascii_whitespace()
}

/// Decodes a list of NUL-terminated strings that ends with an empty string, e.g.
/// `b"alpha\0beta\0\0"`.
///
/// Decoding stops at the first empty string. Bytes after the last NUL of an unterminated
/// buffer are ignored.
pub fn decode_string_list_bytes(buffer: &[u8]) -> Vec<String> {
    let mut strings = vec![];
    let mut offset = 0;
    for (position, &byte) in buffer.iter().enumerate() {
        if byte != 0 {
            continue;
        }
        // The previous byte was also a NUL: end of list.
        if position == offset {
            break;
        }
        strings.push(String::from_utf8_lossy(&buffer[offset..position]).into_owned());
        offset = position + 1;
    }
    strings
}

/// Decodes a native string list, as returned by `alcGetString` for list-valued tokens.
///
/// A null pointer means the query isn't supported and yields `None`, as opposed to an empty
/// list.
///
/// # Safety
///
/// `list` must be null or point to a list terminated by two consecutive NUL bytes (or by a
/// single NUL at the very start).
pub unsafe fn decode_string_list(list: *const ALCchar) -> Option<Vec<String>> {
    if list.is_null() {
        return None;
    }

    let bytes = list as *const u8;
    let mut length = 0;
    loop {
        if *bytes.add(length) == 0 && (length == 0 || *bytes.add(length - 1) == 0) {
            break;
        }
        length += 1;
    }
    Some(decode_string_list_bytes(slice::from_raw_parts(bytes, length + 1)))
}

/// Decodes a single NUL-terminated native string. Null yields `None`.
///
/// # Safety
///
/// `string` must be null or point to a NUL-terminated string.
pub unsafe fn decode_string(string: *const ALCchar) -> Option<String> {
    if string.is_null() {
        None
    } else {
        Some(CStr::from_ptr(string).to_string_lossy().into_owned())
    }
}
