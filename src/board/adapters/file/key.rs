//! Mapping from storage keys to file names.

use crate::board::ports::StorageKey;

const FILE_EXTENSION: &str = ".json";

/// Returns the file name that holds the value for `key`.
///
/// Bytes outside `[A-Za-z0-9._-]` are percent-encoded so that every key maps
/// to a distinct, portable file name with no path separators.
pub(super) fn file_name_for(key: &StorageKey) -> String {
    let raw = key.as_str();
    let mut name = String::with_capacity(raw.len() + FILE_EXTENSION.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            name.push(char::from(byte));
        } else {
            name.push('%');
            for nibble in [byte >> 4, byte & 0x0F] {
                if let Some(digit) = char::from_digit(u32::from(nibble), 16) {
                    name.push(digit.to_ascii_uppercase());
                }
            }
        }
    }
    name.push_str(FILE_EXTENSION);
    name
}
