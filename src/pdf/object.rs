//! Helpers over the lopdf object model
//!
//! lopdf hands out raw `Object`s that may be indirect references. These
//! helpers follow references and convert the handful of primitive shapes the
//! inspector reads (numbers, text strings, dictionaries).

use lopdf::{Dictionary, Document, Object};
use crate::error::{Error, Result};

/// Longest reference chain followed before giving up
const MAX_REFERENCE_DEPTH: usize = 32;

/// Follow indirect references until a direct object is reached
pub fn resolve<'a>(doc: &'a Document, obj: &'a Object) -> Result<&'a Object> {
    let mut current = obj;
    for _ in 0..MAX_REFERENCE_DEPTH {
        match current {
            Object::Reference(id) => current = doc.get_object(*id)?,
            _ => return Ok(current),
        }
    }
    Err(Error::General(format!(
        "Reference chain longer than {} objects",
        MAX_REFERENCE_DEPTH
    )))
}

/// Look up `key` in `dict`, resolving references. `None` when the key is absent.
pub fn get<'a>(doc: &'a Document, dict: &'a Dictionary, key: &[u8]) -> Result<Option<&'a Object>> {
    match dict.get(key) {
        Ok(obj) => resolve(doc, obj).map(Some),
        Err(_) => Ok(None),
    }
}

/// Resolve `obj` and require a dictionary. `key` names the entry for errors.
pub fn as_dict<'a>(doc: &'a Document, obj: &'a Object, key: &[u8]) -> Result<&'a Dictionary> {
    match resolve(doc, obj)? {
        Object::Dictionary(dict) => Ok(dict),
        Object::Stream(stream) => Ok(&stream.dict),
        _ => Err(Error::unexpected(key, "dictionary")),
    }
}

/// Resolve `obj` and require an array. `key` names the entry for errors.
pub fn as_array<'a>(doc: &'a Document, obj: &'a Object, key: &[u8]) -> Result<&'a [Object]> {
    match resolve(doc, obj)? {
        Object::Array(items) => Ok(items),
        _ => Err(Error::unexpected(key, "array")),
    }
}

/// Numeric value of an integer or real object
pub fn number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(r) => Some(*r as f64),
        _ => None,
    }
}

/// Decode a PDF text string.
///
/// UTF-16BE when the string starts with the `FE FF` byte-order mark,
/// otherwise PDFDocEncoding, approximated here by Latin-1.
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }
    bytes.iter().map(|&b| b as char).collect()
}

/// Render an object in PDF-like syntax for diagnostic output
pub fn display(obj: &Object) -> String {
    match obj {
        Object::Null => "null".to_string(),
        Object::Boolean(b) => b.to_string(),
        Object::Integer(i) => i.to_string(),
        Object::Real(r) => r.to_string(),
        Object::Name(name) => format!("/{}", String::from_utf8_lossy(name)),
        Object::String(bytes, _) => decode_text(bytes),
        Object::Array(items) => {
            let parts: Vec<String> = items.iter().map(display).collect();
            format!("[{}]", parts.join(" "))
        }
        Object::Dictionary(_) => "<<dictionary>>".to_string(),
        Object::Stream(_) => "<<stream>>".to_string(),
        Object::Reference((num, gen)) => format!("{} {} R", num, gen),
    }
}
