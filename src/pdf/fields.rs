//! Typed views of form fields and their widget annotations

use std::collections::HashMap;
use std::fmt;
use bitflags::bitflags;
use lopdf::{Dictionary, Document, Object};
use crate::error::{Error, Result};
use crate::pdf::object;
use crate::pdf::pages::PageId;

bitflags! {
    /// Annotation flag word (/F)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AnnotationFlags: u32 {
        const INVISIBLE = 1;
        const HIDDEN = 1 << 1;
        const PRINT = 1 << 2;
        const NO_ZOOM = 1 << 3;
        const NO_ROTATE = 1 << 4;
        const NO_VIEW = 1 << 5;
        const READ_ONLY = 1 << 6;
        const LOCKED = 1 << 7;
        const TOGGLE_NO_VIEW = 1 << 8;
        const LOCKED_CONTENTS = 1 << 9;
    }
}

impl AnnotationFlags {
    pub fn is_printable(&self) -> bool {
        self.contains(Self::PRINT) && !self.contains(Self::HIDDEN)
    }
}

/// Annotation rectangle as stored in the file (not normalised)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub llx: f64,
    pub lly: f64,
    pub urx: f64,
    pub ury: f64,
}

impl Rect {
    pub fn new(llx: f64, lly: f64, urx: f64, ury: f64) -> Self {
        Self { llx, lly, urx, ury }
    }

    /// Read a /Rect array. Fewer than four entries or a non-numeric entry is an error.
    pub fn from_object(doc: &Document, obj: &Object) -> Result<Self> {
        let items = object::as_array(doc, obj, b"Rect")?;
        if items.len() < 4 {
            return Err(Error::MalformedRect(format!(
                "expected 4 numbers, found {}",
                items.len()
            )));
        }

        let mut values = [0.0; 4];
        for (slot, item) in values.iter_mut().zip(items) {
            let resolved = object::resolve(doc, item)?;
            *slot = object::number(resolved).ok_or_else(|| {
                Error::MalformedRect(format!("non-numeric entry {}", object::display(resolved)))
            })?;
        }

        let [llx, lly, urx, ury] = values;
        Ok(Self::new(llx, lly, urx, ury))
    }

    /// Vertical midpoint
    pub fn center_y(&self) -> f64 {
        (self.lly + self.ury) / 2.0
    }
}

/// Field value (/V)
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Name object, typically a checkbox state such as `/Yes` or `/Off`
    Name(String),
    /// Text string
    Text(String),
    /// Anything else, rendered in PDF syntax
    Other(String),
}

impl FieldValue {
    /// `None` for PDF null
    pub fn from_object(obj: &Object) -> Option<Self> {
        match obj {
            Object::Null => None,
            Object::Name(name) => Some(FieldValue::Name(String::from_utf8_lossy(name).into_owned())),
            Object::String(bytes, _) => Some(FieldValue::Text(object::decode_text(bytes))),
            other => Some(FieldValue::Other(object::display(other))),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Name(name) => write!(f, "/{}", name),
            FieldValue::Text(text) | FieldValue::Other(text) => f.write_str(text),
        }
    }
}

/// Owning page (/P) of a widget dictionary.
///
/// `PageId::DIRECT` when /P is not an indirect reference.
pub fn widget_page(dict: &Dictionary) -> Option<PageId> {
    match dict.get(b"P") {
        Ok(Object::Reference(id)) => Some(PageId::from(*id)),
        Ok(Object::Null) | Err(_) => None,
        Ok(_) => Some(PageId::DIRECT),
    }
}

/// Widget annotation: the page-anchored appearance of a field
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub rect: Option<Rect>,
    pub page: Option<PageId>,
    /// Raw /F word, 0 when absent
    pub flag_word: i64,
}

impl Widget {
    pub fn from_dict(doc: &Document, dict: &Dictionary) -> Result<Self> {
        let rect = object::get(doc, dict, b"Rect")?
            .map(|obj| Rect::from_object(doc, obj))
            .transpose()?;

        let flag_word = match object::get(doc, dict, b"F")? {
            None => 0,
            Some(obj) => object::number(obj).ok_or_else(|| Error::unexpected(b"F", "integer"))? as i64,
        };

        Ok(Self {
            rect,
            page: widget_page(dict),
            flag_word,
        })
    }

    /// Rectangle, or all zeros when the widget has none
    pub fn rect_or_default(&self) -> Rect {
        self.rect.unwrap_or_default()
    }

    /// /F as annotation flags; empty when the word does not fit in 32 bits
    pub fn flags(&self) -> AnnotationFlags {
        u32::try_from(self.flag_word).map_or(AnnotationFlags::empty(), AnnotationFlags::from_bits_retain)
    }
}

/// Top-level form field.
///
/// Widget dictionaries are kept unparsed; callers parse only the widgets they report.
#[derive(Clone)]
pub struct Field<'a> {
    doc: &'a Document,
    pub name: String,
    pub value: Option<FieldValue>,
    widgets: Vec<&'a Dictionary>,
}

impl<'a> Field<'a> {
    pub fn from_dict(doc: &'a Document, dict: &'a Dictionary) -> Result<Self> {
        let name = field_name(doc, dict)?;
        let value = object::get(doc, dict, b"V")?.and_then(FieldValue::from_object);

        let widgets = if dict.has(b"Kids") {
            object::as_array(doc, dict.get(b"Kids")?, b"Kids")?
                .iter()
                .map(|kid| object::as_dict(doc, kid, b"Kids"))
                .collect::<Result<Vec<_>>>()?
        } else {
            vec![dict]
        };

        Ok(Self {
            doc,
            name,
            value,
            widgets,
        })
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// Entries of /Kids, or the field's own dictionary when it has no /Kids
    pub fn widget_dicts(&self) -> &[&'a Dictionary] {
        &self.widgets
    }

    /// Parse the first widget, if any
    pub fn first_widget(&self) -> Result<Option<Widget>> {
        self.widgets
            .first()
            .map(|dict| Widget::from_dict(self.doc, dict))
            .transpose()
    }
}

/// Decoded partial name (/T), empty when absent
pub fn field_name(doc: &Document, dict: &Dictionary) -> Result<String> {
    Ok(object::get(doc, dict, b"T")?
        .map(object::display)
        .unwrap_or_default())
}

/// Top-level fields keyed by name.
///
/// Dictionaries are parsed into `Field`s on lookup, so a malformed field that
/// is never asked for does not stop an inspection.
pub struct FieldIndex<'a> {
    doc: &'a Document,
    by_name: HashMap<String, &'a Dictionary>,
}

impl<'a> FieldIndex<'a> {
    /// Index `fields` by name. Unnamed fields are skipped; on duplicate names the last one wins.
    pub fn build(doc: &'a Document, fields: &[&'a Dictionary]) -> Result<Self> {
        let mut by_name = HashMap::with_capacity(fields.len());
        for &dict in fields {
            let name = field_name(doc, dict)?;
            if name.is_empty() {
                continue;
            }
            if by_name.insert(name.clone(), dict).is_some() {
                log::debug!("Duplicate field name {:?}, keeping the later field", name);
            }
        }
        Ok(Self { doc, by_name })
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// How many of `names` are indexed
    pub fn count_present<S: AsRef<str>>(&self, names: &[S]) -> usize {
        names.iter().filter(|name| self.contains(name.as_ref())).count()
    }

    /// Parse the field called `name`, if there is one
    pub fn field(&self, name: &str) -> Result<Option<Field<'a>>> {
        self.by_name
            .get(name)
            .map(|dict| Field::from_dict(self.doc, dict))
            .transpose()
    }
}
