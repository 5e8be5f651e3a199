//! Checkbox reporter: value, page and position of each checkbox's first widget

use std::fmt;
use crate::error::Result;
use crate::pdf::{Field, FieldIndex, FieldValue, PageIndex, PageList, Rect};

/// One `CHECK` line
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxLine {
    pub name: String,
    pub page: PageIndex,
    pub rect: Rect,
    pub value: Option<FieldValue>,
    /// Raw /F word of the widget
    pub flag_word: i64,
}

impl CheckboxLine {
    /// Describe the field's first widget. `None` when the field has no widgets.
    ///
    /// Later widgets are not read.
    pub fn from_field(field: &Field<'_>, pages: &PageList) -> Result<Option<Self>> {
        let Some(widget) = field.first_widget()? else {
            return Ok(None);
        };
        let page = pages.resolve(widget.page);

        if !widget.flags().is_printable() {
            log::debug!("{}: first widget is not printable (F={})", field.name, widget.flag_word);
        }

        Ok(Some(Self {
            name: field.name.clone(),
            page,
            rect: widget.rect_or_default(),
            value: field.value.clone(),
            flag_word: widget.flag_word,
        }))
    }
}

impl fmt::Display for CheckboxLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CHECK {} page={} y={:.2} x={:.2} V=",
            self.name,
            self.page,
            self.rect.center_y(),
            self.rect.llx
        )?;
        match &self.value {
            Some(value) => write!(f, "{}", value)?,
            None => f.write_str("None")?,
        }
        write!(f, " F={}", self.flag_word)
    }
}

/// Lines for every name in `names` that the index contains, in `names` order
pub fn report_checkboxes<S: AsRef<str>>(
    index: &FieldIndex<'_>,
    pages: &PageList,
    names: &[S],
) -> Result<Vec<CheckboxLine>> {
    let mut lines = Vec::new();
    for name in names {
        let Some(field) = index.field(name.as_ref())? else {
            continue;
        };
        lines.extend(CheckboxLine::from_field(&field, pages)?);
    }
    Ok(lines)
}
