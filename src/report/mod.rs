//! Form inspection reports
//!
//! `inspect` runs the whole inspection against a loaded document and returns a
//! `Report` whose `Display` output is the text the CLI prints.

pub mod checkbox;
pub mod strike;

use std::fmt;
use crate::config::InspectOptions;
use crate::error::Result;
use crate::pdf::FormDocument;

pub use checkbox::{report_checkboxes, CheckboxLine};
pub use strike::{report_strikes, sort_rows, StrikeReport, StrikeRow};

fn bool_word(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Result of a full inspection
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub page_count: usize,
    pub has_acroform: bool,
    /// `None` when there is no AcroForm, or it is empty, and nothing was inspected
    pub form: Option<FormReport>,
}

/// Field-level part of a report
#[derive(Debug, Clone, PartialEq)]
pub struct FormReport {
    /// Entries in /Fields, named or not
    pub top_fields: usize,
    pub checks_present: usize,
    pub strikes_present: usize,
    pub checkboxes: Vec<CheckboxLine>,
    pub strikes: Vec<StrikeReport>,
}

/// Inspect the checkbox and strike fields of `doc`
pub fn inspect(doc: &FormDocument, options: &InspectOptions) -> Result<Report> {
    let page_count = doc.page_count();
    let acroform = doc.acroform()?;
    let has_acroform = acroform.is_some();

    if acroform.map_or(true, |dict| dict.is_empty()) {
        return Ok(Report {
            page_count,
            has_acroform,
            form: None,
        });
    }

    let top_fields = doc.top_level_fields()?.len();
    let index = doc.field_index()?;

    let check_names = options.checkboxes.names();
    let strike_names = options.strikes.names();

    let form = FormReport {
        top_fields,
        checks_present: index.count_present(&check_names),
        strikes_present: index.count_present(&strike_names),
        checkboxes: report_checkboxes(&index, doc.pages(), &check_names)?,
        strikes: report_strikes(
            &index,
            doc.pages(),
            &options.strike_detail_names(),
            options.row_limit,
        )?,
    };

    Ok(Report {
        page_count,
        has_acroform,
        form: Some(form),
    })
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pages {} hasAcro {}", self.page_count, bool_word(self.has_acroform))?;
        if let Some(form) = &self.form {
            write!(f, "{}", form)?;
        }
        Ok(())
    }
}

impl fmt::Display for FormReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "top_fields {}", self.top_fields)?;
        writeln!(f, "checks present {}", self.checks_present)?;
        writeln!(f, "strikes present {}", self.strikes_present)?;
        for line in &self.checkboxes {
            writeln!(f, "{}", line)?;
        }
        for strike in &self.strikes {
            write!(f, "{}", strike)?;
        }
        Ok(())
    }
}

/// Page count, AcroForm presence and top-level field names
#[derive(Debug, Clone, PartialEq)]
pub struct FormSummary {
    pub page_count: usize,
    pub has_acroform: bool,
    pub field_names: Vec<String>,
}

pub fn summarize(doc: &FormDocument) -> Result<FormSummary> {
    Ok(FormSummary {
        page_count: doc.page_count(),
        has_acroform: doc.acroform()?.is_some(),
        field_names: doc.top_level_field_names()?,
    })
}

impl fmt::Display for FormSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "pages {} hasAcro {}", self.page_count, bool_word(self.has_acroform))?;
        if !self.has_acroform {
            return Ok(());
        }
        writeln!(f, "top_fields {}", self.field_names.len())?;
        for name in &self.field_names {
            if name.is_empty() {
                writeln!(f, "  (unnamed)")?;
            } else {
                writeln!(f, "  {}", name)?;
            }
        }
        Ok(())
    }
}
