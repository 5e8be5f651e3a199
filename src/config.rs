//! Inspection options: input path, field-name patterns and output limits

use std::path::PathBuf;

/// A numbered family of field names such as `"Check 1"`..`"Check 20"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPattern {
    /// Text placed before the number (including any separator)
    pub prefix: String,
    /// Highest number in the family; numbering starts at 1
    pub count: u32,
}

impl FieldPattern {
    pub fn new(prefix: impl Into<String>, count: u32) -> Self {
        Self {
            prefix: prefix.into(),
            count,
        }
    }

    /// Field name for a single number
    pub fn name(&self, number: u32) -> String {
        format!("{}{}", self.prefix, number)
    }

    /// All field names in the family, in numeric order
    pub fn names(&self) -> Vec<String> {
        (1..=self.count).map(|n| self.name(n)).collect()
    }
}

/// Options for a single inspection run
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// PDF file to inspect
    pub input_path: PathBuf,
    /// Checkbox field names
    pub checkboxes: FieldPattern,
    /// Strike-through field names (used for presence counting)
    pub strikes: FieldPattern,
    /// Strike numbers whose widgets are listed in detail
    pub strike_details: Vec<u32>,
    /// Maximum number of widget rows printed per strike field
    pub row_limit: usize,
}

impl InspectOptions {
    /// Names of the strike fields listed in detail
    pub fn strike_detail_names(&self) -> Vec<String> {
        self.strike_details
            .iter()
            .map(|&n| self.strikes.name(n))
            .collect()
    }
}

impl Default for InspectOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            checkboxes: FieldPattern::new("Check ", 20),
            strikes: FieldPattern::new("Strike", 20),
            strike_details: vec![9, 10, 11, 12, 13, 16, 17, 18, 19, 20],
            row_limit: 18,
        }
    }
}
