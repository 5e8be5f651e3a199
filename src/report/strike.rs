//! Strike reporter: every widget of a strike-through field, in reading order

use std::fmt;
use crate::error::Result;
use crate::pdf::fields::widget_page;
use crate::pdf::{Field, FieldIndex, PageIndex, PageList, Widget};

/// Position of one strike widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikeRow {
    pub page: PageIndex,
    pub center_y: f64,
    pub left: f64,
    pub right: f64,
    /// Raw /F word of the widget
    pub flag_word: i64,
}

impl fmt::Display for StrikeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {}, {})",
            self.page,
            Rounded(self.center_y),
            Rounded(self.left),
            Rounded(self.right),
            self.flag_word
        )
    }
}

/// Float rounded to 3 decimals, trailing zeros dropped down to one decimal digit.
///
/// Rounding works on the exact binary value, so ties such as 1.0625 go to even.
struct Rounded(f64);

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.3}", self.0);
        if !self.0.is_finite() {
            return f.write_str(&text);
        }
        let trimmed = text.trim_end_matches('0');
        if trimmed.ends_with('.') {
            write!(f, "{}0", trimmed)
        } else {
            f.write_str(trimmed)
        }
    }
}

/// Sort by ascending page, then top to bottom within a page
pub fn sort_rows(rows: &mut [StrikeRow]) {
    rows.sort_by(|a, b| {
        a.page
            .cmp(&b.page)
            .then_with(|| b.center_y.total_cmp(&a.center_y))
    });
}

/// Widget rows of one strike field
#[derive(Debug, Clone, PartialEq)]
pub struct StrikeReport {
    pub name: String,
    /// Sorted rows for widgets that have a /P entry
    pub rows: Vec<StrikeRow>,
    /// Widgets without /P; excluded from `rows`
    pub missing_page: usize,
    /// Rows shown when printed
    pub row_limit: usize,
}

impl StrikeReport {
    /// Widgets without /P are counted, never parsed
    pub fn from_field(field: &Field<'_>, pages: &PageList, row_limit: usize) -> Result<Self> {
        let mut rows = Vec::with_capacity(field.widget_dicts().len());
        let mut missing_page = 0;

        for dict in field.widget_dicts() {
            if widget_page(dict).is_none() {
                missing_page += 1;
                continue;
            }
            let widget = Widget::from_dict(field.document(), dict)?;
            let rect = widget.rect_or_default();
            rows.push(StrikeRow {
                page: pages.resolve(widget.page),
                center_y: rect.center_y(),
                left: rect.llx,
                right: rect.urx,
                flag_word: widget.flag_word,
            });
        }

        if missing_page > 0 {
            log::debug!("{}: {} widgets without /P", field.name, missing_page);
        }
        sort_rows(&mut rows);

        Ok(Self {
            name: field.name.clone(),
            rows,
            missing_page,
            row_limit,
        })
    }

    /// The rows that get printed
    pub fn printed_rows(&self) -> &[StrikeRow] {
        &self.rows[..self.rows.len().min(self.row_limit)]
    }
}

impl fmt::Display for StrikeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "{}: rows={} missingP={}",
            self.name,
            self.rows.len(),
            self.missing_page
        )?;
        for row in self.printed_rows() {
            writeln!(f, "  {}", row)?;
        }
        Ok(())
    }
}

/// Reports for every name in `names` that the index contains, in `names` order
pub fn report_strikes<S: AsRef<str>>(
    index: &FieldIndex<'_>,
    pages: &PageList,
    names: &[S],
    row_limit: usize,
) -> Result<Vec<StrikeReport>> {
    let mut reports = Vec::new();
    for name in names {
        if let Some(field) = index.field(name.as_ref())? {
            reports.push(StrikeReport::from_field(&field, pages, row_limit)?);
        }
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::testing::FormBuilder;
    use crate::pdf::FormDocument;
    use lopdf::Object;

    fn row(page: usize, center_y: f64) -> StrikeRow {
        StrikeRow {
            page: PageIndex::new(page),
            center_y,
            left: 0.0,
            right: 0.0,
            flag_word: 0,
        }
    }

    #[test]
    fn test_sort_page_then_top_to_bottom() {
        let mut rows = vec![row(0, 10.0), row(0, 50.0), row(1, 5.0)];
        sort_rows(&mut rows);

        let order: Vec<(PageIndex, f64)> = rows.iter().map(|r| (r.page, r.center_y)).collect();
        assert_eq!(
            order,
            vec![
                (PageIndex::new(0), 50.0),
                (PageIndex::new(0), 10.0),
                (PageIndex::new(1), 5.0),
            ]
        );
    }

    #[test]
    fn test_unresolved_page_sorts_first() {
        let mut rows = vec![row(0, 10.0), row(0, 50.0)];
        rows.push(StrikeRow {
            page: PageIndex::UNRESOLVED,
            ..row(0, 1.0)
        });
        sort_rows(&mut rows);
        assert_eq!(rows[0].page, PageIndex::UNRESOLVED);
    }

    #[test]
    fn test_row_format() {
        let row = StrikeRow {
            page: PageIndex::new(2),
            center_y: 712.34567,
            left: 100.0,
            right: 180.25,
            flag_word: 4,
        };
        assert_eq!(row.to_string(), "(2, 712.346, 100.0, 180.25, 4)");
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        // (1.0 + 1.125) / 2 is exactly 1.0625
        let row = StrikeRow {
            page: PageIndex::new(0),
            center_y: (1.0 + 1.125) / 2.0,
            left: 0.5,
            right: -0.0001,
            flag_word: -1,
        };
        assert_eq!(row.to_string(), "(0, 1.062, 0.5, -0.0, -1)");
    }

    #[test]
    fn test_missing_page_widget_is_not_parsed() {
        let mut builder = FormBuilder::new(1);
        let mut orphan = builder.widget(None, [0.0, 0.0, 1.0, 1.0], None);
        orphan.set("Rect", Object::Array(vec![Object::Integer(0)]));
        orphan.set("F", Object::Name(b"X".to_vec()));
        let kids = vec![builder.widget(Some(0), [10.0, 20.0, 30.0, 40.0], Some(4)), orphan];
        builder.add_kids_field("Strike9", None, kids);
        let form = FormDocument::from_document(builder.build());
        let index = form.field_index().unwrap();

        let reports = report_strikes(&index, form.pages(), &["Strike9"], 18).unwrap();
        assert_eq!(reports[0].rows.len(), 1);
        assert_eq!(reports[0].missing_page, 1);
        assert!(reports[0].to_string().contains("Strike9: rows=1 missingP=1"));
    }

    #[test]
    fn test_malformed_rect_on_paged_widget_fails() {
        let mut builder = FormBuilder::new(1);
        let mut widget = builder.widget(Some(0), [0.0, 0.0, 1.0, 1.0], None);
        widget.set("Rect", Object::Array(vec![Object::Integer(0)]));
        builder.add_kids_field("Strike9", None, vec![widget]);
        let form = FormDocument::from_document(builder.build());
        let index = form.field_index().unwrap();

        assert!(report_strikes(&index, form.pages(), &["Strike9"], 18).is_err());
    }

    #[test]
    fn test_missing_page_widgets_are_counted_not_listed() {
        let mut builder = FormBuilder::new(2);
        let kids = vec![
            builder.widget(Some(0), [10.0, 100.0, 90.0, 104.0], Some(4)),
            builder.widget(None, [10.0, 200.0, 90.0, 204.0], Some(4)),
            builder.widget(Some(1), [10.0, 300.0, 90.0, 304.0], Some(4)),
            builder.widget(None, [10.0, 400.0, 90.0, 404.0], Some(4)),
            builder.widget(Some(0), [10.0, 500.0, 90.0, 504.0], Some(4)),
        ];
        builder.add_kids_field("Strike9", None, kids);
        let form = FormDocument::from_document(builder.build());
        let index = form.field_index().unwrap();

        let reports = report_strikes(&index, form.pages(), &["Strike9"], 18).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].rows.len(), 3);
        assert_eq!(reports[0].missing_page, 2);

        let centers: Vec<f64> = reports[0].rows.iter().map(|r| r.center_y).collect();
        assert_eq!(centers, vec![502.0, 102.0, 302.0]);
    }

    #[test]
    fn test_output_truncated_silently() {
        let mut builder = FormBuilder::new(1);
        let kids = (0..25)
            .map(|i| {
                let y = 700.0 - 20.0 * i as f64;
                builder.widget(Some(0), [50.0, y, 500.0, y + 2.0], Some(4))
            })
            .collect();
        builder.add_kids_field("Strike10", None, kids);
        let form = FormDocument::from_document(builder.build());
        let index = form.field_index().unwrap();

        let reports = report_strikes(&index, form.pages(), &["Strike10"], 18).unwrap();
        let report = &reports[0];
        assert_eq!(report.rows.len(), 25);
        assert_eq!(report.printed_rows().len(), 18);

        let text = report.to_string();
        let row_lines = text.lines().filter(|line| line.starts_with("  (")).count();
        assert_eq!(row_lines, 18);
        assert!(text.contains("Strike10: rows=25 missingP=0"));
        assert!(text.starts_with('\n'));
    }

    #[test]
    fn test_field_without_kids_is_one_row() {
        let mut builder = FormBuilder::new(1);
        let widget = builder.widget(Some(0), [1.0, 2.0, 3.0, 4.0], None);
        builder.add_single_field("Strike11", None, widget);
        let form = FormDocument::from_document(builder.build());
        let index = form.field_index().unwrap();

        let reports = report_strikes(&index, form.pages(), &["Strike11", "Strike12"], 18).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].rows, vec![StrikeRow {
            page: PageIndex::new(0),
            center_y: 3.0,
            left: 1.0,
            right: 3.0,
            flag_word: 0,
        }]);
    }
}
