//! PDF form access module

pub mod document;
pub mod fields;
pub mod object;
pub mod pages;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use document::FormDocument;
pub use fields::{AnnotationFlags, Field, FieldIndex, FieldValue, Rect, Widget};
pub use pages::{PageId, PageIndex, PageList};
