//! AcroForm Inspector Library
//!
//! Read-only diagnostics for interactive PDF forms. This library provides
//! functionality to:
//! - Load a PDF and locate its AcroForm dictionary
//! - Index top-level form fields by name
//! - Resolve widget annotations to page indices
//! - Report checkbox values and strike-through widget positions
//!
//! # Example
//!
//! ```no_run
//! use acroform_inspect::{inspect, FormDocument, InspectOptions};
//! use std::path::PathBuf;
//!
//! let options = InspectOptions {
//!     input_path: PathBuf::from("generated.pdf"),
//!     ..InspectOptions::default()
//! };
//!
//! let doc = FormDocument::load(&options.input_path).expect("Failed to load PDF");
//! let report = inspect(&doc, &options).expect("Failed to inspect form");
//! print!("{}", report);
//! ```

pub mod config;
pub mod error;
pub mod pdf;
pub mod report;

// Re-export commonly used items
pub use config::{FieldPattern, InspectOptions};
pub use error::{Error, Result};
pub use pdf::FormDocument;
pub use report::{inspect, Report};
