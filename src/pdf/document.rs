//! Loading a PDF and locating its interactive form

use std::path::Path;
use lopdf::{Dictionary, Document, Object};
use crate::error::{Error, Result};
use crate::pdf::fields::{field_name, FieldIndex};
use crate::pdf::object;
use crate::pdf::pages::PageList;

/// A loaded PDF together with its page sequence
pub struct FormDocument {
    doc: Document,
    pages: PageList,
}

impl FormDocument {
    /// Load a PDF file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let doc = Document::load(path)?;
        let form = Self::from_document(doc);
        log::debug!("Loaded {} ({} pages)", path.display(), form.page_count());
        Ok(form)
    }

    /// Wrap an already parsed document
    pub fn from_document(doc: Document) -> Self {
        let pages = PageList::from_document(&doc);
        Self { doc, pages }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Document catalog, found through the trailer's /Root
    fn catalog(&self) -> Result<&Dictionary> {
        let root = self.doc.trailer.get(b"Root")
            .map_err(|_| Error::General("No Root in trailer".to_string()))?;
        object::as_dict(&self.doc, root, b"Root")
    }

    /// The catalog's /AcroForm dictionary, if the document has one
    pub fn acroform(&self) -> Result<Option<&Dictionary>> {
        let catalog = self.catalog()?;
        match object::get(&self.doc, catalog, b"AcroForm")? {
            None | Some(Object::Null) => {
                log::debug!("Catalog has no /AcroForm");
                Ok(None)
            }
            Some(obj) => object::as_dict(&self.doc, obj, b"AcroForm").map(Some),
        }
    }

    /// Dictionaries listed in the AcroForm's /Fields, empty when absent
    pub fn top_level_fields(&self) -> Result<Vec<&Dictionary>> {
        let Some(acroform) = self.acroform()? else {
            return Ok(Vec::new());
        };
        let Some(fields) = object::get(&self.doc, acroform, b"Fields")? else {
            return Ok(Vec::new());
        };

        object::as_array(&self.doc, fields, b"Fields")?
            .iter()
            .map(|field| object::as_dict(&self.doc, field, b"Fields"))
            .collect()
    }

    /// Names of the top-level fields in /Fields order (empty for unnamed fields)
    pub fn top_level_field_names(&self) -> Result<Vec<String>> {
        self.top_level_fields()?
            .into_iter()
            .map(|dict| field_name(&self.doc, dict))
            .collect()
    }

    /// Index the top-level fields by name
    pub fn field_index(&self) -> Result<FieldIndex<'_>> {
        let fields = self.top_level_fields()?;
        FieldIndex::build(&self.doc, &fields)
    }
}
