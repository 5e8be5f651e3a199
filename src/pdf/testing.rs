//! In-memory form documents for unit tests

use lopdf::{Dictionary, Document, Object, ObjectId, StringFormat};

/// Literal PDF string
pub fn text(s: &str) -> Object {
    Object::String(s.as_bytes().to_vec(), StringFormat::Literal)
}

/// Builds a document with a flat page tree and an optional AcroForm
pub struct FormBuilder {
    doc: Document,
    pages_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fields: Vec<Object>,
}

impl FormBuilder {
    pub fn new(page_count: usize) -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let page_ids = (0..page_count)
            .map(|_| {
                let mut page = Dictionary::new();
                page.set("Type", Object::Name(b"Page".to_vec()));
                page.set("Parent", Object::Reference(pages_id));
                page.set(
                    "MediaBox",
                    Object::Array(
                        [0, 0, 612, 792].iter().map(|&v| Object::Integer(v)).collect(),
                    ),
                );
                doc.add_object(Object::Dictionary(page))
            })
            .collect();

        Self {
            doc,
            pages_id,
            page_ids,
            fields: Vec::new(),
        }
    }

    pub fn page(&self, index: usize) -> ObjectId {
        self.page_ids[index]
    }

    /// Widget annotation dictionary on `page` (no /P when `None`)
    pub fn widget(&self, page: Option<usize>, rect: [f64; 4], flags: Option<i64>) -> Dictionary {
        let mut widget = Dictionary::new();
        widget.set("Type", Object::Name(b"Annot".to_vec()));
        widget.set("Subtype", Object::Name(b"Widget".to_vec()));
        widget.set(
            "Rect",
            Object::Array(rect.iter().map(|&v| Object::Real(v as _)).collect()),
        );
        if let Some(index) = page {
            widget.set("P", Object::Reference(self.page(index)));
        }
        if let Some(flags) = flags {
            widget.set("F", Object::Integer(flags));
        }
        widget
    }

    /// Add an arbitrary top-level field dictionary
    pub fn add_field(&mut self, field: Dictionary) -> ObjectId {
        let id = self.doc.add_object(Object::Dictionary(field));
        self.fields.push(Object::Reference(id));
        id
    }

    /// Field whose own dictionary is its only widget
    pub fn add_single_field(&mut self, name: &str, value: Option<Object>, mut widget: Dictionary) -> ObjectId {
        widget.set("T", text(name));
        if let Some(value) = value {
            widget.set("V", value);
        }
        self.add_field(widget)
    }

    /// Field with one widget per entry in /Kids
    pub fn add_kids_field(&mut self, name: &str, value: Option<Object>, kids: Vec<Dictionary>) -> ObjectId {
        let field_id = self.doc.new_object_id();
        let kid_refs: Vec<Object> = kids
            .into_iter()
            .map(|mut kid| {
                kid.set("Parent", Object::Reference(field_id));
                Object::Reference(self.doc.add_object(Object::Dictionary(kid)))
            })
            .collect();

        let mut field = Dictionary::new();
        field.set("T", text(name));
        field.set("Kids", Object::Array(kid_refs));
        if let Some(value) = value {
            field.set("V", value);
        }
        self.doc.objects.insert(field_id, Object::Dictionary(field));
        self.fields.push(Object::Reference(field_id));
        field_id
    }

    /// Document with an AcroForm listing every added field
    pub fn build(self) -> Document {
        let mut acroform = Dictionary::new();
        acroform.set("Fields", Object::Array(self.fields.clone()));
        self.finish(Some(acroform))
    }

    /// Document with the given AcroForm dictionary, ignoring added fields
    pub fn build_with_acroform(self, acroform: Dictionary) -> Document {
        self.finish(Some(acroform))
    }

    /// Document whose catalog has no /AcroForm
    pub fn build_without_form(self) -> Document {
        self.finish(None)
    }

    fn finish(mut self, acroform: Option<Dictionary>) -> Document {
        let kids: Vec<Object> = self.page_ids.iter().map(|&id| Object::Reference(id)).collect();
        let mut pages = Dictionary::new();
        pages.set("Type", Object::Name(b"Pages".to_vec()));
        pages.set("Count", Object::Integer(self.page_ids.len() as i64));
        pages.set("Kids", Object::Array(kids));
        self.doc.objects.insert(self.pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        if let Some(acroform) = acroform {
            let acroform_id = self.doc.add_object(Object::Dictionary(acroform));
            catalog.set("AcroForm", Object::Reference(acroform_id));
        }
        let catalog_id = self.doc.add_object(Object::Dictionary(catalog));
        self.doc.trailer.set("Root", Object::Reference(catalog_id));

        self.doc
    }
}
