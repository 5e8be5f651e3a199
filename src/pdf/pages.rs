//! Page identity and page-index resolution

use std::fmt;
use lopdf::{Document, ObjectId};

/// Opaque page identity: object number and generation of the page object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId {
    number: u32,
    generation: u16,
}

impl PageId {
    /// Identity of a direct (non-indirect) page dictionary. Object numbers
    /// start at 1, so this never matches a page in the page tree.
    pub const DIRECT: PageId = PageId { number: 0, generation: 0 };

    pub fn new(number: u32, generation: u16) -> Self {
        Self { number, generation }
    }
}

impl From<ObjectId> for PageId {
    fn from((number, generation): ObjectId) -> Self {
        Self::new(number, generation)
    }
}

/// Zero-based page index, or unresolved.
///
/// Displays as `-1` when unresolved and orders before every resolved index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageIndex(Option<usize>);

impl PageIndex {
    pub const UNRESOLVED: PageIndex = PageIndex(None);

    pub fn new(index: usize) -> Self {
        PageIndex(Some(index))
    }
}

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{}", index),
            None => write!(f, "-1"),
        }
    }
}

/// The document's pages in reading order
#[derive(Debug, Clone, Default)]
pub struct PageList {
    ids: Vec<PageId>,
}

impl PageList {
    pub fn new(ids: Vec<PageId>) -> Self {
        Self { ids }
    }

    /// Collect page ids from the document's page tree
    pub fn from_document(doc: &Document) -> Self {
        // get_pages() is keyed by 1-based page number, so values are in order
        let ids = doc.get_pages().into_values().map(PageId::from).collect();
        Self { ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Index of the page a widget points at.
    ///
    /// Linear scan; unresolved when `page` is absent or matches no page.
    pub fn resolve(&self, page: Option<PageId>) -> PageIndex {
        page.and_then(|id| self.ids.iter().position(|&candidate| candidate == id))
            .map_or(PageIndex::UNRESOLVED, PageIndex::new)
    }
}
