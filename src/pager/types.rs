//! Page type
//!
//! The immutable result of a page request.

use serde::Serialize;

/// A numbered, fixed-size slice of a source's element sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    elements: Vec<T>,
    page_number: usize,
    is_last: bool,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(elements: Vec<T>, page_number: usize, is_last: bool) -> Self {
        Self {
            elements,
            page_number,
            is_last,
        }
    }

    /// Elements of the page, in source order
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Consume the page, returning its elements
    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }

    /// 1-based page number
    pub fn page_number(&self) -> usize {
        self.page_number
    }

    /// True if no elements exist beyond this page
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Number of elements on the page
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the page has no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}
