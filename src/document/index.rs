//! Per-run lookup tables over a [`Document`].
//!
//! Built once per validation so every check answers its class, tag and
//! descendant queries without rescanning the tree. All lists are in
//! document order, which keeps diagnostics in the same order a full scan
//! would produce.

use std::collections::HashMap;

use super::{Document, Element, ElementId};

/// Class, tag and hOCR-element indexes of one document.
#[derive(Debug)]
pub struct DocumentIndex<'d> {
    document: &'d Document,
    by_class: HashMap<&'d str, Vec<ElementId>>,
    by_tag: HashMap<&'d str, Vec<ElementId>>,
    ocr_elements: Vec<ElementId>,
}

impl<'d> DocumentIndex<'d> {
    pub fn build(document: &'d Document) -> Self {
        let mut by_class: HashMap<&str, Vec<ElementId>> = HashMap::new();
        let mut by_tag: HashMap<&str, Vec<ElementId>> = HashMap::new();
        let mut ocr_elements = Vec::new();

        for (id, element) in document.elements().iter().enumerate() {
            by_tag.entry(element.tag()).or_default().push(id);
            if let Some(class) = element.class() {
                by_class.entry(class).or_default().push(id);
                if class.starts_with("ocr") {
                    ocr_elements.push(id);
                }
            }
        }

        Self {
            document,
            by_class,
            by_tag,
            ocr_elements,
        }
    }

    pub fn document(&self) -> &'d Document {
        self.document
    }

    pub fn element(&self, id: ElementId) -> &'d Element {
        self.document.element(id)
    }

    /// Elements whose whole `class` value equals `class`.
    pub fn with_class(&self, class: &str) -> &[ElementId] {
        self.by_class.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn with_tag(&self, tag: &str) -> &[ElementId] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Elements whose `class` value starts with `ocr`.
    pub fn ocr_elements(&self) -> &[ElementId] {
        &self.ocr_elements
    }

    /// First descendant of `id` (document order) with exactly this class.
    pub fn first_descendant_with_class(&self, id: ElementId, class: &str) -> Option<ElementId> {
        let candidates = self.with_class(class);
        let subtree = self.document.descendants(id);
        let start = candidates.partition_point(|&c| c < subtree.start);
        candidates
            .get(start)
            .copied()
            .filter(|c| subtree.contains(c))
    }

    /// Number of ancestors of `id` with exactly this class.
    pub fn count_ancestors_with_class(&self, id: ElementId, class: &str) -> usize {
        self.document
            .ancestors(id)
            .filter(|&a| self.document.element(a).class() == Some(class))
            .count()
    }
}
