//! Document tree for validation.
//!
//! hOCR files are HTML (often XHTML). The markup is tokenized with
//! `quick-xml` and assembled into an arena of [`Element`]s in document
//! order, each remembering its source line, parent and the end of its
//! subtree. Text content is not kept; the checks only look at structure
//! and attributes.
//!
//! # Example
//!
//! ```
//! use hocr_spec::document::{Document, ParseMode};
//!
//! let doc = Document::parse(
//!     "<html>\n<body>\n<div class='ocr_page'><br></div>\n</body>\n</html>",
//!     ParseMode::Lenient,
//! )
//! .unwrap();
//!
//! let page = doc.elements().iter().find(|e| e.class() == Some("ocr_page")).unwrap();
//! assert_eq!(page.tag(), "div");
//! assert_eq!(page.line(), 3);
//! ```

mod index;

pub use index::DocumentIndex;

use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

/// Position of an element in its [`Document`].
pub type ElementId = usize;

/// Elements that never have content or an end tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

fn lowercase(name: &[u8]) -> String {
    String::from_utf8_lossy(name).to_ascii_lowercase()
}

/// How tolerant the parser is of broken markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Recover from mismatched or missing end tags, bad escapes and
    /// tokenizer errors.
    #[default]
    Lenient,
    /// Reject markup that does not nest properly.
    Strict,
}

/// Markup that could not be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

/// An element of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    line: usize,
    parent: Option<ElementId>,
    /// Exclusive end of this element's subtree in document order.
    end: ElementId,
}

impl Element {
    /// Lower-cased tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Attributes in source order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// The whole `class` attribute value.
    pub fn class(&self) -> Option<&str> {
        self.attr("class")
    }

    /// 1-based line of the start tag.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn parent(&self) -> Option<ElementId> {
        self.parent
    }
}

/// Renders the start tag, e.g. `<span class="ocr_line" title="bbox 0 0 1 1">`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (key, value) in &self.attributes {
            write!(f, " {}=\"{}\"", key, value)?;
        }
        write!(f, ">")
    }
}

/// A parsed document: every element in document (pre-)order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    /// Parse markup into a tree.
    pub fn parse(text: &str, mode: ParseMode) -> Result<Self, ParseError> {
        TreeBuilder::new(text, mode).build()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id]
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Descendants of `id` in document order.
    pub fn descendants(&self, id: ElementId) -> std::ops::Range<ElementId> {
        id + 1..self.elements[id].end
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::successors(self.elements[id].parent, move |&p| self.elements[p].parent)
    }
}

struct TreeBuilder<'a> {
    text: &'a str,
    mode: ParseMode,
    elements: Vec<Element>,
    open: Vec<ElementId>,
    line: usize,
    scanned: usize,
}

impl<'a> TreeBuilder<'a> {
    fn new(text: &'a str, mode: ParseMode) -> Self {
        Self {
            text,
            mode,
            elements: Vec::new(),
            open: Vec::new(),
            line: 1,
            scanned: 0,
        }
    }

    fn build(mut self) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(self.text);
        {
            let config = reader.config_mut();
            config.check_end_names = false;
            config.allow_unmatched_ends = true;
            config.check_comments = false;
            config.allow_dangling_amp = self.mode == ParseMode::Lenient;
        }

        loop {
            let position = reader.buffer_position();
            self.advance_to(position as usize);
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    let id = self.push_element(&e)?;
                    if is_void(&self.elements[id].tag) {
                        self.close(id);
                    } else {
                        self.open.push(id);
                    }
                }
                Ok(Event::Empty(e)) => {
                    let id = self.push_element(&e)?;
                    self.close(id);
                }
                Ok(Event::End(e)) => self.end_tag(&lowercase(e.name().as_ref()))?,
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    self.recover(err.to_string())?;
                    // The tokenizer moves past most errors; stop if it is stuck
                    if reader.buffer_position() == position {
                        break;
                    }
                }
            }
        }
        self.finish()
    }

    fn advance_to(&mut self, position: usize) {
        let position = position.min(self.text.len());
        if position > self.scanned {
            self.line += self.text.as_bytes()[self.scanned..position]
                .iter()
                .filter(|&&b| b == b'\n')
                .count();
            self.scanned = position;
        }
    }

    /// Fail in strict mode, log and carry on in lenient mode.
    fn recover(&self, message: String) -> Result<(), ParseError> {
        match self.mode {
            ParseMode::Strict => Err(ParseError {
                line: self.line,
                message,
            }),
            ParseMode::Lenient => {
                tracing::warn!(line = self.line, "recovering from broken markup: {}", message);
                Ok(())
            }
        }
    }

    fn push_element(&mut self, start: &BytesStart<'_>) -> Result<ElementId, ParseError> {
        let tag = lowercase(start.name().as_ref());
        let mut attributes = Vec::new();
        let mut attrs = start.html_attributes();
        attrs.with_checks(false);
        for attr in attrs {
            let attr = match attr {
                Ok(attr) => attr,
                Err(err) => {
                    self.recover(format!("bad attribute on <{}>: {}", tag, err))?;
                    continue;
                }
            };
            let key = lowercase(attr.key.as_ref());
            let raw = String::from_utf8_lossy(&attr.value).into_owned();
            let value = match quick_xml::escape::unescape(&raw) {
                Ok(value) => value.into_owned(),
                Err(err) => {
                    self.recover(format!("bad escape in attribute '{}': {}", key, err))?;
                    raw
                }
            };
            attributes.push((key, value));
        }

        let id = self.elements.len();
        self.elements.push(Element {
            tag,
            attributes,
            line: self.line,
            parent: self.open.last().copied(),
            end: id + 1,
        });
        Ok(id)
    }

    fn close(&mut self, id: ElementId) {
        self.elements[id].end = self.elements.len();
    }

    fn end_tag(&mut self, name: &str) -> Result<(), ParseError> {
        if is_void(name) {
            return Ok(());
        }
        let matching = self
            .open
            .iter()
            .rposition(|&id| self.elements[id].tag == name);
        match matching {
            Some(pos) if pos + 1 == self.open.len() => {
                if let Some(id) = self.open.pop() {
                    self.close(id);
                }
            }
            Some(pos) => {
                let innermost = self.open[self.open.len() - 1];
                self.recover(format!(
                    "unexpected end tag </{}>, expected </{}>",
                    name, self.elements[innermost].tag
                ))?;
                for id in self.open.split_off(pos).into_iter().rev() {
                    self.close(id);
                }
            }
            None => self.recover(format!("unmatched end tag </{}>", name))?,
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Document, ParseError> {
        if let Some(&id) = self.open.last() {
            let element = &self.elements[id];
            self.recover(format!(
                "unclosed element <{}> opened on line {}",
                element.tag, element.line
            ))?;
        }
        for id in std::mem::take(&mut self.open).into_iter().rev() {
            self.close(id);
        }
        Ok(Document {
            elements: self.elements,
        })
    }
}
