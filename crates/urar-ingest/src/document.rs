use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use tracing::debug;

static TABLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table").expect("valid table selector"));

/// Leaf elements considered by the contextual fallback scan. Appraisal
/// templates put loose values in table cells, paragraphs, and spans.
static CONTEXT_LEAF_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td, p, span").expect("valid leaf selector"));

/// Element names that delimit a contextual section around a leaf.
const CONTEXT_ANCESTORS: &[&str] = &["table", "div", "section"];

/// Terminal failures when turning a file path into a [`Document`].
///
/// A load failure is fatal to the validation run; there are no retries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid UTF-8")]
    Decode { path: PathBuf },
    #[error("document contains no parseable markup")]
    Parse,
}

/// Flattened text of one `<table>`, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableText {
    pub index: usize,
    pub text: String,
}

/// One string-bearing node's text, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeText {
    pub index: usize,
    pub text: String,
}

/// A leaf element's own text paired with the text of its nearest enclosing
/// table/div/section. Used when a fact's label and value live in separate
/// nodes and only the surrounding section names what the value means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextElement {
    pub index: usize,
    pub text: String,
    pub context: String,
}

/// An immutable parsed appraisal report.
///
/// Produced once per validation run and read-only afterwards, so evaluators
/// may share it freely.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Read and parse an HTML report from disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| LoadError::Decode {
            path: path.to_path_buf(),
        })?;
        let document = Self::parse(&text)?;
        debug!(
            path = %path.display(),
            tables = document.tables().len(),
            "loaded appraisal report"
        );
        Ok(document)
    }

    /// Parse an in-memory HTML string.
    ///
    /// The parser is error-recovering, so the only input it cannot produce a
    /// usable tree for is an empty one.
    pub fn parse(html: &str) -> Result<Self, LoadError> {
        if html.trim().is_empty() {
            return Err(LoadError::Parse);
        }
        Ok(Self {
            html: Html::parse_document(html),
        })
    }

    /// Flattened text of every table, in document order. Nested tables
    /// appear both on their own and inside their parent's text, mirroring
    /// how the report template nests its grids.
    pub fn tables(&self) -> Vec<TableText> {
        self.html
            .select(&TABLE_SELECTOR)
            .enumerate()
            .map(|(index, element)| TableText {
                index,
                text: flatten_element_text(element),
            })
            .collect()
    }

    /// Every non-empty string-bearing node, whitespace-collapsed, in
    /// document order.
    pub fn strings(&self) -> Vec<NodeText> {
        let mut nodes = Vec::new();
        for node in self.html.root_element().descendants() {
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let text = collapse_ws(text);
            if text.is_empty() {
                continue;
            }
            nodes.push(NodeText {
                index: nodes.len(),
                text,
            });
        }
        nodes
    }

    /// Leaf td/p/span elements that sit inside a table, div, or section,
    /// paired with that section's flattened text.
    pub fn contextual_elements(&self) -> Vec<ContextElement> {
        let mut elements = Vec::new();
        for element in self.html.select(&CONTEXT_LEAF_SELECTOR) {
            let Some(ancestor) = nearest_context_ancestor(element) else {
                continue;
            };
            let text = flatten_element_text(element);
            if text.is_empty() {
                continue;
            }
            elements.push(ContextElement {
                index: elements.len(),
                text,
                context: flatten_element_text(ancestor),
            });
        }
        elements
    }
}

/// Join an element's descendant text with single spaces, collapsing runs of
/// whitespace. Matches how the report's grid text reads when linearized.
fn flatten_element_text(element: ElementRef<'_>) -> String {
    let joined = element.text().collect::<Vec<_>>().join(" ");
    collapse_ws(&joined)
}

fn nearest_context_ancestor(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| CONTEXT_ANCESTORS.contains(&ancestor.value().name()))
}

/// Collapse all whitespace runs to single spaces and trim the ends.
pub fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
