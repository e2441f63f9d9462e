//! Namespace-aware traversal of WordprocessingML document XML.
//!
//! Every query takes a [`Namespaces`] lookup context and a qualified name
//! such as `"w:p"`. Names resolve to a namespace URI plus local name, so an
//! element only matches when both agree; unprefixed lookups are rejected.
//!
//! Paragraph, run, and text queries search all descendants rather than
//! direct children. Producers wrap runs in hyperlinks, smart tags, content
//! controls and the like, and those runs still count. A run nested inside
//! another matching container is reported once per enclosing match.

use crate::error::{Error, Result};
use roxmltree::Node;
use std::collections::BTreeMap;

/// WordprocessingML main namespace.
pub const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Office document relationships namespace.
pub const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Prefix to namespace URI mapping used to resolve qualified names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespaces {
    map: BTreeMap<String, String>,
}

impl Namespaces {
    /// Create an empty namespace set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The `w` and `r` prefixes used by Word documents.
    pub fn wordprocessing() -> Self {
        let mut ns = Self::new();
        ns.insert("w", W_NS);
        ns.insert("r", R_NS);
        ns
    }

    /// Map a prefix to a namespace URI, replacing any previous mapping.
    pub fn insert(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.map.insert(prefix.into(), uri.into());
    }

    /// Look up the URI bound to a prefix.
    pub fn uri(&self, prefix: &str) -> Option<&str> {
        self.map.get(prefix).map(String::as_str)
    }

    /// Resolve `prefix:local` into a [`QName`].
    pub fn resolve<'a>(&'a self, name: &'a str) -> Result<QName<'a>> {
        let (prefix, local) = name
            .split_once(':')
            .ok_or_else(|| Error::UnknownNamespacePrefix(name.to_string()))?;
        let uri = self
            .uri(prefix)
            .ok_or_else(|| Error::UnknownNamespacePrefix(name.to_string()))?;
        Ok(QName { uri, local })
    }
}

/// A namespace-qualified name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QName<'a> {
    pub uri: &'a str,
    pub local: &'a str,
}

impl QName<'_> {
    /// Whether a node is an element with this name.
    pub fn matches(&self, node: Node<'_, '_>) -> bool {
        node.is_element()
            && node.tag_name().name() == self.local
            && node.tag_name().namespace() == Some(self.uri)
    }
}

/// A parsed document XML tree.
pub struct DocumentTree<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> DocumentTree<'input> {
    /// Parse document XML text.
    ///
    /// Fails with `MalformedXml` carrying the line and column of the first
    /// well-formedness violation.
    pub fn parse(xml: &'input str) -> Result<Self> {
        let xml = xml.strip_prefix('\u{FEFF}').unwrap_or(xml);
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..roxmltree::ParsingOptions::default()
        };
        let doc = roxmltree::Document::parse_with_options(xml, options)?;
        Ok(Self { doc })
    }

    /// The root element.
    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root_element()
    }

    /// All paragraphs below the root element, in document order.
    pub fn paragraphs(&self, ns: &Namespaces) -> Result<Vec<Node<'_, 'input>>> {
        descendants_named(self.root(), ns, "w:p")
    }
}

impl std::fmt::Debug for DocumentTree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentTree")
            .field("root", &self.root().tag_name().name())
            .finish()
    }
}

/// Every descendant element of `node` (excluding `node`) named `name`,
/// in document order.
pub fn descendants_named<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &Namespaces,
    name: &str,
) -> Result<Vec<Node<'a, 'input>>> {
    let qname = ns.resolve(name)?;
    Ok(node
        .descendants()
        .skip(1)
        .filter(|n| qname.matches(*n))
        .collect())
}

/// First descendant element of `node` named `name`.
pub fn find_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    ns: &Namespaces,
    name: &str,
) -> Result<Option<Node<'a, 'input>>> {
    let qname = ns.resolve(name)?;
    Ok(node.descendants().skip(1).find(|n| qname.matches(*n)))
}

/// Whether any descendant element of `node` is named `name`.
///
/// Presence alone counts; the element's attributes and content are ignored.
pub fn has_descendant_named(node: Node<'_, '_>, ns: &Namespaces, name: &str) -> Result<bool> {
    Ok(find_descendant(node, ns, name)?.is_some())
}

/// Runs within a paragraph, in document order.
pub fn runs<'a, 'input>(
    paragraph: Node<'a, 'input>,
    ns: &Namespaces,
) -> Result<Vec<Node<'a, 'input>>> {
    descendants_named(paragraph, ns, "w:r")
}

/// Concatenated content of every `w:t` below a run. Empty text nodes
/// contribute nothing.
pub fn text_of(run: Node<'_, '_>, ns: &Namespaces) -> Result<String> {
    let mut text = String::new();
    for t in descendants_named(run, ns, "w:t")? {
        if let Some(s) = t.text() {
            text.push_str(s);
        }
    }
    Ok(text)
}

/// Value of a namespace-qualified attribute.
pub fn attribute<'a>(node: Node<'a, '_>, ns: &Namespaces, name: &str) -> Result<Option<&'a str>> {
    let qname = ns.resolve(name)?;
    Ok(node.attribute((qname.uri, qname.local)))
}
