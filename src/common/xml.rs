//! Owned XML element tree.
//!
//! The document part and its embedded OMML regions are small (a handful of
//! megabytes at most), so instead of streaming handlers this module builds a
//! plain owned tree once and lets the formula and document mappers walk it
//! recursively. Namespace prefixes are kept verbatim in element names
//! (`w:p`, `m:oMath`); lookups match on the local name.

use crate::common::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Nesting limit, generous for real documents.
const MAX_DEPTH: usize = 256;

/// A single XML element with its attributes and ordered children.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// Element name as written in the source, prefix included (`m:oMath`).
    pub name: String,
    /// Attribute name/value pairs in document order, prefixes included.
    pub attributes: Vec<(String, String)>,
    /// Child elements and text, in document order.
    pub children: Vec<XmlNode>,
}

/// A child of an [`XmlElement`].
#[derive(Debug, Clone, PartialEq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
}

impl XmlElement {
    /// The name without its namespace prefix: `m:oMath` → `oMath`.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Look up an attribute by local name (`val` matches both `val` and `m:val`).
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| local_part(name) == local)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over child elements only, skipping text.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|child| match child {
            XmlNode::Element(elem) => Some(elem),
            XmlNode::Text(_) => None,
        })
    }

    /// First child element with the given local name.
    pub fn child(&self, local: &str) -> Option<&XmlElement> {
        self.elements().find(|elem| elem.local_name() == local)
    }

    /// All child elements with the given local name, in document order.
    pub fn children_named<'a>(&'a self, local: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.elements().filter(move |elem| elem.local_name() == local)
    }

    /// Concatenated direct text children.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let XmlNode::Text(text) = child {
                out.push_str(text);
            }
        }
        out
    }
}

/// Parse an XML string into its root element.
pub fn parse(xml: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::with_capacity(1024);
    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(Error::Xml(format!(
                        "maximum XML depth {} exceeded",
                        MAX_DEPTH
                    )));
                }
                stack.push(element_from_start(e)?);
            },
            Ok(Event::Empty(ref e)) => {
                let elem = element_from_start(e)?;
                attach(&mut stack, &mut root, elem)?;
            },
            Ok(Event::End(_)) => {
                let elem = stack.pop().ok_or_else(|| {
                    Error::Xml("closing tag without matching opening tag".to_string())
                })?;
                attach(&mut stack, &mut root, elem)?;
            },
            Ok(Event::Text(ref e)) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = std::str::from_utf8(e.as_ref())
                        .map_err(|e| Error::Xml(e.to_string()))?;
                    parent
                        .children
                        .push(XmlNode::Text(unescape_entities(raw)));
                }
            },
            Ok(Event::CData(ref e)) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = std::str::from_utf8(e.as_ref())
                        .map_err(|e| Error::Xml(e.to_string()))?;
                    // CDATA content is already literal
                    parent.children.push(XmlNode::Text(raw.to_string()));
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::Xml(format!(
                    "XML parsing error at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            },
            _ => {}, // Skip comments, processing instructions, declarations
        }
        buf.clear();
    }

    if !stack.is_empty() {
        return Err(Error::Xml(format!(
            "unclosed elements detected, final depth: {}",
            stack.len()
        )));
    }

    root.ok_or_else(|| Error::Xml("no root element found".to_string()))
}

fn element_from_start(start: &BytesStart) -> Result<XmlElement> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| Error::Xml(e.to_string()))?
        .to_string();

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| Error::Xml(e.to_string()))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::Xml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }

    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [XmlElement],
    root: &mut Option<XmlElement>,
    elem: XmlElement,
) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(XmlNode::Element(elem)),
        None => {
            if root.is_some() {
                return Err(Error::Xml("multiple root elements".to_string()));
            }
            *root = Some(elem);
        },
    }
    Ok(())
}

fn local_part(name: &str) -> &str {
    match name.split_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

/// Unescape the predefined XML entities in raw text content.
fn unescape_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
