//! Owned, mutable XML tree.
//!
//! Parsing goes through `roxmltree` (read-only) and copies the result into
//! [`XmlElement`] nodes that edit plans can mutate. Whitespace-only text is
//! dropped on load; the serializer re-indents with four spaces.

use std::fmt::Write as _;

use roxmltree::NodeType;

use crate::domain::DomainError;

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";
const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#;
const INDENT: &str = "    ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    Comment(String),
    ProcessingInstruction { target: String, value: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlNode>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder form of [`set_text`](Self::set_text).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: XmlElement) -> Self {
        self.append_child(child);
        self
    }

    /// Qualified name as written, e.g. `xsi:schemaLocation`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local(&self.name)
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    /// Attribute value by qualified or local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .or_else(|| self.attributes.iter().find(|(k, _)| local(k) == name))
            .map(|(_, v)| v.as_str())
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Child elements in document order.
    pub fn elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(e) => Some(e),
            _ => None,
        })
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.elements().find(|e| e.local_name() == name)
    }

    /// Concatenated text content of this element and its descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    /// Replace all children with a single text node.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.children.clear();
        if !text.is_empty() {
            self.children.push(XmlNode::Text(text));
        }
    }

    /// Append after all existing children.
    pub fn append_child(&mut self, child: XmlElement) {
        self.children.push(XmlNode::Element(child));
    }

    pub(crate) fn child_at_mut(&mut self, index: usize) -> Option<&mut XmlElement> {
        match self.children.get_mut(index) {
            Some(XmlNode::Element(e)) => Some(e),
            _ => None,
        }
    }

    /// Follow a chain of child indices.
    pub(crate) fn descend_mut(&mut self, indices: &[usize]) -> Option<&mut XmlElement> {
        indices
            .iter()
            .try_fold(self, |element, &index| element.child_at_mut(index))
    }

    fn has_only_text(&self) -> bool {
        self.children.iter().all(|c| matches!(c, XmlNode::Text(_)))
    }
}

fn local(name: &str) -> &str {
    name.rsplit_once(':').map_or(name, |(_, l)| l)
}

fn collect_text(element: &XmlElement, out: &mut String) {
    for child in &element.children {
        match child {
            XmlNode::Text(t) => out.push_str(t),
            XmlNode::Element(e) => collect_text(e, out),
            XmlNode::Comment(_) | XmlNode::ProcessingInstruction { .. } => {}
        }
    }
}

/// A parsed document: root element plus the comments and processing
/// instructions around it. The XML declaration itself is not kept; the
/// serializer always writes its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    prolog: Vec<XmlNode>,
    root: XmlElement,
    epilog: Vec<XmlNode>,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self {
            prolog: Vec::new(),
            root,
            epilog: Vec::new(),
        }
    }

    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let doc = roxmltree::Document::parse(text).map_err(|e| DomainError::MalformedXml {
            reason: e.to_string(),
        })?;

        let mut prolog = Vec::new();
        let mut epilog = Vec::new();
        let mut seen_root = false;
        for node in doc.root().children() {
            if node.is_element() {
                seen_root = true;
            } else if let Some(misc) = convert_misc(node) {
                if seen_root {
                    epilog.push(misc);
                } else {
                    prolog.push(misc);
                }
            }
        }

        Ok(Self {
            prolog,
            root: convert(doc.root_element()),
            epilog,
        })
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut XmlElement {
        &mut self.root
    }

    pub fn to_xml_string(&self) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str(DECLARATION);
        out.push('\n');
        for node in &self.prolog {
            write_node(&mut out, node, 0);
        }
        write_element(&mut out, &self.root, 0);
        for node in &self.epilog {
            write_node(&mut out, node, 0);
        }
        out
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> XmlElement {
    let mut element = XmlElement::new(qualified_name(&node));

    let inherited: Vec<(Option<&str>, &str)> = node
        .parent_element()
        .map(|p| p.namespaces().map(|ns| (ns.name(), ns.uri())).collect())
        .unwrap_or_default();
    for ns in node.namespaces() {
        if ns.name() == Some("xml") || inherited.contains(&(ns.name(), ns.uri())) {
            continue;
        }
        let key = match ns.name() {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        element.attributes.push((key, ns.uri().to_string()));
    }

    for attr in node.attributes() {
        let name = match attr.namespace() {
            Some(XML_NAMESPACE) => format!("xml:{}", attr.name()),
            Some(uri) => match node.lookup_prefix(uri) {
                Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", attr.name()),
                _ => attr.name().to_string(),
            },
            None => attr.name().to_string(),
        };
        element.attributes.push((name, attr.value().to_string()));
    }

    for child in node.children() {
        match child.node_type() {
            NodeType::Element => element.children.push(XmlNode::Element(convert(child))),
            NodeType::Text => {
                let text = child.text().unwrap_or_default();
                if !text.trim().is_empty() {
                    element.children.push(XmlNode::Text(text.to_string()));
                }
            }
            _ => element.children.extend(convert_misc(child)),
        }
    }

    element
}

/// Comments and processing instructions; `None` for anything else.
fn convert_misc(node: roxmltree::Node<'_, '_>) -> Option<XmlNode> {
    match node.node_type() {
        NodeType::Comment => Some(XmlNode::Comment(node.text().unwrap_or_default().to_string())),
        NodeType::PI => node.pi().map(|pi| XmlNode::ProcessingInstruction {
            target: pi.target.to_string(),
            value: pi.value.map(str::to_string),
        }),
        _ => None,
    }
}

fn qualified_name(node: &roxmltree::Node<'_, '_>) -> String {
    let tag = node.tag_name();
    match tag.namespace().and_then(|uri| node.lookup_prefix(uri)) {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}:{}", tag.name()),
        _ => tag.name().to_string(),
    }
}

fn write_element(out: &mut String, element: &XmlElement, depth: usize) {
    let pad = INDENT.repeat(depth);
    out.push_str(&pad);
    out.push('<');
    out.push_str(&element.name);
    for (name, value) in &element.attributes {
        let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
    }

    if element.children.is_empty() {
        out.push_str("/>\n");
        return;
    }

    if element.has_only_text() {
        out.push('>');
        out.push_str(&escape_text(&element.text()));
        let _ = writeln!(out, "</{}>", element.name);
        return;
    }

    out.push_str(">\n");
    for child in &element.children {
        write_node(out, child, depth + 1);
    }
    let _ = writeln!(out, "{pad}</{}>", element.name);
}

fn write_node(out: &mut String, node: &XmlNode, depth: usize) {
    let pad = INDENT.repeat(depth);
    match node {
        XmlNode::Element(e) => write_element(out, e, depth),
        XmlNode::Text(t) => {
            let _ = writeln!(out, "{pad}{}", escape_text(t.trim()));
        }
        XmlNode::Comment(c) => {
            let _ = writeln!(out, "{pad}<!--{c}-->");
        }
        XmlNode::ProcessingInstruction { target, value: Some(value) } => {
            let _ = writeln!(out, "{pad}<?{target} {value}?>");
        }
        XmlNode::ProcessingInstruction { target, value: None } => {
            let _ = writeln!(out, "{pad}<?{target}?>");
        }
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<?xml-stylesheet type="text/xsl" href="obr2html.xsl"?>
<!-- generated -->
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 http://maven.apache.org/maven-v4_0_0.xsd">
    <modelVersion>4.0.0</modelVersion>
    <!-- coordinates -->
    <groupId>com.example</groupId>
    <name>R&amp;D &lt;tools&gt;</name>
    <dependencies/>
    <?m2e ignore?>
</project>
"#;

    #[test]
    fn parse_keeps_namespaces_and_comments() {
        let doc = XmlDocument::parse(POM).unwrap();
        let root = doc.root();
        assert_eq!(root.name(), "project");
        assert_eq!(root.attribute("xmlns"), Some("http://maven.apache.org/POM/4.0.0"));
        assert!(root.attribute("xsi:schemaLocation").is_some());
        assert_eq!(root.child("name").unwrap().text(), "R&D <tools>");
        assert!(root
            .children()
            .iter()
            .any(|c| matches!(c, XmlNode::Comment(t) if t.trim() == "coordinates")));
    }

    #[test]
    fn serialization_is_structurally_lossless() {
        let doc = XmlDocument::parse(POM).unwrap();
        let text = doc.to_xml_string();
        assert!(text.starts_with(DECLARATION));
        assert!(text.contains("    <name>R&amp;D &lt;tools&gt;</name>\n"));
        assert!(text.contains("    <dependencies/>\n"));
        assert!(text.contains("<!-- generated -->"));
        assert!(text.contains(
            "?>\n<?xml-stylesheet type=\"text/xsl\" href=\"obr2html.xsl\"?>\n<!-- generated -->\n<project"
        ));
        assert!(text.contains("    <?m2e ignore?>\n"));
        assert_eq!(XmlDocument::parse(&text).unwrap(), doc);
    }

    #[test]
    fn stylesheet_instruction_survives_reload() {
        let src = "<?xml version=\"1.0\"?>\n<?xml-stylesheet type=\"text/xsl\" href=\"obr2html.xsl\"?>\n<repository><resource/></repository>";
        let text = XmlDocument::parse(src).unwrap().to_xml_string();
        assert_eq!(
            text,
            format!(
                "{DECLARATION}\n<?xml-stylesheet type=\"text/xsl\" href=\"obr2html.xsl\"?>\n<repository>\n    <resource/>\n</repository>\n"
            )
        );
    }

    #[test]
    fn nested_children_are_indented() {
        let root = XmlElement::new("dependencies").with_child(
            XmlElement::new("dependency")
                .with_child(XmlElement::new("groupId").with_text("org.demo"))
                .with_child(XmlElement::new("version").with_text("${project.parent.version}")),
        );
        let text = XmlDocument::new(root).to_xml_string();
        assert!(text.ends_with(
            "<dependencies>\n    <dependency>\n        <groupId>org.demo</groupId>\n        <version>${project.parent.version}</version>\n    </dependency>\n</dependencies>\n"
        ));
    }

    #[test]
    fn attributes_are_escaped() {
        let root = XmlElement::new("p")
            .with_attribute("n", "command-add")
            .with_attribute("v", "say \"hi\" & <bye>");
        let text = XmlDocument::new(root).to_xml_string();
        assert!(text.contains(r#"<p n="command-add" v="say &quot;hi&quot; &amp; &lt;bye>"/>"#));
        let back = XmlDocument::parse(&text).unwrap();
        assert_eq!(back.root().attribute("v"), Some("say \"hi\" & <bye>"));
    }

    #[test]
    fn set_text_replaces_children() {
        let mut el = XmlElement::new("description")
            .with_child(XmlElement::new("b").with_text("old"));
        el.set_text("new");
        assert_eq!(el.text(), "new");
        assert_eq!(el.elements().count(), 0);
    }

    #[test]
    fn malformed_input_is_reported() {
        assert!(matches!(
            XmlDocument::parse("<project><name></project>"),
            Err(DomainError::MalformedXml { .. })
        ));
    }
}
