//! Structural paths: a small, parsed subset of XPath.
//!
//! ```text
//! /project/parent/artifactId                       absolute, names the root
//! resource/capability                              relative to the root
//! plugin[artifactId = 'maven-bundle-plugin']       child-text predicate
//! p[@n = "command-add"]                            attribute predicate
//! ```
//!
//! Tags match on local name, so `project` matches `<pom:project>` too.

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;
use crate::xml::document::{XmlElement, XmlNode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// `[@name = 'value']`
    Attribute { name: String, value: String },
    /// `[child = 'value']`, compared against trimmed text.
    ChildText { name: String, value: String },
}

impl Predicate {
    fn matches(&self, element: &XmlElement) -> bool {
        match self {
            Self::Attribute { name, value } => element.attribute(name) == Some(value.as_str()),
            Self::ChildText { name, value } => element
                .elements()
                .any(|c| c.local_name() == name && c.text().trim() == value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub tag: String,
    pub predicate: Option<Predicate>,
}

impl Segment {
    fn matches(&self, element: &XmlElement) -> bool {
        element.local_name() == self.tag
            && self.predicate.as_ref().is_none_or(|p| p.matches(element))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuralPath {
    absolute: bool,
    segments: Vec<Segment>,
}

impl StructuralPath {
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        text.parse()
    }

    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Child-index chain from the root to the first match in document order.
    ///
    /// An empty chain means the root itself matched.
    pub fn resolve(&self, root: &XmlElement) -> Option<Vec<usize>> {
        if self.absolute {
            let (first, rest) = self.segments.split_first()?;
            if !first.matches(root) {
                return None;
            }
            find(root, rest)
        } else {
            find(root, &self.segments)
        }
    }
}

fn find(element: &XmlElement, segments: &[Segment]) -> Option<Vec<usize>> {
    let Some((head, tail)) = segments.split_first() else {
        return Some(Vec::new());
    };
    element
        .children()
        .iter()
        .enumerate()
        .filter_map(|(i, node)| match node {
            XmlNode::Element(child) if head.matches(child) => Some((i, child)),
            _ => None,
        })
        .find_map(|(i, child)| {
            find(child, tail).map(|mut chain| {
                chain.insert(0, i);
                chain
            })
        })
}

impl FromStr for StructuralPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| DomainError::InvalidStructuralPath {
            path: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (absolute, body) = match trimmed.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if body.is_empty() {
            return Err(invalid("path has no segments"));
        }

        let segments = split_segments(body)
            .ok_or_else(|| invalid("unbalanced brackets or quotes"))?
            .into_iter()
            .map(|raw| parse_segment(raw).map_err(|reason| invalid(&reason)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { absolute, segments })
    }
}

/// Split on `/` outside brackets and quotes.
fn split_segments(body: &str) -> Option<Vec<&str>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '\'' | '"') if depth > 0 => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.checked_sub(1)?,
            (None, '/') if depth == 0 => {
                segments.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 || quote.is_some() {
        return None;
    }
    segments.push(&body[start..]);
    Some(segments)
}

fn parse_segment(raw: &str) -> Result<Segment, String> {
    let raw = raw.trim();
    let (tag, predicate) = match raw.find('[') {
        Some(open) => {
            let inner = raw[open + 1..]
                .strip_suffix(']')
                .ok_or_else(|| format!("text after predicate in '{raw}'"))?;
            (&raw[..open], Some(parse_predicate(inner)?))
        }
        None => (raw, None),
    };

    let tag = tag.trim();
    if tag.is_empty() {
        return Err("empty segment".into());
    }
    if !tag.chars().all(is_name_char) {
        return Err(format!("'{tag}' is not a valid tag name"));
    }

    Ok(Segment {
        tag: tag.to_string(),
        predicate,
    })
}

fn parse_predicate(inner: &str) -> Result<Predicate, String> {
    let (lhs, rhs) = inner
        .split_once('=')
        .ok_or_else(|| format!("predicate '{inner}' has no '='"))?;
    let lhs = lhs.trim();
    let rhs = rhs.trim();

    let value = rhs
        .strip_prefix('\'')
        .and_then(|v| v.strip_suffix('\''))
        .or_else(|| rhs.strip_prefix('"').and_then(|v| v.strip_suffix('"')))
        .ok_or_else(|| format!("predicate value {rhs} must be quoted"))?
        .to_string();

    let (name, is_attribute) = match lhs.strip_prefix('@') {
        Some(name) => (name.trim(), true),
        None => (lhs, false),
    };
    if name.is_empty() || !name.chars().all(is_name_char) {
        return Err(format!("'{lhs}' is not a valid predicate name"));
    }

    let name = name.to_string();
    Ok(if is_attribute {
        Predicate::Attribute { name, value }
    } else {
        Predicate::ChildText { name, value }
    })
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':')
}

impl fmt::Display for StructuralPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 || self.absolute {
                f.write_str("/")?;
            }
            f.write_str(&segment.tag)?;
            match &segment.predicate {
                Some(Predicate::Attribute { name, value }) => write!(f, "[@{name} = '{value}']")?,
                Some(Predicate::ChildText { name, value }) => write!(f, "[{name} = '{value}']")?,
                None => {}
            }
        }
        Ok(())
    }
}
