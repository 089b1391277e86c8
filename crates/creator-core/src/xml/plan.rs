//! Declarative edit plans.
//!
//! A plan is an ordered list of `(path, operation, presence)` steps applied
//! to one document. Steps run in order; the first required step whose path
//! does not resolve aborts the whole plan.

use tracing::debug;

use crate::domain::DomainError;
use crate::xml::{
    document::{XmlDocument, XmlElement},
    path::StructuralPath,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOp {
    /// Replace the node's content with text.
    SetText(String),
    /// Put text in front of the node's existing text.
    PrependText(String),
    SetAttribute { name: String, value: String },
    /// Append a leaf element (tag with text or attributes).
    AppendChild(XmlElement),
    /// Append an element with nested children.
    AppendChildTree(XmlElement),
}

impl EditOp {
    fn apply(&self, target: &mut XmlElement) {
        match self {
            Self::SetText(text) => target.set_text(text.clone()),
            Self::PrependText(prefix) => {
                let text = format!("{prefix}{}", target.text());
                target.set_text(text);
            }
            Self::SetAttribute { name, value } => target.set_attribute(name.clone(), value.clone()),
            Self::AppendChild(child) | Self::AppendChildTree(child) => {
                target.append_child(child.clone())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStep {
    pub path: StructuralPath,
    pub op: EditOp,
    pub presence: Presence,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlEditPlan {
    steps: Vec<EditStep>,
}

impl XmlEditPlan {
    pub fn builder() -> XmlEditPlanBuilder {
        XmlEditPlanBuilder::default()
    }

    pub fn steps(&self) -> &[EditStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Append another plan's steps after this one's.
    pub fn extend(&mut self, other: XmlEditPlan) {
        self.steps.extend(other.steps);
    }

    /// Apply every step in order, returning how many took effect.
    pub fn apply(&self, document: &mut XmlDocument) -> Result<usize, DomainError> {
        let mut applied = 0;
        for step in &self.steps {
            let root = document.root_mut();
            let target = step
                .path
                .resolve(root)
                .and_then(|chain| root.descend_mut(&chain));

            match (target, step.presence) {
                (Some(element), _) => {
                    step.op.apply(element);
                    applied += 1;
                }
                (None, Presence::Required) => {
                    return Err(DomainError::RequiredNodeMissing {
                        path: step.path.to_string(),
                    });
                }
                (None, Presence::Optional) => {
                    debug!(path = %step.path, "Optional node absent, step skipped");
                }
            }
        }
        Ok(applied)
    }
}

/// Parse `text`, apply `plan`, serialize once.
pub fn apply_plan(text: &str, plan: &XmlEditPlan) -> Result<String, DomainError> {
    let mut document = XmlDocument::parse(text)?;
    plan.apply(&mut document)?;
    Ok(document.to_xml_string())
}

/// Collects steps; the first path parse error is reported by [`build`](Self::build).
#[derive(Debug, Default)]
pub struct XmlEditPlanBuilder {
    steps: Vec<EditStep>,
    error: Option<DomainError>,
}

impl XmlEditPlanBuilder {
    pub fn step(mut self, path: &str, op: EditOp, presence: Presence) -> Self {
        if self.error.is_some() {
            return self;
        }
        match StructuralPath::parse(path) {
            Ok(path) => self.steps.push(EditStep { path, op, presence }),
            Err(e) => self.error = Some(e),
        }
        self
    }

    pub fn set_text(self, path: &str, text: impl Into<String>) -> Self {
        self.step(path, EditOp::SetText(text.into()), Presence::Required)
    }

    pub fn prepend_text(self, path: &str, prefix: impl Into<String>) -> Self {
        self.step(path, EditOp::PrependText(prefix.into()), Presence::Required)
    }

    pub fn set_attribute(
        self,
        path: &str,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        let op = EditOp::SetAttribute {
            name: name.into(),
            value: value.into(),
        };
        self.step(path, op, Presence::Required)
    }

    pub fn append_child(self, path: &str, child: XmlElement, presence: Presence) -> Self {
        self.step(path, EditOp::AppendChild(child), presence)
    }

    pub fn append_tree(self, path: &str, tree: XmlElement, presence: Presence) -> Self {
        self.step(path, EditOp::AppendChildTree(tree), presence)
    }

    pub fn build(self) -> Result<XmlEditPlan, DomainError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(XmlEditPlan { steps: self.steps }),
        }
    }
}
