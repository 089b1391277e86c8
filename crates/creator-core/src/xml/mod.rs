//! XML document editor.
//!
//! Load a document into a mutable tree, resolve structural paths, apply an
//! [`XmlEditPlan`], serialize once. Used for POM, OBR and assembly
//! descriptors and for read-modify-write of already generated POMs.

pub mod document;
pub mod path;
pub mod plan;

pub use document::{XmlDocument, XmlElement, XmlNode};
pub use path::{Predicate, Segment, StructuralPath};
pub use plan::{EditOp, EditStep, Presence, XmlEditPlan, XmlEditPlanBuilder, apply_plan};
