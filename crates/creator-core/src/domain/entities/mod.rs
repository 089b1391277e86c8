pub mod common;
pub mod descriptor;
pub mod suite;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use descriptor::{
    I18nRequest, NamedAsset, ProjectDescriptor, ProjectOptions, WrapperCoordinates,
    WrapperRequest,
};
pub use suite::SuitePlan;
