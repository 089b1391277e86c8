//! Edit plans for generated descriptors.
//!
//! Each function turns domain inputs into an [`XmlEditPlan`]; none of them
//! touch a document. The orchestrator pairs a plan with a template (or an
//! existing file) and hands both to the XML editor.

use crate::domain::{
    catalog::{ArchetypeSpec, CapabilityCommands, DescriptionRule},
    entities::{ProjectDescriptor, WrapperCoordinates},
    error::DomainError,
    package::PackageIdentity,
};
use crate::xml::{Presence, XmlEditPlan, XmlElement};

const PARENT_VERSION: &str = "${project.parent.version}";

/// Addon modules every suite aggregates, in injection order.
pub const SUITE_ADDONS: [&str; 2] = ["addon-simple", "addon-advanced"];

/// POM coordinates, parent linkage, name and description.
pub fn pom_plan(
    spec: &ArchetypeSpec,
    descriptor: &ProjectDescriptor,
    wrapped: Option<&WrapperCoordinates>,
) -> Result<XmlEditPlan, DomainError> {
    let pkg = descriptor.identity();
    let folder = descriptor.folder();
    let artifact_id =
        spec.artifact
            .artifact_id(pkg, folder, wrapped.map(|w| w.artifact_id.as_str()))?;

    let mut builder = XmlEditPlan::builder();
    if let Some(parent) = spec.linkage.parent_artifact(pkg) {
        builder = builder.set_text("/project/parent/artifactId", parent);
    }
    builder = builder
        .set_text("/project/artifactId", artifact_id)
        .set_text(spec.linkage.group_id_path(), pkg.as_str());

    builder = match folder {
        Some(folder) => builder.set_text(
            "/project/name",
            format!("{} - {folder}", descriptor.display_name()),
        ),
        None => {
            let builder = builder.set_text("/project/name", descriptor.display_name());
            match (descriptor.description(), spec.description) {
                (Some(d), DescriptionRule::Replace) => builder.set_text("/project/description", d),
                (Some(d), DescriptionRule::Prefix) => {
                    builder.prepend_text("/project/description", format!("{d} "))
                }
                (None, _) => builder,
            }
        }
    };

    let mut plan = builder.build()?;
    if let Some(coordinates) = wrapped {
        plan.extend(wrapper_plan(coordinates, pkg)?);
    }
    Ok(plan)
}

/// Capability entries appended to an OBR descriptor, if it has a capability.
pub fn capability_plan(
    commands: &CapabilityCommands,
    package: &PackageIdentity,
) -> Result<XmlEditPlan, DomainError> {
    commands
        .entries(package)
        .into_iter()
        .fold(XmlEditPlan::builder(), |builder, (name, value)| {
            builder.append_child(
                "resource/capability",
                XmlElement::new("p")
                    .with_attribute("n", name)
                    .with_attribute("v", value),
                Presence::Optional,
            )
        })
        .build()
}

/// Repository assembly: output directory plus the suite's artifacts.
///
/// The includes use the fixed `roo-addon-suite` suffix for the suite module
/// regardless of the folder the suite was generated in.
pub fn assembly_plan(package: &PackageIdentity) -> Result<XmlEditPlan, DomainError> {
    let pkg = package.as_str();
    let includes = ["addon-advanced", "addon-simple", "roo-addon-suite"];

    includes
        .iter()
        .fold(
            XmlEditPlan::builder().set_text(
                "/assembly/moduleSets/moduleSet/binaries/outputDirectory",
                format!("{}/${{module.artifactId}}/${{module.version}}", package.path()),
            ),
            |builder, suffix| {
                builder.append_child(
                    "moduleSets/moduleSet/includes",
                    XmlElement::new("include").with_text(format!("{pkg}:{}", package.qualify(suffix))),
                    Presence::Optional,
                )
            },
        )
        .build()
}

/// `<dependency>` entries for the suite's addons under `dependencies`.
pub fn addon_dependencies_plan(package: &PackageIdentity) -> Result<XmlEditPlan, DomainError> {
    SUITE_ADDONS
        .iter()
        .fold(XmlEditPlan::builder(), |builder, addon| {
            let dependency = XmlElement::new("dependency")
                .with_child(XmlElement::new("groupId").with_text(package.as_str()))
                .with_child(XmlElement::new("artifactId").with_text(package.qualify(addon)))
                .with_child(XmlElement::new("version").with_text(PARENT_VERSION));
            builder.append_tree("dependencies", dependency, Presence::Optional)
        })
        .build()
}

/// Wrapped library coordinates and bundle properties.
pub fn wrapper_plan(
    coordinates: &WrapperCoordinates,
    package: &PackageIdentity,
) -> Result<XmlEditPlan, DomainError> {
    coordinates.validate()?;

    let mut builder = XmlEditPlan::builder()
        .set_text("/project/version", format!("{}.0001", coordinates.version))
        .set_text(
            "/project/dependencies/dependency/groupId",
            coordinates.group_id.as_str(),
        )
        .set_text(
            "/project/dependencies/dependency/artifactId",
            coordinates.artifact_id.as_str(),
        )
        .set_text(
            "/project/dependencies/dependency/version",
            coordinates.version.as_str(),
        )
        .set_text("/project/properties/pkgArtifactId", coordinates.artifact_id.as_str())
        .set_text("/project/properties/pkgVersion", coordinates.version.as_str())
        .set_text("/project/properties/pkgVendor", coordinates.vendor_name.as_str())
        .set_text("/project/properties/pkgLicense", coordinates.license_url.as_str())
        .set_text("/project/properties/repo.folder", package.path());

    if let Some(doc_url) = non_empty(coordinates.doc_url.as_deref()) {
        builder = builder.set_text("/project/properties/pkgDocUrl", doc_url);
    }
    if let Some(imports) = non_empty(coordinates.osgi_imports.as_deref()) {
        builder = builder.append_child(
            "/project/build/plugins/plugin[artifactId = 'maven-bundle-plugin']/configuration/instructions",
            XmlElement::new("Import-Package").with_text(imports),
            Presence::Required,
        );
    }

    builder.build()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
