use crate::domain::{
    entities::descriptor::{ProjectDescriptor, ProjectOptions},
    error::DomainError,
    package::PackageIdentity,
    value_objects::Archetype,
};

/// `(archetype, folder)` in generation order; the parent module comes last.
const SUITE_MODULES: [(Archetype, Option<&str>); 6] = [
    (Archetype::AdvancedChild, Some("addon-advanced")),
    (Archetype::SimpleChild, Some("addon-simple")),
    (Archetype::OsgiBundles, Some("osgi-bundles")),
    (Archetype::Suite, Some("roo-addon-suite")),
    (Archetype::Repository, Some("repository")),
    (Archetype::Parent, None),
];

const SUITE_FOLDER: &str = "roo-addon-suite";
const REPOSITORY_FOLDER: &str = "repository";

/// Ordered module descriptors for a compound suite plus its post-pass targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitePlan {
    package: PackageIdentity,
    modules: Vec<ProjectDescriptor>,
    description: Option<String>,
    display_name: String,
}

impl SuitePlan {
    /// Build the plan. Any folder in `options` is ignored; suite folders
    /// are fixed.
    pub fn new(package: PackageIdentity, options: &ProjectOptions) -> Result<Self, DomainError> {
        let modules = SUITE_MODULES
            .iter()
            .map(|(archetype, folder)| {
                let module_options = ProjectOptions {
                    folder: folder.map(str::to_string),
                    ..options.clone()
                };
                ProjectDescriptor::new(package.clone(), *archetype, &module_options)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let root = ProjectDescriptor::new(
            package.clone(),
            Archetype::Parent,
            &ProjectOptions {
                folder: None,
                ..options.clone()
            },
        )?;

        Ok(Self {
            package,
            modules,
            description: root.description().map(str::to_string),
            display_name: root.display_name().to_string(),
        })
    }

    pub fn package(&self) -> &PackageIdentity {
        &self.package
    }

    pub fn modules(&self) -> &[ProjectDescriptor] {
        &self.modules
    }

    /// Shared files copied to the generation root after all modules.
    pub fn root_files(&self) -> &'static [&'static str] {
        &["suite-dev"]
    }

    /// Module folders whose POMs receive the addon dependencies.
    pub fn dependency_targets(&self) -> [&'static str; 2] {
        [SUITE_FOLDER, REPOSITORY_FOLDER]
    }

    /// Module folder that receives the synthesized manifest.
    pub fn manifest_folder(&self) -> &'static str {
        SUITE_FOLDER
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modules_are_ordered_with_parent_last() {
        let pkg = PackageIdentity::new("com.acme.flightbooking").unwrap();
        let plan = SuitePlan::new(pkg, &ProjectOptions::new().folder("ignored")).unwrap();

        let order: Vec<_> = plan
            .modules()
            .iter()
            .map(|d| (d.archetype(), d.folder()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Archetype::AdvancedChild, Some("addon-advanced")),
                (Archetype::SimpleChild, Some("addon-simple")),
                (Archetype::OsgiBundles, Some("osgi-bundles")),
                (Archetype::Suite, Some("roo-addon-suite")),
                (Archetype::Repository, Some("repository")),
                (Archetype::Parent, None),
            ]
        );
        assert_eq!(plan.display_name(), "com-acme-flightbooking");
        assert_eq!(plan.dependency_targets(), ["roo-addon-suite", "repository"]);
    }
}
