//! Archetype catalog.
//!
//! # Design
//!
//! Every archetype is described exactly once by an [`ArchetypeSpec`] in
//! [`ARCHETYPE_REGISTRY`]. The orchestrator never matches on [`Archetype`]
//! to decide what to write: template bundle, install files, parent linkage,
//! artifact naming and descriptor patches are all data read from this table.
//!
//! # Adding a New Archetype
//!
//! 1. Add a variant to [`Archetype`] in `value_objects.rs`
//! 2. Add one [`ArchetypeSpec`] entry to [`ARCHETYPE_REGISTRY`]
//! 3. Ship its templates in the template store

use crate::domain::{error::DomainError, package::PackageIdentity, value_objects::Archetype};

// ── Linkage ──────────────────────────────────────────────────────────────────

/// How a module's POM points at its Maven parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkageRule {
    /// No parent; the group id lives at `/project/groupId`.
    Standalone,
    /// Parent is the suite root POM (`<pkg>.root`).
    ToRoot,
    /// Parent is the OSGi bundle aggregator (`<pkg>.osgi.bundles`).
    ToAggregator,
}

impl LinkageRule {
    /// Artifact id of the parent POM, if any.
    pub fn parent_artifact(&self, package: &PackageIdentity) -> Option<String> {
        match self {
            Self::Standalone => None,
            Self::ToRoot => Some(package.qualify("root")),
            Self::ToAggregator => Some(package.qualify("osgi.bundles")),
        }
    }

    /// Structural path of the group id this archetype must set.
    pub fn group_id_path(&self) -> &'static str {
        match self {
            Self::Standalone => "/project/groupId",
            Self::ToRoot | Self::ToAggregator => "/project/parent/groupId",
        }
    }
}

// ── Artifact naming ──────────────────────────────────────────────────────────

/// How the module's own artifact id is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactNaming {
    /// The package itself.
    Package,
    /// `<pkg>.<suffix>`.
    Suffix(&'static str),
    /// `<pkg>.<folder>`; requires a folder.
    Folder,
    /// `<pkg>.<wrapped artifact id>`; requires wrapper coordinates.
    Wrapped,
}

impl ArtifactNaming {
    pub fn artifact_id(
        &self,
        package: &PackageIdentity,
        folder: Option<&str>,
        wrapped: Option<&str>,
    ) -> Result<String, DomainError> {
        match self {
            Self::Package => Ok(package.to_string()),
            Self::Suffix(suffix) => Ok(package.qualify(suffix)),
            Self::Folder => folder
                .map(|f| package.qualify(f))
                .ok_or(DomainError::MissingRequiredField { field: "folder" }),
            Self::Wrapped => wrapped
                .map(|a| package.qualify(a))
                .ok_or(DomainError::MissingRequiredField {
                    field: "artifact_id",
                }),
        }
    }
}

// ── Install files ────────────────────────────────────────────────────────────

/// Where an installed template lands and how it is renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `src/main/java/<pkg>/<AppName><file>`.
    Source,
    /// `src/main/java/<pkg>/Roo<AppName>.java`.
    Annotation,
    /// `src/main/resources/<pkg>/<file>`, name unchanged.
    Resource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstallFile {
    /// Role name; the template is `<bundle>/<template>-template`.
    pub template: &'static str,
    pub kind: FileKind,
}

const fn source(template: &'static str) -> InstallFile {
    InstallFile {
        template,
        kind: FileKind::Source,
    }
}

const fn resource(template: &'static str) -> InstallFile {
    InstallFile {
        template,
        kind: FileKind::Resource,
    }
}

// ── Descriptor patches ───────────────────────────────────────────────────────

/// Shell commands an addon advertises in its OBR capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityCommands {
    /// `(name, verb)` pairs; the value is `<lower app name> <verb>`.
    Synthesized(&'static [(&'static str, &'static str)]),
    /// `(name, value)` pairs written verbatim.
    Fixed(&'static [(&'static str, &'static str)]),
}

impl CapabilityCommands {
    /// Resolve to `(n, v)` attribute pairs for the given package.
    pub fn entries(&self, package: &PackageIdentity) -> Vec<(String, String)> {
        match self {
            Self::Synthesized(verbs) => {
                let prefix = package.app_name_lower();
                verbs
                    .iter()
                    .map(|(name, verb)| (name.to_string(), format!("{prefix} {verb}")))
                    .collect()
            }
            Self::Fixed(pairs) => pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// Extra descriptors written after the skeleton and sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptorPatch {
    /// OBR repository descriptor with capability commands.
    Obr {
        template: &'static str,
        commands: CapabilityCommands,
    },
    /// Repository assembly listing the suite's artifacts.
    Assembly { template: &'static str },
    /// Verbatim copies from the `resources/` bundle.
    StaticResources(&'static [&'static str]),
}

/// How a caller-supplied description is merged into the POM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionRule {
    /// Replace `/project/description`.
    Replace,
    /// Prefix the template's existing description.
    Prefix,
}

// ── Spec ─────────────────────────────────────────────────────────────────────

/// Everything the orchestrator needs to know about one archetype.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeSpec {
    pub archetype: Archetype,
    /// POM template name in the store.
    pub pom_template: &'static str,
    /// Bundle holding the install templates.
    pub source_bundle: &'static str,
    pub linkage: LinkageRule,
    pub artifact: ArtifactNaming,
    /// Whether `readme.txt` and `legal/LICENSE.TXT` are written.
    pub root_files: bool,
    pub description: DescriptionRule,
    pub install_files: &'static [InstallFile],
    pub patches: &'static [DescriptorPatch],
}

const SIMPLE_FILES: &[InstallFile] = &[
    source("Commands.java"),
    source("Operations.java"),
    source("OperationsImpl.java"),
    source("PropertyName.java"),
    resource("info.tagx"),
    resource("show.tagx"),
];

const ADVANCED_FILES: &[InstallFile] = &[
    source("Commands.java"),
    source("Operations.java"),
    source("OperationsImpl.java"),
    source("Metadata.java"),
    source("MetadataProvider.java"),
    InstallFile {
        template: "RooAnnotation.java",
        kind: FileKind::Annotation,
    },
    resource("configuration.xml"),
];

const SIMPLE_PATCHES: &[DescriptorPatch] = &[DescriptorPatch::Obr {
    template: "simple/obr-template.xml",
    commands: CapabilityCommands::Fixed(&[
        ("command-say-hello", "say hello"),
        ("command-install-tags", "web mvc install tags"),
    ]),
}];

const ADVANCED_PATCHES: &[DescriptorPatch] = &[DescriptorPatch::Obr {
    template: "advanced/obr-template.xml",
    commands: CapabilityCommands::Synthesized(&[
        ("command-add", "add"),
        ("command-all", "all"),
        ("command-setup", "setup"),
    ]),
}];

const REPOSITORY_PATCHES: &[DescriptorPatch] = &[
    DescriptorPatch::Assembly {
        template: "xml/repo-assembly-template.xml",
    },
    DescriptorPatch::StaticResources(&[
        "suite.css",
        "obr2html.xsl",
        "style.css",
        "bootstrap.min.css",
    ]),
];

/// Single source of truth for archetype generation rules.
pub static ARCHETYPE_REGISTRY: &[ArchetypeSpec] = &[
    ArchetypeSpec {
        archetype: Archetype::Simple,
        pom_template: "simple/roo-addon-simple-template.xml",
        source_bundle: "simple",
        linkage: LinkageRule::Standalone,
        artifact: ArtifactNaming::Package,
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: SIMPLE_FILES,
        patches: SIMPLE_PATCHES,
    },
    ArchetypeSpec {
        archetype: Archetype::SimpleChild,
        pom_template: "simplechild/roo-addon-simplechild-template.xml",
        source_bundle: "simple",
        linkage: LinkageRule::ToAggregator,
        artifact: ArtifactNaming::Folder,
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: SIMPLE_FILES,
        patches: SIMPLE_PATCHES,
    },
    ArchetypeSpec {
        archetype: Archetype::Advanced,
        pom_template: "advanced/roo-addon-advanced-template.xml",
        source_bundle: "advanced",
        linkage: LinkageRule::Standalone,
        artifact: ArtifactNaming::Package,
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: ADVANCED_FILES,
        patches: ADVANCED_PATCHES,
    },
    ArchetypeSpec {
        archetype: Archetype::AdvancedChild,
        pom_template: "advancedchild/roo-addon-advancedchild-template.xml",
        source_bundle: "advanced",
        linkage: LinkageRule::ToAggregator,
        artifact: ArtifactNaming::Folder,
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: ADVANCED_FILES,
        patches: ADVANCED_PATCHES,
    },
    ArchetypeSpec {
        archetype: Archetype::Parent,
        pom_template: "parent/roo-addon-parent-template.xml",
        source_bundle: "parent",
        linkage: LinkageRule::Standalone,
        artifact: ArtifactNaming::Suffix("root"),
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: &[],
        patches: &[],
    },
    ArchetypeSpec {
        archetype: Archetype::OsgiBundles,
        pom_template: "osgibundles/roo-addon-osgibundles-template.xml",
        source_bundle: "osgibundles",
        linkage: LinkageRule::ToRoot,
        artifact: ArtifactNaming::Suffix("osgi.bundles"),
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: &[],
        patches: &[],
    },
    ArchetypeSpec {
        archetype: Archetype::Suite,
        pom_template: "suite/roo-addon-suite-template.xml",
        source_bundle: "suite",
        linkage: LinkageRule::ToAggregator,
        artifact: ArtifactNaming::Folder,
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: &[],
        patches: &[],
    },
    ArchetypeSpec {
        archetype: Archetype::Repository,
        pom_template: "repository/roo-addon-repository-template.xml",
        source_bundle: "repository",
        linkage: LinkageRule::ToRoot,
        artifact: ArtifactNaming::Suffix("repository"),
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: &[],
        patches: REPOSITORY_PATCHES,
    },
    ArchetypeSpec {
        archetype: Archetype::I18n,
        pom_template: "i18n/roo-addon-i18n-template.xml",
        source_bundle: "i18n",
        linkage: LinkageRule::Standalone,
        artifact: ArtifactNaming::Package,
        root_files: true,
        description: DescriptionRule::Replace,
        install_files: &[],
        patches: &[],
    },
    ArchetypeSpec {
        archetype: Archetype::Wrapper,
        pom_template: "wrapper/roo-addon-wrapper-template.xml",
        source_bundle: "wrapper",
        linkage: LinkageRule::Standalone,
        artifact: ArtifactNaming::Wrapped,
        root_files: false,
        description: DescriptionRule::Prefix,
        install_files: &[],
        patches: &[],
    },
];

/// Look up the generation rules for an archetype.
pub fn resolve(archetype: Archetype) -> Result<&'static ArchetypeSpec, DomainError> {
    ARCHETYPE_REGISTRY
        .iter()
        .find(|spec| spec.archetype == archetype)
        .ok_or_else(|| DomainError::UnknownArchetype(archetype.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pkg() -> PackageIdentity {
        PackageIdentity::new("com.acme.flightbooking").unwrap()
    }

    #[test]
    fn every_archetype_has_exactly_one_entry() {
        for archetype in Archetype::ALL {
            let count = ARCHETYPE_REGISTRY
                .iter()
                .filter(|s| s.archetype == archetype)
                .count();
            assert_eq!(count, 1, "{archetype} must appear once in the registry");
            assert!(resolve(archetype).is_ok());
        }
    }

    #[test]
    fn pom_templates_are_unique() {
        let names: HashSet<_> = ARCHETYPE_REGISTRY.iter().map(|s| s.pom_template).collect();
        assert_eq!(names.len(), ARCHETYPE_REGISTRY.len());
    }

    #[test]
    fn linkage_table_matches_module_hierarchy() {
        let parent = |a| resolve(a).unwrap().linkage.parent_artifact(&pkg());
        assert_eq!(parent(Archetype::Simple), None);
        assert_eq!(parent(Archetype::Parent), None);
        assert_eq!(
            parent(Archetype::SimpleChild).as_deref(),
            Some("com.acme.flightbooking.osgi.bundles")
        );
        assert_eq!(
            parent(Archetype::Suite).as_deref(),
            Some("com.acme.flightbooking.osgi.bundles")
        );
        assert_eq!(
            parent(Archetype::Repository).as_deref(),
            Some("com.acme.flightbooking.root")
        );
        assert_eq!(
            resolve(Archetype::OsgiBundles).unwrap().linkage.group_id_path(),
            "/project/parent/groupId"
        );
    }

    #[test]
    fn artifact_naming_rules() {
        let id = |a, folder| {
            resolve(a)
                .unwrap()
                .artifact
                .artifact_id(&pkg(), folder, None)
        };
        assert_eq!(id(Archetype::Advanced, None).unwrap(), "com.acme.flightbooking");
        assert_eq!(
            id(Archetype::AdvancedChild, Some("addon-advanced")).unwrap(),
            "com.acme.flightbooking.addon-advanced"
        );
        assert_eq!(id(Archetype::Parent, None).unwrap(), "com.acme.flightbooking.root");
        assert!(id(Archetype::Suite, None).is_err());
        assert!(id(Archetype::Wrapper, None).is_err());
    }

    #[test]
    fn advanced_commands_are_synthesized_from_package() {
        let spec = resolve(Archetype::Advanced).unwrap();
        let Some(DescriptorPatch::Obr { commands, .. }) = spec.patches.first() else {
            panic!("advanced addon must carry an OBR patch");
        };
        let entries = commands.entries(&pkg());
        assert_eq!(
            entries,
            vec![
                ("command-add".to_string(), "flightbooking add".to_string()),
                ("command-all".to_string(), "flightbooking all".to_string()),
                ("command-setup".to_string(), "flightbooking setup".to_string()),
            ]
        );
    }

    #[test]
    fn child_archetypes_share_their_parent_sources() {
        let simple = resolve(Archetype::Simple).unwrap();
        let child = resolve(Archetype::SimpleChild).unwrap();
        assert_eq!(simple.source_bundle, child.source_bundle);
        assert_eq!(simple.install_files, child.install_files);
    }
}
