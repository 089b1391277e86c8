//! File locations inside a generated module.
//!
//! All paths are relative to the generation root. A module generated in
//! nested mode lives under `<folder>/`; top-level modules live at the root.

use std::path::PathBuf;

use crate::domain::{
    catalog::{FileKind, InstallFile},
    package::PackageIdentity,
};

const JAVA_SOURCES: &str = "src/main/java";
const RESOURCES: &str = "src/main/resources";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleLayout {
    base: PathBuf,
    package_path: String,
    app_name: String,
}

impl ModuleLayout {
    pub fn new(package: &PackageIdentity, folder: Option<&str>) -> Self {
        Self {
            base: folder.map(PathBuf::from).unwrap_or_default(),
            package_path: package.path(),
            app_name: package.app_name(),
        }
    }

    /// Module directory (empty for the root module).
    pub fn base(&self) -> &PathBuf {
        &self.base
    }

    pub fn is_nested(&self) -> bool {
        !self.base.as_os_str().is_empty()
    }

    /// Any file relative to the module directory.
    pub fn file(&self, relative: &str) -> PathBuf {
        self.base.join(relative)
    }

    pub fn pom(&self) -> PathBuf {
        self.file("pom.xml")
    }

    pub fn readme(&self) -> PathBuf {
        self.file("readme.txt")
    }

    pub fn license(&self) -> PathBuf {
        self.file("legal/LICENSE.TXT")
    }

    pub fn obr(&self) -> PathBuf {
        self.file("src/main/resources/obr.xml")
    }

    pub fn assembly(&self) -> PathBuf {
        self.file("src/main/assembly/repo-assembly.xml")
    }

    pub fn manifest(&self) -> PathBuf {
        self.file("src/main/esa/META-INF/MANIFEST.MF")
    }

    /// Destination of an installed template, renamed per its kind.
    pub fn install_destination(&self, file: &InstallFile) -> PathBuf {
        match file.kind {
            FileKind::Source => self.java_source(&format!("{}{}", self.app_name, file.template)),
            FileKind::Annotation => self.java_source(&format!("Roo{}.java", self.app_name)),
            FileKind::Resource => self.package_resource(file.template),
        }
    }

    /// `src/main/java/<pkg>/<file>`.
    pub fn java_source(&self, file_name: &str) -> PathBuf {
        self.base
            .join(JAVA_SOURCES)
            .join(&self.package_path)
            .join(file_name)
    }

    /// `src/main/resources/<pkg>/<file>`.
    pub fn package_resource(&self, file_name: &str) -> PathBuf {
        self.base
            .join(RESOURCES)
            .join(&self.package_path)
            .join(file_name)
    }

    /// Verbatim resource copy: module resources when nested, root otherwise.
    pub fn static_copy(&self, file_name: &str) -> PathBuf {
        if self.is_nested() {
            self.base.join(RESOURCES).join(file_name)
        } else {
            PathBuf::from(file_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn pkg() -> PackageIdentity {
        PackageIdentity::new("com.acme.flightbooking").unwrap()
    }

    #[test]
    fn root_module_paths() {
        let layout = ModuleLayout::new(&pkg(), None);
        assert_eq!(layout.pom(), Path::new("pom.xml"));
        assert_eq!(layout.license(), Path::new("legal/LICENSE.TXT"));
        assert_eq!(layout.static_copy("suite-dev"), Path::new("suite-dev"));
        assert!(!layout.is_nested());
    }

    #[test]
    fn sources_are_renamed_after_the_application() {
        let layout = ModuleLayout::new(&pkg(), None);
        let commands = InstallFile {
            template: "Commands.java",
            kind: FileKind::Source,
        };
        let annotation = InstallFile {
            template: "RooAnnotation.java",
            kind: FileKind::Annotation,
        };
        let tag = InstallFile {
            template: "info.tagx",
            kind: FileKind::Resource,
        };
        assert_eq!(
            layout.install_destination(&commands),
            Path::new("src/main/java/com/acme/flightbooking/FlightbookingCommands.java")
        );
        assert_eq!(
            layout.install_destination(&annotation),
            Path::new("src/main/java/com/acme/flightbooking/RooFlightbooking.java")
        );
        assert_eq!(
            layout.install_destination(&tag),
            Path::new("src/main/resources/com/acme/flightbooking/info.tagx")
        );
    }

    #[test]
    fn nested_mode_prefixes_every_path() {
        let layout = ModuleLayout::new(&pkg(), Some("repository"));
        assert_eq!(layout.pom(), Path::new("repository/pom.xml"));
        assert_eq!(
            layout.assembly(),
            Path::new("repository/src/main/assembly/repo-assembly.xml")
        );
        assert_eq!(
            layout.static_copy("suite.css"),
            Path::new("repository/src/main/resources/suite.css")
        );
    }
}
