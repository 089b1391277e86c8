//! OSGi subsystem manifest for the suite module.

use crate::domain::package::PackageIdentity;

const LICENSE_URL: &str = "http://www.gnu.org/licenses/gpl-3.0.html";

/// Render `MANIFEST.MF` for a suite. Lines are `\n`-separated with no
/// trailing newline.
pub fn suite_manifest(
    package: &PackageIdentity,
    description: Option<&str>,
    display_name: &str,
) -> String {
    [
        "Manifest-Version: 1.0".to_string(),
        "Bnd-LastModified: 1427459113830".to_string(),
        "Build-Jdk: 1.7.0_60".to_string(),
        format!("Bundle-Description: {}", description.unwrap_or_default()),
        format!("Bundle-License: {LICENSE_URL}"),
        "Bundle-ManifestVersion: 2".to_string(),
        format!("Bundle-Name: {display_name} - Roo Addon Suite"),
        format!("Bundle-SymbolicName: {}", package.qualify("roo.addon.suite")),
        "Bundle-Version: 1.0.0.BUILD-SNAPSHOT".to_string(),
        "Created-By: Apache Maven Bundle Plugin".to_string(),
        "Tool: Bnd-2.3.0.201405100607".to_string(),
    ]
    .join("\n")
}
