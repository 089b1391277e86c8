//! End-to-end generation against the built-in templates.

use std::io::{Cursor, Write};
use std::path::Path;

use creator_adapters::{InMemoryStore, LocalFilesystem, MemoryFilesystem};
use creator_core::{
    application::{ApplicationError, AssetFetcher, Filesystem, GenerationService, TemplateStore},
    config::GeneratorConfig,
    domain::{
        Archetype, DomainError, I18nRequest, Locale, NamedAsset, PackageIdentity, ProjectOptions,
        WrapperCoordinates, WrapperRequest,
    },
    error::{CreatorError, CreatorResult},
};
use zip::write::SimpleFileOptions;

// ── Helpers ──────────────────────────────────────────────────────────────────

/// Serves a fixed icon archive for every URL.
struct ArchiveFetcher(Vec<u8>);

impl AssetFetcher for ArchiveFetcher {
    fn fetch(&self, _url: &str) -> CreatorResult<Vec<u8>> {
        Ok(self.0.clone())
    }
}

fn icon_archive(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer.start_file(*name, SimpleFileOptions::default()).unwrap();
        writer.write_all(contents.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

fn service_with(store: InMemoryStore, fetcher: ArchiveFetcher) -> (GenerationService, MemoryFilesystem) {
    let fs = MemoryFilesystem::new();
    let service = GenerationService::new(
        Box::new(store),
        Box::new(fs.clone()),
        Box::new(fetcher),
        GeneratorConfig::default(),
    );
    (service, fs)
}

fn service() -> (GenerationService, MemoryFilesystem) {
    service_with(
        InMemoryStore::with_builtin().unwrap(),
        ArchiveFetcher(icon_archive(&[("png/fr.png", "FR-FLAG")])),
    )
}

fn pkg(name: &str) -> PackageIdentity {
    PackageIdentity::new(name).unwrap()
}

fn text(fs: &MemoryFilesystem, path: &str) -> String {
    fs.read_text(path)
        .unwrap_or_else(|| panic!("{path} was not generated"))
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{needle} not found"))
}

// ── Single archetypes ────────────────────────────────────────────────────────

#[test]
fn simple_addon_tree() {
    let (service, fs) = service();
    assert!(service.can_create());

    let report = service
        .create_simple(
            pkg("com.acme.hello"),
            &ProjectOptions::new().description("Greets people"),
        )
        .unwrap();
    assert_eq!(report.artifact_id, "com.acme.hello");

    let pom = text(&fs, "pom.xml");
    assert!(pom.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#));
    assert!(pom.contains("<groupId>com.acme.hello</groupId>"));
    assert!(pom.contains("<artifactId>com.acme.hello</artifactId>"));
    assert!(pom.contains("<name>com-acme-hello</name>"));
    assert!(pom.contains("<description>Greets people</description>"));

    let commands = text(&fs, "src/main/java/com/acme/hello/HelloCommands.java");
    assert!(commands.starts_with("package com.acme.hello;"));
    assert!(commands.contains("public class HelloCommands"));
    assert!(!commands.contains("__APP_NAME__"));
    assert!(fs.read_text("src/main/resources/com/acme/hello/info.tagx").is_some());
    assert_eq!(text(&fs, "readme.txt"), "Welcome to my addon!");
    assert_eq!(text(&fs, "legal/LICENSE.TXT"), "Your license goes here");

    let obr = text(&fs, "src/main/resources/obr.xml");
    assert!(obr.contains(r#"<p n="command-say-hello" v="say hello"/>"#));
    assert!(obr.contains(r#"<p n="command-install-tags" v="web mvc install tags"/>"#));

    assert!(!service.can_create());
}

#[test]
fn advanced_addon_synthesizes_command_tokens() {
    let (service, fs) = service();
    service
        .create_advanced(pkg("com.acme.flightbooking"), &ProjectOptions::new())
        .unwrap();

    let obr = text(&fs, "src/main/resources/obr.xml");
    let add = position(&obr, r#"<p n="command-add" v="flightbooking add"/>"#);
    let all = position(&obr, r#"<p n="command-all" v="flightbooking all"/>"#);
    let setup = position(&obr, r#"<p n="command-setup" v="flightbooking setup"/>"#);
    assert!(add < all && all < setup);

    let annotation = text(&fs, "src/main/java/com/acme/flightbooking/RooFlightbooking.java");
    assert!(annotation.contains("public @interface RooFlightbooking"));
    let config = text(&fs, "src/main/resources/com/acme/flightbooking/configuration.xml");
    assert!(config.contains("flightbooking-repository"));
}

#[test]
fn rerun_preserves_hand_edited_sources() {
    let (service, fs) = service();
    let package = pkg("com.acme.hello");
    service.create_simple(package.clone(), &ProjectOptions::new()).unwrap();

    fs.update_file(
        Path::new("src/main/java/com/acme/hello/HelloCommands.java"),
        b"// mine",
    )
    .unwrap();
    fs.commit().unwrap();

    let report = service.create_simple(package, &ProjectOptions::new()).unwrap();
    assert_eq!(report.skipped.len(), 6);
    assert_eq!(
        text(&fs, "src/main/java/com/acme/hello/HelloCommands.java"),
        "// mine"
    );
}

#[test]
fn broken_template_writes_nothing() {
    let store = InMemoryStore::with_builtin().unwrap();
    store
        .insert("simple/roo-addon-simple-template.xml", "<project><name/></project>")
        .unwrap();
    let (service, fs) = service_with(store, ArchiveFetcher(Vec::new()));

    let err = service
        .create_simple(pkg("com.acme.hello"), &ProjectOptions::new())
        .unwrap_err();
    assert!(matches!(
        err,
        CreatorError::Domain(DomainError::RequiredNodeMissing { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert_eq!(fs.staged_count(), 0);
}

// ── Suite ────────────────────────────────────────────────────────────────────

#[test]
fn suite_composition_and_artifact_ids() {
    let (service, fs) = service();
    let report = service
        .create_suite(
            pkg("com.acme.flightbooking"),
            &ProjectOptions::new()
                .project_name("Flight Booking")
                .description("Booking addons"),
        )
        .unwrap();

    let archetypes: Vec<Archetype> = report.modules.iter().map(|m| m.archetype).collect();
    assert_eq!(
        archetypes,
        vec![
            Archetype::AdvancedChild,
            Archetype::SimpleChild,
            Archetype::OsgiBundles,
            Archetype::Suite,
            Archetype::Repository,
            Archetype::Parent,
        ]
    );
    let artifacts: Vec<&str> = report.modules.iter().map(|m| m.artifact_id.as_str()).collect();
    assert_eq!(
        artifacts,
        vec![
            "com.acme.flightbooking.addon-advanced",
            "com.acme.flightbooking.addon-simple",
            "com.acme.flightbooking.osgi.bundles",
            "com.acme.flightbooking.roo-addon-suite",
            "com.acme.flightbooking.repository",
            "com.acme.flightbooking.root",
        ]
    );

    let simple_pom = text(&fs, "addon-simple/pom.xml");
    assert!(simple_pom.contains("<artifactId>com.acme.flightbooking.osgi.bundles</artifactId>"));
    assert!(simple_pom.contains("<name>Flight Booking - addon-simple</name>"));
    assert!(fs
        .read_text("addon-simple/src/main/java/com/acme/flightbooking/FlightbookingCommands.java")
        .is_some());
    assert!(fs
        .read_text("addon-advanced/src/main/java/com/acme/flightbooking/RooFlightbooking.java")
        .is_some());
    assert!(text(&fs, "addon-advanced/src/main/resources/obr.xml").contains("flightbooking setup"));

    let bundles_pom = text(&fs, "osgi-bundles/pom.xml");
    assert!(bundles_pom.contains("<artifactId>com.acme.flightbooking.root</artifactId>"));

    let root_pom = text(&fs, "pom.xml");
    assert!(root_pom.contains("<artifactId>com.acme.flightbooking.root</artifactId>"));
    assert!(root_pom.contains("<description>Booking addons</description>"));
    assert!(fs.read_text("suite-dev").is_some());
    assert_eq!(fs.staged_count(), 0);
}

#[test]
fn suite_post_pass_wires_dependencies_and_manifest() {
    let (service, fs) = service();
    let report = service
        .create_suite(
            pkg("com.acme.flightbooking"),
            &ProjectOptions::new().description("Booking addons"),
        )
        .unwrap();

    for pom in ["roo-addon-suite/pom.xml", "repository/pom.xml"] {
        let text = text(&fs, pom);
        let simple = position(&text, "<artifactId>com.acme.flightbooking.addon-simple</artifactId>");
        let advanced =
            position(&text, "<artifactId>com.acme.flightbooking.addon-advanced</artifactId>");
        assert!(simple < advanced, "{pom}");
        assert!(text.contains("<version>${project.parent.version}</version>"));
    }
    assert_eq!(report.patched.len(), 2);

    let manifest = text(&fs, "roo-addon-suite/src/main/esa/META-INF/MANIFEST.MF");
    assert!(manifest.contains("Bundle-SymbolicName: com.acme.flightbooking.roo.addon.suite"));
    assert!(manifest.contains("Bundle-Description: Booking addons"));
    assert_eq!(
        report.manifest,
        Path::new("roo-addon-suite/src/main/esa/META-INF/MANIFEST.MF")
    );
}

#[test]
fn repository_assembly_references_suite_artifacts() {
    let (service, fs) = service();
    service
        .create_suite(pkg("com.acme.flightbooking"), &ProjectOptions::new())
        .unwrap();

    let assembly = text(&fs, "repository/src/main/assembly/repo-assembly.xml");
    assert!(assembly.contains(
        "<outputDirectory>com/acme/flightbooking/${module.artifactId}/${module.version}</outputDirectory>"
    ));
    for suffix in ["addon-advanced", "addon-simple", "roo-addon-suite"] {
        assert!(assembly.contains(&format!(
            "<include>com.acme.flightbooking:com.acme.flightbooking.{suffix}</include>"
        )));
    }
    for file in ["suite.css", "obr2html.xsl", "style.css", "bootstrap.min.css"] {
        assert!(
            fs.read_text(format!("repository/src/main/resources/{file}")).is_some(),
            "{file}"
        );
    }
}

#[test]
fn suite_rerun_keeps_the_existing_dev_script() {
    let (service, fs) = service();
    let package = pkg("com.acme.flightbooking");
    let first = service.create_suite(package.clone(), &ProjectOptions::new()).unwrap();
    assert_eq!(first.root_files, vec![Path::new("suite-dev").to_path_buf()]);

    fs.update_file(Path::new("suite-dev"), b"# tuned").unwrap();
    fs.commit().unwrap();

    let second = service.create_suite(package, &ProjectOptions::new()).unwrap();
    assert!(second.root_files.is_empty());
    assert_eq!(second.root_skipped, vec![Path::new("suite-dev").to_path_buf()]);
    assert_eq!(text(&fs, "suite-dev"), "# tuned");
}

// ── i18n ─────────────────────────────────────────────────────────────────────

fn i18n_request() -> I18nRequest {
    I18nRequest {
        package: pkg("com.acme.lang"),
        locale: Locale::new("fr", "FR").unwrap(),
        message_bundle: NamedAsset::new("messages_fr.properties", "welcome=Bienvenue"),
        flag: None,
        language: None,
        options: ProjectOptions::new(),
    }
}

#[test]
fn i18n_bundle_with_fetched_flag() {
    let (service, fs) = service();
    service.create_i18n(i18n_request()).unwrap();

    let language = text(&fs, "src/main/java/com/acme/lang/FranceLanguage.java");
    assert!(language.contains("public class FranceLanguage"));
    assert!(language.contains(r#"new Locale("fr")"#));
    assert!(language.contains(r#""fr.png""#));
    assert!(language.contains(r#""messages_fr.properties""#));
    assert_eq!(text(&fs, "src/main/resources/com/acme/lang/fr.png"), "FR-FLAG");
    assert_eq!(
        text(&fs, "src/main/resources/com/acme/lang/messages_fr.properties"),
        "welcome=Bienvenue"
    );

    let pom = text(&fs, "pom.xml");
    assert!(pom.contains(
        "France language support for Spring Roo Web MVC JSP Scaffolding; #mvc,#localization,locale:fr"
    ));
}

#[test]
fn i18n_missing_flag_is_fatal_and_writes_nothing() {
    let (service, fs) = service_with(
        InMemoryStore::with_builtin().unwrap(),
        ArchiveFetcher(icon_archive(&[("png/de.png", "DE")])),
    );

    let err = service.create_i18n(i18n_request()).unwrap_err();
    assert!(matches!(
        err,
        CreatorError::Application(ApplicationError::AssetNotFound { .. })
    ));
    assert!(fs.list_files().is_empty());
    assert_eq!(fs.staged_count(), 0);
}

#[test]
fn unlisted_country_without_flag_reports_the_missing_asset() {
    let (service, fs) = service();
    let request = I18nRequest {
        locale: Locale::new("xx", "ZZ").unwrap(),
        ..i18n_request()
    };

    let err = service.create_i18n(request).unwrap_err();
    match err {
        CreatorError::Application(ApplicationError::AssetNotFound { locale, .. }) => {
            assert_eq!(locale, "xx_ZZ");
        }
        other => panic!("expected AssetNotFound, got {other:?}"),
    }
    assert!(fs.list_files().is_empty());
    assert_eq!(fs.staged_count(), 0);
}

#[test]
fn full_country_table_names_less_common_locales() {
    for (language, country, class) in [
        ("es", "EC", "EcuadorLanguage"),
        ("ms", "MY", "MalaysiaLanguage"),
        ("en", "SG", "SingaporeLanguage"),
        ("be", "BY", "BelarusLanguage"),
    ] {
        let flag = format!("png/{}.png", country.to_lowercase());
        let (service, fs) = service_with(
            InMemoryStore::with_builtin().unwrap(),
            ArchiveFetcher(icon_archive(&[(flag.as_str(), "FLAG")])),
        );
        let request = I18nRequest {
            locale: Locale::new(language, country).unwrap(),
            ..i18n_request()
        };

        service.create_i18n(request).unwrap();
        let source = format!("src/main/java/com/acme/lang/{class}.java");
        assert!(fs.read_text(&source).is_some(), "{source} was not generated");
    }
}

#[test]
fn builtin_country_table_is_complete() {
    let table = InMemoryStore::with_builtin()
        .unwrap()
        .load("i18n/iso3166.txt")
        .unwrap();
    let entries = table.lines().filter(|line| line.contains(';')).count();
    assert_eq!(entries, 249);
}

// ── Wrapper ──────────────────────────────────────────────────────────────────

#[test]
fn wrapper_pom_carries_wrapped_coordinates() {
    let (service, fs) = service();
    let request = WrapperRequest {
        package: pkg("com.acme.wrapped"),
        coordinates: WrapperCoordinates {
            group_id: "org.json".into(),
            artifact_id: "json".into(),
            version: "20140107".into(),
            vendor_name: "JSON.org".into(),
            license_url: "http://www.json.org/license.html".into(),
            doc_url: Some("http://www.json.org".into()),
            osgi_imports: Some("org.json.*;resolution:=optional".into()),
        },
        options: ProjectOptions::new().description("JSON in Java"),
    };
    let report = service.create_wrapper(request).unwrap();
    assert_eq!(report.artifact_id, "com.acme.wrapped.json");

    let pom = text(&fs, "pom.xml");
    assert!(pom.contains("<artifactId>com.acme.wrapped.json</artifactId>"));
    assert!(pom.contains("<version>20140107.0001</version>"));
    assert!(pom.contains("<groupId>org.json</groupId>"));
    assert!(pom.contains("<pkgVendor>JSON.org</pkgVendor>"));
    assert!(pom.contains("<pkgDocUrl>http://www.json.org</pkgDocUrl>"));
    assert!(pom.contains("<repo.folder>com/acme/wrapped</repo.folder>"));
    assert!(pom.contains("<description>JSON in Java This bundle wraps"));
    assert!(pom.contains("<Import-Package>org.json.*;resolution:=optional</Import-Package>"));
    assert!(fs.read_text("readme.txt").is_none());
}

// ── Local filesystem ─────────────────────────────────────────────────────────

#[test]
fn generation_reaches_disk_through_local_filesystem() {
    let dir = tempfile::TempDir::new().unwrap();
    let service = GenerationService::new(
        Box::new(InMemoryStore::with_builtin().unwrap()),
        Box::new(LocalFilesystem::new(dir.path())),
        Box::new(ArchiveFetcher(Vec::new())),
        GeneratorConfig::default(),
    );

    service
        .create_advanced(pkg("com.acme.disk"), &ProjectOptions::new())
        .unwrap();

    assert!(dir.path().join("pom.xml").is_file());
    assert!(dir
        .path()
        .join("src/main/java/com/acme/disk/DiskMetadataProvider.java")
        .is_file());
    assert!(dir.path().join("src/main/resources/obr.xml").is_file());
    assert!(!service.can_create());
}
