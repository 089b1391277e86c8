//! Integration tests for creator-core: catalog rules flowing through the XML
//! editor on realistic documents.

use creator_core::{
    domain::{
        Archetype, DomainError, PackageIdentity, ProjectDescriptor, ProjectOptions, catalog,
        plans,
    },
    xml::{Presence, XmlDocument, XmlEditPlan, XmlElement, apply_plan},
};

const NAMESPACED_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- generated -->
<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <modelVersion>4.0.0</modelVersion>
    <parent>
        <groupId>x</groupId>
        <artifactId>x</artifactId>
    </parent>
    <artifactId>x</artifactId>
    <name>x</name>
    <description>x</description>
    <dependencies>
        <!-- addons -->
    </dependencies>
</project>
"#;

fn pkg() -> PackageIdentity {
    PackageIdentity::new("com.acme.flightbooking").unwrap()
}

#[test]
fn child_pom_plan_applies_to_a_namespaced_document() {
    let spec = catalog::resolve(Archetype::SimpleChild).unwrap();
    let descriptor = ProjectDescriptor::new(
        pkg(),
        Archetype::SimpleChild,
        &ProjectOptions::new().folder("addon-simple"),
    )
    .unwrap();

    let plan = plans::pom_plan(spec, &descriptor, None).unwrap();
    let xml = apply_plan(NAMESPACED_POM, &plan).unwrap();

    assert!(xml.contains(r#"<project xmlns="http://maven.apache.org/POM/4.0.0""#));
    assert!(xml.contains("<!-- generated -->"));
    assert!(xml.contains("<artifactId>com.acme.flightbooking.osgi.bundles</artifactId>"));
    assert!(xml.contains("<artifactId>com.acme.flightbooking.addon-simple</artifactId>"));
    assert!(xml.contains("<groupId>com.acme.flightbooking</groupId>"));
    assert!(xml.contains("<name>com-acme-flightbooking - addon-simple</name>"));
    // Nested modules keep the template description.
    assert!(xml.contains("<description>x</description>"));
}

#[test]
fn dependency_injection_appends_after_existing_content() {
    let plan = plans::addon_dependencies_plan(&pkg()).unwrap();
    let xml = apply_plan(NAMESPACED_POM, &plan).unwrap();

    let doc = XmlDocument::parse(&xml).unwrap();
    let deps = doc.root().child("dependencies").unwrap();
    let artifacts: Vec<String> = deps
        .elements()
        .map(|d| d.child("artifactId").unwrap().text())
        .collect();
    assert_eq!(
        artifacts,
        vec![
            "com.acme.flightbooking.addon-simple",
            "com.acme.flightbooking.addon-advanced",
        ]
    );
    assert!(xml.contains("<!-- addons -->"));
}

#[test]
fn serialization_round_trips() {
    let once = XmlDocument::parse(NAMESPACED_POM).unwrap().to_xml_string();
    let twice = XmlDocument::parse(&once).unwrap().to_xml_string();
    assert_eq!(once, twice);
    assert_eq!(
        XmlDocument::parse(NAMESPACED_POM).unwrap(),
        XmlDocument::parse(&once).unwrap()
    );
}

#[test]
fn required_miss_aborts_the_whole_plan() {
    let plan = XmlEditPlan::builder()
        .set_text("/project/name", "renamed")
        .append_child("build/plugins", XmlElement::new("plugin"), Presence::Required)
        .build()
        .unwrap();

    let err = apply_plan(NAMESPACED_POM, &plan).unwrap_err();
    match err {
        DomainError::RequiredNodeMissing { path } => assert_eq!(path, "build/plugins"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn every_archetype_resolves() {
    for archetype in Archetype::ALL {
        let spec = catalog::resolve(archetype).unwrap();
        assert_eq!(spec.archetype, archetype);
    }
}
