//! Built-in template bundle.
//!
//! Every template the catalog names ships inside the binary, keyed by its
//! store name (`<bundle>/<file>`). [`BUILTIN_TEMPLATES`] seeds
//! [`InMemoryStore::with_builtin`](crate::template_store::InMemoryStore::with_builtin),
//! which also serves as the fallback behind a `templates.local_path` override.
//!
//! # Layout
//!
//! ```text
//! templates/
//! ├── simple/          roo-addon-simple-template.xml, obr-template.xml, *-template sources
//! ├── advanced/        roo-addon-advanced-template.xml, obr-template.xml, *-template sources
//! ├── simplechild/     POM for the suite's nested simple addon
//! ├── advancedchild/   POM for the suite's nested advanced addon
//! ├── parent/ osgibundles/ suite/ repository/ i18n/ wrapper/
//! ├── xml/             repo-assembly-template.xml
//! └── resources/       verbatim copies (suite-dev, stylesheets, XSLT)
//! ```

/// `(name, contents)` pair resolved at compile time.
macro_rules! builtin {
    ($name:literal) => {
        ($name, include_str!(concat!("../templates/", $name)))
    };
}

/// All shipped templates, sorted by name.
pub static BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    builtin!("advanced/Commands.java-template"),
    builtin!("advanced/Metadata.java-template"),
    builtin!("advanced/MetadataProvider.java-template"),
    builtin!("advanced/Operations.java-template"),
    builtin!("advanced/OperationsImpl.java-template"),
    builtin!("advanced/RooAnnotation.java-template"),
    builtin!("advanced/configuration.xml-template"),
    builtin!("advanced/obr-template.xml"),
    builtin!("advanced/roo-addon-advanced-template.xml"),
    builtin!("advancedchild/roo-addon-advancedchild-template.xml"),
    builtin!("i18n/Language.java-template"),
    builtin!("i18n/iso3166.txt"),
    builtin!("i18n/roo-addon-i18n-template.xml"),
    builtin!("osgibundles/roo-addon-osgibundles-template.xml"),
    builtin!("parent/roo-addon-parent-template.xml"),
    builtin!("repository/roo-addon-repository-template.xml"),
    builtin!("resources/bootstrap.min.css"),
    builtin!("resources/obr2html.xsl"),
    builtin!("resources/style.css"),
    builtin!("resources/suite-dev"),
    builtin!("resources/suite.css"),
    builtin!("simple/Commands.java-template"),
    builtin!("simple/Operations.java-template"),
    builtin!("simple/OperationsImpl.java-template"),
    builtin!("simple/PropertyName.java-template"),
    builtin!("simple/info.tagx-template"),
    builtin!("simple/obr-template.xml"),
    builtin!("simple/roo-addon-simple-template.xml"),
    builtin!("simple/show.tagx-template"),
    builtin!("simplechild/roo-addon-simplechild-template.xml"),
    builtin!("suite/roo-addon-suite-template.xml"),
    builtin!("wrapper/roo-addon-wrapper-template.xml"),
    builtin!("xml/repo-assembly-template.xml"),
];
