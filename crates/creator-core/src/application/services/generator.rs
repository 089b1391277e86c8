//! Generation orchestrator.
//!
//! One public operation per archetype family. Each call builds a descriptor,
//! resolves the archetype's catalog entry and drives a [`GenerationRun`]
//! through a fixed sequence of stages before committing the staged writes.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ports::{AssetFetcher, Filesystem, TemplateStore},
        services::{
            flag::{FlagInstaller, flag_file_name},
            installer::{InstallOutcome, TemplateInstaller},
            xml_editor::XmlEditor,
        },
    },
    config::GeneratorConfig,
    domain::{
        Archetype, ArchetypeSpec, DescriptorPatch, DomainValidator, I18nRequest, ModuleLayout,
        NamedAsset, PackageIdentity, ProjectDescriptor, ProjectOptions, TemplateContext,
        WrapperCoordinates, WrapperRequest, catalog,
        context::{APP_NAME, FLAG_FILE, LANGUAGE, LOCALE, MESSAGE_BUNDLE},
        i18n::{CountryTable, bundle_description, language_class_name},
        package::capitalize,
        plans,
    },
    error::CreatorResult,
};

const README_TEXT: &str = "Welcome to my addon!";
const LICENSE_TEXT: &str = "Your license goes here";
const COUNTRY_TABLE: &str = "i18n/iso3166.txt";
const LANGUAGE_TEMPLATE: &str = "i18n/Language.java-template";

/// What one archetype generation produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub archetype: Archetype,
    pub artifact_id: String,
    pub folder: Option<String>,
    /// Files created or overwritten, in write order.
    pub written: Vec<PathBuf>,
    /// Template installs skipped because the destination existed.
    pub skipped: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.written.len()
    }
}

/// Entry point for every scaffolding operation.
pub struct GenerationService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    fetcher: Box<dyn AssetFetcher>,
    config: GeneratorConfig,
}

impl GenerationService {
    pub fn new(
        store: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        fetcher: Box<dyn AssetFetcher>,
        config: GeneratorConfig,
    ) -> Self {
        Self {
            store,
            filesystem,
            fetcher,
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// A new project can only be created where no `pom.xml` exists yet.
    pub fn can_create(&self) -> bool {
        !self.filesystem.exists(Path::new("pom.xml"))
    }

    /// Generate a single module from a prepared descriptor.
    #[instrument(
        skip(self, descriptor),
        fields(
            request_id = %Uuid::new_v4(),
            archetype = %descriptor.archetype(),
            package = %descriptor.identity(),
        )
    )]
    pub fn generate(&self, descriptor: &ProjectDescriptor) -> CreatorResult<GenerationReport> {
        self.generate_module(descriptor)
    }

    /// Simple addon; nested under a suite when `options.folder` is set.
    pub fn create_simple(
        &self,
        package: PackageIdentity,
        options: &ProjectOptions,
    ) -> CreatorResult<GenerationReport> {
        let archetype = if has_folder(options) {
            Archetype::SimpleChild
        } else {
            Archetype::Simple
        };
        self.generate(&ProjectDescriptor::new(package, archetype, options)?)
    }

    /// Advanced addon; nested under a suite when `options.folder` is set.
    pub fn create_advanced(
        &self,
        package: PackageIdentity,
        options: &ProjectOptions,
    ) -> CreatorResult<GenerationReport> {
        let archetype = if has_folder(options) {
            Archetype::AdvancedChild
        } else {
            Archetype::Advanced
        };
        self.generate(&ProjectDescriptor::new(package, archetype, options)?)
    }

    /// Language bundle addon.
    ///
    /// The flag and the language name are resolved before anything is staged,
    /// so a missing flag leaves the directory untouched. A country missing
    /// from the bundled table yields an empty language name.
    #[instrument(
        skip(self, request),
        fields(
            request_id = %Uuid::new_v4(),
            package = %request.package,
            locale = %request.locale,
        )
    )]
    pub fn create_i18n(&self, request: I18nRequest) -> CreatorResult<GenerationReport> {
        let locale = &request.locale;
        let flag = match request.flag {
            Some(flag) => flag,
            None => NamedAsset::new(
                flag_file_name(locale),
                FlagInstaller::new(&*self.fetcher, &self.config).fetch_flag(locale)?,
            ),
        };

        let language = match request.language.as_deref().map(str::trim) {
            Some(language) if !language.is_empty() => language.to_string(),
            _ => self
                .country_table()?
                .language_for(locale.country())
                .unwrap_or_else(|| {
                    warn!(country = locale.country(), "No language name for country code");
                    String::new()
                }),
        };
        let class_name = language_class_name(&language);
        debug!(%language, %class_name, "Language resolved");

        let description = bundle_description(
            request.options.description.as_deref(),
            &class_name,
            locale.country(),
        );
        let options = ProjectOptions {
            description: Some(description),
            folder: None,
            ..request.options.clone()
        };
        let descriptor = ProjectDescriptor::new(request.package.clone(), Archetype::I18n, &options)?;

        let bundle = request.message_bundle;

        let mut run = self.start(&descriptor)?;
        run.write_skeleton(None)?;
        run.install_sources()?;

        let layout = run.layout.clone();
        run.write_asset(&layout.package_resource(&bundle.file_name), &bundle.bytes)?;
        run.write_asset(&layout.package_resource(&flag.file_name), &flag.bytes)?;

        let context = TemplateContext::for_package(descriptor.identity())
            .with(APP_NAME, class_name.as_str())
            .with(LOCALE, locale.language())
            .with(LANGUAGE, capitalize(&language))
            .with(FLAG_FILE, flag.file_name.as_str())
            .with(MESSAGE_BUNDLE, bundle.file_name.as_str());
        let destination = layout.java_source(&format!("{class_name}Language.java"));
        run.install(LANGUAGE_TEMPLATE, &context, &destination)?;

        run.patch_descriptors()?;
        run.commit()
    }

    /// OSGi wrapper around a third-party library.
    #[instrument(
        skip(self, request),
        fields(
            request_id = %Uuid::new_v4(),
            package = %request.package,
            artifact = %request.coordinates.artifact_id,
        )
    )]
    pub fn create_wrapper(&self, request: WrapperRequest) -> CreatorResult<GenerationReport> {
        DomainValidator::validate_wrapper(&request.coordinates)?;
        let options = ProjectOptions {
            folder: None,
            ..request.options
        };
        let descriptor = ProjectDescriptor::new(request.package, Archetype::Wrapper, &options)?;

        let mut run = self.start(&descriptor)?;
        run.write_skeleton(Some(&request.coordinates))?;
        run.install_sources()?;
        run.patch_descriptors()?;
        run.commit()
    }

    /// Drive one descriptor through every stage without opening a new span.
    pub(super) fn generate_module(
        &self,
        descriptor: &ProjectDescriptor,
    ) -> CreatorResult<GenerationReport> {
        let mut run = self.start(descriptor)?;
        run.write_skeleton(None)?;
        run.install_sources()?;
        run.patch_descriptors()?;
        run.commit()
    }

    pub(super) fn filesystem(&self) -> &dyn Filesystem {
        &*self.filesystem
    }

    pub(super) fn installer(&self) -> TemplateInstaller<'_> {
        TemplateInstaller::new(&*self.store, &*self.filesystem)
    }

    pub(super) fn editor(&self) -> XmlEditor<'_> {
        XmlEditor::new(&*self.store, &*self.filesystem)
    }

    fn country_table(&self) -> CreatorResult<CountryTable> {
        Ok(CountryTable::parse(&self.store.load(COUNTRY_TABLE)?))
    }

    fn start<'s>(&'s self, descriptor: &'s ProjectDescriptor) -> CreatorResult<GenerationRun<'s>> {
        let spec = catalog::resolve(descriptor.archetype())?;
        DomainValidator::validate_descriptor(spec, descriptor)?;

        let layout = ModuleLayout::new(descriptor.identity(), descriptor.folder());
        Ok(GenerationRun {
            service: self,
            spec,
            descriptor,
            layout,
            stage: GenerationStage::DescriptorBuilt,
            report: GenerationReport {
                archetype: descriptor.archetype(),
                artifact_id: String::new(),
                folder: descriptor.folder().map(str::to_string),
                written: Vec::new(),
                skipped: Vec::new(),
            },
        })
    }
}

fn has_folder(options: &ProjectOptions) -> bool {
    options
        .folder
        .as_deref()
        .is_some_and(|f| !f.trim().is_empty())
}

// ── Run state machine ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum GenerationStage {
    DescriptorBuilt,
    SkeletonWritten,
    SourcesInstalled,
    DescriptorsPatched,
    Committed,
}

struct GenerationRun<'s> {
    service: &'s GenerationService,
    spec: &'static ArchetypeSpec,
    descriptor: &'s ProjectDescriptor,
    layout: ModuleLayout,
    stage: GenerationStage,
    report: GenerationReport,
}

impl GenerationRun<'_> {
    fn advance(&mut self, next: GenerationStage) {
        debug_assert!(next > self.stage, "stages only move forward");
        debug!(from = ?self.stage, to = ?next, "Generation stage");
        self.stage = next;
    }

    fn write_skeleton(&mut self, wrapped: Option<&WrapperCoordinates>) -> CreatorResult<()> {
        let plan = plans::pom_plan(self.spec, self.descriptor, wrapped)?;
        self.report.artifact_id = self.spec.artifact.artifact_id(
            self.descriptor.identity(),
            self.descriptor.folder(),
            wrapped.map(|w| w.artifact_id.as_str()),
        )?;

        let pom = self.layout.pom();
        self.service
            .editor()
            .render(self.spec.pom_template, &plan, &pom)?;
        self.report.written.push(pom);

        if self.spec.root_files {
            let (readme, license) = (self.layout.readme(), self.layout.license());
            self.write_asset(&readme, README_TEXT.as_bytes())?;
            self.write_asset(&license, LICENSE_TEXT.as_bytes())?;
        }
        self.advance(GenerationStage::SkeletonWritten);
        Ok(())
    }

    fn install_sources(&mut self) -> CreatorResult<()> {
        let context = TemplateContext::for_descriptor(self.descriptor);
        for file in self.spec.install_files {
            let template = format!("{}/{}-template", self.spec.source_bundle, file.template);
            let destination = self.layout.install_destination(file);
            self.install(&template, &context, &destination)?;
        }
        self.advance(GenerationStage::SourcesInstalled);
        Ok(())
    }

    fn patch_descriptors(&mut self) -> CreatorResult<()> {
        let descriptor = self.descriptor;
        let package = descriptor.identity();
        for patch in self.spec.patches {
            match patch {
                DescriptorPatch::Obr { template, commands } => {
                    let destination = self.layout.obr();
                    let plan = plans::capability_plan(commands, package)?;
                    self.service.editor().render(template, &plan, &destination)?;
                    self.report.written.push(destination);
                }
                DescriptorPatch::Assembly { template } => {
                    let destination = self.layout.assembly();
                    let plan = plans::assembly_plan(package)?;
                    self.service.editor().render(template, &plan, &destination)?;
                    self.report.written.push(destination);
                }
                DescriptorPatch::StaticResources(files) => {
                    for file in files.iter() {
                        let destination = self.layout.static_copy(file);
                        let outcome = self.service.installer().copy_resource(file, &destination)?;
                        self.record(outcome, destination);
                    }
                }
            }
        }
        self.advance(GenerationStage::DescriptorsPatched);
        Ok(())
    }

    fn install(
        &mut self,
        template: &str,
        context: &TemplateContext,
        destination: &Path,
    ) -> CreatorResult<()> {
        let outcome = self
            .service
            .installer()
            .install(template, context, destination)?;
        self.record(outcome, destination.to_path_buf());
        Ok(())
    }

    fn write_asset(&mut self, destination: &Path, bytes: &[u8]) -> CreatorResult<()> {
        self.service.filesystem().write_file(destination, bytes)?;
        self.report.written.push(destination.to_path_buf());
        Ok(())
    }

    fn record(&mut self, outcome: InstallOutcome, destination: PathBuf) {
        match outcome {
            InstallOutcome::Created => self.report.written.push(destination),
            InstallOutcome::Skipped => self.report.skipped.push(destination),
        }
    }

    fn commit(mut self) -> CreatorResult<GenerationReport> {
        self.service.filesystem().commit()?;
        self.advance(GenerationStage::Committed);
        info!(
            archetype = %self.report.archetype,
            artifact_id = %self.report.artifact_id,
            files = self.report.written.len(),
            skipped = self.report.skipped.len(),
            "Module generated"
        );
        Ok(self.report)
    }
}
