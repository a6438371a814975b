use std::path::Path;

use eyre::Result;
use graphgen_codegen::{
    entity::{Descriptor, bind, check_unique},
    language::{GenerateResult, LanguageCodegen, PreviewFile},
};
use graphgen_core::{GeneratedFile, WriteResult, titleize_namespace};
use graphgen_model::Model;

use crate::{
    CppTarget,
    entities::{self, Entity, RenderContext},
    files::HeaderFile,
};

/// Endpoint the generated client talks to unless told otherwise.
pub const DEFAULT_SERVICE_URL: &str = "https://graph.microsoft.com/v1.0";

/// C++ code generator that produces one header per derived entity
pub struct Generator<'a> {
    model: &'a Model,
    target: CppTarget,
    service_url: String,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        self.target.header_extension
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        self.preview_files()
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        self.generate_files(output_dir)
    }
}

impl<'a> Generator<'a> {
    pub fn new(model: &'a Model) -> Self {
        Self {
            model,
            target: CppTarget::DEFAULT,
            service_url: DEFAULT_SERVICE_URL.to_string(),
        }
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn target(&self) -> &CppTarget {
        &self.target
    }

    /// The C++ namespace generated code is declared in.
    pub fn namespace(&self) -> String {
        titleize_namespace(&self.model.namespace)
    }

    /// Every (element, role) pair of the model, in emission order.
    ///
    /// Fails when two descriptors would derive the same name, or one would
    /// derive the name of a framework type.
    pub fn descriptors(&self) -> Result<Vec<Descriptor<'a>>> {
        let descriptors = bind(self.model)?;
        check_unique(
            &descriptors,
            &self.target.names(),
            self.target.framework_types,
        )?;
        Ok(descriptors)
    }

    /// Render every descriptor.
    pub fn entities(&self) -> Result<Vec<Entity>> {
        let ctx = RenderContext::new(&self.target, &self.service_url);
        self.descriptors()?
            .iter()
            .map(|descriptor| -> Result<Entity> {
                let entity = entities::render(descriptor, &ctx)?;
                tracing::debug!(
                    name = %entity.name,
                    role = %entity.role,
                    "rendered entity"
                );
                Ok(entity)
            })
            .collect()
    }

    /// Render every header file.
    pub fn files(&self) -> Result<Vec<HeaderFile>> {
        let namespace = self.namespace();
        Ok(self
            .entities()?
            .iter()
            .map(|entity| {
                HeaderFile::new(
                    self.target.header_file(&entity.name),
                    entity.render_file(&namespace, &self.target),
                )
            })
            .collect())
    }

    /// Preview generated files without writing to disk
    fn preview_files(&self) -> Result<Vec<PreviewFile>> {
        let files = self.files()?;
        tracing::info!(files = files.len(), "previewed headers");
        Ok(files
            .into_iter()
            .map(|file| PreviewFile {
                path: file.name,
                content: file.content,
            })
            .collect())
    }

    /// Generate all files into the specified output directory
    fn generate_files(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files()? {
            match file.write(output_dir)? {
                WriteResult::Written => result.written.push(file.name),
                WriteResult::Unchanged => result.unchanged.push(file.name),
            }
        }

        tracing::info!(
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            output = %output_dir.display(),
            "generated headers"
        );
        Ok(result)
    }
}
