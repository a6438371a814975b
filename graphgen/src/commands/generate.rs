use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use graphgen_codegen_cpp::{DEFAULT_SERVICE_URL, Generator, LanguageCodegen};
use graphgen_model::Model;

use super::load_model;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the model file (TOML, or JSON by extension)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Preview generated headers without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Endpoint compiled into the generated client
    #[arg(long, default_value = DEFAULT_SERVICE_URL)]
    pub service_url: String,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let model = load_model(&self.model);
        let generator = Generator::new(&model).with_service_url(&self.service_url);

        if self.dry_run {
            self.run_preview(&generator)
        } else {
            self.run_generation(&generator, &model)
        }
    }

    fn run_generation(&self, generator: &Generator, model: &Model) -> Result<()> {
        let result = generator
            .generate(&self.output)
            .wrap_err("Failed to generate headers")?;

        println!("{} ({})", generator.namespace(), model.namespace);
        println!(
            "  {} classes, {} enums",
            model.classes.len(),
            model.enums.len()
        );
        if let Some(container) = model.container() {
            println!("  service: {}", container.name);
        }
        println!();
        println!(
            "Generated: {}/ ({} files, {} written, {} unchanged)",
            self.output.display(),
            result.total(),
            result.written.len(),
            result.unchanged.len()
        );

        if !result.written.is_empty() {
            println!();
            println!("Written:");
            for file in &result.written {
                println!("  + {}", file);
            }
        }

        Ok(())
    }

    fn run_preview(&self, generator: &Generator) -> Result<()> {
        let files = generator.preview().wrap_err("Failed to generate headers")?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
