use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use graphgen_codegen_cpp::Generator;

use super::load_model;

#[derive(Args)]
pub struct ListCommand {
    /// Path to the model file (TOML, or JSON by extension)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let model = load_model(&self.model);
        let generator = Generator::new(&model);
        let descriptors = generator.descriptors().wrap_err("Derivation failed")?;

        if descriptors.is_empty() {
            println!("No entities derived");
            return Ok(());
        }

        let names = generator.target().names();
        println!("Entities:");
        for descriptor in &descriptors {
            println!(
                "  {:<38} {}",
                descriptor.role().as_str(),
                names.name(descriptor)
            );
        }

        Ok(())
    }
}
