use std::{collections::BTreeMap, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use graphgen_codegen_cpp::Generator;

use super::load_model;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the model file (TOML, or JSON by extension)
    #[arg(short, long, default_value = "model.toml")]
    pub model: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let model = load_model(&self.model);
        let generator = Generator::new(&model);

        // Rendering every entity surfaces name collisions and role mismatches.
        let entities = generator.entities().wrap_err("Derivation failed")?;

        let mut per_role: BTreeMap<_, usize> = BTreeMap::new();
        for entity in &entities {
            *per_role.entry(entity.role).or_default() += 1;
        }

        println!("✓ {} is valid", self.model.display());
        println!(
            "  {} classes, {} enums in {}",
            model.classes.len(),
            model.enums.len(),
            generator.namespace()
        );
        println!("  {} entities", entities.len());
        for (role, count) in per_role {
            println!("    {:<38} {}", role.as_str(), count);
        }

        Ok(())
    }
}
