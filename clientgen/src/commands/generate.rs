use std::path::PathBuf;

use clap::Args;
use clientgen_codegen_csharp::Generator;
use clientgen_definition::{Definition, Options};
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the definition JSON (defaults to ./definition.json)
    #[arg(short, long, default_value = "definition.json")]
    pub definition: PathBuf,

    /// Path to the profile TOML (defaults to ./profile.toml)
    #[arg(short, long, default_value = "profile.toml")]
    pub profile: PathBuf,

    /// Output file; the generated source goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let definition = Definition::from_file(&self.definition).unwrap_or_exit();
        let options = Options::from_file(&self.profile).unwrap_or_exit();

        let source = Generator::new(&definition, &options)
            .generate()
            .wrap_err("Failed to generate client code")?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, &source)
                    .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

                let operations: usize = definition.services.values().map(|s| s.len()).sum();
                println!("Generated: {}", path.display());
                println!(
                    "  {} service{} ({} operation{})",
                    definition.services.len(),
                    plural(definition.services.len()),
                    operations,
                    plural(operations),
                );
                println!(
                    "  {} model{}, {} enum{}",
                    definition.models.len(),
                    plural(definition.models.len()),
                    definition.enums.len(),
                    plural(definition.enums.len()),
                );
            }
            None => print!("{source}"),
        }

        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
