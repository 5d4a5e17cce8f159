use std::path::PathBuf;

use clap::Args;
use clientgen_codegen_csharp::{TypeResolver, build_signature};
use clientgen_definition::{Definition, Options};
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the definition JSON (defaults to ./definition.json)
    #[arg(short, long, default_value = "definition.json")]
    pub definition: PathBuf,

    /// Path to the profile TOML (defaults to ./profile.toml)
    #[arg(short, long, default_value = "profile.toml")]
    pub profile: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let definition = Definition::from_file(&self.definition).unwrap_or_exit();
        let options = Options::from_file(&self.profile).unwrap_or_exit();

        // Resolve every signature, response, and model property so type
        // errors surface without emitting anything.
        let resolver = TypeResolver::new(&definition, &options);
        let mut errors = Vec::new();

        for (service_name, service) in &definition.services {
            for (operation_name, operation) in service {
                if let Err(e) = build_signature(&resolver, operation) {
                    errors.push(format!("{service_name}.{operation_name}: {e}"));
                }
                for (status, response) in &operation.responses {
                    if let Some(data_type) = &response.data_type {
                        if let Err(e) = resolver.resolve(data_type, "") {
                            errors.push(format!(
                                "{service_name}.{operation_name} (response {status}): {e}"
                            ));
                        }
                    }
                }
            }
        }

        for (model_name, model) in &definition.models {
            for (property_name, schema) in model {
                if let Err(e) = resolver.resolve(schema, property_name) {
                    errors.push(format!("{model_name}.{property_name}: {e}"));
                }
            }
        }

        if !errors.is_empty() {
            for error in &errors {
                eprintln!("error: {error}");
            }
            std::process::exit(1);
        }

        let operations: usize = definition.services.values().map(|s| s.len()).sum();
        println!("✓ {} is valid\n", self.definition.display());
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

        Ok(())
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
