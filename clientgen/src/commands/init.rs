use std::path::PathBuf;

use clap::Args;
use clientgen_definition::{Answers, Profile};
use eyre::{Context, Result, bail};

const STARTER_PROFILE: &str = r#"# clientgen profile

[options]
# Artifacts to generate; defaults to implementation, models, and shared
# scaffolding when omitted.
# generate = ["implementation", "models", "shared"]

[options.namespaces]
services = "MyCompany.Api.Services"
models = "MyCompany.Api.Models"
"#;

#[derive(Args)]
pub struct InitCommand {
    /// Answers JSON recorded from a previous interactive session; when
    /// given, the profile is resolved from it instead of the starter
    #[arg(short, long)]
    pub answers: Option<PathBuf>,

    /// Where to write the profile (defaults to ./profile.toml)
    #[arg(short, long, default_value = "profile.toml")]
    pub output: PathBuf,
}

impl InitCommand {
    /// Run the init command
    pub fn run(&self) -> Result<()> {
        if self.output.exists() {
            bail!("{} already exists", self.output.display());
        }

        let content = match &self.answers {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
                let answers: Answers = serde_json::from_str(&raw)
                    .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;

                let profile = Profile {
                    prefix_lines: Vec::new(),
                    options: Some(answers.resolve()),
                };
                toml::to_string_pretty(&profile).wrap_err("Failed to render profile")?
            }
            None => STARTER_PROFILE.to_string(),
        };

        std::fs::write(&self.output, content)
            .wrap_err_with(|| format!("Failed to write {}", self.output.display()))?;

        println!("Created: {}", self.output.display());
        Ok(())
    }
}
