//! Orchestration of the generated source document.

use clientgen_definition::{Artifact, Definition, Options};
use indexmap::IndexMap;

use crate::{Result, models, resolver::TypeResolver, scaffolding, services};

/// Shared state handed to the emitters for one generation run.
pub(crate) struct GenContext<'a> {
    pub definition: &'a Definition,
    pub options: &'a Options,
    pub resolver: TypeResolver<'a>,
    /// Effective base URL: the profile override when present, otherwise the
    /// definition's metadata URL, otherwise empty.
    pub base_url: String,
}

impl<'a> GenContext<'a> {
    fn new(definition: &'a Definition, options: &'a Options) -> Self {
        let base_url = options
            .base_url_override
            .clone()
            .or_else(|| definition.metadata.base_url.clone())
            .unwrap_or_default();
        Self {
            definition,
            options,
            resolver: TypeResolver::new(definition, options),
            base_url,
        }
    }

    pub fn access(&self) -> &'static str {
        self.options.access_level.as_str()
    }
}

/// Names of a mapping in case-insensitive lexicographic order. Services,
/// models, and enums are emitted in this order rather than declaration
/// order so regeneration stays diff-stable under definition reshuffling.
pub(crate) fn sorted_names<V>(map: &IndexMap<String, V>) -> Vec<&String> {
    let mut names: Vec<&String> = map.keys().collect();
    names.sort_by_key(|name| name.to_lowercase());
    names
}

/// Generates one self-contained C# source document from a definition and
/// resolved options.
///
/// Generation is pure: no I/O, no clock, no randomness. Equal inputs yield
/// byte-identical output.
pub struct Generator<'a> {
    definition: &'a Definition,
    options: &'a Options,
}

impl<'a> Generator<'a> {
    pub fn new(definition: &'a Definition, options: &'a Options) -> Self {
        Self {
            definition,
            options,
        }
    }

    /// Produce the complete source text.
    ///
    /// Blocks are rendered independently and joined with a single blank
    /// line: preamble, interfaces, implementation (service classes plus
    /// shared scaffolding), then models. Any error aborts the run with no
    /// partial output.
    pub fn generate(&self) -> Result<String> {
        let ctx = GenContext::new(self.definition, self.options);
        let artifacts = self.options.artifacts;

        let mut blocks = vec![scaffolding::preamble(&ctx)];
        if artifacts.contains(Artifact::Interfaces) {
            blocks.push(services::interfaces_block(&ctx)?);
        }
        if artifacts.contains(Artifact::Implementation) || artifacts.contains(Artifact::Shared) {
            blocks.push(services::implementation_block(&ctx)?);
        }
        if artifacts.contains(Artifact::Models) {
            blocks.push(models::models_block(&ctx)?);
        }
        // client-factory is accepted in profiles but has no emission yet;
        // its block slot stays reserved here.

        blocks.retain(|block| !block.is_empty());
        Ok(blocks.join("\n"))
    }
}
