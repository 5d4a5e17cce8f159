//! Generation profile: raw TOML shape, validation, and resolved options.

use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Raw profile as written in profile.toml. Sections are optional so that
/// missing pieces surface as validation errors rather than parse errors.
///
/// Serialization exists for `clientgen init`, which writes a profile
/// resolved from recorded answers.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Literal lines prepended verbatim to the output (e.g. license headers).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prefix_lines: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<RawOptions>,
}

// Scalar fields come before the nested sections so the TOML serializer
// never has to emit a value after a table.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RawOptions {
    /// Requested artifacts; empty resolves to implementation + models +
    /// shared scaffolding.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generate: Vec<Artifact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<AccessLevel>,

    /// Flat override for the definition's metadata base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url_override: Option<String>,

    #[serde(default)]
    pub skip_models_ns_prefix: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_namespaces: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespaces: Option<RawNamespaces>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<BaseUrlAccess>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RawNamespaces {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<String>,
}

/// One generatable artifact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Artifact {
    Implementation,
    Models,
    Interfaces,
    ClientFactory,
    Shared,
}

/// The resolved artifact set. Resolved once before generation; emitters
/// receive it as a parameter and never consult raw flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Artifacts {
    implementation: bool,
    models: bool,
    interfaces: bool,
    client_factory: bool,
    shared: bool,
}

impl Artifacts {
    /// Resolve the requested artifact list; an empty request defaults to
    /// implementation, models, and shared scaffolding.
    pub fn resolve(requested: &[Artifact]) -> Self {
        if requested.is_empty() {
            return [Artifact::Implementation, Artifact::Models, Artifact::Shared]
                .into_iter()
                .collect();
        }
        requested.iter().copied().collect()
    }

    pub fn contains(&self, artifact: Artifact) -> bool {
        match artifact {
            Artifact::Implementation => self.implementation,
            Artifact::Models => self.models,
            Artifact::Interfaces => self.interfaces,
            Artifact::ClientFactory => self.client_factory,
            Artifact::Shared => self.shared,
        }
    }
}

impl FromIterator<Artifact> for Artifacts {
    fn from_iter<I: IntoIterator<Item = Artifact>>(iter: I) -> Self {
        let mut set = Self::default();
        for artifact in iter {
            match artifact {
                Artifact::Implementation => set.implementation = true,
                Artifact::Models => set.models = true,
                Artifact::Interfaces => set.interfaces = true,
                Artifact::ClientFactory => set.client_factory = true,
                Artifact::Shared => set.shared = true,
            }
        }
        set
    }
}

/// Visibility modifier applied to generated types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    #[default]
    Public,
    Internal,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How generated services acquire their base URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "access", rename_all = "lowercase")]
pub enum BaseUrlAccess {
    /// A field initialized from the configured URL, exposed through a
    /// settable `BaseUrl` property.
    #[default]
    Property,

    /// A constructor parameter; `parameter_path` optionally names a member
    /// path on it that yields the URL string.
    Ctor {
        parameter_name: String,
        parameter_type: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        parameter_path: Option<String>,
    },

    /// A raw expression evaluated by the generated code (e.g. a static
    /// configuration member).
    Global { global: String },
}

/// Namespaces for generated services and models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespaces {
    pub services: String,
    pub models: String,
}

/// Resolved generation options: the configuration the generator consumes.
#[derive(Debug, Clone)]
pub struct Options {
    pub artifacts: Artifacts,
    pub namespaces: Namespaces,
    pub access_level: AccessLevel,
    pub base_url: BaseUrlAccess,
    pub base_url_override: Option<String>,
    pub skip_models_ns_prefix: bool,
    pub model_suffix: String,
    pub service_suffix: String,
    pub additional_namespaces: Vec<String>,
    pub prefix_lines: Vec<String>,
}

impl Options {
    /// Open, parse, and validate a profile.toml file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_profile(&content, &path.display().to_string())
    }
}

/// Parse and validate a profile from TOML content with the given filename
/// for error reporting.
pub fn parse_profile(content: &str, filename: &str) -> Result<Options> {
    let profile: Profile =
        toml::from_str(content).map_err(|e| Error::profile_parse(e, content, filename))?;
    resolve_options(profile, content, filename)
}

/// Validate the raw profile and resolve defaults into [`Options`].
///
/// The structural gate: the profile must carry an `options` section, an
/// `options.namespaces` section, and both the services and models namespace.
pub fn resolve_options(profile: Profile, src: &str, filename: &str) -> Result<Options> {
    let Some(options) = profile.options else {
        return Err(Error::validation(
            "specify an 'options' section in your profile",
            src,
            filename,
        ));
    };
    let Some(namespaces) = options.namespaces else {
        return Err(Error::validation(
            "specify an 'options.namespaces' section in your profile",
            src,
            filename,
        ));
    };
    let (Some(services), Some(models)) = (namespaces.services, namespaces.models) else {
        return Err(Error::validation(
            "specify namespaces for services and models under the 'options.namespaces' section using keys 'services' and 'models'",
            src,
            filename,
        ));
    };

    Ok(Options {
        artifacts: Artifacts::resolve(&options.generate),
        namespaces: Namespaces { services, models },
        access_level: options.access_level.unwrap_or_default(),
        base_url: options.base_url.unwrap_or_default(),
        base_url_override: options.base_url_override,
        skip_models_ns_prefix: options.skip_models_ns_prefix,
        model_suffix: options.model_suffix.unwrap_or_default(),
        service_suffix: options.service_suffix.unwrap_or_default(),
        additional_namespaces: options.additional_namespaces,
        prefix_lines: profile.prefix_lines,
    })
}
