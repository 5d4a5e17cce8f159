//! Resolution of raw interactive answers into a profile options section.
//!
//! The prompt flow itself lives outside this crate; this is the pure
//! transform from whatever it collected to the shape [`resolve_options`]
//! validates.
//!
//! [`resolve_options`]: crate::resolve_options

use serde::Deserialize;

use crate::profile::{Artifact, BaseUrlAccess, RawNamespaces, RawOptions};

/// Raw answers as collected by an interactive prompt flow.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Answers {
    /// Artifact short names: "impl", "model", "intf", "clientfactory",
    /// "shared". Unknown entries are ignored.
    pub generate: Vec<String>,
    pub servicesns: Option<String>,
    pub modelsns: Option<String>,
    pub base_url_access: Option<String>,
    pub base_url_ctor_param_name: Option<String>,
    pub base_url_ctor_param_type: Option<String>,
    pub base_url_ctor_param_path: Option<String>,
    pub base_url_global: Option<String>,
    pub additional_namespaces: Vec<String>,
}

impl Answers {
    /// Resolve raw answers into an unvalidated options section.
    ///
    /// An empty artifact selection defaults to implementation, models, and
    /// shared scaffolding.
    pub fn resolve(self) -> RawOptions {
        let generate = if self.generate.is_empty() {
            vec![Artifact::Implementation, Artifact::Models, Artifact::Shared]
        } else {
            self.generate
                .iter()
                .filter_map(|name| match name.as_str() {
                    "impl" => Some(Artifact::Implementation),
                    "model" => Some(Artifact::Models),
                    "intf" => Some(Artifact::Interfaces),
                    "clientfactory" => Some(Artifact::ClientFactory),
                    "shared" => Some(Artifact::Shared),
                    _ => None,
                })
                .collect()
        };

        let base_url = match self.base_url_access.as_deref() {
            Some("ctor") => Some(BaseUrlAccess::Ctor {
                parameter_name: self.base_url_ctor_param_name.unwrap_or_default(),
                parameter_type: self.base_url_ctor_param_type.unwrap_or_default(),
                parameter_path: self.base_url_ctor_param_path,
            }),
            Some("global") => Some(BaseUrlAccess::Global {
                global: self.base_url_global.unwrap_or_default(),
            }),
            _ => Some(BaseUrlAccess::Property),
        };

        RawOptions {
            generate,
            namespaces: Some(RawNamespaces {
                services: self.servicesns,
                models: self.modelsns,
            }),
            base_url,
            additional_namespaces: self.additional_namespaces,
            skip_models_ns_prefix: false,
            ..Default::default()
        }
    }
}
