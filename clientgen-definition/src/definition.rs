//! The normalized API definition consumed by the generators.

use std::{path::Path, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::{Error, Result};

/// A service is an ordered mapping from operation name to operation.
pub type Service = IndexMap<String, Operation>;

/// A model is an ordered mapping from property name to property schema.
pub type Model = IndexMap<String, PropertySchema>;

/// Root of the normalized API definition.
///
/// The definition is immutable for the duration of a generation run; all
/// mappings preserve declaration order because downstream rules (query
/// assembly, response dispatch, first-2xx return-type selection) observe it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub metadata: Metadata,

    /// Service name -> operation name -> operation.
    #[serde(default)]
    pub services: IndexMap<String, Service>,

    /// Model name -> property name -> property schema.
    #[serde(default)]
    pub models: IndexMap<String, Model>,

    /// Enum name -> ordered member names.
    #[serde(default)]
    pub enums: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Default base URL used when the profile carries no override.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// One HTTP operation of a service.
#[derive(Debug, Clone, Deserialize)]
pub struct Operation {
    /// HTTP verb (e.g. "get", "post"); casing is normalized at emission.
    pub verb: String,

    /// Relative resource path with `{name}` placeholders.
    pub path: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Status code -> response, in declaration order.
    #[serde(default)]
    pub responses: IndexMap<String, Response>,
}

impl Operation {
    /// Parameters of the given kind, in declaration order.
    pub fn parameters_of(&self, kind: ParameterKind) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(move |p| p.kind == kind)
    }

    /// Required parameters, in declaration order.
    pub fn required_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter().filter(|p| p.required)
    }

    /// The body parameter, if any (the first declared one wins).
    pub fn body_parameter(&self) -> Option<&Parameter> {
        self.parameters_of(ParameterKind::Body).next()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: ParameterKind,

    pub data_type: PropertySchema,

    #[serde(default)]
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterKind {
    Path,
    Query,
    Header,
    Body,
}

/// One declared response of an operation. A present `data_type` marks a
/// body-carrying response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default)]
    pub data_type: Option<PropertySchema>,

    #[serde(default)]
    pub description: Option<String>,
}

/// Schema of a property, parameter, or response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    pub kind: SchemaKind,
    pub is_array: bool,
}

/// Tagged union over the wire shape `{ "primitive": ..., "subType": ... }`
/// or `{ "complex": ... }`.
///
/// The primitive kind stays a raw string: an unrecognized kind is reported
/// at generation time with the offending schema fragment, not at parse time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
    Primitive {
        kind: String,
        sub_type: Option<String>,
    },
    Complex {
        reference: String,
    },
}

impl<'de> Deserialize<'de> for PropertySchema {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            #[serde(default)]
            primitive: Option<String>,
            #[serde(default)]
            sub_type: Option<String>,
            #[serde(default)]
            complex: Option<String>,
            #[serde(default)]
            is_array: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        let kind = match (raw.primitive, raw.complex) {
            (Some(kind), None) => SchemaKind::Primitive {
                kind,
                sub_type: raw.sub_type,
            },
            (None, Some(reference)) => SchemaKind::Complex { reference },
            (Some(_), Some(_)) => {
                return Err(D::Error::custom(
                    "property schema cannot be both 'primitive' and 'complex'",
                ));
            }
            (None, None) => {
                return Err(D::Error::custom(
                    "property schema must declare either 'primitive' or 'complex'",
                ));
            }
        };

        Ok(PropertySchema {
            kind,
            is_array: raw.is_array,
        })
    }
}

impl FromStr for Definition {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_definition(s, "definition.json")
    }
}

impl Definition {
    /// Parse a definition JSON file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_definition(&content, &path.display().to_string())
    }
}

/// Parse a definition from JSON content with the given filename for error
/// reporting.
pub fn parse_definition(content: &str, filename: &str) -> Result<Definition> {
    serde_json::from_str(content).map_err(|e| Error::definition_parse(e, filename))
}
