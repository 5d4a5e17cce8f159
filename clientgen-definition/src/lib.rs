//! Input side of the clientgen generator: the normalized API definition
//! (JSON), the generation profile (TOML), structural validation, and the
//! resolution of raw interactive answers into profile options.

mod answers;
mod definition;
mod error;
mod profile;

pub use answers::Answers;
pub use definition::{
    Definition, Metadata, Model, Operation, Parameter, ParameterKind, PropertySchema, Response,
    SchemaKind, Service, parse_definition,
};
pub use error::{Error, Result};
pub use profile::{
    AccessLevel, Artifact, Artifacts, BaseUrlAccess, Namespaces, Options, Profile, RawNamespaces,
    RawOptions, parse_profile, resolve_options,
};
