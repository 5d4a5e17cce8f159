//! C# web-API client generation.
//!
//! [`Generator`] turns a parsed [`clientgen_definition::Definition`] and
//! resolved [`clientgen_definition::Options`] into one self-contained C#
//! source document: service interfaces, `HttpClient`-based implementation
//! classes, model classes, enums, and the shared support types they need.

mod error;
mod generator;
mod models;
mod operation;
mod resolver;
mod scaffolding;
mod services;
mod signature;

pub use error::{Error, Result};
pub use generator::Generator;
pub use resolver::TypeResolver;
pub use signature::{Signature, SignatureParameter, build_signature, return_type};
