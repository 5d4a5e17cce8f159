//! Mapping from definition property schemas to C# type names.

use clientgen_codegen::to_pascal_case;
use clientgen_definition::{Definition, Options, PropertySchema, SchemaKind};

use crate::{Error, Result};

/// Resolves property schemas to the C# type written at their usage site.
#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'a> {
    skip_models_ns_prefix: bool,
    model_suffix: &'a str,
    enums: &'a indexmap::IndexMap<String, Vec<String>>,
}

impl<'a> TypeResolver<'a> {
    pub fn new(definition: &'a Definition, options: &'a Options) -> Self {
        Self {
            skip_models_ns_prefix: options.skip_models_ns_prefix,
            model_suffix: &options.model_suffix,
            enums: &definition.enums,
        }
    }

    /// Resolve a schema to its full C# type, wrapping array schemas in a
    /// read-only sequence type.
    ///
    /// `name` is the consuming property or parameter name: enum-typed string
    /// properties derive their type name from it (`PascalCase(name)` +
    /// `"Enum"`), not from any independent enum identity. Two differently
    /// named properties over the same enum values therefore resolve to
    /// distinct type names.
    pub fn resolve(&self, schema: &PropertySchema, name: &str) -> Result<String> {
        let element = self.resolve_element(schema, name)?;
        if schema.is_array {
            Ok(format!("IReadOnlyList<{element}>"))
        } else {
            Ok(element)
        }
    }

    /// Resolve the element type of a schema, ignoring `is_array`. Used by
    /// the model emitter to materialize concrete empty collections.
    pub fn resolve_element(&self, schema: &PropertySchema, name: &str) -> Result<String> {
        match &schema.kind {
            SchemaKind::Complex { reference } => {
                // Enum references never carry the model suffix: the derived
                // `<Pascal>Enum` usage names must keep matching them.
                if self.enums.contains_key(reference) {
                    Ok(self.prefix(reference))
                } else {
                    Ok(self.prefix(&format!("{reference}{}", self.model_suffix)))
                }
            }
            SchemaKind::Primitive { kind, sub_type } => {
                self.resolve_primitive(kind, sub_type.as_deref(), name, schema)
            }
        }
    }

    fn resolve_primitive(
        &self,
        kind: &str,
        sub_type: Option<&str>,
        name: &str,
        schema: &PropertySchema,
    ) -> Result<String> {
        let type_name = match kind {
            "integer" => match sub_type {
                Some("int64") => "long".to_string(),
                _ => "int".to_string(),
            },
            "number" => sub_type.unwrap_or("double").to_string(),
            "string" => match sub_type {
                Some("date") | Some("date-time") => "DateTime".to_string(),
                Some("uuid") | Some("byte") | Some("password") => "string".to_string(),
                Some("enum") => self.prefix(&format!("{}Enum", to_pascal_case(name))),
                _ => "string".to_string(),
            },
            "boolean" => "bool".to_string(),
            "file" | "object" => "object".to_string(),
            "array" => "object[]".to_string(),
            _ => {
                return Err(Error::UnknownPrimitive {
                    fragment: schema_fragment(schema),
                });
            }
        };
        Ok(type_name)
    }

    fn prefix(&self, type_name: &str) -> String {
        if self.skip_models_ns_prefix {
            type_name.to_string()
        } else {
            format!("__models.{type_name}")
        }
    }
}

/// Render the wire shape of a schema for error messages.
fn schema_fragment(schema: &PropertySchema) -> String {
    let value = match &schema.kind {
        SchemaKind::Primitive { kind, sub_type } => serde_json::json!({
            "primitive": kind,
            "subType": sub_type,
            "isArray": schema.is_array,
        }),
        SchemaKind::Complex { reference } => serde_json::json!({
            "complex": reference,
            "isArray": schema.is_array,
        }),
    };
    serde_json::to_string_pretty(&value).unwrap_or_default()
}
