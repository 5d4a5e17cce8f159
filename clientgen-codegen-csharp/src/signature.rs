//! Method signature derivation: parameter ordering and return type.

use clientgen_definition::Operation;

use crate::{Result, resolver::TypeResolver};

/// A derived method signature: ordered parameters and the unwrapped return
/// type (the async wrapper is applied at render time).
#[derive(Debug, Clone)]
pub struct Signature {
    pub parameters: Vec<SignatureParameter>,
    pub return_type: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SignatureParameter {
    pub name: String,
    pub type_name: String,
    pub required: bool,
}

impl Signature {
    /// Render as `Task<T> Name(...)` or `Task Name(...)`. Optional
    /// parameters carry a `default(T)` default-value expression.
    pub fn render(&self, operation_name: &str) -> String {
        let parameters = self
            .parameters
            .iter()
            .map(|p| {
                if p.required {
                    format!("{} {}", p.type_name, p.name)
                } else {
                    format!("{} {} = default({})", p.type_name, p.name, p.type_name)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");

        let task = match &self.return_type {
            Some(return_type) => format!("Task<{return_type}>"),
            None => "Task".to_string(),
        };

        format!("{task} {operation_name}({parameters})")
    }
}

/// Derive an operation's signature: required parameters first (declaration
/// order preserved within each partition), then optional ones.
pub fn build_signature(resolver: &TypeResolver<'_>, operation: &Operation) -> Result<Signature> {
    let ordered = operation
        .parameters
        .iter()
        .filter(|p| p.required)
        .chain(operation.parameters.iter().filter(|p| !p.required));

    let mut parameters = Vec::with_capacity(operation.parameters.len());
    for parameter in ordered {
        parameters.push(SignatureParameter {
            name: parameter.name.clone(),
            type_name: resolver.resolve(&parameter.data_type, &parameter.name)?,
            required: parameter.required,
        });
    }

    Ok(Signature {
        parameters,
        return_type: return_type(resolver, operation)?,
    })
}

/// The operation's unwrapped return type: the resolved type of the first
/// response in declaration order whose status code lies in [200, 300) and
/// which declares a `dataType`. Declaration order, not numeric order, is
/// deliberate: the first qualifying entry wins.
pub fn return_type(resolver: &TypeResolver<'_>, operation: &Operation) -> Result<Option<String>> {
    for (status, response) in &operation.responses {
        let code: u16 = status.parse().unwrap_or(0);
        if (200..300).contains(&code) {
            if let Some(data_type) = &response.data_type {
                return resolver.resolve(data_type, "").map(Some);
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use clientgen_definition::{Definition, Options, parse_profile};

    use super::*;

    fn options() -> Options {
        parse_profile(
            "[options.namespaces]\nservices = \"Svc\"\nmodels = \"Mdl\"",
            "profile.toml",
        )
        .unwrap()
    }

    fn operation(json: &str) -> Operation {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_required_parameters_precede_optional() {
        let definition = Definition::default();
        let opts = options();
        let resolver = TypeResolver::new(&definition, &opts);

        let op = operation(
            r#"{
                "verb": "get", "path": "/x",
                "parameters": [
                    { "name": "a", "type": "query", "dataType": { "primitive": "string" } },
                    { "name": "b", "type": "path", "required": true, "dataType": { "primitive": "integer" } },
                    { "name": "c", "type": "query", "dataType": { "primitive": "boolean" } },
                    { "name": "d", "type": "header", "required": true, "dataType": { "primitive": "string" } }
                ]
            }"#,
        );

        let signature = build_signature(&resolver, &op).unwrap();
        let names: Vec<&str> = signature.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["b", "d", "a", "c"]);

        assert_eq!(
            signature.render("Fetch"),
            "Task Fetch(int b, string d, string a = default(string), bool c = default(bool))"
        );
    }

    #[test]
    fn test_first_declared_2xx_with_data_wins() {
        let definition = Definition::default();
        let opts = options();
        let resolver = TypeResolver::new(&definition, &opts);

        let op = operation(
            r#"{
                "verb": "get", "path": "/x",
                "responses": {
                    "500": { "dataType": { "complex": "Error" } },
                    "204": {},
                    "201": { "dataType": { "complex": "Created" } },
                    "200": { "dataType": { "complex": "Ok" } }
                }
            }"#,
        );

        // 500 is not 2xx, 204 has no data; 201 is the first qualifying
        // entry even though 200 is numerically smaller.
        assert_eq!(
            return_type(&resolver, &op).unwrap().as_deref(),
            Some("__models.Created")
        );
    }

    #[test]
    fn test_no_qualifying_response_returns_bare_task() {
        let definition = Definition::default();
        let opts = options();
        let resolver = TypeResolver::new(&definition, &opts);

        let op = operation(r#"{ "verb": "delete", "path": "/x" }"#);
        let signature = build_signature(&resolver, &op).unwrap();
        assert_eq!(signature.return_type, None);
        assert_eq!(signature.render("Remove"), "Task Remove()");
    }
}
