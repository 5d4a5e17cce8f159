//! Model class and enum emission.

use clientgen_codegen::CodeWriter;
use clientgen_definition::Model;

use crate::{
    Result,
    generator::{GenContext, sorted_names},
};

/// The models artifact: all model classes, then all enums, inside the
/// models namespace.
pub(crate) fn models_block(ctx: &GenContext<'_>) -> Result<String> {
    let mut w = CodeWriter::csharp()
        .line(&format!("namespace {}", ctx.options.namespaces.models))
        .line("{")
        .indent();

    let model_names = sorted_names(&ctx.definition.models);
    let enum_names = sorted_names(&ctx.definition.enums);

    for (index, name) in model_names.iter().enumerate() {
        w = w.blank_if(index > 0);
        w = emit_model(w, ctx, name, &ctx.definition.models[name.as_str()])?;
    }
    w = w.blank_if(!model_names.is_empty() && !enum_names.is_empty());
    for (index, name) in enum_names.iter().enumerate() {
        w = w.blank_if(index > 0);
        w = emit_enum(w, ctx, name, &ctx.definition.enums[name.as_str()]);
    }

    Ok(w.dedent().line("}").finish())
}

fn emit_model(
    mut w: CodeWriter,
    ctx: &GenContext<'_>,
    model_name: &str,
    model: &Model,
) -> Result<CodeWriter> {
    w = w
        .line("[JsonObject(MemberSerialization.OptIn)]")
        .line(&format!(
            "{} partial class {model_name}{}",
            ctx.access(),
            ctx.options.model_suffix
        ))
        .line("{")
        .indent();

    for (index, (property_name, schema)) in model.iter().enumerate() {
        let property_type = ctx.resolver.resolve(schema, property_name)?;
        w = w.blank_if(index > 0);

        if schema.is_array {
            // Lazily materialize a concrete empty list so callers never
            // observe a null collection.
            let element_type = ctx.resolver.resolve_element(schema, property_name)?;
            w = w
                .line(&format!("private {property_type} _{property_name};"))
                .blank()
                .line(&json_property_attribute(property_name))
                .line(&format!("public {property_type} {property_name}"))
                .line("{")
                .indent()
                .line(&format!(
                    "get => _{property_name} ?? (_{property_name} = new List<{element_type}>());"
                ))
                .line(&format!("set => _{property_name} = value;"))
                .dedent()
                .line("}");
        } else {
            w = w
                .line(&json_property_attribute(property_name))
                .line(&format!(
                    "public {property_type} {property_name} {{ get; set; }}"
                ));
        }
    }

    Ok(w.dedent().line("}"))
}

fn json_property_attribute(property_name: &str) -> String {
    format!(
        "[JsonProperty(\"{property_name}\", Required = Required.Default, NullValueHandling = NullValueHandling.Ignore)]"
    )
}

fn emit_enum(
    w: CodeWriter,
    ctx: &GenContext<'_>,
    enum_name: &str,
    members: &[String],
) -> CodeWriter {
    w.line(&format!("{} enum {enum_name}", ctx.access()))
        .line("{")
        .indent()
        .each(members, |w, member| w.line(&format!("{member},")))
        .dedent()
        .line("}")
}
