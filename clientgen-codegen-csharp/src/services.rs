//! Service interface and implementation class emission.

use clientgen_codegen::CodeWriter;
use clientgen_definition::{Artifact, BaseUrlAccess, Service};

use crate::{
    Result,
    generator::{GenContext, sorted_names},
    operation::{emit_build_service_url, emit_operation},
    scaffolding,
    signature::build_signature,
};

/// The interfaces artifact: one `I{Service}{suffix}` per service.
pub(crate) fn interfaces_block(ctx: &GenContext<'_>) -> Result<String> {
    let mut w = CodeWriter::csharp()
        .line(&format!("namespace {}", ctx.options.namespaces.services))
        .line("{")
        .indent();

    for (index, name) in sorted_names(&ctx.definition.services)
        .into_iter()
        .enumerate()
    {
        w = w.blank_if(index > 0);
        w = emit_interface(w, ctx, name, &ctx.definition.services[name])?;
    }

    Ok(w.dedent().line("}").finish())
}

fn emit_interface(
    mut w: CodeWriter,
    ctx: &GenContext<'_>,
    service_name: &str,
    service: &Service,
) -> Result<CodeWriter> {
    w = w
        .line(&format!(
            "{} interface I{service_name}{}",
            ctx.access(),
            ctx.options.service_suffix
        ))
        .line("{")
        .indent();

    for (operation_name, operation) in service {
        let signature = build_signature(&ctx.resolver, operation)?;
        w = w.line(&format!("{};", signature.render(operation_name)));
    }

    Ok(w.dedent().line("}"))
}

/// The implementation artifact plus the shared scaffolding classes, all in
/// the services namespace. Shared-only profiles still get the scaffolding
/// so a companion implementation-only document compiles against it.
pub(crate) fn implementation_block(ctx: &GenContext<'_>) -> Result<String> {
    let mut w = CodeWriter::csharp()
        .line(&format!("namespace {}", ctx.options.namespaces.services))
        .line("{")
        .indent();

    let mut emitted_any = false;
    if ctx.options.artifacts.contains(Artifact::Implementation) {
        for name in sorted_names(&ctx.definition.services) {
            w = w.blank_if(emitted_any);
            emitted_any = true;
            w = emit_service_class(w, ctx, name, &ctx.definition.services[name])?;
        }
    }

    w = w.blank_if(emitted_any);
    w = scaffolding::emit_client_configuration(w, ctx);
    w = w.blank();
    w = scaffolding::emit_exception_classes(w, ctx);

    Ok(w.dedent().line("}").finish())
}

fn emit_service_class(
    mut w: CodeWriter,
    ctx: &GenContext<'_>,
    service_name: &str,
    service: &Service,
) -> Result<CodeWriter> {
    let class_name = format!("{service_name}{}", ctx.options.service_suffix);
    let mut declaration = format!("{} sealed partial class {class_name}", ctx.access());
    if ctx.options.artifacts.contains(Artifact::Interfaces) {
        declaration.push_str(&format!(" : I{class_name}"));
    }

    w = w
        .line(&declaration)
        .line("{")
        .indent()
        .line("private readonly HttpClient _client;")
        .line("private readonly JsonSerializerSettings _serializerSettings;");

    w = match &ctx.options.base_url {
        BaseUrlAccess::Property => w.line(&format!(
            "private Uri _baseUrl = new Uri(\"{}\", UriKind.Absolute);",
            ctx.base_url
        )),
        BaseUrlAccess::Ctor { .. } => w.line("private Uri _baseUrl;"),
        BaseUrlAccess::Global { global } => w.line(&format!(
            "private Uri _baseUrl = new Uri({global}, UriKind.Absolute);"
        )),
    };

    let ctor_prefix = base_url_ctor_prefix(ctx);
    let ctor_assignment = base_url_ctor_assignment(ctx);

    // Owned-client constructor.
    w = w
        .blank()
        .line(&format!(
            "{} {class_name}({ctor_prefix}ClientConfiguration configuration = null)",
            ctx.access()
        ))
        .line("{")
        .indent()
        .line("_client = new HttpClient();");
    if let Some(assignment) = &ctor_assignment {
        w = w.line(assignment);
    }
    w = emit_initializer_calls(w).dedent().line("}");

    // Caller-supplied client constructor.
    w = w
        .blank()
        .line(&format!(
            "{} {class_name}({ctor_prefix}HttpClient client, ClientConfiguration configuration = null)",
            ctx.access()
        ))
        .line("{")
        .indent()
        .line("_client = client ?? throw new ArgumentNullException(nameof(client));");
    if matches!(ctx.options.base_url, BaseUrlAccess::Property) {
        // A preconfigured BaseAddress on the supplied client wins over the
        // configured default.
        w = w
            .line("if (_client.BaseAddress != null)")
            .indent()
            .line("_baseUrl = _client.BaseAddress;")
            .dedent();
    }
    if let Some(assignment) = &ctor_assignment {
        w = w.line(assignment);
    }
    w = emit_initializer_calls(w).dedent().line("}");

    // Hook declarations for hand-written partial counterparts.
    w = w
        .blank()
        .line("partial void __InitializeClient(HttpClient client);")
        .line("partial void __InitializeJsonSerializer(JsonSerializerSettings settings);");

    w = w
        .blank()
        .line(&format!("{} Uri BaseUrl", ctx.access()))
        .line("{")
        .indent()
        .line("get => _baseUrl;")
        .line("set => _baseUrl = value ?? throw new ArgumentNullException(nameof(value));")
        .dedent()
        .line("}");

    // Operations keep their declaration order within the class.
    for (operation_name, operation) in service {
        w = emit_operation(w, ctx, operation_name, operation)?;
    }

    w = w.blank();
    w = emit_build_service_url(w);

    Ok(w.dedent().line("}"))
}

fn base_url_ctor_prefix(ctx: &GenContext<'_>) -> String {
    match &ctx.options.base_url {
        BaseUrlAccess::Ctor {
            parameter_name,
            parameter_type,
            ..
        } => format!("{parameter_type} {parameter_name}, "),
        _ => String::new(),
    }
}

fn base_url_ctor_assignment(ctx: &GenContext<'_>) -> Option<String> {
    match &ctx.options.base_url {
        BaseUrlAccess::Ctor {
            parameter_name,
            parameter_path,
            ..
        } => {
            let expression = match parameter_path {
                Some(path) => format!("{parameter_name}.{path}"),
                None => parameter_name.clone(),
            };
            Some(format!(
                "_baseUrl = new Uri({expression}, UriKind.Absolute);"
            ))
        }
        _ => None,
    }
}

fn emit_initializer_calls(w: CodeWriter) -> CodeWriter {
    w.line("configuration = configuration ?? ClientConfiguration.Default;")
        .line("configuration.InitializeClient(_client);")
        .line("__InitializeClient(_client);")
        .line("_serializerSettings = new JsonSerializerSettings();")
        .line("configuration.InitializeJsonSerializer(_serializerSettings);")
        .line("__InitializeJsonSerializer(_serializerSettings);")
}
