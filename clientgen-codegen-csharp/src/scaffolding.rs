//! Document preamble and the shared support classes every generated client
//! depends on.

use clientgen_codegen::CodeWriter;

use crate::generator::GenContext;

const BANNER: [&str; 6] = [
    "//------------------------------------------------------------------------------",
    "// <auto-generated>",
    "//     This code was generated by the clientgen tool.",
    "//     Changes to this file will be lost if the code is regenerated.",
    "// </auto-generated>",
    "//------------------------------------------------------------------------------",
];

/// Prefix lines, the auto-generated banner, and the using directives.
pub(crate) fn preamble(ctx: &GenContext<'_>) -> String {
    let options = ctx.options;
    let w = CodeWriter::csharp()
        .each(&options.prefix_lines, |w, line| w.line(line))
        .lines(BANNER)
        .blank()
        .lines([
            "using System;",
            "using System.Collections.Generic;",
            "using System.Linq;",
            "using System.Net.Http;",
            "using System.Net.Http.Headers;",
            "using System.Text;",
            "using System.Threading.Tasks;",
        ])
        .blank()
        .line("using Newtonsoft.Json;")
        .line("using Newtonsoft.Json.Serialization;");

    // With the alias prefix, model types are referenced through `__models`;
    // without it, the models namespace is imported directly alongside any
    // additional namespaces.
    let skip = options.skip_models_ns_prefix;
    let models_ns = &options.namespaces.models;
    w.blank_if(!skip)
        .line_if(!skip, &format!("using __models = {models_ns};"))
        .blank_if(skip || !options.additional_namespaces.is_empty())
        .line_if(skip, &format!("using {models_ns};"))
        .each(&options.additional_namespaces, |w, namespace| {
            w.line(&format!("using {namespace};"))
        })
        .finish()
}

/// The injected configuration object. Service constructors fall back to
/// `ClientConfiguration.Default` when the caller passes none.
pub(crate) fn emit_client_configuration(w: CodeWriter, ctx: &GenContext<'_>) -> CodeWriter {
    let access = ctx.access();
    w.line(&format!("{access} sealed class ClientConfiguration"))
        .line("{")
        .indent()
        .line("public static ClientConfiguration Default { get; } = new ClientConfiguration();")
        .blank()
        .line("public Action<HttpClient> ClientInitializer { get; set; }")
        .blank()
        .line("public Action<JsonSerializerSettings> JsonSerializerInitializer { get; set; }")
        .blank()
        .line("public void InitializeClient(HttpClient client)")
        .line("{")
        .indent()
        .line("ClientInitializer?.Invoke(client);")
        .dedent()
        .line("}")
        .blank()
        .line("public void InitializeJsonSerializer(JsonSerializerSettings settings)")
        .line("{")
        .indent()
        .line("JsonSerializerInitializer?.Invoke(settings);")
        .dedent()
        .line("}")
        .dedent()
        .line("}")
}

/// The exception pair thrown by generated operations: an untyped base for
/// responses without a declared body and a typed variant carrying the
/// deserialized payload.
pub(crate) fn emit_exception_classes(w: CodeWriter, ctx: &GenContext<'_>) -> CodeWriter {
    let access = ctx.access();
    w.line(&format!("{access} class WebApiClientException : Exception"))
        .line("{")
        .indent()
        .line("public WebApiClientException(string message, int statusCode, string response) : base(message)")
        .line("{")
        .indent()
        .line("StatusCode = statusCode;")
        .line("Response = response;")
        .dedent()
        .line("}")
        .blank()
        .line("public int StatusCode { get; }")
        .blank()
        .line("public string Response { get; }")
        .dedent()
        .line("}")
        .blank()
        .line(&format!(
            "{access} sealed class WebApiClientException<TResult> : WebApiClientException"
        ))
        .line("{")
        .indent()
        .line("public WebApiClientException(string message, int statusCode, string response, TResult result) : base(message, statusCode, response)")
        .line("{")
        .indent()
        .line("Result = result;")
        .dedent()
        .line("}")
        .blank()
        .line("public TResult Result { get; }")
        .dedent()
        .line("}")
}
