//! Per-operation request/response lifecycle emission.
//!
//! Each operation body follows a fixed order: guard clauses, path
//! resolution, query assembly, absolute URL construction, request
//! construction, transport call, and exact-status dispatch.

use clientgen_codegen::{CodeWriter, to_pascal_case};
use clientgen_definition::{Operation, Parameter, ParameterKind};

use crate::{Result, generator::GenContext, signature::build_signature};

pub(crate) fn emit_operation(
    mut w: CodeWriter,
    ctx: &GenContext<'_>,
    operation_name: &str,
    operation: &Operation,
) -> Result<CodeWriter> {
    let signature = build_signature(&ctx.resolver, operation)?;

    w = w
        .blank()
        .line(&format!(
            "{} async {}",
            ctx.access(),
            signature.render(operation_name)
        ))
        .line("{")
        .indent();

    // Fail fast on missing required arguments before any network activity.
    let required: Vec<&Parameter> = operation.required_parameters().collect();
    for parameter in &required {
        w = w
            .line(&format!("if ({} == null)", parameter.name))
            .indent()
            .line(&format!(
                "throw new ArgumentNullException(nameof({}));",
                parameter.name
            ))
            .dedent();
    }
    w = w.blank_if(!required.is_empty());

    // Substitute path placeholders left to right.
    let path_params: Vec<&Parameter> = operation.parameters_of(ParameterKind::Path).collect();
    let last_path = path_params.len().saturating_sub(1);
    w = w
        .partial(&format!("string _resourceUrl = \"{}\"", operation.path))
        .partial_if(path_params.is_empty(), ";")
        .end_line();
    if !path_params.is_empty() {
        w = w
            .indent()
            .each_indexed(path_params, |w, index, parameter| {
                w.partial(&format!(
                    ".Replace(\"{{{0}}}\", Uri.EscapeUriString(Convert.ToString({0})))",
                    parameter.name
                ))
                .partial_if(index == last_path, ";")
                .end_line()
            })
            .dedent();
    }
    w = w.blank();

    // Query entries keep parameter declaration order.
    let query_params: Vec<&Parameter> = operation.parameters_of(ParameterKind::Query).collect();
    let has_query = !query_params.is_empty();
    if has_query {
        w = w
            .line("var _queryParams = new Dictionary<string, object>")
            .line("{")
            .indent()
            .each(query_params, |w, parameter| {
                w.line(&format!("[\"{0}\"] = {0},", parameter.name))
            })
            .dedent()
            .line("};")
            .blank();
    }

    w = w
        .partial("Uri _serviceUrl = BuildServiceUrl(_resourceUrl")
        .partial_if(has_query, ", _queryParams")
        .partial(");")
        .end_line()
        .blank();

    let verb = to_pascal_case(&operation.verb);
    w = w
        .line(&format!(
            "using (var _request = new HttpRequestMessage(HttpMethod.{verb}, _serviceUrl))"
        ))
        .line("{")
        .indent();

    if let Some(body) = operation.body_parameter() {
        w = w
            .line(&format!(
                "var _content = new StringContent(JsonConvert.SerializeObject({}, _serializerSettings));",
                body.name
            ))
            .line("_content.Headers.ContentType.MediaType = \"application/json\";")
            .line("_request.Content = _content;");
    }

    w = w
        .line("_request.Headers.Accept.Add(new MediaTypeWithQualityHeaderValue(\"application/json\"));")
        .each(operation.parameters_of(ParameterKind::Header), |w, parameter| {
            w.line(&format!(
                "_request.Headers.Add(\"{0}\", {0});",
                parameter.name
            ))
        });

    w = w
        .blank()
        .line("HttpResponseMessage _response = await _client.SendAsync(_request).ConfigureAwait(false);")
        .blank()
        .line("int _statusCode = (int)_response.StatusCode;")
        .line("string _responseContent = await _response.Content.ReadAsStringAsync().ConfigureAwait(false);")
        .line("switch (_statusCode)")
        .line("{")
        .indent();

    // One case per declared response, in declaration order.
    for (status, response) in &operation.responses {
        let code: u16 = status.parse().unwrap_or(0);
        let description = response
            .description
            .as_deref()
            .unwrap_or("A server side error occurred.");

        w = w.line(&format!("case {status}:")).indent();
        match &response.data_type {
            Some(data_type) => {
                let data_type = ctx.resolver.resolve(data_type, "")?;
                w = w.line(&format!(
                    "var _result{status} = JsonConvert.DeserializeObject<{data_type}>(_responseContent, _serializerSettings);"
                ));
                if (200..300).contains(&code) {
                    w = w.line(&format!("return _result{status};"));
                } else {
                    w = w.line(&format!(
                        "throw new WebApiClientException<{data_type}>(\"{description}\", _statusCode, _responseContent, _result{status});"
                    ));
                }
            }
            None => {
                w = w.line(&format!(
                    "throw new WebApiClientException(\"{description}\", _statusCode, _responseContent);"
                ));
            }
        }
        w = w.dedent();
    }

    // Undeclared statuses fall through to a generic failure.
    w = w
        .line("default:")
        .indent()
        .line("throw new WebApiClientException($\"Unexpected status code {_statusCode} was returned from {_serviceUrl}\", _statusCode, _responseContent);")
        .dedent();

    let w = w.dedent().line("}"); // switch
    let w = w.dedent().line("}"); // using (_request)
    Ok(w.dedent().line("}")) // method
}

/// The per-service URL helper: joins the base URL with the relative path
/// and an escaped query string, failing with a format error when no valid
/// absolute URL can be formed.
pub(crate) fn emit_build_service_url(w: CodeWriter) -> CodeWriter {
    w.line("private Uri BuildServiceUrl(string relativeUrl, IDictionary<string, object> queryParams = null)")
        .line("{")
        .indent()
        .line("relativeUrl = relativeUrl ?? \"\";")
        .line("if (relativeUrl.StartsWith(\"/\"))")
        .indent()
        .line("relativeUrl = relativeUrl.Substring(1);")
        .dedent()
        .line("if (queryParams?.Count > 0)")
        .line("{")
        .indent()
        .line("string queryString = queryParams.Aggregate(new StringBuilder(), (aggregate, kvp) =>")
        .line("{")
        .indent()
        .line("aggregate.Append(aggregate.Length == 0 ? \"?\" : \"&\")")
        .indent()
        .line(".Append(Uri.EscapeUriString(kvp.Key));")
        .dedent()
        .line("if (kvp.Value != null)")
        .indent()
        .line("aggregate.Append(\"=\").Append(Uri.EscapeUriString(kvp.Value.ToString()));")
        .dedent()
        .line("return aggregate;")
        .dedent()
        .line("}).ToString();")
        .line("relativeUrl += queryString;")
        .dedent()
        .line("}")
        .line("if (!Uri.TryCreate(BaseUrl, relativeUrl, out Uri serviceUrl))")
        .indent()
        .line("throw new UriFormatException($\"Could not create an absolute URL from base URL '{BaseUrl}' and relative URL '{relativeUrl}'.\");")
        .dedent()
        .line("return serviceUrl;")
        .dedent()
        .line("}")
}
