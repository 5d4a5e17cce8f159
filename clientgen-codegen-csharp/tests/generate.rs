//! End-to-end generation tests over a small pet-store definition.

use clientgen_codegen_csharp::Generator;
use clientgen_definition::{parse_definition, parse_profile};

const PETS_DEFINITION: &str = r#"{
    "metadata": { "baseUrl": "https://petstore.example.com/v2" },
    "services": {
        "Store": {
            "GetInventory": {
                "verb": "get",
                "path": "/store/inventory",
                "responses": {
                    "200": { "dataType": { "primitive": "object" } }
                }
            }
        },
        "Pets": {
            "GetPet": {
                "verb": "get",
                "path": "/pets/{petId}",
                "parameters": [
                    { "name": "petId", "type": "path", "required": true,
                      "dataType": { "primitive": "integer", "subType": "int64" } }
                ],
                "responses": {
                    "200": { "dataType": { "complex": "Pet" },
                             "description": "The requested pet." },
                    "404": { "description": "Pet not found" }
                }
            },
            "AddPet": {
                "verb": "post",
                "path": "/pets",
                "parameters": [
                    { "name": "pet", "type": "body", "required": true,
                      "dataType": { "complex": "Pet" } },
                    { "name": "clientVersion", "type": "header",
                      "dataType": { "primitive": "string" } }
                ],
                "responses": {
                    "201": { "dataType": { "complex": "Pet" } },
                    "400": { "dataType": { "complex": "Pet" },
                             "description": "Invalid pet" }
                }
            },
            "FindPets": {
                "verb": "get",
                "path": "/pets",
                "parameters": [
                    { "name": "status", "type": "query",
                      "dataType": { "primitive": "string" } },
                    { "name": "limit", "type": "query",
                      "dataType": { "primitive": "integer" } }
                ],
                "responses": {
                    "200": { "dataType": { "complex": "Pet", "isArray": true } }
                }
            }
        }
    },
    "models": {
        "Pet": {
            "id": { "primitive": "integer", "subType": "int64" },
            "name": { "primitive": "string" },
            "status": { "primitive": "string", "subType": "enum" },
            "tags": { "complex": "Tag", "isArray": true }
        },
        "Tag": {
            "label": { "primitive": "string" }
        }
    },
    "enums": {
        "StatusEnum": ["Available", "Pending", "Sold"]
    }
}"#;

const PETS_PROFILE: &str = r#"
[options.namespaces]
services = "PetStore.Client"
models = "PetStore.Client.Models"
"#;

fn generate(definition_json: &str, profile_toml: &str) -> clientgen_codegen_csharp::Result<String> {
    let definition = parse_definition(definition_json, "definition.json").unwrap();
    let options = parse_profile(profile_toml, "profile.toml").unwrap();
    Generator::new(&definition, &options).generate()
}

fn generate_pets(profile_toml: &str) -> String {
    generate(PETS_DEFINITION, profile_toml).unwrap()
}

#[test]
fn test_default_artifacts_cover_implementation_models_and_shared() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains("namespace PetStore.Client\n{"));
    assert!(output.contains("namespace PetStore.Client.Models\n{"));
    assert!(output.contains("public sealed partial class Pets\n"));
    assert!(output.contains("public sealed partial class Store\n"));
    assert!(output.contains("public partial class Pet\n"));
    assert!(output.contains("public enum StatusEnum"));
    assert!(output.contains("public sealed class ClientConfiguration"));
    assert!(output.contains("public class WebApiClientException : Exception"));
    assert!(output.contains("public sealed class WebApiClientException<TResult> : WebApiClientException"));

    // No interfaces by default.
    assert!(!output.contains("interface IPets"));
    assert!(!output.contains(" : IPets"));
}

#[test]
fn test_generation_is_idempotent() {
    assert_eq!(generate_pets(PETS_PROFILE), generate_pets(PETS_PROFILE));
}

#[test]
fn test_blocks_separated_by_exactly_one_blank_line() {
    let output = generate_pets(PETS_PROFILE);
    assert!(!output.contains("\n\n\n"));
    assert!(output.ends_with("}\n"));
}

#[test]
fn test_preamble_usings_and_models_alias() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.starts_with("//----"));
    assert!(output.contains("// <auto-generated>"));
    assert!(output.contains("using System;\n"));
    assert!(output.contains("using System.Net.Http.Headers;\n"));
    assert!(output.contains("using Newtonsoft.Json;\n"));
    assert!(output.contains("using __models = PetStore.Client.Models;\n"));
}

#[test]
fn test_skip_models_ns_prefix_drops_alias() {
    let output = generate_pets(
        r#"
        [options]
        skip_models_ns_prefix = true
        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"
        "#,
    );

    assert!(!output.contains("__models"));
    assert!(output.contains("using PetStore.Client.Models;\n"));
    assert!(output.contains("Task<Pet> GetPet(long petId)"));
}

#[test]
fn test_prefix_lines_and_additional_namespaces() {
    let output = generate_pets(
        r##"
        prefix_lines = ["// Copyright Example Corp.", "#pragma warning disable 0472"]

        [options]
        additional_namespaces = ["My.Extensions"]

        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"
        "##,
    );

    assert!(output.starts_with("// Copyright Example Corp.\n#pragma warning disable 0472\n//----"));
    assert!(output.contains("using My.Extensions;\n"));
}

#[test]
fn test_operation_signature_and_guards() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains("public async Task<__models.Pet> GetPet(long petId)"));
    assert!(output.contains("if (petId == null)"));
    assert!(output.contains("throw new ArgumentNullException(nameof(petId));"));

    // Optional query parameters carry default-value expressions.
    assert!(output.contains(
        "public async Task<IReadOnlyList<__models.Pet>> FindPets(string status = default(string), int limit = default(int))"
    ));
}

#[test]
fn test_path_substitution_chain() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains("string _resourceUrl = \"/pets/{petId}\"\n"));
    assert!(output.contains(
        ".Replace(\"{petId}\", Uri.EscapeUriString(Convert.ToString(petId)));"
    ));
    // Operations without path parameters close the literal on one line.
    assert!(output.contains("string _resourceUrl = \"/store/inventory\";"));
}

#[test]
fn test_query_dictionary_in_declaration_order() {
    let output = generate_pets(PETS_PROFILE);

    let status = output.find("[\"status\"] = status,").unwrap();
    let limit = output.find("[\"limit\"] = limit,").unwrap();
    assert!(status < limit);
    assert!(output.contains("var _queryParams = new Dictionary<string, object>"));
    assert!(output.contains("Uri _serviceUrl = BuildServiceUrl(_resourceUrl, _queryParams);"));
    // Query-less operations omit the dictionary argument.
    assert!(output.contains("Uri _serviceUrl = BuildServiceUrl(_resourceUrl);"));
}

#[test]
fn test_request_construction_body_and_headers() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains("using (var _request = new HttpRequestMessage(HttpMethod.Post, _serviceUrl))"));
    assert!(output.contains("using (var _request = new HttpRequestMessage(HttpMethod.Get, _serviceUrl))"));
    assert!(output.contains(
        "var _content = new StringContent(JsonConvert.SerializeObject(pet, _serializerSettings));"
    ));
    assert!(output.contains("_content.Headers.ContentType.MediaType = \"application/json\";"));
    assert!(output.contains("_request.Headers.Add(\"clientVersion\", clientVersion);"));
    assert!(output.contains(
        "_request.Headers.Accept.Add(new MediaTypeWithQualityHeaderValue(\"application/json\"));"
    ));
    assert!(output.contains(
        "HttpResponseMessage _response = await _client.SendAsync(_request).ConfigureAwait(false);"
    ));
}

#[test]
fn test_status_dispatch_cases() {
    let output = generate_pets(PETS_PROFILE);

    // 2xx with a body deserializes and returns.
    assert!(output.contains("case 200:"));
    assert!(output.contains(
        "var _result200 = JsonConvert.DeserializeObject<__models.Pet>(_responseContent, _serializerSettings);"
    ));
    assert!(output.contains("return _result200;"));

    // Declared responses without a body always throw the untyped exception.
    assert!(output.contains(
        "throw new WebApiClientException(\"Pet not found\", _statusCode, _responseContent);"
    ));

    // Non-2xx responses with a body throw the typed exception.
    assert!(output.contains(
        "throw new WebApiClientException<__models.Pet>(\"Invalid pet\", _statusCode, _responseContent, _result400);"
    ));

    // Undeclared statuses hit the default branch.
    assert!(output.contains(
        "throw new WebApiClientException($\"Unexpected status code {_statusCode} was returned from {_serviceUrl}\", _statusCode, _responseContent);"
    ));
}

#[test]
fn test_model_array_property_materializes_list() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains("private IReadOnlyList<__models.Tag> _tags;"));
    assert!(output.contains("public IReadOnlyList<__models.Tag> tags\n"));
    assert!(output.contains("get => _tags ?? (_tags = new List<__models.Tag>());"));
    assert!(output.contains("set => _tags = value;"));
    assert!(output.contains(
        "[JsonProperty(\"tags\", Required = Required.Default, NullValueHandling = NullValueHandling.Ignore)]"
    ));
    assert!(output.contains("public long id { get; set; }"));
    assert!(output.contains("public __models.StatusEnum status { get; set; }"));
}

#[test]
fn test_enum_members_keep_declaration_order() {
    let output = generate_pets(PETS_PROFILE);

    let body = &output[output.find("public enum StatusEnum").unwrap()..];
    let available = body.find("Available,").unwrap();
    let pending = body.find("Pending,").unwrap();
    let sold = body.find("Sold,").unwrap();
    assert!(available < pending && pending < sold);
}

#[test]
fn test_interfaces_artifact_and_suffixes() {
    let output = generate_pets(
        r#"
        [options]
        generate = ["implementation", "interfaces", "shared"]
        service_suffix = "Client"
        model_suffix = "Dto"

        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"
        "#,
    );

    assert!(output.contains("public interface IPetsClient\n"));
    assert!(output.contains("Task<__models.PetDto> GetPet(long petId);"));
    assert!(output.contains("public sealed partial class PetsClient : IPetsClient"));
    // Models artifact was not requested.
    assert!(!output.contains("namespace PetStore.Client.Models\n{"));
}

#[test]
fn test_models_only_profile_emits_no_services() {
    let output = generate_pets(
        r#"
        [options]
        generate = ["models"]

        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"
        "#,
    );

    assert!(output.contains("namespace PetStore.Client.Models\n{"));
    assert!(!output.contains("namespace PetStore.Client\n{"));
    assert!(!output.contains("class ClientConfiguration"));
    assert!(!output.contains("HttpRequestMessage"));
}

#[test]
fn test_services_ordered_case_insensitively() {
    let output = generate(
        r#"{
            "services": {
                "beta": { "Ping": { "verb": "get", "path": "/b" } },
                "GAMMA": { "Ping": { "verb": "get", "path": "/g" } },
                "Alpha": { "Ping": { "verb": "get", "path": "/a" } }
            }
        }"#,
        r#"
        [options]
        generate = ["interfaces"]

        [options.namespaces]
        services = "Svc"
        models = "Mdl"
        "#,
    )
    .unwrap();

    let alpha = output.find("interface IAlpha").unwrap();
    let beta = output.find("interface Ibeta").unwrap();
    let gamma = output.find("interface IGAMMA").unwrap();
    assert!(alpha < beta && beta < gamma);
}

#[test]
fn test_base_url_property_strategy_uses_metadata_url() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains(
        "private Uri _baseUrl = new Uri(\"https://petstore.example.com/v2\", UriKind.Absolute);"
    ));
    assert!(output.contains("public Uri BaseUrl\n"));
    assert!(output.contains(
        "set => _baseUrl = value ?? throw new ArgumentNullException(nameof(value));"
    ));
}

#[test]
fn test_base_url_override_beats_metadata() {
    let output = generate_pets(
        r#"
        [options]
        base_url_override = "https://staging.example.com"

        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"
        "#,
    );

    assert!(output.contains(
        "private Uri _baseUrl = new Uri(\"https://staging.example.com\", UriKind.Absolute);"
    ));
    assert!(!output.contains("petstore.example.com"));
}

#[test]
fn test_base_url_ctor_strategy() {
    let output = generate_pets(
        r#"
        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"

        [options.base_url]
        access = "ctor"
        parameter_name = "config"
        parameter_type = "IApiConfig"
        parameter_path = "BaseUrl"
        "#,
    );

    assert!(output.contains("private Uri _baseUrl;"));
    assert!(output.contains(
        "public Pets(IApiConfig config, ClientConfiguration configuration = null)"
    ));
    assert!(output.contains(
        "public Pets(IApiConfig config, HttpClient client, ClientConfiguration configuration = null)"
    ));
    assert!(output.contains("_baseUrl = new Uri(config.BaseUrl, UriKind.Absolute);"));
}

#[test]
fn test_base_url_global_strategy() {
    let output = generate_pets(
        r#"
        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"

        [options.base_url]
        access = "global"
        global = "Config.ServiceUrl"
        "#,
    );

    assert!(output.contains(
        "private Uri _baseUrl = new Uri(Config.ServiceUrl, UriKind.Absolute);"
    ));
}

#[test]
fn test_constructor_hooks_and_configuration_fallback() {
    let output = generate_pets(PETS_PROFILE);

    assert!(output.contains("public Pets(ClientConfiguration configuration = null)"));
    assert!(output.contains(
        "public Pets(HttpClient client, ClientConfiguration configuration = null)"
    ));
    assert!(output.contains("configuration = configuration ?? ClientConfiguration.Default;"));
    assert!(output.contains("configuration.InitializeClient(_client);"));
    assert!(output.contains("__InitializeClient(_client);"));
    assert!(output.contains("partial void __InitializeClient(HttpClient client);"));
    assert!(output.contains(
        "partial void __InitializeJsonSerializer(JsonSerializerSettings settings);"
    ));
}

#[test]
fn test_access_level_internal() {
    let output = generate_pets(
        r#"
        [options]
        access_level = "internal"

        [options.namespaces]
        services = "PetStore.Client"
        models = "PetStore.Client.Models"
        "#,
    );

    assert!(output.contains("internal sealed partial class Pets"));
    assert!(output.contains("internal partial class Pet\n"));
    assert!(output.contains("internal enum StatusEnum"));
    assert!(output.contains("internal sealed class ClientConfiguration"));
    assert!(output.contains("internal async Task<__models.Pet> GetPet(long petId)"));
}

#[test]
fn test_zero_parameter_zero_response_operation_emits_complete_body() {
    let output = generate(
        r#"{
            "services": {
                "Health": { "Ping": { "verb": "get", "path": "/ping" } }
            }
        }"#,
        PETS_PROFILE,
    )
    .unwrap();

    assert!(output.contains("public async Task Ping()"));
    assert!(output.contains("string _resourceUrl = \"/ping\";"));
    assert!(output.contains("Uri _serviceUrl = BuildServiceUrl(_resourceUrl);"));
    // With no declared responses the dispatch switch closes around only the
    // default branch.
    assert!(output.contains(
        "                switch (_statusCode)\n                {\n                    default:"
    ));
    assert!(output.contains("throw new WebApiClientException($\"Unexpected status code"));
    assert!(!output.contains("case "));
}

#[test]
fn test_response_description_defaults_when_missing() {
    let output = generate(
        r#"{
            "services": {
                "Health": {
                    "Ping": {
                        "verb": "get",
                        "path": "/ping",
                        "responses": {
                            "200": { "dataType": { "primitive": "string" } },
                            "400": { "dataType": { "primitive": "string" } },
                            "500": {}
                        }
                    }
                }
            }
        }"#,
        PETS_PROFILE,
    )
    .unwrap();

    // Both exception flavors fall back to the stock description.
    assert!(output.contains(
        "throw new WebApiClientException(\"A server side error occurred.\", _statusCode, _responseContent);"
    ));
    assert!(output.contains(
        "throw new WebApiClientException<string>(\"A server side error occurred.\", _statusCode, _responseContent, _result400);"
    ));
}

#[test]
fn test_uppercase_verb_normalizes_to_valid_http_method() {
    let output = generate(
        r#"{
            "services": {
                "Pets": { "RemovePet": { "verb": "DELETE", "path": "/pets" } }
            }
        }"#,
        PETS_PROFILE,
    )
    .unwrap();

    assert!(output.contains("new HttpRequestMessage(HttpMethod.Delete, _serviceUrl)"));
    assert!(!output.contains("HttpMethod.DELETE"));
}

#[test]
fn test_unknown_primitive_aborts_generation() {
    let err = generate(
        r#"{
            "models": {
                "Payment": { "amount": { "primitive": "decimal128" } }
            }
        }"#,
        PETS_PROFILE,
    )
    .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("cannot translate primitive type"));
    assert!(message.contains("decimal128"));
}

#[test]
fn test_empty_definition_still_yields_valid_document() {
    let output = generate("{}", PETS_PROFILE);
    let output = output.unwrap();

    // Scaffolding and empty namespaces, nothing else.
    assert!(output.contains("namespace PetStore.Client\n{"));
    assert!(output.contains("public sealed class ClientConfiguration"));
    assert!(!output.contains("partial class"));
}

#[test]
fn test_shared_only_document() {
    let output = generate(
        "{}",
        r#"
        [options]
        generate = ["shared"]

        [options.namespaces]
        services = "Acme.Client"
        models = "Acme.Client.Models"
        "#,
    )
    .unwrap();

    insta::assert_snapshot!(output);
}
