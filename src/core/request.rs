use crate::core::endpoint::{Endpoint, HttpMethod, API_KEY_HEADER};
use crate::utils::error::{ParamLocation, ToolError};
use serde_json::{Map, Number, Value};
use url::Url;

/// 一次呼叫所需的一切：已驗證參數、完整 URL 與要送出的金鑰
#[derive(Debug, Clone, PartialEq)]
pub struct RequestPlan {
    pub method: HttpMethod,
    pub url: Url,
    pub api_key: String,
}

/// 依端點定義驗證參數並組出請求。任何錯誤都發生在送出請求之前。
pub fn build_request(
    endpoint: &Endpoint,
    base_url: &Url,
    default_api_key: Option<&str>,
    args: &Value,
) -> Result<RequestPlan, ToolError> {
    let args = args.as_object().ok_or(ToolError::InvalidArguments)?;

    let mut segments = Vec::new();
    for part in endpoint.path.split('/').filter(|part| !part.is_empty()) {
        match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
            Some(name) => segments.push(path_value(args, name)?),
            None => segments.push(part.to_string()),
        }
    }

    let mut query = Vec::new();
    for param in endpoint.query_params() {
        match args.get(param.name).and_then(stringify) {
            Some(value) => query.push((param.name, value)),
            None if param.required => {
                return Err(ToolError::missing(param.name, ParamLocation::Query))
            }
            None => {}
        }
    }

    // 設定檔的金鑰是預設值，呼叫參數可覆蓋
    let api_key = args
        .get(API_KEY_HEADER)
        .and_then(stringify)
        .filter(|key| !key.trim().is_empty())
        .or_else(|| default_api_key.map(str::to_string))
        .ok_or_else(|| ToolError::missing(API_KEY_HEADER, ParamLocation::Header))?;

    Ok(RequestPlan {
        method: endpoint.method,
        url: build_url(base_url, &segments, &query)?,
        api_key,
    })
}

fn path_value(args: &Map<String, Value>, name: &str) -> Result<String, ToolError> {
    match args.get(name) {
        None | Some(Value::Null) => Err(ToolError::missing(name, ParamLocation::Path)),
        Some(Value::String(value)) => {
            // 空白只用於判斷，送出的仍是原值
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
                return Err(ToolError::InvalidPathParameter {
                    name: name.to_string(),
                });
            }
            Ok(value.clone())
        }
        Some(_) => Err(ToolError::InvalidPathParameter {
            name: name.to_string(),
        }),
    }
}

/// 把 base URL 的路徑接上 segments，再依序加入查詢參數
pub fn build_url(
    base_url: &Url,
    segments: &[String],
    query: &[(&str, String)],
) -> Result<Url, ToolError> {
    let mut url = base_url.clone();
    url.set_fragment(None);

    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ToolError::RequestBuild {
                message: format!("{} cannot be used as a base URL", base_url),
            })?;
        path.pop_if_empty();
        path.extend(segments);
    }

    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
    }

    Ok(url)
}

/// Literal string form of an argument, `None` for null.
pub fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_number(n)),
        other => Some(other.to_string()),
    }
}

// 1.0 送成 "1"：agent 端常把整數編成浮點數
fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endpoint::Param;
    use serde_json::json;

    fn echo(body: &str) -> Result<String, ToolError> {
        Ok(body.to_string())
    }

    static LOOKUP: Endpoint = Endpoint {
        name: "get_items_id",
        description: "test endpoint",
        method: HttpMethod::Get,
        path: "/items/{id}",
        params: &[
            Param::path("id", "Item id"),
            Param::string("sort", "Sort order"),
            Param::number("page", "Page"),
        ],
        render: echo,
    };

    static SEARCH: Endpoint = Endpoint {
        name: "get_find",
        description: "test endpoint",
        method: HttpMethod::Get,
        path: "/find",
        params: &[
            Param::string("q", "Query").required(),
            Param::number("offset", "Offset"),
            Param::string("genre_ids", "Genres"),
        ],
        render: echo,
    };

    fn base() -> Url {
        Url::parse("https://listen-api.listennotes.com/api/v2").unwrap()
    }

    fn occurrences(url: &Url, key: &str) -> Vec<String> {
        url.query_pairs()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
            .collect()
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(&json!("abc")), Some("abc".to_string()));
        assert_eq!(stringify(&json!(2)), Some("2".to_string()));
        assert_eq!(stringify(&json!(2.0)), Some("2".to_string()));
        assert_eq!(stringify(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(stringify(&json!(-3)), Some("-3".to_string()));
        assert_eq!(stringify(&json!(true)), Some("true".to_string()));
        assert_eq!(stringify(&json!(["a", 1])), Some("[\"a\",1]".to_string()));
        assert_eq!(stringify(&Value::Null), None);
    }

    #[test]
    fn test_path_substitution() {
        let plan = build_request(&LOOKUP, &base(), Some("key"), &json!({"id": "abc123"})).unwrap();
        assert_eq!(plan.url.as_str(), "https://listen-api.listennotes.com/api/v2/items/abc123");
        assert_eq!(plan.method, HttpMethod::Get);
        assert_eq!(plan.api_key, "key");
    }

    #[test]
    fn test_trailing_slash_in_base_url() {
        let base = Url::parse("http://127.0.0.1:9000/api/v2/").unwrap();
        let plan = build_request(&LOOKUP, &base, Some("key"), &json!({"id": "x"})).unwrap();
        assert_eq!(plan.url.path(), "/api/v2/items/x");
    }

    #[test]
    fn test_path_value_is_one_segment() {
        let plan = build_request(&LOOKUP, &base(), Some("key"), &json!({"id": "a/b?c"})).unwrap();
        assert_eq!(plan.url.path(), "/api/v2/items/a%2Fb%3Fc");
        assert_eq!(plan.url.query(), None);
    }

    #[test]
    fn test_missing_path_parameter() {
        let err = build_request(&LOOKUP, &base(), Some("key"), &json!({})).unwrap_err();
        assert_eq!(err.to_string(), "Missing required path parameter: id");

        let err = build_request(&LOOKUP, &base(), Some("key"), &json!({"id": null})).unwrap_err();
        assert_eq!(err.to_string(), "Missing required path parameter: id");
    }

    #[test]
    fn test_invalid_path_parameter() {
        for bad in [json!(42), json!(""), json!("  "), json!(".."), json!(["x"])] {
            let args = json!({ "id": bad });
            let err = build_request(&LOOKUP, &base(), Some("key"), &args).unwrap_err();
            assert_eq!(err.to_string(), "Invalid path parameter: id");
        }
    }

    #[test]
    fn test_path_value_is_sent_literally() {
        let plan = build_request(&LOOKUP, &base(), Some("key"), &json!({"id": " abc"})).unwrap();
        assert_eq!(plan.url.path(), "/api/v2/items/%20abc");
    }

    #[test]
    fn test_non_object_arguments() {
        for bad in [json!(null), json!("id"), json!([1, 2]), json!(3)] {
            let err = build_request(&LOOKUP, &base(), Some("key"), &bad).unwrap_err();
            assert_eq!(err.to_string(), "Invalid arguments object");
        }
    }

    #[test]
    fn test_missing_required_query_parameter() {
        let err = build_request(&SEARCH, &base(), Some("key"), &json!({"offset": 10})).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: q");
    }

    #[test]
    fn test_present_params_appear_exactly_once() {
        let plan = build_request(
            &SEARCH,
            &base(),
            Some("key"),
            &json!({"q": "star wars", "offset": 10, "genre_ids": "68,82"}),
        )
        .unwrap();

        assert_eq!(occurrences(&plan.url, "q"), vec!["star wars"]);
        assert_eq!(occurrences(&plan.url, "offset"), vec!["10"]);
        assert_eq!(occurrences(&plan.url, "genre_ids"), vec!["68,82"]);
        assert_eq!(plan.url.query_pairs().count(), 3);
    }

    #[test]
    fn test_query_follows_declaration_order() {
        let plan = build_request(
            &SEARCH,
            &base(),
            Some("key"),
            &json!({"genre_ids": "68", "offset": 5, "q": "rust"}),
        )
        .unwrap();
        let keys: Vec<String> = plan.url.query_pairs().map(|(k, _)| k.into_owned()).collect();
        assert_eq!(keys, vec!["q", "offset", "genre_ids"]);
    }

    #[test]
    fn test_absent_and_null_params_are_omitted() {
        let args = json!({"id": "x", "sort": null});
        let plan = build_request(&LOOKUP, &base(), Some("key"), &args).unwrap();
        assert_eq!(plan.url.query(), None);
        assert!(occurrences(&plan.url, "sort").is_empty());
        assert!(occurrences(&plan.url, "page").is_empty());
    }

    #[test]
    fn test_unknown_arguments_are_not_forwarded() {
        let plan = build_request(
            &LOOKUP,
            &base(),
            Some("key"),
            &json!({"id": "x", "page": 2, "debug": true}),
        )
        .unwrap();
        assert_eq!(occurrences(&plan.url, "page"), vec!["2"]);
        assert!(occurrences(&plan.url, "debug").is_empty());
    }

    #[test]
    fn test_api_key_argument_overrides_default() {
        let plan = build_request(
            &LOOKUP,
            &base(),
            Some("configured"),
            &json!({"id": "x", "X-ListenAPI-Key": "per-call"}),
        )
        .unwrap();
        assert_eq!(plan.api_key, "per-call");
        // 金鑰不會出現在查詢字串
        assert!(occurrences(&plan.url, API_KEY_HEADER).is_empty());
    }

    #[test]
    fn test_blank_api_key_argument_falls_back_to_default() {
        let plan = build_request(
            &LOOKUP,
            &base(),
            Some("configured"),
            &json!({"id": "x", "X-ListenAPI-Key": "  "}),
        )
        .unwrap();
        assert_eq!(plan.api_key, "configured");
    }

    #[test]
    fn test_missing_api_key() {
        let err = build_request(&LOOKUP, &base(), None, &json!({"id": "x"})).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: X-ListenAPI-Key");
    }
}
