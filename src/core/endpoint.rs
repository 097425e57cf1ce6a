use crate::utils::error::{ParamLocation, ToolError};
use serde_json::{json, Map, Value};
use std::fmt;

pub const API_KEY_HEADER: &str = "X-ListenAPI-Key";
const API_KEY_DESCRIPTION: &str = "Get API Key on listennotes.com/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Number,
}

impl ParamKind {
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    /// 路徑參數一律是必填字串
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Path,
            required: true,
            description,
        }
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Query,
            required: false,
            description,
        }
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::Number,
            location: ParamLocation::Query,
            required: false,
            description,
        }
    }

    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }
}

/// Decodes a successful body into the endpoint's response type and re-encodes it.
pub type Renderer = fn(&str) -> Result<String, ToolError>;

/// One REST operation of the ListenNotes API, described statically.
pub struct Endpoint {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Relative to the base URL, with `{name}` placeholders for path parameters.
    pub path: &'static str,
    /// Query parameters keep this order on the wire.
    pub params: &'static [Param],
    pub render: Renderer,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("path", &self.path)
            .field("params", &self.params.len())
            .finish()
    }
}

impl Endpoint {
    pub fn path_params(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Path)
    }

    pub fn query_params(&self) -> impl Iterator<Item = &Param> {
        self.params
            .iter()
            .filter(|p| p.location == ParamLocation::Query)
    }

    /// `{name}` placeholders of the path template, in order.
    pub fn path_placeholders(&self) -> impl Iterator<Item = &'static str> {
        self.path
            .split('/')
            .filter_map(|part| part.strip_prefix('{').and_then(|p| p.strip_suffix('}')))
    }

    /// 產生 JSON Schema。沒有預設金鑰時 X-ListenAPI-Key 才列為必填。
    pub fn input_schema(&self, api_key_required: bool) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        properties.insert(
            API_KEY_HEADER.to_string(),
            json!({ "type": "string", "description": API_KEY_DESCRIPTION }),
        );
        if api_key_required {
            required.push(Value::String(API_KEY_HEADER.to_string()));
        }

        for param in self.params {
            properties.insert(
                param.name.to_string(),
                json!({ "type": param.kind.json_type(), "description": param.description }),
            );
            if param.required {
                required.push(Value::String(param.name.to_string()));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}
