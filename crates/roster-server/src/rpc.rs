//! Client shim mapping the front end's RPC surface onto HTTP requests.
//!
//! In production the front end calls server functions by name through
//! the hosting platform. Locally those calls are redirected to the mock
//! API. [`RpcCall`] is the typed form of one such call; it knows which
//! HTTP request the router expects for it and how to read the reply.
//! [`RpcClient`] sends calls to a running mock server over `reqwest`.
//!
//! A non-2xx reply becomes [`RpcError::Http`] carrying the status code
//! and reason phrase, so callers see `HTTP 404: Not Found` rather than
//! the error body.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use roster_types::{CharacterFilter, PageRequest, PriorityShortcut, SortSpec};
use serde_json::Value;

/// Errors raised while decoding or rendering an RPC call.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// No server function with this name exists.
    #[error("unknown server function: {0}")]
    UnknownFunction(String),

    /// A required positional argument was not supplied.
    #[error("{function}: missing argument {index}")]
    MissingArgument {
        /// Function name.
        function: &'static str,
        /// Zero-based argument position.
        index: usize,
    },

    /// An argument had the wrong shape.
    #[error("{function}: {message}")]
    InvalidArgument {
        /// Function name.
        function: &'static str,
        /// What was wrong.
        message: String,
    },

    /// The HTTP request could not be assembled.
    #[error("request build error: {0}")]
    Request(#[from] axum::http::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Numeric status code.
        status: u16,
        /// Reason phrase for the status.
        message: String,
    },

    /// A 2xx reply whose body was not JSON.
    #[error("response decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a reply.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Options for `getUnownedCharactersWithOptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Regular filters.
    pub filter: CharacterFilter,
    /// `priority=` shortcut, which takes precedence over `filter`.
    pub shortcut: Option<PriorityShortcut>,
}

/// Options for `getCharactersWithPagination`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Filters.
    pub filter: CharacterFilter,
    /// Ordering.
    pub sort: SortSpec,
    /// Page window.
    pub page: PageRequest,
}

/// One call on the front end's server-function surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RpcCall {
    /// `getStatistics()`
    GetStatistics,
    /// `getUnownedCharactersWithOptions(options)`
    GetUnownedCharactersWithOptions(ListOptions),
    /// `getCharactersWithPagination(options)`
    GetCharactersWithPagination(PageOptions),
    /// `getCharacterDetails(characterId)`
    GetCharacterDetails(String),
    /// `getDashboardData()`
    GetDashboardData,
    /// `updatePriority(rowIndex, priority)`
    UpdatePriority {
        /// Target row.
        row_index: u32,
        /// New priority, `None` to clear.
        priority: Option<i32>,
    },
    /// `devUtils.reloadMockData()`
    ReloadMockData,
    /// `devUtils.checkServerStatus()`
    CheckServerStatus,
}

impl RpcCall {
    /// The server-function name the front end uses for this call.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetStatistics => "getStatistics",
            Self::GetUnownedCharactersWithOptions(_) => "getUnownedCharactersWithOptions",
            Self::GetCharactersWithPagination(_) => "getCharactersWithPagination",
            Self::GetCharacterDetails(_) => "getCharacterDetails",
            Self::GetDashboardData => "getDashboardData",
            Self::UpdatePriority { .. } => "updatePriority",
            Self::ReloadMockData => "reloadMockData",
            Self::CheckServerStatus => "checkServerStatus",
        }
    }

    /// Decode a call from its function name and positional JSON
    /// arguments, the way the front end invokes it.
    ///
    /// Option objects are read like a query string: strings and numbers
    /// are both accepted, anything unrecognised is ignored.
    pub fn from_invocation(name: &str, args: &[Value]) -> Result<Self, RpcError> {
        match name {
            "getStatistics" => Ok(Self::GetStatistics),
            "getDashboardData" => Ok(Self::GetDashboardData),
            "reloadMockData" => Ok(Self::ReloadMockData),
            "checkServerStatus" => Ok(Self::CheckServerStatus),
            "getUnownedCharactersWithOptions" => {
                let opts = Options(args.first());
                Ok(Self::GetUnownedCharactersWithOptions(ListOptions {
                    filter: opts.filter(),
                    shortcut: opts.get("priority").as_deref().and_then(PriorityShortcut::from_param),
                }))
            }
            "getCharactersWithPagination" => {
                let opts = Options(args.first());
                Ok(Self::GetCharactersWithPagination(PageOptions {
                    filter: opts.filter(),
                    sort: SortSpec::from_params(
                        opts.get("sortBy").as_deref(),
                        opts.get("sortOrder").as_deref(),
                    ),
                    page: PageRequest::from_params(
                        opts.get("page").as_deref(),
                        opts.get("pageSize").as_deref(),
                    ),
                }))
            }
            "getCharacterDetails" => {
                let function = "getCharacterDetails";
                let id = args
                    .first()
                    .and_then(scalar_to_string)
                    .ok_or(RpcError::MissingArgument { function, index: 0 })?;
                Ok(Self::GetCharacterDetails(id))
            }
            "updatePriority" => {
                let function = "updatePriority";
                let row = args
                    .first()
                    .ok_or(RpcError::MissingArgument { function, index: 0 })?;
                let row_index = scalar_to_string(row)
                    .and_then(|s| s.parse::<u32>().ok())
                    .ok_or_else(|| RpcError::InvalidArgument {
                        function,
                        message: format!("rowIndex must be a row number, got {row}"),
                    })?;
                let priority = match args.get(1) {
                    None | Some(Value::Null) => None,
                    Some(value) => Some(
                        value
                            .as_i64()
                            .and_then(|p| i32::try_from(p).ok())
                            .ok_or_else(|| RpcError::InvalidArgument {
                                function,
                                message: format!("priority must be an integer or null, got {value}"),
                            })?,
                    ),
                };
                Ok(Self::UpdatePriority { row_index, priority })
            }
            other => Err(RpcError::UnknownFunction(other.to_owned())),
        }
    }

    /// HTTP method for this call.
    pub const fn method(&self) -> Method {
        match self {
            Self::UpdatePriority { .. } => Method::PUT,
            _ => Method::GET,
        }
    }

    /// Request path including the encoded query string, if any.
    pub fn path(&self) -> String {
        match self {
            Self::GetStatistics => String::from("/api/statistics"),
            Self::GetDashboardData => String::from("/api/dashboard"),
            Self::GetUnownedCharactersWithOptions(opts) => {
                let mut params = opts.filter.to_params();
                if let Some(shortcut) = opts.shortcut {
                    params.push(("priority", shortcut_param(shortcut).to_owned()));
                }
                with_query("/api/characters", &params)
            }
            Self::GetCharactersWithPagination(opts) => {
                let mut params = vec![
                    ("page", opts.page.page.to_string()),
                    ("pageSize", opts.page.page_size.to_string()),
                    ("sortBy", opts.sort.key.as_str().to_owned()),
                    ("sortOrder", opts.sort.order.as_str().to_owned()),
                ];
                params.extend(opts.filter.to_params());
                with_query("/api/characters/paginated", &params)
            }
            Self::GetCharacterDetails(id) => {
                format!("/api/characters/{}/details", urlencoding::encode(id))
            }
            Self::UpdatePriority { row_index, .. } => {
                format!("/api/characters/{row_index}/priority")
            }
            Self::ReloadMockData => String::from("/api/dev/reload-mock"),
            Self::CheckServerStatus => String::from("/api/dev/status"),
        }
    }

    /// JSON request body, present only for updates.
    pub fn body(&self) -> Option<Value> {
        match self {
            Self::UpdatePriority { priority, .. } => Some(serde_json::json!({ "priority": priority })),
            _ => None,
        }
    }

    /// Render the HTTP request for this call against `base_url`
    /// (for example `http://localhost:3000`, or empty for a bare path).
    pub fn to_request(&self, base_url: &str) -> Result<Request<Body>, RpcError> {
        let uri = format!("{}{}", base_url.trim_end_matches('/'), self.path());
        let builder = Request::builder()
            .method(self.method())
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");

        let body = match self.body() {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        };

        Ok(builder.body(body)?)
    }

    /// Read a reply: 2xx bodies are parsed as JSON, anything else is an
    /// [`RpcError::Http`].
    pub fn decode_response(status: StatusCode, body: &[u8]) -> Result<Value, RpcError> {
        if !status.is_success() {
            return Err(RpcError::Http {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_owned(),
            });
        }
        Ok(serde_json::from_slice(body)?)
    }
}

/// Sends [`RpcCall`]s to a mock server and decodes the replies.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    base_url: String,
}

impl RpcClient {
    /// Client for the server at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Client reusing an existing `reqwest` client.
    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Base URL calls are sent to, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `call` and return the decoded JSON reply.
    pub async fn call(&self, call: &RpcCall) -> Result<Value, RpcError> {
        let url = format!("{}{}", self.base_url, call.path());
        tracing::debug!(
            function = call.name(),
            method = %call.method(),
            %url,
            "Calling server function"
        );

        let mut request = self
            .http
            .request(call.method(), url.as_str())
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = call.body() {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        let result = RpcCall::decode_response(status, &body);
        if let Err(err) = &result {
            tracing::warn!(function = call.name(), error = %err, "Server function failed");
        }
        result
    }

    /// Decode `name(args...)` and send it.
    pub async fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, RpcError> {
        let call = RpcCall::from_invocation(name, args)?;
        self.call(&call).await
    }
}

const fn shortcut_param(shortcut: PriorityShortcut) -> &'static str {
    match shortcut {
        PriorityShortcut::High => "high",
        PriorityShortcut::Unset => "unset",
    }
}

fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_owned();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

/// Strings pass through, numbers and booleans are stringified, the rest
/// is treated as absent.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Read-only view over an options object argument.
struct Options<'a>(Option<&'a Value>);

impl Options<'_> {
    fn get(&self, key: &str) -> Option<String> {
        self.0.and_then(|v| v.get(key)).and_then(scalar_to_string)
    }

    fn filter(&self) -> CharacterFilter {
        CharacterFilter::from_params(
            self.get("attribute").as_deref(),
            self.get("shopType").as_deref(),
            self.get("priorityStatus").as_deref(),
            self.get("search").as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use roster_types::{ShopType, SortKey, SortOrder};
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_list_options() {
        let call = RpcCall::from_invocation(
            "getUnownedCharactersWithOptions",
            &[json!({ "attribute": "アクティブ", "shopType": "special", "search": "" })],
        );
        let Ok(RpcCall::GetUnownedCharactersWithOptions(opts)) = call else {
            panic!("unexpected decode: {call:?}");
        };
        assert_eq!(opts.filter.attribute.as_deref(), Some("アクティブ"));
        assert_eq!(opts.filter.shop_type, Some(ShopType::Special));
        assert_eq!(opts.filter.search, None);
        assert_eq!(opts.shortcut, None);
    }

    #[test]
    fn decode_pagination_accepts_numbers() {
        let call = RpcCall::from_invocation(
            "getCharactersWithPagination",
            &[json!({ "page": 3, "pageSize": "10", "sortBy": "name", "sortOrder": "asc" })],
        );
        let Ok(RpcCall::GetCharactersWithPagination(opts)) = call else {
            panic!("unexpected decode: {call:?}");
        };
        assert_eq!(opts.page, PageRequest { page: 3, page_size: 10 });
        assert_eq!(opts.sort.key, SortKey::Name);
        assert_eq!(opts.sort.order, SortOrder::Asc);
    }

    #[test]
    fn decode_without_options_uses_defaults() {
        let call = RpcCall::from_invocation("getCharactersWithPagination", &[]);
        assert!(matches!(
            call,
            Ok(RpcCall::GetCharactersWithPagination(opts)) if opts == PageOptions::default()
        ));
    }

    #[test]
    fn decode_update_priority() {
        let call = RpcCall::from_invocation("updatePriority", &[json!(2), json!(3)]);
        assert!(matches!(
            call,
            Ok(RpcCall::UpdatePriority { row_index: 2, priority: Some(3) })
        ));

        let call = RpcCall::from_invocation("updatePriority", &[json!("5"), Value::Null]);
        assert!(matches!(
            call,
            Ok(RpcCall::UpdatePriority { row_index: 5, priority: None })
        ));

        let call = RpcCall::from_invocation("updatePriority", &[json!(2), json!("high")]);
        assert!(matches!(call, Err(RpcError::InvalidArgument { .. })));

        let call = RpcCall::from_invocation("updatePriority", &[]);
        assert!(matches!(call, Err(RpcError::MissingArgument { index: 0, .. })));
    }

    #[test]
    fn decode_unknown_function() {
        let call = RpcCall::from_invocation("deleteEverything", &[]);
        assert!(matches!(call, Err(RpcError::UnknownFunction(name)) if name == "deleteEverything"));
    }

    #[test]
    fn paths_and_methods() {
        assert_eq!(RpcCall::GetStatistics.path(), "/api/statistics");
        assert_eq!(RpcCall::GetDashboardData.method(), Method::GET);
        assert_eq!(
            RpcCall::GetCharacterDetails(String::from("001")).path(),
            "/api/characters/001/details"
        );

        let update = RpcCall::UpdatePriority {
            row_index: 2,
            priority: None,
        };
        assert_eq!(update.method(), Method::PUT);
        assert_eq!(update.path(), "/api/characters/2/priority");
        assert_eq!(update.body(), Some(json!({ "priority": null })));
        assert_eq!(RpcCall::GetStatistics.body(), None);
    }

    #[test]
    fn list_path_encodes_query() {
        let call = RpcCall::GetUnownedCharactersWithOptions(ListOptions {
            filter: CharacterFilter {
                search: Some(String::from("a b&c")),
                ..CharacterFilter::default()
            },
            shortcut: Some(PriorityShortcut::High),
        });
        assert_eq!(call.path(), "/api/characters?search=a%20b%26c&priority=high");

        let bare = RpcCall::GetUnownedCharactersWithOptions(ListOptions::default());
        assert_eq!(bare.path(), "/api/characters");
    }

    #[test]
    fn pagination_path_carries_resolved_options() {
        let call = RpcCall::GetCharactersWithPagination(PageOptions::default());
        assert_eq!(
            call.path(),
            "/api/characters/paginated?page=1&pageSize=20&sortBy=priority&sortOrder=desc"
        );
    }

    #[test]
    fn dev_utilities_map_to_dev_routes() {
        let reload = RpcCall::from_invocation("reloadMockData", &[]);
        assert!(reload.is_ok_and(|c| c.path() == "/api/dev/reload-mock" && c.method() == Method::GET));

        let status = RpcCall::from_invocation("checkServerStatus", &[]);
        assert!(status.is_ok_and(|c| c.path() == "/api/dev/status" && c.name() == "checkServerStatus"));
    }

    #[test]
    fn decode_response_parses_success_bodies() {
        let value = RpcCall::decode_response(StatusCode::OK, br#"{"total":3}"#);
        assert!(value.is_ok_and(|v| v == json!({ "total": 3 })));

        let garbage = RpcCall::decode_response(StatusCode::OK, b"not json");
        assert!(matches!(garbage, Err(RpcError::Decode(_))));
    }

    #[test]
    fn decode_response_fails_on_error_status() {
        let result = RpcCall::decode_response(
            StatusCode::NOT_FOUND,
            br#"{"error":"Not Found","message":"character not found: 999"}"#,
        );
        let Err(err) = result else {
            panic!("expected an error, got {result:?}");
        };
        assert!(matches!(err, RpcError::Http { status: 404, .. }));
        assert_eq!(err.to_string(), "HTTP 404: Not Found");
    }

    #[test]
    fn client_trims_base_url() {
        let client = RpcClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn to_request_joins_base_url() {
        let request = RpcCall::GetStatistics.to_request("http://localhost:3000/");
        assert!(request.is_ok_and(|r| r.uri() == "http://localhost:3000/api/statistics"));
    }
}
