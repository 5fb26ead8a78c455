use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u64 = 8080;
const DEFAULT_STATIC_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const PORT_BOUNDS: (u64, u64) = (1, 65_535);
const SERVICE_NAME: &str = "terminal-portfolio";
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone)]
struct ServerConfig {
    port: u16,
    static_dir: PathBuf,
    log_level: LogLevel,
}

impl ServerConfig {
    fn from_env() -> Self {
        let port = parse_env_u64_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS) as u16;
        let static_dir = parse_env_non_empty_string("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: ServerConfig,
    started_at: Instant,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    service: &'static str,
    uptime_seconds: u64,
}

impl HealthPayload {
    fn new(started_at: Instant) -> Self {
        Self {
            ok: true,
            service: SERVICE_NAME,
            uptime_seconds: started_at.elapsed().as_secs(),
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);
    let index_path = config.static_dir.join("index.html");
    let static_service =
        ServeDir::new(&config.static_dir).not_found_service(ServeFile::new(index_path));

    let state = AppState {
        config: config.clone(),
        started_at: Instant::now(),
    };

    let app = Router::new()
        .route("/api/health", get(get_health))
        .fallback_service(static_service)
        .with_state(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": config.port,
            "static_dir": config.static_dir.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_health(State(state): State<Arc<AppState>>, headers: HeaderMap) -> impl IntoResponse {
    let request_id = resolve_request_id(&headers);
    let payload = HealthPayload::new(state.started_at);

    log_event(
        &state.config,
        LogLevel::Debug,
        "health_request",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "uptime_seconds": payload.uptime_seconds,
        }),
    );

    let mut response_headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response_headers.insert(REQUEST_ID_HEADER, value);
    }

    (StatusCode::OK, response_headers, Json(payload))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn out_of_bounds_env_number_falls_back_to_the_default() {
        // Unique variable names keep these independent of parallel tests.
        std::env::set_var("TEST_PORT_TOO_LARGE", "70000");
        assert_eq!(
            parse_env_u64_with_bounds("TEST_PORT_TOO_LARGE", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );

        std::env::set_var("TEST_PORT_NOT_A_NUMBER", "eighty-eighty");
        assert_eq!(
            parse_env_u64_with_bounds("TEST_PORT_NOT_A_NUMBER", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );

        assert_eq!(
            parse_env_u64_with_bounds("TEST_PORT_UNSET_VARIABLE", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
    }

    #[test]
    fn in_bounds_env_number_is_accepted_after_trimming() {
        std::env::set_var("TEST_PORT_WITH_WHITESPACE", " 3000 ");
        assert_eq!(
            parse_env_u64_with_bounds("TEST_PORT_WITH_WHITESPACE", DEFAULT_PORT, PORT_BOUNDS),
            3_000
        );
    }

    #[test]
    fn log_level_parsing_ignores_case() {
        std::env::set_var("TEST_LOG_LEVEL_UPPERCASE", "DEBUG");
        assert_eq!(
            parse_log_level("TEST_LOG_LEVEL_UPPERCASE", DEFAULT_LOG_LEVEL),
            LogLevel::Debug
        );
    }

    #[test]
    fn unknown_or_missing_log_level_falls_back_to_the_default() {
        std::env::set_var("TEST_LOG_LEVEL_JUNK", "verbose");
        assert_eq!(
            parse_log_level("TEST_LOG_LEVEL_JUNK", DEFAULT_LOG_LEVEL),
            DEFAULT_LOG_LEVEL
        );

        assert_eq!(
            parse_log_level("TEST_LOG_LEVEL_UNSET_VARIABLE", LogLevel::Debug),
            LogLevel::Debug
        );
    }

    #[test]
    fn inbound_request_id_is_passed_through() {
        let mut headers = HeaderMap::new();
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_static("req-from-caller"),
        );

        assert_eq!(resolve_request_id(&headers), "req-from-caller");
    }

    #[test]
    fn blank_request_id_header_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        let generated = resolve_request_id(&headers);
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn generated_request_ids_are_unique() {
        let first = resolve_request_id(&HeaderMap::new());
        let second = resolve_request_id(&HeaderMap::new());
        assert_ne!(first, second);
    }

    #[test]
    fn health_payload_reports_the_service_as_up() {
        let payload = HealthPayload::new(Instant::now());
        assert!(payload.ok);
        assert_eq!(payload.service, SERVICE_NAME);

        let encoded = serde_json::to_value(&payload).expect("health payload serializes");
        assert_eq!(encoded["service"], SERVICE_NAME);
        assert!(encoded.get("uptimeSeconds").is_some(), "camelCase field");
    }
}
