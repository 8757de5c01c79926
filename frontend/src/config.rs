/// Backend origin used when the build does not configure one.
const DEFAULT_API_ORIGIN: &str = "localhost:3000";

/// The configured base API origin, normalized. Set `PUBLIC_API_URL` at build
/// time to point the site at a deployed backend.
pub fn api_origin() -> String {
    normalize_origin(option_env!("PUBLIC_API_URL").unwrap_or(DEFAULT_API_ORIGIN))
}

/// Prefix a plain host with an HTTP scheme and strip any trailing slash, so
/// paths can be appended with a single `/`.
pub fn normalize_origin(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

/// WebSocket counterpart of an HTTP origin.
pub fn ws_origin(origin: &str) -> String {
    if let Some(rest) = origin.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = origin.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{origin}")
    }
}

/// Which reservation transport the deployment uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    Http,
    Socket,
}

pub fn transport_kind() -> TransportKind {
    match option_env!("BOOKING_TRANSPORT") {
        Some("socket") => TransportKind::Socket,
        _ => TransportKind::Http,
    }
}
