use std::net::SocketAddr;

/// Application-level constants
pub const APP_NAME: &str = "SymCheck";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Public Gemini REST endpoint; override with `GEMINI_BASE_URL` for
/// proxies or test doubles.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Upper bound on one model round trip. Differential generation is a
/// single non-streaming completion; two minutes is generous.
pub const MODEL_TIMEOUT_SECS: u64 = 120;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Socket address to serve on, from `SYMCHECK_BIND_ADDR`.
/// Unset or unparseable values fall back to the default.
pub fn bind_addr() -> SocketAddr {
    let configured = std::env::var("SYMCHECK_BIND_ADDR");
    let addr = configured.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
    addr.parse().unwrap_or_else(|_| {
        tracing::warn!(addr, "Unparseable SYMCHECK_BIND_ADDR, using default");
        DEFAULT_BIND_ADDR
            .parse()
            .expect("default bind address is valid")
    })
}
