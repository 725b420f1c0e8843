// src/telemetry.rs
//! Tracing setup and log-safe helpers.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const DEFAULT_LOG_FILTER: &str = "text_sentiment_analyzer=info,warn";
pub const ENV_LOG_FORMAT: &str = "ANALYZER_LOG_FORMAT";

/// Install the global subscriber. `RUST_LOG` wins over `default_filter`;
/// `ANALYZER_LOG_FORMAT=json` switches to JSON lines.
///
/// Safe to call more than once (later calls are no-ops).
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let json = std::env::var(ENV_LOG_FORMAT)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    let _ = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };
}

/// Short anonymized id for a text (first 6 bytes of SHA-256, hex).
/// Raw input never goes to the logs; this id does.
pub fn anon_hash(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
