//! Parsing of `ipsec statusall` report text.
//!
//! Both operations are total: text that does not match a known shape yields
//! [`ConnectionState::Unknown`] or a zero counter, never an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::constants;
use crate::state::ConnectionState;

/// Patterns are compile-time constants, so compilation cannot fail.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {pattern:?}: {e}"))
}

static DOWN: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_DOWN));
static ESTABLISHED: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_ESTABLISHED));
static INSTALLED: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_INSTALLED));

static BYTES_IN: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_BYTES_IN));
static BYTES_OUT: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_BYTES_OUT));
static PACKETS_IN: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_PACKETS_IN));
static PACKETS_OUT: LazyLock<Regex> = LazyLock::new(|| compile(constants::PATTERN_PACKETS_OUT));

/// Direction-tagged traffic counter found in the `CHILD_SA` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    BytesIn,
    BytesOut,
    PacketsIn,
    PacketsOut,
}

impl Counter {
    /// All counters, in record field order.
    pub const ALL: [Counter; 4] = [
        Counter::BytesIn,
        Counter::BytesOut,
        Counter::PacketsIn,
        Counter::PacketsOut,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            Counter::BytesIn => &BYTES_IN,
            Counter::BytesOut => &BYTES_OUT,
            Counter::PacketsIn => &PACKETS_IN,
            Counter::PacketsOut => &PACKETS_OUT,
        }
    }
}

/// Returns the line containing `m`, for diagnostics.
fn matched_line<'a>(text: &'a str, m: &regex::Match<'_>) -> &'a str {
    let start = text[..m.start()].rfind('\n').map_or(0, |i| i + 1);
    let end = text[m.end()..].find('\n').map_or(text.len(), |i| m.end() + i);
    text[start..end].trim()
}

/// Classifies a status report.
///
/// Precedence: `0 up, 0 connecting` is [`ConnectionState::Down`]; otherwise a
/// single association up or connecting is
/// [`ConnectionState::ConnectionEstablished`], escalated to
/// [`ConnectionState::TunnelInstalled`] when the stricter `1 up, 0 connecting`
/// pattern also matches. Anything else is [`ConnectionState::Unknown`].
pub fn classify(text: &str) -> ConnectionState {
    if let Some(m) = DOWN.find(text) {
        debug!(line = matched_line(text, &m), "tunnel down");
        return ConnectionState::Down;
    }

    if let Some(m) = ESTABLISHED.find(text) {
        if let Some(m) = INSTALLED.find(text) {
            debug!(line = matched_line(text, &m), "tunnel installed");
            return ConnectionState::TunnelInstalled;
        }
        debug!(line = matched_line(text, &m), "connection established");
        return ConnectionState::ConnectionEstablished;
    }

    warn!(report = text.trim(), "unknown tunnel status");
    ConnectionState::Unknown
}

/// Extracts the first value of `counter` from a status report, or 0.
pub fn extract_count(text: &str, counter: Counter) -> u64 {
    counter
        .pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
