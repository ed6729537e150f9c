//! Per-tunnel status types produced by a query pass.

use serde::Serialize;

/// Link state derived from an `ipsec statusall` report.
///
/// Discriminants are stable and exported as metric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    /// One security association fully up.
    TunnelInstalled = 0,
    /// One security association up or still negotiating.
    ConnectionEstablished = 1,
    /// No security association up or connecting.
    Down = 2,
    /// Report did not match any known shape, or could not be obtained.
    #[default]
    Unknown = 3,
    /// Administratively ignored; never polled.
    Ignored = 4,
}

impl ConnectionState {
    /// Numeric code used by metric consumers.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::TunnelInstalled => write!(f, "tunnel installed"),
            ConnectionState::ConnectionEstablished => write!(f, "connection established"),
            ConnectionState::Down => write!(f, "down"),
            ConnectionState::Unknown => write!(f, "unknown"),
            ConnectionState::Ignored => write!(f, "ignored"),
        }
    }
}

/// Status of one tunnel for a single query pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    /// A status report could be obtained (always true for ignored tunnels).
    pub reachable: bool,
    pub state: ConnectionState,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub packets_in: u64,
    pub packets_out: u64,
}

impl StatusRecord {
    /// Record for an ignored tunnel: reported as up, all counters zero.
    #[must_use]
    pub fn ignored() -> Self {
        Self {
            reachable: true,
            state: ConnectionState::Ignored,
            ..Self::default()
        }
    }

    /// Record for a tunnel whose report could not be fetched.
    #[must_use]
    pub fn unreachable() -> Self {
        Self {
            reachable: false,
            state: ConnectionState::Unknown,
            ..Self::default()
        }
    }
}

/// Tunnel name to status, in configuration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMap {
    entries: Vec<(String, StatusRecord)>,
}

impl StatusMap {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a record, replacing any earlier record for the same name.
    pub fn insert(&mut self, name: impl Into<String>, record: StatusRecord) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = record,
            None => self.entries.push((name, record)),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StatusRecord> {
        self.entries
            .iter()
            .find_map(|(n, r)| (n == name).then_some(r))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StatusRecord)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }
}

impl Serialize for StatusMap {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
