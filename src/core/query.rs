//! One status query pass over all configured tunnels.

use tracing::{debug, warn};

use super::extractor::{classify, extract_count, Counter};
use super::provider::StatusProvider;
use crate::state::{Configuration, StatusMap, StatusRecord, TunnelDescriptor};

/// Polls every configured tunnel in order and builds a fresh status map.
///
/// Ignored tunnels are reported as reachable with [`crate::state::ConnectionState::Ignored`]
/// without invoking the provider. A provider failure only affects its own
/// tunnel, which is recorded as unreachable; the pass always completes.
pub fn query_status<P>(config: &Configuration, provider: &P) -> StatusMap
where
    P: StatusProvider + ?Sized,
{
    let mut statuses = StatusMap::with_capacity(config.len());

    for tunnel in config.tunnels() {
        let record = if tunnel.ignored {
            debug!(tunnel = %tunnel.name, "skipping ignored tunnel");
            StatusRecord::ignored()
        } else {
            query_tunnel(tunnel, provider)
        };
        statuses.insert(tunnel.name.clone(), record);
    }

    statuses
}

fn query_tunnel<P>(tunnel: &TunnelDescriptor, provider: &P) -> StatusRecord
where
    P: StatusProvider + ?Sized,
{
    match provider.fetch(tunnel) {
        Ok(text) => StatusRecord {
            reachable: true,
            state: classify(&text),
            bytes_in: extract_count(&text, Counter::BytesIn),
            bytes_out: extract_count(&text, Counter::BytesOut),
            packets_in: extract_count(&text, Counter::PacketsIn),
            packets_out: extract_count(&text, Counter::PacketsOut),
        },
        Err(e) => {
            warn!(tunnel = %tunnel.name, error = %e, "unable to retrieve tunnel status");
            StatusRecord::unreachable()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::ProviderError;
    use crate::state::ConnectionState;

    /// Canned reports keyed by tunnel name; unknown names fail to spawn.
    #[derive(Default)]
    struct FakeProvider {
        reports: HashMap<String, String>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeProvider {
        fn with_report(mut self, name: &str, report: &str) -> Self {
            self.reports.insert(name.to_string(), report.to_string());
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl StatusProvider for FakeProvider {
        fn fetch(&self, tunnel: &TunnelDescriptor) -> Result<String, ProviderError> {
            self.calls.borrow_mut().push(tunnel.name.clone());
            self.reports
                .get(&tunnel.name)
                .cloned()
                .ok_or_else(|| ProviderError::Spawn {
                    binary: "ipsec".to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                })
        }
    }

    const UP: &str = "Security Associations (1 up, 0 connecting):\n\
        site{1}:  AES_CBC_128/HMAC_SHA2_256_128, 4096 bytes_i (32 pkts, 1s ago), 2048 bytes_o (16 pkts, 1s ago)";
    const DOWN: &str = "Security Associations (0 up, 0 connecting):";

    fn config(tunnels: &[(&str, bool)]) -> Configuration {
        tunnels
            .iter()
            .map(|&(name, ignored)| TunnelDescriptor {
                name: name.to_string(),
                ignored,
            })
            .collect()
    }

    #[test]
    fn test_query_parses_reports() {
        let provider = FakeProvider::default()
            .with_report("site", UP)
            .with_report("backup", DOWN);
        let statuses = query_status(&config(&[("site", false), ("backup", false)]), &provider);

        assert_eq!(
            statuses.get("site"),
            Some(&StatusRecord {
                reachable: true,
                state: ConnectionState::TunnelInstalled,
                bytes_in: 4096,
                bytes_out: 2048,
                packets_in: 32,
                packets_out: 16,
            })
        );
        let backup = statuses.get("backup").unwrap();
        assert!(backup.reachable);
        assert_eq!(backup.state, ConnectionState::Down);
        assert_eq!(backup.bytes_in, 0);
    }

    #[test]
    fn test_query_ignored_tunnel_skips_provider() {
        let provider = FakeProvider::default().with_report("site", UP);
        let statuses = query_status(&config(&[("lab", true), ("site", false)]), &provider);

        assert_eq!(statuses.get("lab"), Some(&StatusRecord::ignored()));
        assert_eq!(provider.calls(), ["site"]);
    }

    #[test]
    fn test_query_provider_failure_is_isolated() {
        let provider = FakeProvider::default()
            .with_report("first", UP)
            .with_report("last", DOWN);
        let statuses = query_status(
            &config(&[("first", false), ("broken", false), ("last", false)]),
            &provider,
        );

        assert_eq!(statuses.len(), 3);
        assert_eq!(statuses.get("broken"), Some(&StatusRecord::unreachable()));
        assert_eq!(
            statuses.get("first").map(|r| r.state),
            Some(ConnectionState::TunnelInstalled)
        );
        assert_eq!(
            statuses.get("last").map(|r| r.state),
            Some(ConnectionState::Down)
        );
        assert_eq!(provider.calls(), ["first", "broken", "last"]);
    }

    #[test]
    fn test_query_unrecognised_report_is_reachable_unknown() {
        let provider = FakeProvider::default().with_report("site", "no such connection");
        let statuses = query_status(&config(&[("site", false)]), &provider);

        let record = statuses.get("site").unwrap();
        assert!(record.reachable);
        assert_eq!(record.state, ConnectionState::Unknown);
    }

    #[test]
    fn test_query_keys_match_configuration() {
        let provider = FakeProvider::default().with_report("b", UP);
        let cfg = config(&[("c", true), ("b", false), ("a", false)]);
        let statuses = query_status(&cfg, &provider);

        let names: Vec<&str> = statuses.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["c", "b", "a"]);
        assert_eq!(statuses.len(), cfg.len());
    }

    #[test]
    fn test_query_empty_configuration() {
        let provider = FakeProvider::default();
        let statuses = query_status(&Configuration::default(), &provider);
        assert!(statuses.is_empty());
        assert!(provider.calls().is_empty());
    }

    #[test]
    fn test_query_is_idempotent() {
        let provider = FakeProvider::default()
            .with_report("site", UP)
            .with_report("backup", DOWN);
        let cfg = config(&[("site", false), ("backup", false), ("gone", false), ("lab", true)]);

        assert_eq!(query_status(&cfg, &provider), query_status(&cfg, &provider));
    }

    #[test]
    fn test_query_accepts_trait_object() {
        let provider: Box<dyn StatusProvider> =
            Box::new(FakeProvider::default().with_report("site", UP));
        let statuses = query_status(&config(&[("site", false)]), provider.as_ref());
        assert_eq!(statuses.len(), 1);
    }
}
