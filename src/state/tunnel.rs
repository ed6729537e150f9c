//! Configured tunnel types.

use serde::Serialize;

/// A single configured IPsec connection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TunnelDescriptor {
    /// Connection name as passed to `ipsec statusall`.
    pub name: String,
    /// Administratively excluded from live polling.
    pub ignored: bool,
}

impl TunnelDescriptor {
    /// Creates a descriptor for a polled tunnel.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignored: false,
        }
    }

    /// Creates a descriptor for an ignored tunnel.
    pub fn ignored(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ignored: true,
        }
    }
}

/// Ordered set of tunnels to poll.
///
/// Order is preserved from the source file and drives the order of the
/// resulting status map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Configuration {
    tunnels: Vec<TunnelDescriptor>,
}

impl Configuration {
    pub fn new(tunnels: Vec<TunnelDescriptor>) -> Self {
        Self { tunnels }
    }

    pub fn tunnels(&self) -> &[TunnelDescriptor] {
        &self.tunnels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tunnels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tunnels.is_empty()
    }
}

impl FromIterator<TunnelDescriptor> for Configuration {
    fn from_iter<I: IntoIterator<Item = TunnelDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_constructors() {
        assert!(!TunnelDescriptor::new("site-a").ignored);
        assert!(TunnelDescriptor::ignored("site-b").ignored);
    }

    #[test]
    fn test_configuration_keeps_order() {
        let config: Configuration = ["c", "a", "b"].into_iter().map(TunnelDescriptor::new).collect();
        let names: Vec<&str> = config.tunnels().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["c", "a", "b"]);
        assert_eq!(config.len(), 3);
        assert!(!config.is_empty());
    }
}
