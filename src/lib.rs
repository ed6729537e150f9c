//! IPsec tunnel status collection.
//!
//! Polls each configured tunnel with `ipsec statusall <name>`, classifies the
//! report into a [`state::ConnectionState`] and extracts traffic counters,
//! producing a [`state::StatusMap`] per query pass.
//!
//! ```ignore
//! use ipsec_status::core::{ipsec_conf, provider::CliStatusProvider, query};
//!
//! let tunnels = ipsec_conf::load("/etc/ipsec.conf".as_ref())?;
//! let statuses = query::query_status(&tunnels, &CliStatusProvider::default().with_sudo(true));
//! for (name, record) in statuses.iter() {
//!     println!("{name}: {}", record.state);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod error;
pub mod logging;
pub mod state;
pub mod utils;
