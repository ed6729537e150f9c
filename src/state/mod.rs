//! Tunnel configuration and status types.

mod status;
mod tunnel;

pub use status::{ConnectionState, StatusMap, StatusRecord};
pub use tunnel::{Configuration, TunnelDescriptor};
