//! Client metadata derivation for login event records.

pub mod addr;
pub mod agent;

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

/// Resolved client metadata attached to a login event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Source IP address, or `"Unknown"`.
    pub ip_address: String,
    /// Device label, e.g. `"Desktop"` or `"iPhone"`.
    pub device: String,
    /// Browser label, e.g. `"Chrome 126"`.
    pub browser: String,
}

impl ClientInfo {
    /// Resolves client metadata from transport-level request facts.
    ///
    /// `forwarded_for` is the raw forwarded-for header value, if any;
    /// `peer` is the direct peer address; `user_agent` the raw UA header.
    pub fn resolve(
        forwarded_for: Option<&str>,
        peer: Option<IpAddr>,
        user_agent: Option<&str>,
    ) -> Self {
        let ua = user_agent.unwrap_or("");
        Self {
            ip_address: addr::client_ip(forwarded_for, peer),
            device: agent::device_label(ua),
            browser: agent::browser_label(ua),
        }
    }
}
