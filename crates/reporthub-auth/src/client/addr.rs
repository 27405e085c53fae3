//! Source IP resolution.

use std::net::IpAddr;

/// Fallback label when no address can be determined.
const UNKNOWN: &str = "Unknown";

/// Resolves the client IP for a request.
///
/// A forwarded-for header can contain multiple comma-separated addresses;
/// the first is the originating client, the rest are intermediate proxies.
/// Falls back to the direct peer address, then to `"Unknown"`.
pub fn client_ip(forwarded_for: Option<&str>, peer: Option<IpAddr>) -> String {
    if let Some(header) = forwarded_for {
        if let Some(first) = header.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    peer.map(|addr| addr.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
