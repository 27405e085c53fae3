//! User-Agent label derivation.
//!
//! Produces the coarse device and browser labels stored on login events.
//! Matching is token-based over the common browser families; anything
//! unrecognized degrades to the `"Other"` family, and an empty or
//! `"Other"` device family is normalized to `"Desktop"`.

/// Browser families checked in order. Order matters: Chromium-based
/// browsers embed `Chrome/` and almost everything embeds `Safari/`,
/// so the more specific tokens must win first.
const BROWSER_TOKENS: &[(&str, &str)] = &[
    ("Edg/", "Edge"),
    ("OPR/", "Opera"),
    ("Opera", "Opera"),
    ("Firefox/", "Firefox"),
    ("Chrome/", "Chrome"),
    ("CriOS/", "Chrome"),
];

/// Derives the browser label: family name, suffixed with the major
/// version when one parses out of the UA string.
pub fn browser_label(user_agent: &str) -> String {
    for (token, family) in BROWSER_TOKENS {
        if user_agent.contains(token) {
            return match major_version_after(user_agent, token) {
                Some(major) => format!("{family} {major}"),
                None => (*family).to_string(),
            };
        }
    }

    // Safari advertises its version in a separate `Version/` token.
    if user_agent.contains("Safari/") {
        return match major_version_after(user_agent, "Version/") {
            Some(major) => format!("Safari {major}"),
            None => "Safari".to_string(),
        };
    }

    if user_agent.contains("MSIE ") {
        return match major_version_after(user_agent, "MSIE ") {
            Some(major) => format!("IE {major}"),
            None => "IE".to_string(),
        };
    }
    if user_agent.contains("Trident/") {
        return match major_version_after(user_agent, "rv:") {
            Some(major) => format!("IE {major}"),
            None => "IE".to_string(),
        };
    }

    "Other".to_string()
}

/// Derives the device label from the UA string.
///
/// Empty and unrecognized device families normalize to `"Desktop"`.
pub fn device_label(user_agent: &str) -> String {
    if user_agent.contains("iPhone") {
        return "iPhone".to_string();
    }
    if user_agent.contains("iPad") {
        return "iPad".to_string();
    }
    if user_agent.contains("Android") {
        return if user_agent.contains("Mobile") {
            "Android Phone".to_string()
        } else {
            "Android Tablet".to_string()
        };
    }
    if user_agent.contains("Mobile") {
        return "Mobile".to_string();
    }

    "Desktop".to_string()
}

/// Reads the digits immediately following `token` up to the first
/// non-digit character.
fn major_version_after<'a>(user_agent: &'a str, token: &str) -> Option<&'a str> {
    let start = user_agent.find(token)? + token.len();
    let rest = &user_agent[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}
