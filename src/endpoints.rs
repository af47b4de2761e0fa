//! API endpoint resolution.
//!
//! Every resource family lives under a per-user collection URL.  The
//! `websites` and `domains` families are served by the newer `v1` API;
//! everything else is still on `v0`.  This routing table is fixed.

use std::fmt;

/// Resource families exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    /// File storage and sharing
    Files,
    /// Scheduled tasks
    Schedule,
    /// Teacher/student relationships
    Students,
    /// Legacy web apps
    Webapps,
    /// Websites (v1)
    Websites,
    /// Domains (v1)
    Domains,
}

impl Flavor {
    /// URL path segment for this family
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Files => "files",
            Flavor::Schedule => "schedule",
            Flavor::Students => "students",
            Flavor::Webapps => "webapps",
            Flavor::Websites => "websites",
            Flavor::Domains => "domains",
        }
    }

    /// API version prefix serving this family
    pub fn api_version(&self) -> &'static str {
        match self {
            Flavor::Websites | Flavor::Domains => "v1",
            _ => "v0",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the collection base URL for `flavor` under `username`'s account.
///
/// `hostname` is normally a bare host ("www.pythonanywhere.com") and gets an
/// `https://` scheme; a full origin with an explicit scheme is used as-is,
/// which is how tests point clients at a local mock server.
pub fn api_endpoint(hostname: &str, username: &str, flavor: Flavor) -> String {
    let origin = if hostname.starts_with("http://") || hostname.starts_with("https://") {
        hostname.trim_end_matches('/').to_string()
    } else {
        format!("https://{hostname}")
    };
    format!(
        "{origin}/api/{}/user/{username}/{}/",
        flavor.api_version(),
        flavor.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v0_families_use_old_prefix() {
        for flavor in [
            Flavor::Files,
            Flavor::Schedule,
            Flavor::Students,
            Flavor::Webapps,
        ] {
            let url = api_endpoint("www.pythonanywhere.com", "alice", flavor);
            assert_eq!(
                url,
                format!("https://www.pythonanywhere.com/api/v0/user/alice/{flavor}/")
            );
        }
    }

    #[test]
    fn websites_and_domains_use_v1() {
        for flavor in [Flavor::Websites, Flavor::Domains] {
            let url = api_endpoint("www.pythonanywhere.com", "alice", flavor);
            assert_eq!(
                url,
                format!("https://www.pythonanywhere.com/api/v1/user/alice/{flavor}/")
            );
        }
    }

    #[test]
    fn explicit_scheme_is_preserved() {
        let url = api_endpoint("http://127.0.0.1:8080", "alice", Flavor::Schedule);
        assert_eq!(url, "http://127.0.0.1:8080/api/v0/user/alice/schedule/");
    }

    #[test]
    fn eu_hostname_override() {
        let url = api_endpoint("eu.pythonanywhere.com", "alice", Flavor::Websites);
        assert_eq!(
            url,
            "https://eu.pythonanywhere.com/api/v1/user/alice/websites/"
        );
    }
}
