//! Fixed platform constants.

/// Domain used to build the default API hostname (`www.<domain>`)
pub const DEFAULT_DOMAIN: &str = "pythonanywhere.com";

/// User agent string used in HTTP requests to identify this client to the API
pub const USER_AGENT: &str = concat!("pythonanywhere-client/", env!("CARGO_PKG_VERSION"));

/// Phrase the API returns in a 400 body when a website for the domain
/// already exists.  See `api::website::is_duplicate_domain`.
pub const DUPLICATE_DOMAIN_PHRASE: &str = "domain with this domain name already exists";

/// Mapping from user-facing python versions to platform slugs
pub const PYTHON_VERSIONS: &[(&str, &str)] = &[
    ("3.6", "python36"),
    ("3.7", "python37"),
    ("3.8", "python38"),
    ("3.9", "python39"),
    ("3.10", "python310"),
    ("3.11", "python311"),
    ("3.12", "python312"),
    ("3.13", "python313"),
];

/// Resolves a user-facing python version ("3.10") to its platform slug
/// ("python310"), if supported.
pub fn python_version_slug(version: &str) -> Option<&'static str> {
    PYTHON_VERSIONS
        .iter()
        .find(|(v, _)| *v == version)
        .map(|(_, slug)| *slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_python_version_resolves() {
        assert_eq!(python_version_slug("3.10"), Some("python310"));
        assert_eq!(python_version_slug("3.13"), Some("python313"));
    }

    #[test]
    fn unknown_python_version_is_none() {
        assert_eq!(python_version_slug("2.7"), None);
        assert_eq!(python_version_slug(""), None);
    }
}
