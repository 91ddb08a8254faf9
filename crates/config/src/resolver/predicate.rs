//! Syntactic checks and redaction for connection strings.

use crate::constants::{LEGACY_SCHEME, NORMALIZED_SCHEME, PREVIEW_MAX_CHARS};

/// True iff `candidate` contains `@` and the text after the first `@`
/// contains `/`.
///
/// Syntactic only: this does not parse the URI.
pub fn is_complete(candidate: &str) -> bool {
    candidate
        .split_once('@')
        .is_some_and(|(_, location)| location.contains('/'))
}

/// Rewrite a leading `postgres://` scheme to `postgresql://`.
///
/// Only the leading scheme token is touched, so the rewrite is idempotent.
pub fn normalize_scheme(uri: &str) -> String {
    match uri.strip_prefix(LEGACY_SCHEME) {
        Some(rest) => format!("{NORMALIZED_SCHEME}{rest}"),
        None => uri.to_string(),
    }
}

/// A short, credential-free rendering of a candidate for log events.
///
/// Everything between the scheme and the last `@` is masked. Without an `@`
/// the whole remainder is masked, since it may be a bare `user:password`.
pub fn preview(candidate: &str) -> String {
    let scheme_end = candidate.find("://").map_or(0, |i| i + 3);
    let (scheme, rest) = candidate.split_at(scheme_end);
    let masked = match rest.rsplit_once('@') {
        Some((_, location)) => format!("{scheme}***@{location}"),
        None if rest.is_empty() => scheme.to_string(),
        None => format!("{scheme}***"),
    };
    truncate_chars(&masked, PREVIEW_MAX_CHARS)
}

/// The URI with its password replaced by `***`.
///
/// Credentials end at the last `@`, so a password containing `?`, `#`, `/`
/// or `@` is masked whole. Without a scheme, or without an `@` but with a
/// `:` that could be `user:password`, the result is `preview`.
pub fn redact_uri(uri: &str) -> String {
    let Some((scheme, rest)) = uri.split_once("://") else {
        return preview(uri);
    };
    match rest.rsplit_once('@') {
        Some((userinfo, location)) => match userinfo.split_once(':') {
            Some((user, _)) => format!("{scheme}://{user}:***@{location}"),
            None => uri.to_string(),
        },
        None if rest.contains(':') => preview(uri),
        None => uri.to_string(),
    }
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_complete() {
        assert!(is_complete("postgresql://u:p@h:5432/db"));
        assert!(is_complete("x@/"));
        assert!(!is_complete("postgresql://"));
        assert!(!is_complete("postgresql://u:p@h:5432"));
        assert!(!is_complete("postgresql://h/db"));
        assert!(!is_complete(""));
    }

    #[test]
    fn test_is_complete_uses_first_at() {
        // The `/` after the second `@` is still after the first one.
        assert!(is_complete("a@b@c/d"));
        assert!(!is_complete("a/b@c"));
    }

    #[test]
    fn test_normalize_scheme() {
        assert_eq!(
            normalize_scheme("postgres://u:p@h/db"),
            "postgresql://u:p@h/db"
        );
        assert_eq!(
            normalize_scheme("postgresql://u:p@h/db"),
            "postgresql://u:p@h/db"
        );
        assert_eq!(normalize_scheme("mysql://u:p@h/db"), "mysql://u:p@h/db");
    }

    #[test]
    fn test_normalize_scheme_leaves_embedded_scheme_alone() {
        let uri = "postgresql://u:p@h/db?replica=postgres://r";
        assert_eq!(normalize_scheme(uri), uri);
    }

    #[test]
    fn test_preview_masks_credentials() {
        let shown = preview("postgres://admin:hunter2@db:5432/app");
        assert!(!shown.contains("hunter2"));
        assert!(!shown.contains("admin"));
        assert!(shown.starts_with("postgres://***@db"));
    }

    #[test]
    fn test_preview_masks_at_sign_inside_password() {
        let shown = preview("postgresql://u:p@ss@host/db");
        assert!(!shown.contains("ss@"));
        assert_eq!(shown, "postgresql://***@host/db");
    }

    #[test]
    fn test_preview_without_at_masks_remainder() {
        assert_eq!(preview("postgresql://"), "postgresql://");
        assert_eq!(preview("postgresql://admin:hunter2"), "postgresql://***");
        assert_eq!(preview("hunter2"), "***");
    }

    #[test]
    fn test_preview_truncates() {
        let long = format!("postgresql://u:p@{}/db", "h".repeat(80));
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), PREVIEW_MAX_CHARS + 3);
    }

    #[test]
    fn test_redact_uri() {
        assert_eq!(
            redact_uri("postgresql://admin:hunter2@db:5432/app"),
            "postgresql://admin:***@db:5432/app"
        );
        assert_eq!(
            redact_uri("sqlite:////app/superset_home/superset.db"),
            "sqlite:////app/superset_home/superset.db"
        );
        assert!(!redact_uri("not a url: admin:hunter2").contains("hunter2"));
    }

    #[test]
    fn test_redact_uri_password_with_query_delimiter() {
        // A URL parser would read `admin:2024` as host and port here.
        let uri = "postgresql://admin:2024?s3cret@db:5432/app";
        assert!(is_complete(uri));

        let shown = redact_uri(uri);
        assert!(!shown.contains("s3cret"));
        assert!(!shown.contains("2024"));
        assert_eq!(shown, "postgresql://admin:***@db:5432/app");
    }

    #[test]
    fn test_redact_uri_password_with_fragment_and_at() {
        let shown = redact_uri("postgresql://u:12#p@ss@db/app");
        assert_eq!(shown, "postgresql://u:***@db/app");
    }

    #[test]
    fn test_redact_uri_without_password() {
        assert_eq!(redact_uri("postgresql://u@db/app"), "postgresql://u@db/app");
        assert_eq!(redact_uri("postgresql://admin:hunter2"), "postgresql://***");
    }
}
