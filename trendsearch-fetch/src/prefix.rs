//! Anti-XSRF response prefix handling.
//!
//! Most Trends JSON endpoints prepend `)]}'` (sometimes followed by a comma
//! or whitespace) to defeat naive script inclusion. The body is only valid
//! JSON once that prefix is removed.

/// Strips the `)]}'` security prefix, plus any commas that follow it, from
/// the start of a response body, then trims surrounding whitespace.
///
/// The whitespace trim applies whether or not the prefix was present, and
/// the function is idempotent.
pub fn strip_google_prefix(body: &str) -> &str {
    let rest = match body.strip_prefix(")]}'") {
        Some(rest) => rest.trim_start_matches(','),
        None => body,
    };
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_bare_prefix() {
        assert_eq!(strip_google_prefix(")]}'{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_strips_prefix_with_comma_and_newline() {
        assert_eq!(strip_google_prefix(")]}',\n\n{\"a\":1}"), "{\"a\":1}");
    }

    #[test]
    fn test_leaves_clean_body_alone() {
        assert_eq!(strip_google_prefix("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_google_prefix(""), "");
    }

    #[test]
    fn test_trims_whitespace_without_prefix() {
        assert_eq!(strip_google_prefix("  {\"a\":1}\n"), "{\"a\":1}");
        assert_eq!(strip_google_prefix(")]}'\n[1]\n"), "[1]");
    }

    #[test]
    fn test_idempotent() {
        let once = strip_google_prefix(")]}'\n[1,2]");
        assert_eq!(strip_google_prefix(once), once);
    }
}
