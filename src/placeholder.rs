//! Expansion of `${NAME}` placeholders from process environment variables.
//!
//! Pipelines often hand the build type over as a placeholder such as
//! `${BUILD_TYPE}` rather than a literal token. Placeholders referring to
//! unset variables are left as written so the downstream error names what
//! was actually received.

use regex::Regex;

const PLACEHOLDER_PATTERN: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";

/// Replace every `${NAME}` in `token` with the value of the environment
/// variable `NAME`, leaving unset names untouched
pub fn expand(token: &str) -> String {
    Regex::new(PLACEHOLDER_PATTERN)
        .ok()
        .map(|re| {
            re.replace_all(token, |caps: &regex::Captures| {
                std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
            })
            .into_owned()
        })
        .unwrap_or_else(|| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_expand_set_variable() {
        std::env::set_var("RELEASE_RESOLVE_TEST_KIND", "minor");
        assert_eq!(expand("${RELEASE_RESOLVE_TEST_KIND}"), "minor");
        std::env::remove_var("RELEASE_RESOLVE_TEST_KIND");
    }

    #[test]
    #[serial]
    fn test_expand_unset_variable_left_literal() {
        std::env::remove_var("RELEASE_RESOLVE_TEST_UNSET");
        assert_eq!(
            expand("${RELEASE_RESOLVE_TEST_UNSET}"),
            "${RELEASE_RESOLVE_TEST_UNSET}"
        );
    }

    #[test]
    #[serial]
    fn test_expand_inside_larger_token() {
        std::env::set_var("RELEASE_RESOLVE_TEST_PART", "bug");
        assert_eq!(expand("${RELEASE_RESOLVE_TEST_PART}-fix"), "bug-fix");
        std::env::remove_var("RELEASE_RESOLVE_TEST_PART");
    }

    #[test]
    #[serial]
    fn test_expand_multiple_placeholders() {
        std::env::set_var("RELEASE_RESOLVE_TEST_A", "ma");
        std::env::set_var("RELEASE_RESOLVE_TEST_B", "jor");
        assert_eq!(
            expand("${RELEASE_RESOLVE_TEST_A}${RELEASE_RESOLVE_TEST_B}"),
            "major"
        );
        std::env::remove_var("RELEASE_RESOLVE_TEST_A");
        std::env::remove_var("RELEASE_RESOLVE_TEST_B");
    }

    #[test]
    fn test_expand_plain_token_unchanged() {
        assert_eq!(expand("patch"), "patch");
    }

    #[test]
    fn test_expand_empty_token() {
        assert_eq!(expand(""), "");
    }

    #[test]
    fn test_expand_malformed_placeholder_unchanged() {
        assert_eq!(expand("${}"), "${}");
        assert_eq!(expand("${1BAD}"), "${1BAD}");
        assert_eq!(expand("$KIND"), "$KIND");
    }
}
