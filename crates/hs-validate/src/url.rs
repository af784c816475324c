//! GitHub repository link validator.

use std::sync::LazyLock;

use regex::Regex;

use crate::Violation;

// ASCII word characters only; owner and repository, optional trailing slash.
static GITHUB_REPO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_-]+/[A-Za-z0-9_.-]+/?$")
        .expect("github pattern is valid")
});

/// Validate a GitHub repository URL (`https://github.com/<owner>/<repo>`).
///
/// Emptiness is not checked here; the dashboard decides whether an empty link
/// is an error.
///
/// # Errors
///
/// [`Violation::InvalidUrl`] when the value is not a repository URL.
pub fn validate_github_url(url: &str) -> Result<(), Violation> {
    if GITHUB_REPO_PATTERN.is_match(url) {
        Ok(())
    } else {
        Err(Violation::InvalidUrl)
    }
}
