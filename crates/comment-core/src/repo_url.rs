//! Repository URL parsing
//!
//! Accepts the two transport forms a CI checkout hands us:
//!
//! - `https://host/owner/repo.git` (also `http://` and `ssh://user@host/owner/repo.git`)
//! - scp-like `user@host:owner/repo.git`

use url::Url;

use crate::error::{CommentError, Result};
use crate::models::RepositoryRef;

const SUPPORTED_SCHEMES: [&str; 4] = ["https", "http", "ssh", "git"];

/// Parse a repository URL into its owner and repository name
///
/// # Errors
///
/// Returns `CommentError::InvalidRepositoryUrl` when the input matches
/// neither form or does not name exactly `owner/repo`.
pub fn parse_repository_url(input: &str) -> Result<RepositoryRef> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CommentError::invalid_url(input, "URL is empty"));
    }

    if trimmed.contains("://") {
        parse_scheme_url(input, trimmed)
    } else {
        parse_scp_like(input, trimmed)
    }
}

fn parse_scheme_url(input: &str, trimmed: &str) -> Result<RepositoryRef> {
    let parsed = Url::parse(trimmed).map_err(|e| CommentError::invalid_url(input, e.to_string()))?;

    if !SUPPORTED_SCHEMES.contains(&parsed.scheme()) {
        return Err(CommentError::invalid_url(
            input,
            format!("unsupported scheme '{}'", parsed.scheme()),
        ));
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(CommentError::invalid_url(input, "missing host"));
    }

    owner_and_repo(input, parsed.path())
}

fn parse_scp_like(input: &str, trimmed: &str) -> Result<RepositoryRef> {
    let (user_host, path) = trimmed
        .split_once(':')
        .ok_or_else(|| CommentError::invalid_url(input, "expected 'user@host:owner/repo'"))?;

    let host = user_host.rsplit('@').next().unwrap_or_default();
    if host.is_empty() || user_host.contains('/') {
        return Err(CommentError::invalid_url(input, "missing host"));
    }

    owner_and_repo(input, path)
}

fn owner_and_repo(input: &str, path: &str) -> Result<RepositoryRef> {
    let path = path.trim_matches('/');
    let mut segments = path.split('/');

    match (segments.next(), segments.next(), segments.next()) {
        (Some(owner), Some(repo), None) if !owner.is_empty() => {
            let name = repo.strip_suffix(".git").unwrap_or(repo);
            if name.is_empty() {
                return Err(CommentError::invalid_url(input, "missing repository name"));
            }
            Ok(RepositoryRef::new(owner, name))
        }
        (_, _, Some(_)) => Err(CommentError::invalid_url(
            input,
            "expected exactly 'owner/repo' after the host",
        )),
        _ => Err(CommentError::invalid_url(input, "missing owner or repository")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> (String, String) {
        let repo = parse_repository_url(input).unwrap();
        (repo.owner, repo.name)
    }

    fn assert_invalid(input: &str) {
        match parse_repository_url(input) {
            Err(CommentError::InvalidRepositoryUrl { url, .. }) => assert_eq!(url, input),
            other => panic!("Expected InvalidRepositoryUrl for {:?}, got: {:?}", input, other),
        }
    }

    #[test]
    fn parses_https_url() {
        assert_eq!(
            parse("https://github.com/octo/repo.git"),
            ("octo".to_string(), "repo".to_string())
        );
    }

    #[test]
    fn parses_https_url_without_git_suffix() {
        assert_eq!(
            parse("https://github.com/octo/repo"),
            ("octo".to_string(), "repo".to_string())
        );
        assert_eq!(
            parse("https://github.com/octo/repo/"),
            ("octo".to_string(), "repo".to_string())
        );
    }

    #[test]
    fn parses_enterprise_host_with_port() {
        assert_eq!(
            parse("https://git.example.com:8443/team/service.git"),
            ("team".to_string(), "service".to_string())
        );
    }

    #[test]
    fn parses_scp_like_url() {
        assert_eq!(
            parse("git@github.com:octo/repo.git"),
            ("octo".to_string(), "repo".to_string())
        );
        assert_eq!(
            parse("deploy@git.example.com:team/service.git"),
            ("team".to_string(), "service".to_string())
        );
    }

    #[test]
    fn parses_ssh_scheme_url() {
        assert_eq!(
            parse("ssh://git@github.com/octo/repo.git"),
            ("octo".to_string(), "repo".to_string())
        );
    }

    #[test]
    fn strips_only_one_git_suffix() {
        assert_eq!(
            parse("https://github.com/octo/repo.git.git"),
            ("octo".to_string(), "repo.git".to_string())
        );
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(
            parse("  git@github.com:octo/repo.git\n"),
            ("octo".to_string(), "repo".to_string())
        );
    }

    #[test]
    fn keeps_dots_inside_repository_name() {
        assert_eq!(
            parse("https://github.com/octo/repo.github.io.git"),
            ("octo".to_string(), "repo.github.io".to_string())
        );
    }

    #[test]
    fn rejects_malformed_urls() {
        assert_invalid("");
        assert_invalid("https://github.com");
        assert_invalid("https://github.com/octo");
        assert_invalid("https://github.com/octo/.git");
        assert_invalid("https://github.com/group/sub/repo.git");
        assert_invalid("git@github.com");
        assert_invalid("git@github.com:octo");
        assert_invalid("@:octo/repo");
        assert_invalid("ftp://github.com/octo/repo.git");
        assert_invalid("not a url");
    }
}
