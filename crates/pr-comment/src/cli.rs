use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Step inputs are read from the same lowercase environment variables a CI
/// step runner exports, and can be overridden on the command line.
#[derive(Parser, Debug)]
#[command(
    name = "pr-comment",
    version,
    about = "Post, update, or delete a tagged comment on a GitHub pull request or issue"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "PR_COMMENT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Personal access token used to call the GitHub API
    #[arg(long, env = "personal_access_token", hide_env_values = true)]
    pub token: Option<String>,

    /// Comment text to post or update
    #[arg(long, env = "body", hide_env_values = true)]
    pub body: Option<String>,

    /// Read the comment text from a file (takes precedence over --body)
    #[arg(long, value_name = "PATH")]
    pub body_file: Option<PathBuf>,

    /// Delete the comment carrying the update tag instead of posting
    #[arg(
        long,
        env = "delete_comment",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub delete: Option<String>,

    /// Repository URL (https://host/owner/repo.git or git@host:owner/repo.git)
    #[arg(long, env = "repository_url")]
    pub repository_url: Option<String>,

    /// Pull request or issue number
    #[arg(long, env = "issue_number")]
    pub issue_number: Option<String>,

    /// GitHub Enterprise URL; leave empty for github.com
    #[arg(long, env = "api_base_url")]
    pub api_base_url: Option<String>,

    /// Marker used to find and update (or delete) a previous comment
    #[arg(long = "tag", env = "update_comment_tag")]
    pub update_comment_tag: Option<String>,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn delete_flag_accepts_bare_and_explicit_values() {
        let cli = Cli::try_parse_from(["pr-comment", "--delete"]).unwrap();
        assert_eq!(cli.delete.as_deref(), Some("true"));

        let cli = Cli::try_parse_from(["pr-comment", "--delete=no"]).unwrap();
        assert_eq!(cli.delete.as_deref(), Some("no"));
    }

    #[test]
    fn tag_flag_maps_to_update_comment_tag() {
        let cli = Cli::try_parse_from(["pr-comment", "--tag", "ci-result", "-o", "json"]).unwrap();
        assert_eq!(cli.update_comment_tag.as_deref(), Some("ci-result"));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
