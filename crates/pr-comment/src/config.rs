use crate::cli::Cli;
use anyhow::{anyhow, Context, Result};
use comment_core::CommentRequest;
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".pr-comment.toml";

/// Raw step configuration, merged from file, environment and command line
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default, deserialize_with = "lenient_string")]
    pub personal_access_token: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub delete_comment: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub repository_url: Option<String>,
    pub issue_number: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub api_base_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub update_comment_tag: Option<String>,
}

/// Validated inputs for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInputs {
    pub token: String,
    pub body: String,
    pub delete_comment: bool,
    pub repository_url: String,
    pub issue_number: u64,
    pub api_base_url: Option<String>,
    pub update_comment_tag: Option<String>,
}

impl StepInputs {
    pub fn request(&self) -> CommentRequest {
        CommentRequest {
            body: self.body.clone(),
            delete: self.delete_comment,
            issue_number: self.issue_number,
            update_tag: self.update_comment_tag.clone(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("PR_COMMENT_").ignore(&["config"]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(token) = &cli.token {
            self.personal_access_token = Some(token.clone());
        }
        if let Some(body) = &cli.body {
            self.body = Some(body.clone());
        }
        if let Some(path) = &cli.body_file {
            let body = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read body file {}", path.display()))?;
            self.body = Some(body);
        }
        if let Some(delete) = cli.delete.as_deref() {
            if let Some(flag) = parse_flag(delete).map_err(|e| anyhow!(e))? {
                self.delete_comment = Some(flag);
            }
        }
        if let Some(url) = &cli.repository_url {
            self.repository_url = Some(url.clone());
        }
        if let Some(number) = cli.issue_number.as_deref().map(str::trim) {
            if !number.is_empty() {
                let parsed = number
                    .parse::<u64>()
                    .map_err(|_| anyhow!("Invalid issue number: '{}'", number))?;
                self.issue_number = Some(parsed);
            }
        }
        if let Some(url) = &cli.api_base_url {
            self.api_base_url = Some(url.clone());
        }
        if let Some(tag) = &cli.update_comment_tag {
            self.update_comment_tag = Some(tag.clone());
        }
        Ok(())
    }

    pub fn validate(self) -> Result<StepInputs> {
        let token = non_empty(self.personal_access_token).ok_or_else(|| {
            anyhow!("Access token not configured. Set via --token or the personal_access_token env var")
        })?;
        let repository_url = non_empty(self.repository_url).ok_or_else(|| {
            anyhow!("Repository URL not configured. Set via --repository-url or the repository_url env var")
        })?;
        let issue_number = self.issue_number.filter(|&n| n > 0).ok_or_else(|| {
            anyhow!("Issue number not configured. Set via --issue-number or the issue_number env var")
        })?;

        Ok(StepInputs {
            token,
            body: self.body.unwrap_or_default(),
            delete_comment: self.delete_comment.unwrap_or(false),
            repository_url,
            issue_number,
            api_base_url: non_empty(self.api_base_url).map(|url| url.trim().to_string()),
            update_comment_tag: self.update_comment_tag.filter(|tag| !tag.is_empty()),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Accept strings, numbers and booleans for text fields, since env values
/// such as `true` or `1234` are typed before they reach us
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|v| match v {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

/// Accept `true/false`, `yes/no`, `on/off` and `1/0`
fn lenient_flag<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
        Text(String),
    }

    match Option::<Flag>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Flag::Bool(b)) => Ok(Some(b)),
        Some(Flag::Int(n)) => Ok(Some(n != 0)),
        Some(Flag::Text(s)) => parse_flag(&s).map_err(serde::de::Error::custom),
    }
}

/// Parse a step flag; an empty value means unset
fn parse_flag(value: &str) -> std::result::Result<Option<bool>, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "true" | "yes" | "y" | "on" | "1" => Ok(Some(true)),
        "false" | "no" | "n" | "off" | "0" => Ok(Some(false)),
        other => Err(format!("Invalid boolean value '{}'", other)),
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_user_config_path() {
        paths.push(path);
    }
    if let Some(path) = get_local_config_path() {
        if !paths.contains(&path) {
            paths.push(path);
        }
    }

    paths
}

fn get_user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "pr-comment").map(|d| d.config_dir().join("config.toml"))
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(LOCAL_CONFIG_FILE))
}
