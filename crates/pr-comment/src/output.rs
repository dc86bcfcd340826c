use crate::cli::OutputFormat;
use crate::config::StepInputs;
use colored::Colorize;
use comment_core::{Outcome, RemoteComment};
use serde::Serialize;

pub fn output_outcome(outcome: &Outcome, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(outcome) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", outcome.display());
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: error_code(err).to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

fn error_code(err: &anyhow::Error) -> &'static str {
    use comment_core::CommentError;

    match err.downcast_ref::<CommentError>() {
        Some(CommentError::MissingTag | CommentError::InvalidRepositoryUrl { .. }) => "config",
        Some(CommentError::Lookup(_)) => "lookup",
        Some(CommentError::Mutation { .. }) => "mutation",
        Some(_) => "api",
        None => "error",
    }
}

/// Print the effective inputs before acting, with the token masked
pub fn print_inputs(inputs: &StepInputs) {
    println!("{}", "Configs:".bold());
    let rows = [
        ("personal_access_token", "*****".to_string()),
        ("body", inputs.body.clone()),
        ("delete_comment", inputs.delete_comment.to_string()),
        ("repository_url", inputs.repository_url.clone()),
        ("issue_number", inputs.issue_number.to_string()),
        (
            "api_base_url",
            inputs.api_base_url.clone().unwrap_or_default(),
        ),
        (
            "update_comment_tag",
            inputs.update_comment_tag.clone().unwrap_or_default(),
        ),
    ];
    for (name, value) in rows {
        println!("- {}: {}", name.dimmed(), value);
    }
    println!();
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for Outcome {
    fn display(&self) -> String {
        match self {
            Outcome::Created { comment } => {
                format!("{} {}", "Created".green().bold(), comment.display())
            }
            Outcome::Updated { comment } => {
                format!("{} {}", "Updated".green().bold(), comment.display())
            }
            Outcome::Deleted { comment_id, tag } => format!(
                "{} comment {} with tag {}",
                "Deleted".green().bold(),
                format!("#{}", comment_id).cyan(),
                tag.magenta()
            ),
            Outcome::NothingToDelete { tag } => format!(
                "{} Comment with tag {} does not exist. Nothing to do.",
                "Success:".green().bold(),
                tag.magenta()
            ),
        }
    }
}

impl Displayable for RemoteComment {
    fn display(&self) -> String {
        let mut output = format!("comment {}", format!("#{}", self.id).cyan().bold());

        if let Some(author) = &self.author {
            output.push_str(&format!(" by {}", author));
        }
        if let Some(url) = &self.html_url {
            output.push_str(&format!("\n  {}: {}", "URL".dimmed(), url));
        }
        if let Some(updated) = &self.updated {
            output.push_str(&format!(
                "\n  {}: {}",
                "Updated".dimmed(),
                updated.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
            ));
        }

        output
    }
}
