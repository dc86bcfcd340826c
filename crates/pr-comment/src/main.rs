mod cli;
mod color;
mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, OutputFormat};
use comment_core::{parse_repository_url, resolve, CommentApi, Outcome};
use config::{Config, StepInputs};
use github_backend::GitHubClient;
use output::{output_error, output_outcome, print_inputs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);

    match run(&cli) {
        Ok(outcome) => {
            output_outcome(&outcome, cli.format);
            ExitCode::SUCCESS
        }
        Err(e) => {
            output_error(&e, cli.format);
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli)?;
    let inputs = config.validate()?;

    if cli.format == OutputFormat::Text {
        print_inputs(&inputs);
    }

    let repo = parse_repository_url(&inputs.repository_url)?;
    let client = build_client(&inputs);

    Ok(resolve(client.as_ref(), &repo, &inputs.request())?)
}

/// Public github.com unless a base URL for a self-hosted instance is given
fn build_client(inputs: &StepInputs) -> Box<dyn CommentApi> {
    match inputs.api_base_url.as_deref() {
        Some(base_url) => Box::new(GitHubClient::enterprise(base_url, &inputs.token)),
        None => Box::new(GitHubClient::new(&inputs.token)),
    }
}
