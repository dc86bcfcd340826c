use crate::cli::ColorChoice;
use std::io::IsTerminal;

/// Initialize color mode based on CLI choice and environment
pub fn init(choice: ColorChoice) {
    let enabled = should_colorize(
        choice,
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("CLICOLOR_FORCE").is_some_and(|v| v != "0"),
        std::io::stdout().is_terminal(),
    );
    colored::control::set_override(enabled);
}

/// `NO_COLOR` (https://no-color.org/) wins over `CLICOLOR_FORCE` in auto mode;
/// CI logs are usually not terminals but often render ANSI colors.
fn should_colorize(choice: ColorChoice, no_color: bool, force: bool, is_terminal: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto if no_color => false,
        ColorChoice::Auto => force || is_terminal,
    }
}
