//! Hello command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, to_json_line};
use option_result_core as orc;

/// Run the hello command.
pub fn run_hello(mode: OutputMode) -> Result<CliOutput, CliError> {
    let first_source = orc::Result::<&str, &str>::Ok("hello");
    let second_source = orc::Option::Some("world");
    let first = first_source.unwrap_or("uh oh");
    let second = second_source.unwrap_or("uh oh");

    let stdout = if mode.is_json() {
        format_hello_json(first_source, second_source)?
    } else {
        format_hello_text(first, second)
    };

    Ok(CliOutput::success(stdout))
}

fn format_hello_text(first: &str, second: &str) -> String {
    format!("{first}\n{second}\n")
}

fn format_hello_json(
    first: orc::Result<&str, &str>,
    second: orc::Option<&str>,
) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "status": "ok",
        "greeting": [first.unwrap_or("uh oh"), second.unwrap_or("uh oh")],
        "sources": [first, second],
    });
    to_json_line(&payload)
}
