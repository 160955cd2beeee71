//! Info command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, to_json_line};
use option_result_core::core_crate_version;

const CLI_NAME: &str = env!("CARGO_PKG_NAME");
const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the info command.
pub fn run_info(mode: OutputMode) -> Result<CliOutput, CliError> {
    let core_version = core_crate_version();

    let stdout = if mode.is_json() {
        format_info_json(core_version)?
    } else {
        format_info_text(core_version)
    };

    Ok(CliOutput::success(stdout))
}

fn format_info_text(core_version: &str) -> String {
    format!(
        "status: ok\nname: {CLI_NAME}\nversion: {CLI_VERSION}\noption-result-core: {core_version}\n"
    )
}

fn format_info_json(core_version: &str) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "status": "ok",
        "build": {
            "name": CLI_NAME,
            "version": CLI_VERSION,
            "coreVersion": core_version,
        }
    });
    to_json_line(&payload)
}
