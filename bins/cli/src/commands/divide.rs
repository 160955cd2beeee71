//! Divide command handler.

use crate::CliOutput;
use crate::error::{CliError, ExitCode};
use crate::format::{OutputMode, to_json_line};
use option_result_core as orc;

/// Integer division with any panic turned into an error value.
fn divide(dividend: i64, divisor: i64) -> orc::Result<(i64, i64), CliError> {
    orc::Result::wrap(|| (dividend / divisor, dividend % divisor)).map_err(|thrown| {
        CliError::Panicked(thrown.map_or("panicked without a payload".to_owned(), |thrown| {
            thrown.to_string()
        }))
    })
}

/// Run the divide command.
pub fn run_divide(mode: OutputMode, dividend: i64, divisor: i64) -> Result<CliOutput, CliError> {
    let (quotient, remainder) =
        crate::logging::with_captured_panics(|| divide(dividend, divisor)).into_std()?;

    let stdout = if mode.is_json() {
        format_divide_json(quotient, remainder)?
    } else {
        format!("quotient: {quotient}\n")
    };
    let stderr = if remainder == 0 || mode.is_json() {
        String::new()
    } else {
        format!("note: remainder {remainder} discarded\n")
    };

    Ok(CliOutput {
        stdout,
        stderr,
        exit_code: ExitCode::Ok,
    })
}

fn format_divide_json(quotient: i64, remainder: i64) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "status": "ok",
        "quotient": quotient,
        "remainder": remainder,
        "result": orc::Result::<(i64, i64), String>::Ok((quotient, remainder)),
    });
    to_json_line(&payload)
}
