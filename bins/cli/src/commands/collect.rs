//! Collect command handler.

use crate::CliOutput;
use crate::error::CliError;
use crate::format::{OutputMode, to_json_line};
use option_result_core as orc;

/// Parse every raw value, stopping at the first one that is not an integer.
fn parse_values(raw_values: &[String]) -> orc::Result<Vec<i64>, CliError> {
    orc::Result::collect(raw_values.iter().map(|raw| {
        orc::Result::from(raw.trim().parse::<i64>())
            .map_err(|error| CliError::InvalidInput(format!("`{raw}` is not an integer ({error})")))
    }))
}

fn checked_sum(values: &[i64]) -> orc::Option<i64> {
    values.iter().try_fold(0_i64, |total, value| total.checked_add(*value)).into()
}

/// Run the collect command.
pub fn run_collect(mode: OutputMode, raw_values: &[String]) -> Result<CliOutput, CliError> {
    let values = parse_values(raw_values).into_std()?;
    tracing::debug!(count = values.len(), "parsed values");
    let sum = checked_sum(&values)
        .ok_or_else(|| CliError::InvalidInput("sum overflows a 64-bit integer".to_owned()))
        .into_std()?;

    let stdout = if mode.is_json() {
        format_collect_json(&values, sum)?
    } else {
        format_collect_text(&values, sum)
    };

    Ok(CliOutput::success(stdout))
}

fn format_collect_text(values: &[i64], sum: i64) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("values: {joined}\nsum: {sum}\n")
}

fn format_collect_json(values: &[i64], sum: i64) -> Result<String, CliError> {
    let payload = serde_json::json!({
        "status": "ok",
        "values": values,
        "sum": sum,
        "result": orc::Result::<&[i64], String>::Ok(values),
    });
    to_json_line(&payload)
}
