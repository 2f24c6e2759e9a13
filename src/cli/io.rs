//! JSON output for CLI commands
//!
//! One JSON object per line on stdout, UTF-8 only.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    write_line(&success_envelope(data)?)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_line(&error_envelope(code, message))
}

fn success_envelope<T: Serialize>(data: &T) -> CliResult<Value> {
    Ok(serde_json::json!({
        "status": "ok",
        "data": serde_json::to_value(data)?
    }))
}

fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;
    Ok(())
}
