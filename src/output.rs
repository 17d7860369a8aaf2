//! CLI response formatting and output.
//!
//! Provides JSON envelope, printing, and exit code mapping.

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    use std::io::{self, Write};

    let payload = response.to_json()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::Io {
            op: "write stdout",
            source: e,
        });
    }
    Ok(())
}

/// Print the envelope for a command result and return the process exit code.
pub fn print_result<T: Serialize>(result: Result<T>) -> i32 {
    match result {
        Ok(data) => match print_response(&CliResponse::success(data)) {
            Ok(()) => 0,
            Err(_) => 1,
        },
        Err(err) => {
            let exit_code = exit_code_for_error(&err);
            let _ = print_response(&CliResponse::<()>::from_error(&err));
            exit_code
        }
    }
}

pub fn exit_code_for_error(err: &Error) -> i32 {
    match err {
        Error::InvalidArgument { .. } => 2,
        Error::NotFound { .. } => 4,
        Error::PermissionDenied { .. } | Error::Io { .. } | Error::Json(_) => 1,
    }
}
