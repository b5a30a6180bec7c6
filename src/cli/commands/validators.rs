use anyhow::Result;
use std::process::ExitCode;

use crate::cli::{EXIT_SUCCESS, Output};
use crate::validation::BuiltinValidator;

/// List the built-in validators
pub fn execute() -> Result<ExitCode> {
    let output = Output::new(true);
    for builtin in BuiltinValidator::ALL {
        output.key_value(builtin.name(), builtin.description());
    }
    Ok(ExitCode::from(EXIT_SUCCESS))
}
