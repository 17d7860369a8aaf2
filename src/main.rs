use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use varsub::{log_status, output, substitute};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "varsub")]
#[command(version = VERSION)]
#[command(about = "Expand a placeholder variable in a configuration file")]
#[command(
    long_about = "Expand a placeholder variable in a configuration file.\n\n\
    Replaces the first occurrence of VARIABLE on each line of FILE with VALUE \
    and rewrites the file in place. Run once per variable to expand several \
    variables."
)]
struct Cli {
    /// Configuration file to rewrite in place
    file: String,

    /// Literal token to search for (first occurrence per line)
    variable: String,

    /// Replacement text
    value: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let path = PathBuf::from(shellexpand::tilde(&cli.file).to_string());

    log_status!(
        "substitute",
        "Expanding {} in {}",
        cli.variable,
        path.display()
    );

    let result = substitute(&path, &cli.variable, &cli.value);
    let exit_code = output::print_result(result);

    ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
