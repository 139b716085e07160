#[path = "modules/app.rs"]
mod app;
#[path = "modules/cli.rs"]
mod cli;
#[path = "modules/error.rs"]
mod error;
#[path = "modules/io.rs"]
mod io;

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match app::run(cli::Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render_error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// Renders an error and its source chain, one cause per line.
fn render_error_chain(error: &dyn Error) -> String {
    let mut message = format!("Error: {}", error);

    let mut source = error.source();
    while let Some(s) = source {
        message.push_str(&format!("\nCaused by: {}", s));
        source = s.source();
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_error_chain_includes_sources() {
        let error = error::CliError::Io {
            path: PathBuf::from("missing.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        let rendered = render_error_chain(&error);
        assert!(rendered.starts_with("Error: I/O error for 'missing.toml'"));
        assert!(rendered.contains("Caused by: no such file"));
    }

    #[test]
    fn test_render_error_chain_without_source() {
        let error = error::CliError::Query {
            query: "zz".to_string(),
            details: "unknown element symbol".to_string(),
        };

        let rendered = render_error_chain(&error);
        assert_eq!(rendered, "Error: Invalid element query 'zz': unknown element symbol");
    }
}
