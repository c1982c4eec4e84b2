mod commands;
mod logging;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Seed Apps Script properties from a .env file.
#[derive(Parser)]
#[command(
    name = "envseed",
    version,
    about = "Generate an Apps Script snippet that seeds Script Properties from a .env file"
)]
struct Cli {
    /// Output format for diagnostics and the parse command (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress the parse summary (errors are always reported)
    #[arg(long, global = true)]
    quiet: bool,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Apps Script seeding function for a .env file
    Generate {
        #[command(flatten)]
        source: EnvFileArgs,
        /// Name of the generated Apps Script function
        #[arg(long, default_value = envseed_codegen::snippet::DEFAULT_FUNCTION_NAME)]
        function_name: String,
    },

    /// Print the parsed key/value mapping of a .env file
    Parse {
        #[command(flatten)]
        source: EnvFileArgs,
    },
}

#[derive(Args)]
pub(crate) struct EnvFileArgs {
    /// Path to the .env file, relative to the current directory
    #[arg(long, default_value = envseed_core::DEFAULT_ENV_FILE)]
    env_file: PathBuf,
}

impl Default for EnvFileArgs {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(envseed_core::DEFAULT_ENV_FILE),
        }
    }
}

fn main() {
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate {
            source,
            function_name,
        }) => {
            commands::generate::cmd_generate(&source.env_file, function_name, cli.output);
        }
        Some(Commands::Parse { source }) => {
            commands::parse::cmd_parse(&source.env_file, cli.output, cli.quiet);
        }
        None => {
            let source = EnvFileArgs::default();
            commands::generate::cmd_generate(
                &source.env_file,
                envseed_codegen::snippet::DEFAULT_FUNCTION_NAME.to_string(),
                cli.output,
            );
        }
    }
}

/// Print a diagnostic on stderr. Never muted: failures always say why.
pub(crate) fn report_error(msg: &str, output: OutputFormat) {
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
    }
}

/// Write command output to stdout.
///
/// A reader that went away (`envseed | head -c0`) ends the process with
/// status 0; any other write failure is reported and exits 1.
pub(crate) fn print_output(text: &str, output: OutputFormat) {
    if let Err(e) = write_output(&mut io::stdout().lock(), text) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            process::exit(0);
        }
        report_error(&format!("error writing output: {}", e), output);
        process::exit(1);
    }
}

fn write_output(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "{}", text)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_output_appends_newline() {
        let mut buf = Vec::new();
        write_output(&mut buf, "function f() {\n}").unwrap();
        assert_eq!(buf, b"function f() {\n}\n");
    }

    #[test]
    fn write_output_surfaces_broken_pipe_instead_of_panicking() {
        let err = write_output(&mut ClosedPipe, "A=1").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
