use std::path::Path;
use std::process;

use crate::{print_output, report_error, OutputFormat};

pub(crate) fn cmd_parse(env_file: &Path, output: OutputFormat, quiet: bool) {
    let text = match envseed_core::read_env_file(env_file) {
        Ok(text) => text,
        Err(e) => {
            report_error(&e.to_string(), output);
            process::exit(1);
        }
    };

    let (env, report) = envseed_core::parse_with_report(&text);

    match output {
        OutputFormat::Text => {
            let lines: Vec<String> = env
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            if !lines.is_empty() {
                print_output(&lines.join("\n"), output);
            }
            if !quiet {
                eprintln!(
                    "{} entries ({} lines skipped, {} overwritten)",
                    env.len(),
                    report.skipped(),
                    report.overwritten
                );
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "path": envseed_core::resolve_env_path(env_file).display().to_string(),
                "entries": env,
                "report": report,
            });
            print_output(
                &serde_json::to_string_pretty(&json).unwrap_or_default(),
                output,
            );
        }
    }
}
