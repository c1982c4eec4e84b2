use std::path::Path;
use std::process;

use envseed_codegen::SnippetConfig;

use crate::{print_output, report_error, OutputFormat};

pub(crate) fn cmd_generate(env_file: &Path, function_name: String, output: OutputFormat) {
    // Step 1: Resolve, check and parse the env file
    let env = match envseed_core::load_env_file(env_file) {
        Ok(env) => env,
        Err(e) => {
            tracing::debug!(error = ?e, "failed to load env file");
            report_error(&e.to_string(), output);
            process::exit(1);
        }
    };

    // Step 2: Render the seeding function
    let config = SnippetConfig {
        function_name,
        ..SnippetConfig::default()
    };

    match envseed_codegen::render_snippet(&env, &config) {
        Ok(snippet) => print_output(&snippet, output),
        Err(e) => {
            let msg = format!("code generation error: {}", e);
            report_error(&msg, output);
            process::exit(1);
        }
    }
}
