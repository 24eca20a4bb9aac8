//! kubectl-decode - Decode base64 Secret data in Kubernetes manifests
//!
//! This binary provides two invocation modes:
//! - filter (no subcommand): read a manifest from stdin, decode its data
//!   field, and re-emit it in the same format
//! - get: run `kubectl get <args...>` and decode the fetched resources,
//!   expanding List results item by item

use clap::{Parser, Subcommand};
use kdec_pipeline::{run_filter, run_get, KubectlRunner, PipelineError};
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kubectl-decode")]
#[command(about = "Decode base64 Secret data in Kubernetes manifests")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch resources with `kubectl get` and decode their data fields
    ///
    /// Examples:
    ///   kubectl-decode get secret my-secret -o yaml
    ///   kubectl-decode get secrets -o json
    Get {
        /// Arguments forwarded verbatim to `kubectl get`, flags included
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() -> ExitCode {
    init_debug_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Get { args }) => handle_get(&args),
        None => handle_filter(),
    }
}

fn handle_filter() -> ExitCode {
    let mut input = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut input) {
        eprintln!("Error reading input: {err}");
        return ExitCode::FAILURE;
    }

    match run_filter(&input) {
        Ok(bytes) => write_stdout(&bytes),
        Err(err @ PipelineError::UnrecognizedInput) => {
            // Pass unparsable input through unchanged so a pipeline keeps
            // its payload, then fail.
            let _ = io::stdout().write_all(&input);
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error processing resource: {err}");
            ExitCode::FAILURE
        }
    }
}

fn handle_get(args: &[String]) -> ExitCode {
    match run_get(args, &KubectlRunner::default()) {
        Ok(bytes) => write_stdout(&bytes),
        Err(PipelineError::UnrecognizedKubectlOutput { raw }) => {
            // Show whatever kubectl produced before the diagnostic.
            let _ = io::stdout().write_all(&raw);
            eprintln!("Error: input appeared to be neither json nor yaml");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn write_stdout(bytes: &[u8]) -> ExitCode {
    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout.write_all(bytes).and_then(|()| stdout.flush()) {
        eprintln!("Error writing output: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// DEBUG, when set non-empty, routes debug-level traces to stderr. Purely
/// observational: stdout bytes are identical either way.
fn init_debug_tracing() {
    let enabled = std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty());
    if !enabled {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(io::stderr)
        .init();
    tracing::debug!("debug tracing enabled");
}
