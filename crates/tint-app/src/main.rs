mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "tint=info";

fn init_logging(log_level: Option<&str>) {
    let directive = log_level
        .and_then(|level| level.parse().ok())
        .unwrap_or_else(|| {
            DEFAULT_LOG_DIRECTIVE
                .parse()
                .expect("default log directive is valid")
        });

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = cli::parse();

    init_logging(args.log_level.as_deref());
    tracing::debug!("tint v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(&args) {
        Ok(report) => {
            if !report.output.is_empty() {
                println!("{}", report.output);
            }
            if report.success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
