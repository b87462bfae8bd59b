use reckoner::calculator::report::evaluate_line;
use reckoner::{Calculator, Number, Operation};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let calc = Calculator::new();

    match evaluate_line(&calc, Operation::Add, Number::Int(10), Number::Int(5)) {
        Ok(line) => {
            println!("{line}");
            info!(%line, "computed sum");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
