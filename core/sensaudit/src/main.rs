use std::process::ExitCode;

fn main() -> ExitCode {
    sensaudit::cli::run_cli()
}
