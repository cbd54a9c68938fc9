use std::process::ExitCode;

fn main() -> ExitCode {
    match dnalens_cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
