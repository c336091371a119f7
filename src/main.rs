use std::process::ExitCode;

fn main() -> ExitCode {
    match b4nd_archiver::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
