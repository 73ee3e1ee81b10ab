use url_guardian::cli::CliCommand;
use url_guardian::logging;

fn main() {
    // Logging goes to a file; failing to open it should not block checks.
    if let Err(err) = logging::init_logging() {
        eprintln!("url-guardian: logging disabled: {}", err);
    }

    // Parse CLI and dispatch.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("url-guardian error: {:#}", err);
        std::process::exit(1);
    }
}
