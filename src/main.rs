//! roadstatus - TfL road status client
//!
//! A command-line tool that queries the TfL road status API for a single
//! road and prints a human-readable status.

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let code = roadstatus::run(std::env::args_os());
    std::process::exit(code);
}
