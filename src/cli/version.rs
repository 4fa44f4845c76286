//! `--version` and `--help` output.

/// Crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text printed by `--help`.
pub fn usage() -> String {
    format!(
        "konyhanyelv {}\n\
         Terminal client for Egészség Konyhanyelven.\n\n\
         USAGE:\n    konyhanyelv [--version | --help]\n\n\
         ENVIRONMENT:\n    \
         KONYHA_BASE_URL      site root (default https://staging.sinkoangi.hu)\n    \
         KONYHA_DATA_DIR      where store.json and the log live\n    \
         KONYHA_LOG           log filter, e.g. konyhanyelv=debug\n    \
         KONYHA_TIMEOUT_SECS  request timeout in seconds\n",
        VERSION
    )
}

pub fn handle_version_command() -> ! {
    println!("konyhanyelv {}", VERSION);
    std::process::exit(0)
}

pub fn handle_help_command() -> ! {
    print!("{}", usage());
    std::process::exit(0)
}
