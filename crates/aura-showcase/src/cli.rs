#![forbid(unsafe_code)]

//! Command-line argument parsing for the showcase.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `AURA_SHOWCASE_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Aura Showcase: two rendering surfaces driven by one theme context

USAGE:
    aura-showcase [OPTIONS]

OPTIONS:
    --storage=KIND       State backend: 'file' (default) or 'memory'
    --state-file=PATH    Explicit state file path (implies --storage=file)
    --theme=KEY          Select a theme by storage key (e.g. neonNoir)
    --seed=N             Seed for the random-mix step (default: 7)
    --skip-random        Skip the random-mix step
    --help, -h           Show this help message
    --version, -V        Show version

ENVIRONMENT VARIABLES:
    AURA_SHOWCASE_STORAGE      Override --storage (file|memory)
    AURA_SHOWCASE_STATE_FILE   Override --state-file
    AURA_SHOWCASE_THEME        Override --theme
    AURA_SHOWCASE_SEED         Override --seed
    RUST_LOG                   Tracing filter (e.g. aura_runtime=debug)";

/// Parsed command-line options.
pub struct Opts {
    /// Storage backend: "file" or "memory".
    pub storage: String,
    /// Explicit state file path, if any.
    pub state_file: Option<String>,
    /// Theme key to select on startup, if any.
    pub theme: Option<String>,
    /// Seed for the random-mix step.
    pub seed: u64,
    /// Whether to skip the random-mix step.
    pub skip_random: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            storage: "file".into(),
            state_file: None,
            theme: None,
            seed: 7,
            skip_random: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("AURA_SHOWCASE_STORAGE") {
            opts.storage = val;
        }
        if let Ok(val) = env::var("AURA_SHOWCASE_STATE_FILE") {
            opts.state_file = Some(val);
        }
        if let Ok(val) = env::var("AURA_SHOWCASE_THEME") {
            opts.theme = Some(val);
        }
        if let Ok(val) = env::var("AURA_SHOWCASE_SEED")
            && let Ok(n) = val.parse()
        {
            opts.seed = n;
        }

        let args: Vec<String> = env::args().skip(1).collect();
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("aura-showcase {VERSION}");
                    process::exit(0);
                }
                "--skip-random" => {
                    opts.skip_random = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--storage=") {
                        opts.storage = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--state-file=") {
                        opts.state_file = Some(val.to_string());
                        opts.storage = "file".to_string();
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        opts.theme = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--seed=") {
                        match val.parse() {
                            Ok(n) => opts.seed = n,
                            Err(_) => {
                                eprintln!("Invalid --seed value: {val}");
                                process::exit(1);
                            }
                        }
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
            i += 1;
        }

        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_opts() {
        let opts = Opts::default();
        assert_eq!(opts.storage, "file");
        assert_eq!(opts.state_file, None);
        assert_eq!(opts.theme, None);
        assert_eq!(opts.seed, 7);
        assert!(!opts.skip_random);
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_mentions_every_flag() {
        for flag in ["--storage", "--state-file", "--theme", "--seed", "--skip-random"] {
            assert!(HELP_TEXT.contains(flag), "help missing {flag}");
        }
    }
}
