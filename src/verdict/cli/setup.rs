use clap::{Parser, Subcommand};
use std::path::PathBuf;
use verdict::api::VocabularyKind;

#[derive(Parser, Debug)]
#[command(name = "verdict", bin_name = "verdict", version)]
#[command(
    about = "Resolve security-test codes and classify test outcomes",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve values against a vocabulary (names are case-insensitive)
    #[command(alias = "r")]
    Resolve {
        /// Vocabulary: run-code, mode, permission, exit-code, state, control, audit-event, dos
        vocabulary: VocabularyKind,

        /// Names or values to resolve
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Classify exit codes into protection states
    #[command(alias = "c")]
    Classify {
        /// Exit codes, numeric or by name (e.g. 137, TIMED_OUT)
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        codes: Vec<String>,
    },

    /// Normalize <platform>-<arch> strings
    Normalize {
        /// Platform strings (e.g. linux-amd64, darwin-aarch64)
        #[arg(required = true, num_args = 1..)]
        platforms: Vec<String>,
    },

    /// List the values a user may choose for a vocabulary
    Choices {
        /// Vocabulary to list
        vocabulary: VocabularyKind,
    },

    /// Summarize probe results (<test-id>:<exit code> per line)
    Report {
        /// File to read (stdin when omitted)
        file: Option<PathBuf>,
    },

    /// Build an endpoint registration payload
    Endpoint {
        /// Endpoint hostname
        hostname: String,

        /// Platform string reported by the probe (e.g. linux-x86_64)
        dos: String,

        /// EDR identifier attached to the endpoint id
        #[arg(long)]
        edr_id: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (output, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_negative_value() {
        let cli = Cli::try_parse_from(["verdict", "resolve", "permission", "-5"]).unwrap();
        match cli.command {
            Commands::Resolve { vocabulary, values } => {
                assert_eq!(vocabulary, VocabularyKind::Permission);
                assert_eq!(values, ["-5"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["verdict", "classify", "137", "--json", "-v"]).unwrap();
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_unknown_vocabulary() {
        assert!(Cli::try_parse_from(["verdict", "choices", "colour"]).is_err());
    }

    #[test]
    fn endpoint_edr_id_is_optional() {
        let cli = Cli::try_parse_from(["verdict", "endpoint", "host", "linux-arm64"]).unwrap();
        match cli.command {
            Commands::Endpoint { edr_id, .. } => assert_eq!(edr_id, None),
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
