use super::render::render;
use super::setup::{Cli, Commands};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use verdict::api::{ConfigAction, VerdictApi, VerdictPaths};
use verdict::config::{default_config_dir, OutputFormat, VerdictConfig};
use verdict::error::Result;

/// Environment variable holding an `EnvFilter` directive for logging.
const LOG_ENV: &str = "VERDICT_LOG";

struct AppContext {
    api: VerdictApi,
    format: OutputFormat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = init_context(&cli)?;

    let result = match cli.command {
        Commands::Resolve { vocabulary, values } => ctx.api.resolve(vocabulary, &values),
        Commands::Classify { codes } => ctx.api.classify(&codes),
        Commands::Normalize { platforms } => ctx.api.normalize(&platforms),
        Commands::Choices { vocabulary } => ctx.api.choices(vocabulary),
        Commands::Report { file } => match file {
            Some(path) => {
                debug!(path = %path.display(), "reading results");
                ctx.api.report(BufReader::new(File::open(path)?))?
            }
            None => ctx.api.report(io::stdin().lock())?,
        },
        Commands::Endpoint {
            hostname,
            dos,
            edr_id,
        } => ctx
            .api
            .register_endpoint(&hostname, &dos, edr_id.as_deref()),
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(key), None) => ConfigAction::ShowKey(key),
                (Some(key), Some(value)) => ConfigAction::Set(key, value),
            };
            ctx.api.config(action)?
        }
    };

    render(&result, ctx.format)
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let paths = VerdictPaths::new(default_config_dir()?);
    let config = paths.load_config().unwrap_or_default();
    init_logging(cli.verbose, &config);
    debug!(config_dir = %paths.config_dir.display(), "context ready");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        config.output
    };

    Ok(AppContext {
        api: VerdictApi::new(paths),
        format,
    })
}

/// `VERDICT_LOG` wins, then `--verbose`, then the configured level.
fn init_logging(verbose: bool, config: &VerdictConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(&config.log_level)
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
