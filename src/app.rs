//! Application orchestrator.
//! Loads/merges config, initializes logging, installs the Ctrl-C handler,
//! validates the root, and runs one normalization pass.

use anyhow::{Result, bail};
use tracing::{debug, error, info};

use fix_filenames::cli::Args;
use fix_filenames::config::{ConfigSource, locate_config};
use fix_filenames::output as out;
use fix_filenames::{Config, FixNamesError, LogLevel, Renamer, load_config, shutdown};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config_location(&args);
        return Ok(());
    }

    if let Some(raw) = args.log_level.as_deref()
        && !args.debug
        && LogLevel::parse(raw).is_none()
    {
        out::print_error(&format!("Unknown log level '{raw}'; use quiet, normal, info or debug"));
        bail!("invalid log level: '{raw}'");
    }

    // File values first, CLI/env wins.
    let mut cfg = match load_config(args.config.as_deref()) {
        Ok(Some((_, cfg))) => cfg,
        Ok(None) => Config::default(),
        Err(e) => {
            out::print_error(&format!("Failed to load config: {e:#}"));
            return Err(e);
        }
    };
    args.apply_overrides(&mut cfg);

    init_tracing(&cfg.log_level, args.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    ctrlc::set_handler(|| {
        shutdown::request();
        out::print_warn("Received interrupt; finishing current entry and stopping...");
    })?;

    debug!("Starting fix_filenames: {:?}", args);

    let result = (|| -> Result<(), FixNamesError> {
        let root = cfg.validate()?;
        let renamer = Renamer::from_config(&cfg)?;

        out::print_user("Fixing filenames safely...");
        let summary = renamer.process()?;
        out::print_user("Done fixing filenames.");

        info!(
            root = %root.display(),
            renamed = summary.renamed,
            conflicts = summary.conflicts,
            unchanged = summary.unchanged,
            "Run completed"
        );
        if summary.failed > 0 {
            return Err(FixNamesError::EntriesFailed {
                failed: summary.failed,
            });
        }
        Ok(())
    })();

    if let Err(e) = &result {
        error!(code = e.code(), kind = e.kind(), error = %e, "Run failed");
        out::print_error(&e.to_string());
    }
    result.map_err(Into::into)
}

fn print_config_location(args: &Args) {
    match locate_config(args.config.as_deref()) {
        Some(ConfigSource::Flag(p)) => {
            out::print_info(&format!("Using --config (explicit):\n  {}\n", p.display()));
        }
        Some(ConfigSource::Env(p)) => {
            out::print_info(&format!("Using FIX_FILENAMES_CONFIG (explicit):\n  {}\n", p.display()));
            out::print_info("To override, unset FIX_FILENAMES_CONFIG or pass --config.");
        }
        Some(ConfigSource::Default(p)) => {
            out::print_info(&format!("Default fix_filenames config path:\n  {}\n", p.display()));
            if p.exists() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info(
                    "No config file exists there. Example:\n\n<config>\n  <root>/path/to/tree</root>\n  <log_level>normal</log_level>\n  <max_suffix_attempts>10000</max_suffix_attempts>\n</config>\n",
                );
            }
        }
        None => {
            out::print_error("Could not determine a default config path");
        }
    }
}
