use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use session_summary::{Cli, Config, Reporter, Session, SummaryReporter};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info, Level};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Load config and apply CLI overrides
    let mut config = Config::load_from(cli.config.as_deref())?;
    cli.apply_to_config(&mut config);
    debug!(?config, "configuration");

    let reporter =
        SummaryReporter::new(config.report.clone()).context("Invalid report configuration")?;

    let mut session = Session::load(&cli.session)?;
    if cli.oldest_first {
        session = session.into_most_recent_first();
    }
    info!(
        category = %session.category.description,
        attempts = session.attempts.len(),
        "loaded session"
    );

    match &cli.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            reporter
                .write_report(&mut writer, &session.category, &session.attempts)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "wrote report");
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();

            if config.display.show_title {
                let title = session.title();
                if config.display.use_colors {
                    writeln!(writer, "{}", title.bold())?;
                } else {
                    writeln!(writer, "{}", title)?;
                }
                writeln!(writer)?;
            }

            reporter
                .write_report(&mut writer, &session.category, &session.attempts)
                .context("Failed to write report")?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
