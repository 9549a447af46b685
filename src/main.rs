use anyhow::Context;
use clap::Parser;
use clf2tab::{logging, Driver, InputSource, RunSummary};
use clf2tab_core::config::Config;
use clf2tab_core::timestamp::parse_fixed_offset;
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clf2tab",
    version,
    about = "Convert Common/Combined Log Format lines to tab-separated records"
)]
struct Cli {
    /// Input files, read in order. `-` or no files means stdin.
    inputs: Vec<String>,

    /// Accept every field without validation.
    #[arg(short, long)]
    permissive: bool,

    /// Host standard-time offset used by the timestamp normalizer, e.g. -0500.
    #[arg(long, value_name = "±HHMM", allow_hyphen_values = true)]
    host_offset: Option<String>,

    /// Configuration file (defaults to ~/.config/clf2tab/config.toml).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write debug logs to /tmp/clf2tab-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Write debug logs to this file instead.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli
        .log_file
        .clone()
        .or_else(|| cli.debug.then(|| PathBuf::from(logging::DEFAULT_LOG_FILE)))
    {
        logging::init_file_logging(&path)?;
    }

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if cli.permissive {
        config.validation.permissive = true;
    }
    if let Some(offset) = cli.host_offset {
        parse_fixed_offset(&offset).with_context(|| format!("--host-offset {offset}"))?;
        config.time.host_utc_offset = Some(offset);
    }

    let host_now = *chrono::Local::now().offset();
    let tokenizer = config.tokenizer(host_now)?;
    tracing::info!(
        permissive = tokenizer.validator().is_permissive(),
        host_offset = %tokenizer.normalizer().host_offset(),
        "configuration resolved"
    );

    let sources: Vec<InputSource> = if cli.inputs.is_empty() {
        vec![InputSource::Stdin]
    } else {
        cli.inputs.iter().map(|arg| InputSource::from_arg(arg)).collect()
    };

    let driver = Driver::new(tokenizer);
    let mut out = std::io::BufWriter::new(std::io::stdout().lock());
    let mut err = std::io::stderr().lock();
    let mut summary = RunSummary::default();

    for source in &sources {
        let lines = source.lines()?;
        let part = driver
            .run(lines, &mut out, &mut err)
            .with_context(|| format!("processing {source}"))?;
        tracing::debug!(%source, lines = part.lines, rejected = part.rejected, "input finished");
        summary += part;
    }
    out.flush()?;

    tracing::info!(
        lines = summary.lines,
        accepted = summary.accepted,
        rejected = summary.rejected,
        "run complete"
    );
    Ok(())
}
