//! gharfresh-funnel CLI binary
//!
//! Drives the storefront store headlessly: replays intents and prints the
//! resulting view. For library usage, see the `gharfresh_funnel` crate.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

use gharfresh_funnel::{FunnelConfig, Intent, Storefront, StorefrontView};

/// Replay funnel intents against the GharFresh storefront store.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct RootCli {
    /// Log level (error, warn, info, debug, trace).
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Apply intents in order, starting from the home route, and print the final view.
    Replay(ReplayArgs),
    /// Print the progress indicator labels.
    Labels(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    /// Funnel config (TOML). Defaults are used when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
struct ReplayArgs {
    #[command(flatten)]
    config: ConfigArgs,
    /// Print the final view as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
    /// Intents such as `enter`, `advance`, `adults+`, `zip=110001`, `toggle=VEG`.
    #[arg(value_name = "INTENT")]
    intents: Vec<String>,
}

fn main() -> Result<()> {
    let cli = RootCli::parse();

    let level = cli
        .log_level
        .parse::<LevelFilter>()
        .map_err(|_| anyhow!("invalid log level: {}", cli.log_level))?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        CliCommand::Replay(args) => run_replay(args),
        CliCommand::Labels(args) => run_labels(args),
    }
}

fn load_config(path: Option<&Path>) -> Result<FunnelConfig> {
    match path {
        Some(path) => FunnelConfig::try_load_from_path(path)
            .with_context(|| format!("failed to load config {}", path.display())),
        None => Ok(FunnelConfig::default()),
    }
}

fn run_replay(args: ReplayArgs) -> Result<()> {
    let config = load_config(args.config.config.as_deref())?;

    let intents = args
        .intents
        .iter()
        .map(|raw| raw.parse::<Intent>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut store = Storefront::new(config);
    for intent in intents {
        let label = intent.to_string();
        let effects = store.dispatch(intent);
        tracing::debug!(intent = %label, ?effects, "applied");
    }

    let view = store.view();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_summary(&view);
    }
    Ok(())
}

fn run_labels(args: ConfigArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    for (idx, label) in config.display_labels().iter().enumerate() {
        println!("{}. {}", idx + 1, label);
    }
    Ok(())
}

fn print_summary(view: &StorefrontView) {
    println!("route: {}", view.route.as_label());
    let Some(funnel) = &view.funnel else {
        return;
    };
    println!(
        "step: {}/{} ({})",
        funnel.current_step,
        funnel.last_step_index,
        funnel.step_kind.as_label()
    );
    println!("progress: {}%", funnel.progress_percent);
    println!("zip: {:?}", funnel.fields.zip_code);
    println!(
        "household: {} adults, {} kids",
        funnel.fields.adults_count, funnel.fields.kids_count
    );
    let prefs: Vec<&str> = funnel
        .fields
        .selected_preferences
        .iter()
        .map(|tag| tag.as_str())
        .collect();
    println!("preferences: [{}]", prefs.join(", "));
}
