use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use helpdesk::commands::{cmd_ls, cmd_session, cmd_show, cmd_stats};
use helpdesk::store::queries::VALID_TABS;
use helpdesk::{Config, Result, Tab, TicketStore};

#[derive(Parser)]
#[command(name = "helpdesk")]
#[command(about = "In-memory helpdesk ticket dashboard")]
#[command(version)]
struct Cli {
    /// Path to config file (default: $HELPDESK_CONFIG, then the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter for stderr output (e.g. debug, helpdesk=trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tickets under a status tab
    Ls {
        /// Tab: all, new, active, resolved
        #[arg(long, default_value = "all", value_parser = parse_tab)]
        tab: Tab,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show dashboard counters and category cards
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display a single ticket
    #[command(visible_alias = "s")]
    Show {
        /// Ticket ID (e.g. HD-001)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run an interactive session (the default)
    Session,
}

fn parse_tab(s: &str) -> std::result::Result<Tab, String> {
    s.parse()
        .map_err(|_| format!("Invalid tab. Must be one of: {}", VALID_TABS.join(", ")))
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Ls { tab, json } => cmd_ls(&TicketStore::from_config(&config)?, tab, json),
        Commands::Stats { json } => cmd_stats(&TicketStore::from_config(&config)?, json),
        Commands::Show { id, json } => cmd_show(&TicketStore::from_config(&config)?, &id, json),
        Commands::Session => cmd_session(&config),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
