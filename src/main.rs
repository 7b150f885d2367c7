use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxpath::cli::convert::ConvertArgs;
use fxpath::core::RateEdge;
use fxpath::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between two currencies
    Convert {
        /// Source currency code, e.g. USD
        from: String,
        /// Target currency code, e.g. EUR
        to: String,
        /// Amount in the source currency
        amount: f64,
        /// Extra rate to apply before converting (repeatable)
        #[arg(long = "rate", value_name = "FROM:TO:RATE")]
        rates: Vec<RateEdge>,
        /// Ignore configured rates, use only --rate values
        #[arg(long)]
        clear: bool,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List configured rates
    Rates {
        /// Print the rates as JSON
        #[arg(long)]
        json: bool,
    },
}

impl From<Commands> for fxpath::AppCommand {
    fn from(cmd: Commands) -> fxpath::AppCommand {
        match cmd {
            Commands::Convert {
                from,
                to,
                amount,
                rates,
                clear,
                json,
            } => fxpath::AppCommand::Convert(ConvertArgs {
                from,
                to,
                amount,
                rates,
                clear,
                json,
            }),
            Commands::Rates { json } => fxpath::AppCommand::Rates { json },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxpath::cli::setup::setup(),
        Some(cmd) => fxpath::run_command(cmd.into(), cli.config_path.as_deref())
            .map(|output| println!("{output}")),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
