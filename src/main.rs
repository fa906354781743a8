use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::audit::AuditLogger;
use expense_tracker::cli::{
    handle_add_command, handle_chart_command, handle_history_command, handle_list_command,
    handle_report_command, handle_summary_command, run_menu, AddArgs, ChartKind, ListArgs,
    Session,
};
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Track personal expenses from the terminal",
    long_about = "Records dated, categorized expenses in a CSV file and produces \
                  summaries, filtered listings, a text report, and text charts. \
                  Run without a subcommand for the interactive menu."
)]
struct Cli {
    /// Expense CSV file (overrides the configured location)
    #[arg(long, global = true, env = "EXPENSE_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List expenses, optionally filtered
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show totals, average, and per-category totals
    Summary,

    /// Print the expense report
    Report,

    /// Draw a text chart
    Chart {
        /// Chart to draw
        #[arg(value_enum)]
        kind: ChartKind,
        /// Number of histogram buckets
        #[arg(long)]
        bins: Option<usize>,
    },

    /// Show recent add attempts from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Launch the interactive menu
    Menu,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let file = cli.file;
    match cli.command {
        Some(Commands::Config) => print_config(&paths, &settings, file),
        Some(Commands::History { count }) => {
            handle_history_command(&AuditLogger::new(paths.audit_log()), count)?;
        }
        Some(Commands::Add(args)) => {
            let mut session = Session::open(&paths, settings, file)?;
            handle_add_command(&mut session, args)?;
        }
        Some(Commands::List(args)) => {
            handle_list_command(&Session::open(&paths, settings, file)?, args)?;
        }
        Some(Commands::Summary) => {
            handle_summary_command(&Session::open(&paths, settings, file)?)?;
        }
        Some(Commands::Report) => {
            handle_report_command(&Session::open(&paths, settings, file)?)?;
        }
        Some(Commands::Chart { kind, bins }) => {
            handle_chart_command(&Session::open(&paths, settings, file)?, kind, bins)?;
        }
        Some(Commands::Menu) | None => {
            let mut session = Session::open(&paths, settings, file)?;
            let stdin = io::stdin();
            run_menu(&mut session, &mut stdin.lock(), &mut io::stdout())?;
        }
    }

    Ok(())
}

fn print_config(paths: &ExpensePaths, settings: &Settings, file: Option<PathBuf>) {
    let expenses_file = settings.resolve_expenses_file(paths, file);

    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:  {}", paths.base_dir().display());
    println!("Settings file:   {}", paths.settings_file().display());
    println!("Expenses file:   {}", expenses_file.display());
    println!("Audit log:       {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Histogram bins:  {}", settings.histogram_bins);
    println!("  Chart width:     {}", settings.chart_width);
}
