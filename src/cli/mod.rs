//! Demo command-line front-end over the budget and listing pipelines.

pub mod output;
pub mod render;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::{
    config::{Config, ConfigManager},
    currency::{AmountFormat, Visibility},
    errors::ConfigError,
    ledger::{
        linked_account, monthly_overview, BudgetProgress, LedgerState, LedgerSummary,
        LinkedAccount, SystemClock, TransactionDraft, TransactionKind,
    },
    listings::{KindFilter, Listing, ListingState, SearchStatus, SortDirection, SortKey},
    utils::build_info,
};

use output::OutputPreferences;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "budget_house",
    about = "Budget tracker and house search demo",
    version
)]
pub struct Cli {
    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show totals, spending by category and budget progress
    Summary(SummaryArgs),
    /// Record a transaction against the demo ledger
    Add(AddArgs),
    /// Filter and sort property listings
    Listings(ListingArgs),
    /// Print build information
    Version,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Mask every monetary figure
    #[arg(long, conflicts_with = "json")]
    pub hide_balances: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(long, value_enum, default_value_t = KindArg::Expense)]
    pub kind: KindArg,
    /// Amount as typed, validated by the ledger
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, conflicts_with = "json")]
    pub hide_balances: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListingArgs {
    /// Text matched against title and location
    #[arg(long, default_value = "")]
    pub query: String,
    #[arg(long)]
    pub max_price: Option<u32>,
    #[arg(long, default_value_t = 0.0)]
    pub min_area: f64,
    #[arg(long, value_enum, default_value_t = PropertyArg::All)]
    pub kind: PropertyArg,
    #[arg(long, value_enum, default_value_t = SortArg::Price)]
    pub sort: SortArg,
    #[arg(long, value_enum, default_value_t = OrderArg::Asc)]
    pub order: OrderArg,
    /// Flip the saved flag on a listing id (repeatable)
    #[arg(long = "toggle-saved")]
    pub toggle_saved: Vec<String>,
    /// Load the additional batch from the remote source first
    #[arg(long)]
    pub fetch_more: bool,
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PropertyArg {
    All,
    House,
    Apartment,
}

impl From<PropertyArg> for KindFilter {
    fn from(value: PropertyArg) -> Self {
        match value {
            PropertyArg::All => KindFilter::All,
            PropertyArg::House => KindFilter::House,
            PropertyArg::Apartment => KindFilter::Apartment,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SortArg {
    Price,
    Area,
    Rooms,
    Rating,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Price => SortKey::Price,
            SortArg::Area => SortKey::Area,
            SortArg::Rooms => SortKey::Rooms,
            SortArg::Rating => SortKey::Rating,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortDirection {
    fn from(value: OrderArg) -> Self {
        match value {
            OrderArg::Asc => SortDirection::Ascending,
            OrderArg::Desc => SortDirection::Descending,
        }
    }
}

#[derive(Serialize)]
struct BudgetReport<'a> {
    summary: LedgerSummary,
    progress: Vec<BudgetProgress>,
    linked_account: LinkedAccount,
    transactions: &'a [crate::ledger::Transaction],
}

#[derive(Serialize)]
struct ListingReport<'a> {
    total: usize,
    status: &'a SearchStatus,
    listings: &'a [Listing],
}

/// Parses process arguments and runs the selected command.
pub fn run_cli() -> Result<(), CliError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    output::set_preferences(OutputPreferences { plain: cli.plain });
    let manager = match &cli.config {
        Some(path) => ConfigManager::at(path),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;
    tracing::debug!(path = %manager.path().display(), "configuration loaded");

    match cli.command {
        Command::Summary(args) => {
            let state = LedgerState::demo();
            print_budget(&state, &config, args.hide_balances, args.json)
        }
        Command::Add(args) => run_add(args, &config),
        Command::Listings(args) => run_listings(args, &config),
        Command::Version => {
            let meta = build_info::current();
            println!("budget_house {}", meta.version);
            println!("commit:  {}", meta.git_hash);
            println!("built:   {}", meta.timestamp);
            println!("profile: {}", meta.profile);
            Ok(())
        }
    }
}

fn amount_format(config: &Config, hide_balances: bool) -> AmountFormat {
    let format = config.amount_format();
    if hide_balances {
        format.with_visibility(Visibility::Hidden)
    } else {
        format
    }
}

fn print_budget(
    state: &LedgerState,
    config: &Config,
    hide_balances: bool,
    json: bool,
) -> Result<(), CliError> {
    let summary = state.summary_with_default(&config.default_chart_color);
    if json {
        let report = BudgetReport {
            summary,
            progress: state.progress(),
            linked_account: linked_account(),
            transactions: &state.transactions,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    let format = amount_format(config, hide_balances);
    print!("{}", render::summary_text(&summary, &format));
    print!("{}", render::linked_account_text(&linked_account(), &format));
    println!();
    print!("{}", render::progress_text(&state.progress(), &format));
    println!();
    print!("{}", render::monthly_text(&monthly_overview(), &format));
    println!();
    print!("{}", render::transactions_text(state, &format));
    Ok(())
}

fn run_add(args: AddArgs, config: &Config) -> Result<(), CliError> {
    let draft = TransactionDraft::new(
        args.kind.into(),
        args.amount,
        args.category,
        args.description,
    );
    let state = LedgerState::demo();
    match state.apply(&draft, &SystemClock) {
        Ok(next) => {
            if !args.json {
                output::success(format!(
                    "Recorded {} in {}",
                    draft.description.trim(),
                    draft.category.trim()
                ));
            }
            print_budget(&next, config, args.hide_balances, args.json)
        }
        Err(err) => {
            // A rejected draft is not fatal; the ledger simply stays as it was.
            output::warning(format!("Transaction not recorded: {err}"));
            Ok(())
        }
    }
}

fn run_listings(args: ListingArgs, config: &Config) -> Result<(), CliError> {
    let criteria = config
        .initial_criteria()
        .with_query(args.query)
        .with_min_area(args.min_area)
        .with_kind(args.kind.into())
        .sorted_by(args.sort.into(), args.order.into());
    let criteria = match args.max_price {
        Some(max_price) => criteria.with_max_price(max_price),
        None => criteria,
    };

    let mut state = ListingState::demo().with_criteria(criteria);
    if args.fetch_more {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let source = config.listing_source();
        state = runtime.block_on(state.fetch_more(&source, &CancellationToken::new()));
    }
    for id in &args.toggle_saved {
        state = state.toggle_saved(id);
    }

    let view = state.view();
    if args.json {
        let report = ListingReport {
            total: state.listings.len(),
            status: &state.status,
            listings: &view,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::listings_text(&state, &view));
    }
    Ok(())
}
