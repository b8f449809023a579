use analytics::{AnalyticsEngine, ProfitReport};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::Table;
use configuration::Config;
use configuration::cli::ConfigArgs;
use core_types::{Month, ProfitTable};
use indicatif::{ProgressBar, ProgressStyle};
use ingest::{DirectorySource, IngestSummary, Loader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// The main entry point for the commodity profit analytics tool.
fn main() -> Result<()> {
    // PROFITS__* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref())?;

    let config = cli.config.load().context("Failed to load configuration")?;

    // Execute the appropriate command
    match cli.command {
        Commands::Report(args) => handle_report(args, &config),
        Commands::Query { query } => handle_query(query, &config),
        Commands::Validate => handle_validate(&config),
    }
}

fn init_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).context("Invalid --log-level filter")?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Daily commodity profit analytics over a twelve-month, 28-day trading calendar.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// Log filter (e.g. "debug", "ingest=debug"). Defaults to RUST_LOG, then "info".
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load every month and print the ten headline answers.
    Report(ReportArgs),

    /// Load every month and run a single query with raw arguments.
    Query {
        #[command(subcommand)]
        query: Query,
    },

    /// Load every month and report how many records were accepted or dropped.
    Validate,
}

#[derive(Parser)]
struct ReportArgs {
    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// The ten queries. Months are 0-based (0 = January), days are 1-based.
#[derive(Subcommand)]
enum Query {
    /// Commodity with the highest total in a month, as "<name> <total>".
    MostProfitableCommodity {
        #[arg(allow_negative_numbers = true)]
        month: i32,
    },
    /// Sum of all commodities on one day.
    TotalProfitOnDay {
        #[arg(allow_negative_numbers = true)]
        month: i32,
        #[arg(allow_negative_numbers = true)]
        day: i32,
    },
    /// Sum of one commodity over a day range, across all months.
    CommodityProfitInRange {
        commodity: String,
        #[arg(allow_negative_numbers = true)]
        from_day: i32,
        #[arg(allow_negative_numbers = true)]
        to_day: i32,
    },
    /// Most profitable day of a month.
    BestDay {
        #[arg(allow_negative_numbers = true)]
        month: i32,
    },
    /// Most profitable month for a commodity.
    BestMonth { commodity: String },
    /// Longest run of loss days for a commodity.
    LossStreak { commodity: String },
    /// Number of days a commodity made more than the threshold.
    DaysAbove {
        commodity: String,
        #[arg(allow_negative_numbers = true)]
        threshold: i64,
    },
    /// Largest change in daily total between adjacent days of a month.
    DailySwing {
        #[arg(allow_negative_numbers = true)]
        month: i32,
    },
    /// Which of two commodities made more over the year, and by how much.
    Compare { first: String, second: String },
    /// Most profitable 7-day window of a month.
    BestWeek {
        #[arg(allow_negative_numbers = true)]
        month: i32,
    },
}

// ==============================================================================
// Command Logic
// ==============================================================================

/// Builds the table from the configured data directory, showing per-month progress.
fn load_table(config: &Config) -> Result<(ProfitTable, IngestSummary)> {
    let source = DirectorySource::from_settings(&config.data);
    tracing::info!(directory = %source.directory().display(), "Loading month files.");

    let progress_bar = ProgressBar::new(Month::COUNT as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );

    let mut table = ProfitTable::new();
    let summary = Loader::new(source).load_all_with(&mut table, |month, result| {
        match result {
            Ok(_) => progress_bar.set_message(format!("{} loaded", month)),
            Err(_) => progress_bar.set_message(format!("{} skipped", month)),
        }
        progress_bar.inc(1);
    });
    progress_bar.finish_and_clear();

    Ok((table, summary))
}

fn handle_report(args: ReportArgs, config: &Config) -> Result<()> {
    let (table, _) = load_table(config)?;
    let engine = AnalyticsEngine::new(&table);
    let report = ProfitReport::build(&engine, &config.report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut output = Table::new();
    output.set_header(vec!["Query", "Result"]);
    for entry in &report.entries {
        output.add_row(vec![entry.label.clone(), entry.value.to_string()]);
    }
    println!("{output}");
    Ok(())
}

fn handle_query(query: Query, config: &Config) -> Result<()> {
    let (table, _) = load_table(config)?;
    let engine = AnalyticsEngine::new(&table);
    println!("{}", run_query(&engine, query));
    Ok(())
}

/// Runs one query and renders its answer, sentinels included, as printed text.
fn run_query(engine: &AnalyticsEngine, query: Query) -> String {
    match query {
        Query::MostProfitableCommodity { month } => engine.most_profitable_commodity_in_month(month),
        Query::TotalProfitOnDay { month, day } => engine.total_profit_on_day(month, day).to_string(),
        Query::CommodityProfitInRange {
            commodity,
            from_day,
            to_day,
        } => engine
            .commodity_profit_in_range(&commodity, from_day, to_day)
            .to_string(),
        Query::BestDay { month } => engine.best_day_of_month(month).to_string(),
        Query::BestMonth { commodity } => engine.best_month_for_commodity(&commodity),
        Query::LossStreak { commodity } => engine.consecutive_loss_days(&commodity).to_string(),
        Query::DaysAbove {
            commodity,
            threshold,
        } => engine.days_above_threshold(&commodity, threshold).to_string(),
        Query::DailySwing { month } => engine.biggest_daily_swing(month).to_string(),
        Query::Compare { first, second } => engine.compare_two_commodities(&first, &second),
        Query::BestWeek { month } => engine.best_week_of_month(month),
    }
}

fn handle_validate(config: &Config) -> Result<()> {
    let (_, summary) = load_table(config)?;
    println!("{}", summary_table(&summary));
    Ok(())
}

fn summary_table(summary: &IngestSummary) -> Table {
    let mut output = Table::new();
    output.set_header(vec!["Metric", "Value"]);
    output.add_row(vec!["Records accepted".to_string(), summary.accepted.to_string()]);
    output.add_row(vec!["Records dropped".to_string(), summary.rejected.to_string()]);
    output.add_row(vec![
        "Months loaded".to_string(),
        summary.months_loaded.len().to_string(),
    ]);
    let skipped: Vec<&str> = summary.months_skipped.iter().map(|m| m.name()).collect();
    output.add_row(vec![
        "Months skipped".to_string(),
        if skipped.is_empty() {
            "none".to_string()
        } else {
            skipped.join(", ")
        },
    ]);
    output
}
