//! Brand cohort versus benchmark CLI tool.
//!
//! Usage: `cargo run --features cli --bin brandreturns -- <COMMAND>`
//! Example: `cargo run --features cli --bin brandreturns -- compare --start-year 2022`

use std::path::PathBuf;

use brandreturns::{
    feeds::{YahooPriceSource, YahooTickerSearch},
    model::{Study, resolve_brands},
    primitives::{ReturnFormula, WindowConvention},
    rankings::{TickerMap, read_brand_list, unique_brands, write_brand_list},
    report::{print_summary, write_report},
    settings::Settings,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Compare the stock returns of top-ranked brands against a market benchmark.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file; `brandreturns.toml` is used when present.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the cohort versus benchmark comparison and write the report.
    Compare(CompareArgs),
    /// Write the distinct brand names found in the ranking tables.
    UniqueBrands(UniqueBrandsArgs),
    /// Look up a listed ticker for every brand in a brand list.
    ResolveTickers(ResolveTickersArgs),
}

#[derive(Parser)]
struct CompareArgs {
    /// First ranking year.
    #[arg(long)]
    start_year: Option<i32>,

    /// Last ranking year.
    #[arg(long)]
    end_year: Option<i32>,

    /// Directory holding the yearly ranking tables.
    #[arg(long)]
    rankings_dir: Option<PathBuf>,

    /// `Brand,Ticker` lookup table.
    #[arg(long)]
    ticker_map: Option<PathBuf>,

    /// Directory the charts and report are written to.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Brands per cohort.
    #[arg(long)]
    cohort_size: Option<usize>,

    /// Months fetched per ranking year.
    #[arg(long, value_enum)]
    window: Option<WindowArg>,

    /// Monthly return formula.
    #[arg(long, value_enum)]
    formula: Option<FormulaArg>,
}

#[derive(Parser)]
struct UniqueBrandsArgs {
    /// Directory holding the yearly ranking tables.
    #[arg(long)]
    rankings_dir: Option<PathBuf>,

    /// Brand list to write.
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Parser)]
struct ResolveTickersArgs {
    /// Brand list to resolve.
    #[arg(long)]
    brands: Option<PathBuf>,

    /// `Brand,Ticker` table to write.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Milliseconds between search requests.
    #[arg(long)]
    pause_ms: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum WindowArg {
    /// January through December.
    CalendarYear,
    /// Prior December through December.
    PriorDecember,
}

impl From<WindowArg> for WindowConvention {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::CalendarYear => Self::CalendarYear,
            WindowArg::PriorDecember => Self::PriorDecember,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormulaArg {
    /// Adjusted close against the previous month's adjusted close.
    CloseToClose,
    /// Close against the same month's open.
    OpenToClose,
}

impl From<FormulaArg> for ReturnFormula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::CloseToClose => Self::CloseToClose,
            FormulaArg::OpenToClose => Self::OpenToClose,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Compare(args) => compare(args, settings).await,
        Commands::UniqueBrands(args) => collect_brands(args, &settings),
        Commands::ResolveTickers(args) => resolve_tickers(args, settings).await,
    }
}

async fn compare(args: CompareArgs, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = settings.study;
    if let Some(year) = args.start_year {
        config.start_year = year;
    }
    if let Some(year) = args.end_year {
        config.end_year = year;
    }
    if let Some(dir) = args.rankings_dir {
        config.rankings_dir = dir;
    }
    if let Some(path) = args.ticker_map {
        config.ticker_map = path;
    }
    if let Some(dir) = args.output {
        config.output_dir = dir;
    }
    if let Some(size) = args.cohort_size {
        config.cohort_size = size;
    }
    if let Some(window) = args.window {
        config.window = window.into();
    }
    if let Some(formula) = args.formula {
        config.formula = formula.into();
    }

    info!(
        start_year = config.start_year,
        end_year = config.end_year,
        cohort_size = config.cohort_size,
        window = %config.window,
        formula = %config.formula,
        "starting comparison"
    );

    let tickers = TickerMap::load(&config.ticker_map)?;
    let output_dir = config.output_dir.clone();
    let study = Study::new(config, tickers, YahooPriceSource::new()?)?;
    let result = study.run().await?;

    print_summary(&result);
    let files = write_report(&output_dir, &result)?;
    println!("Report written to {}", files.report.display());
    Ok(())
}

fn collect_brands(args: UniqueBrandsArgs, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let dir = args.rankings_dir.unwrap_or_else(|| settings.study.rankings_dir.clone());
    let output = args.output.unwrap_or_else(|| settings.lookup.brand_list.clone());

    let brands = unique_brands(&dir)?;
    write_brand_list(&brands, &output)?;
    println!("{} unique brands written to {}", brands.len(), output.display());
    Ok(())
}

async fn resolve_tickers(
    args: ResolveTickersArgs,
    settings: Settings,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = args.brands.unwrap_or_else(|| settings.lookup.brand_list.clone());
    let output = args.output.unwrap_or(settings.study.ticker_map);
    let mut lookup = settings.lookup;
    if let Some(pause_ms) = args.pause_ms {
        lookup.pause_ms = pause_ms;
    }

    let brands = read_brand_list(&input)?;
    info!(brands = brands.len(), path = %input.display(), "resolving tickers");

    let search = YahooTickerSearch::new()?;
    let resolved = match resolve_brands(&brands, &search, &lookup.allowlist(), lookup.pause()).await {
        Ok(resolved) => resolved,
        Err(err) => {
            TickerMap::write_csv(&err.resolved, &output)?;
            warn!(resolved = err.resolved.len(), path = %output.display(), "wrote partial ticker table");
            return Err(err.into());
        }
    };
    TickerMap::write_csv(&resolved, &output)?;

    let found = resolved.iter().filter(|(_, ticker)| ticker.is_some()).count();
    println!("{found} of {} brands resolved, written to {}", resolved.len(), output.display());
    Ok(())
}
