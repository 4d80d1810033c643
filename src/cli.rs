//! CLI definition and dispatch.

use clap::{Args, Parser, Subcommand};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

use crate::adapters::csv_adapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::synthetic_adapter::SyntheticAdapter;
use crate::domain::config_validation::{parse_base_prices, validate_generator_config, SECTION};
use crate::domain::error::FrameError;
use crate::domain::generator::GeneratorConfig;
use crate::domain::ohlcv;
use crate::domain::table::Table;
use crate::domain::window::WindowKind;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

pub const DEFAULT_TIMEFRAME: &str = "1h";
pub const DEFAULT_ROWS: usize = 200;

#[derive(Parser, Debug)]
#[command(name = "barframe", about = "Synthetic OHLCV tables and rolling aggregates")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Where the table comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(long)]
    pub symbol: String,
    #[arg(long)]
    pub timeframe: Option<String>,
    #[arg(short, long)]
    pub rows: Option<usize>,
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an OHLCV table and print it as CSV
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, conflicts_with = "tail")]
        head: Option<usize>,
        #[arg(long)]
        tail: Option<usize>,
    },
    /// Print a column next to its rolling aggregate as CSV
    Rolling {
        #[command(flatten)]
        source: SourceArgs,
        #[arg(long, default_value = "close")]
        column: String,
        #[arg(short, long)]
        window: usize,
        #[arg(short, long, default_value = "mean")]
        kind: WindowKind,
    },
    /// Print summary statistics for every column
    Describe {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Validate a generator configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Generate { source, head, tail } => run_generate(&source, head, tail),
        Command::Rolling {
            source,
            column,
            window,
            kind,
        } => run_rolling(&source, &column, window, kind),
        Command::Describe { source } => run_describe(&source),
        Command::Validate { config } => run_validate(&config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, FrameError> {
    info!("loading config from {}", path.display());
    FileConfigAdapter::from_file(path)
}

/// Validates the `[generator]` section and builds the generator settings,
/// filling unset keys with defaults.
pub fn build_generator_config(config: &dyn ConfigPort) -> Result<GeneratorConfig, FrameError> {
    validate_generator_config(config)?;

    let defaults = GeneratorConfig::default();
    let base_prices = match config.get_string(SECTION, "base_prices") {
        Some(raw) => parse_base_prices(&raw)?,
        None => defaults.base_prices.clone(),
    };

    Ok(GeneratorConfig {
        change_pct: config.get_double(SECTION, "change_pct", defaults.change_pct),
        volatility_min: config.get_double(SECTION, "volatility_min", defaults.volatility_min),
        volatility_max: config.get_double(SECTION, "volatility_max", defaults.volatility_max),
        volume_min: config.get_int(SECTION, "volume_min", defaults.volume_min),
        volume_max: config.get_int(SECTION, "volume_max", defaults.volume_max),
        precision: config.get_int(SECTION, "precision", defaults.precision as i64) as u32,
        default_price: config.get_double(SECTION, "default_price", defaults.default_price),
        base_prices,
    })
}

/// A data source plus the request to make of it.
pub struct Source {
    pub port: Box<dyn DataPort>,
    pub symbol: String,
    pub timeframe: String,
    pub rows: usize,
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("symbol", &self.symbol)
            .field("timeframe", &self.timeframe)
            .field("rows", &self.rows)
            .finish_non_exhaustive()
    }
}

impl Source {
    pub fn fetch(&self) -> Result<Table, FrameError> {
        info!(
            symbol = %self.symbol,
            timeframe = %self.timeframe,
            rows = self.rows,
            "fetching table"
        );
        self.port
            .fetch_table(&self.symbol, &self.timeframe, self.rows)
    }
}

/// Resolves command-line options against the optional config file.
/// Command-line values win over `[generator]` keys.
pub fn resolve_source(args: &SourceArgs) -> Result<Source, FrameError> {
    let file = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };

    let (config, timeframe, rows, seed) = match &file {
        Some(f) => (
            build_generator_config(f)?,
            f.get_string(SECTION, "timeframe"),
            Some(f.get_int(SECTION, "rows", DEFAULT_ROWS as i64) as usize),
            f.get_u64(SECTION, "seed"),
        ),
        None => (GeneratorConfig::default(), None, None, None),
    };

    let mut adapter = SyntheticAdapter::new(config);
    if let Some(seed) = args.seed.or(seed) {
        adapter = adapter.with_seed(seed);
    }

    Ok(Source {
        port: Box::new(adapter),
        symbol: args.symbol.clone(),
        timeframe: args
            .timeframe
            .clone()
            .or(timeframe)
            .unwrap_or_else(|| DEFAULT_TIMEFRAME.to_string()),
        rows: args.rows.or(rows).unwrap_or(DEFAULT_ROWS),
    })
}

fn run_generate(
    source: &SourceArgs,
    head: Option<usize>,
    tail: Option<usize>,
) -> Result<(), FrameError> {
    let table = resolve_source(source)?.fetch()?;
    let table = match (head, tail) {
        (Some(n), _) => table.head(n),
        (None, Some(n)) => table.tail(n),
        (None, None) => table,
    };
    csv_adapter::write_table(&table, io::stdout().lock())
}

/// The source column followed by its rolling aggregate, named
/// `<column>_<kind>_<window>`.
pub fn rolling_table(table: &Table, column: &str, window: usize, kind: WindowKind) -> Table {
    let source = table.get_column(column);
    let rolled = source.rolling(window, kind);

    let mut out = Table::new();
    out.set_column(column, source);
    out.set_column(format!("{column}_{kind}_{window}"), rolled);
    out
}

fn run_rolling(
    source: &SourceArgs,
    column: &str,
    window: usize,
    kind: WindowKind,
) -> Result<(), FrameError> {
    let table = resolve_source(source)?.fetch()?;
    if !table.has_column(column) {
        info!(column, "column not in table, output will be empty");
    }
    let out = rolling_table(&table, column, window, kind);
    csv_adapter::write_table(&out, io::stdout().lock())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub count: usize,
    pub missing: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub variance: f64,
}

/// Summary statistics per column, computed over non-missing values.
pub fn describe(table: &Table) -> Vec<ColumnSummary> {
    table
        .columns()
        .map(|c| {
            let clean = c.drop_missing();
            ColumnSummary {
                name: c.name().to_string(),
                count: clean.len(),
                missing: c.missing_count(),
                mean: clean.mean(),
                min: clean.min(),
                max: clean.max(),
                variance: clean.variance(),
            }
        })
        .collect()
}

fn run_describe(source: &SourceArgs) -> Result<(), FrameError> {
    let table = resolve_source(source)?.fetch()?;
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{:<10} {:>6} {:>7} {:>14} {:>14} {:>14} {:>14}",
        "column", "count", "missing", "mean", "min", "max", "variance"
    )?;
    for s in describe(&table) {
        writeln!(
            out,
            "{:<10} {:>6} {:>7} {:>14.5} {:>14.5} {:>14.5} {:>14.5}",
            s.name, s.count, s.missing, s.mean, s.min, s.max, s.variance
        )?;
    }
    if let Some(r) = ohlcv::range_summary(&table) {
        writeln!(
            out,
            "\n{} bars, mean typical price {:.5}, mean true range {:.5}",
            r.bars, r.mean_typical_price, r.mean_true_range
        )?;
    }
    Ok(())
}

fn run_validate(path: &PathBuf) -> Result<(), FrameError> {
    let adapter = load_config(path)?;
    validate_generator_config(&adapter)?;
    eprintln!("Config is valid.");
    Ok(())
}
