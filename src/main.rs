use std::path::PathBuf;

use anyhow::Result;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use india_gdp_engine::{
    analysis::{
        check_reconciliation, filter_snapshots, national_timeline, reconcile, sort_snapshots,
        GdpClock, SortKey,
    },
    config::ReconciliationConfig,
    io::writer_for_path,
    visualization::{
        print_clock, print_comparison_table, print_entity_detail, print_national_summary,
        print_national_timeline, print_reconciliation_table, print_snapshot_table,
        print_timeline_chart, print_timeline_table, print_tracker_chart,
    },
    Dataset, Engine, EngineConfig, ExchangeRate,
};

#[derive(Parser)]
#[command(
    name = "gdp-engine",
    about = "India GDP Engine - national and state GDP projections to 2047",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// National GDP, population, rank, growth and per-capita
    National {
        /// Year to show (fractional years allowed); omit for the full timeline
        #[arg(short, long)]
        year: Option<f64>,
    },

    /// All states and union territories for one year
    Snapshot {
        #[arg(short, long, default_value = "2024")]
        year: f64,

        /// Sort key: gdp, growth, per_capita, share, population, or name
        #[arg(short, long, default_value = "gdp")]
        sort: String,

        /// Sort ascending instead of descending
        #[arg(long)]
        asc: bool,

        /// Keep only entities whose name or code contains this text
        #[arg(long)]
        search: Option<String>,
    },

    /// Detail for one state or union territory
    State {
        /// Entity code, e.g. MH
        #[arg(short, long)]
        code: String,

        #[arg(short, long, default_value = "2024")]
        year: f64,

        /// Also show the year-by-year timeline
        #[arg(long)]
        timeline: bool,

        /// Also show a GDP trajectory chart
        #[arg(long)]
        chart: bool,
    },

    /// Entities past $1T and the closest contenders
    Tracker {
        #[arg(short, long, default_value = "2030")]
        year: f64,
    },

    /// Compare entities side by side
    Compare {
        /// Comma-separated entity codes, e.g. MH,KA,TN
        #[arg(short, long, value_delimiter = ',', required = true)]
        codes: Vec<String>,

        #[arg(short, long, default_value = "2024")]
        year: f64,
    },

    /// Running GDP estimate for the current (or given) calendar year
    Clock {
        /// Calendar year; defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,

        /// INR per USD to show rupee figures
        #[arg(long)]
        rate: Option<f64>,

        /// Fetch the live INR rate for rupee figures
        #[cfg(feature = "live-fx")]
        #[arg(long, conflicts_with = "rate")]
        fx: bool,
    },

    /// Resolve the live INR-per-USD exchange rate
    #[cfg(feature = "live-fx")]
    Fx {
        /// Keep refreshing at the configured interval until interrupted
        #[arg(long)]
        watch: bool,
    },

    /// Check that entity GDP sums track national GDP
    Reconcile {
        /// Relative tolerance (0.15 = 15%); overrides the config file
        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Exit with an error when any year exceeds the tolerance
        #[arg(long)]
        strict: bool,
    },

    /// Export a snapshot or an entity timeline to CSV, JSON or XLSX
    Export {
        /// Output file; the extension selects the format
        #[arg(short, long)]
        output: PathBuf,

        /// Export this entity's timeline instead of a snapshot
        #[arg(short, long)]
        code: Option<String>,

        /// Snapshot year
        #[arg(short, long, default_value = "2024")]
        year: f64,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn check_year(year: f64) -> Result<f64> {
    if !year.is_finite() {
        anyhow::bail!("Year must be a finite number, got {year}");
    }
    Ok(year)
}

fn load_config(path: Option<&PathBuf>) -> Result<EngineConfig> {
    match path {
        Some(p) => Ok(EngineConfig::load(p)?),
        None => Ok(EngineConfig::default()),
    }
}

#[cfg(feature = "live-fx")]
fn live_resolver(config: &EngineConfig) -> india_gdp_engine::RateResolver {
    use india_gdp_engine::fx::HttpFetcher;

    india_gdp_engine::RateResolver::new(std::sync::Arc::new(HttpFetcher::new()), &config.fx)
}

#[cfg(feature = "live-fx")]
fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

#[cfg(feature = "live-fx")]
fn resolve_live_rate(config: &EngineConfig) -> Result<ExchangeRate> {
    Ok(runtime()?.block_on(live_resolver(config).resolve()))
}

#[cfg(feature = "live-fx")]
fn watch_live_rate(config: &EngineConfig) -> Result<()> {
    use india_gdp_engine::{visualization::print_exchange_rate, RateCache};

    let cache = std::sync::Arc::new(RateCache::new(live_resolver(config)));
    tracing::info!(
        interval_secs = config.fx.refresh_interval_secs,
        "watching exchange rate"
    );
    runtime()?.block_on(async move {
        cache
            .spawn_configured_refresh(print_exchange_rate)
            .await
    })?;
    Ok(())
}

/// Settings for a reconciliation run, with an optional CLI tolerance override.
fn reconciliation_settings(
    config: &EngineConfig,
    tolerance: Option<f64>,
    strict: bool,
) -> Result<ReconciliationConfig> {
    let settings = ReconciliationConfig {
        tolerance: tolerance.unwrap_or(config.reconciliation.tolerance),
        strict: strict || config.reconciliation.strict,
        ..config.reconciliation.clone()
    };
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let data = Dataset::builtin()?;
    let engine = Engine::new(&data);

    let on_demand = matches!(cli.command, Commands::Reconcile { .. });
    if config.reconciliation.check_on_load && !on_demand {
        let settings = &config.reconciliation;
        check_reconciliation(&data, settings.tolerance, settings.strict)?;
    }

    match cli.command {
        Commands::National { year } => match year {
            Some(y) => print_national_summary(&engine.national(check_year(y)?)),
            None => print_national_timeline(&national_timeline(data.national())),
        },

        Commands::Snapshot {
            year,
            sort,
            asc,
            search,
        } => {
            let year = check_year(year)?;
            let key: SortKey = sort.parse()?;
            let mut rows = engine.all_snapshots(year);
            if let Some(q) = search {
                rows = filter_snapshots(rows, &q);
            }
            sort_snapshots(&mut rows, key, asc);
            print_snapshot_table(&rows, year);
        }

        Commands::State {
            code,
            year,
            timeline,
            chart,
        } => {
            let year = check_year(year)?;
            let snapshot = engine.snapshot(&code, year)?;
            print_entity_detail(&snapshot, engine.trillion_year(&code)?);
            if timeline || chart {
                let points = engine.timeline(&code)?;
                if timeline {
                    print_timeline_table(&snapshot.name, &points);
                }
                if chart {
                    print_timeline_chart(&snapshot.name, &points);
                }
            }
        }

        Commands::Tracker { year } => {
            print_tracker_chart(&engine.tracker(check_year(year)?));
        }

        Commands::Compare { codes, year } => {
            let year = check_year(year)?;
            let codes: Vec<String> = codes
                .into_iter()
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .collect();
            print_comparison_table(&engine.compare(&codes, year)?, year);
        }

        #[cfg(feature = "live-fx")]
        Commands::Clock { year, rate, fx } => {
            let clock = build_clock(&data, year);
            let rate = if fx {
                Some(resolve_live_rate(&config)?)
            } else {
                manual_rate(rate)?
            };
            print_clock(&clock, rate.as_ref());
        }

        #[cfg(not(feature = "live-fx"))]
        Commands::Clock { year, rate } => {
            let clock = build_clock(&data, year);
            print_clock(&clock, manual_rate(rate)?.as_ref());
        }

        #[cfg(feature = "live-fx")]
        Commands::Fx { watch } => {
            if watch {
                watch_live_rate(&config)?;
            } else {
                let rate = resolve_live_rate(&config)?;
                india_gdp_engine::visualization::print_exchange_rate(&rate);
            }
        }

        Commands::Reconcile { tolerance, strict } => {
            let settings = reconciliation_settings(&config, tolerance, strict)?;
            let report = reconcile(&data, settings.tolerance);
            print_reconciliation_table(&report);
            report.enforce(settings.strict)?;
        }

        Commands::Export {
            output,
            code,
            year,
            pretty,
        } => {
            let writer = writer_for_path(&output, pretty)?;
            match code {
                Some(code) => {
                    let entity = data.require_entity(&code)?;
                    let points = engine.timeline(&code)?;
                    writer.write_timeline(&entity.code, &points, &output)?;
                    println!(
                        "{} timeline for {} to {}",
                        "Exported".green(),
                        entity,
                        output.display()
                    );
                }
                None => {
                    let year = check_year(year)?;
                    let rows = engine.all_snapshots(year);
                    writer.write_snapshot(&rows, year, &output)?;
                    println!(
                        "{} {} entities for {year} to {}",
                        "Exported".green(),
                        rows.len(),
                        output.display()
                    );
                }
            }
        }
    }

    Ok(())
}

fn build_clock(data: &Dataset, year: Option<i32>) -> GdpClock {
    let now = Utc::now();
    match year {
        Some(y) if y != now.year() => GdpClock::for_year(data.national(), y, 1.0),
        _ => GdpClock::at(data.national(), now),
    }
}

fn manual_rate(rate: Option<f64>) -> Result<Option<ExchangeRate>> {
    match rate {
        Some(r) if r.is_finite() && r > 0.0 => Ok(Some(ExchangeRate {
            rate: r,
            source: "manual".to_string(),
            is_live: false,
            fetched_at: Utc::now(),
        })),
        Some(r) => anyhow::bail!("Exchange rate must be positive, got {r}"),
        None => Ok(None),
    }
}
