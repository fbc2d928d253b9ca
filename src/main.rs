use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tierquote::catalog::Catalog;
use tierquote::config::{ConfigOverrides, QuoteConfig};
use tierquote::estimator::engine::estimate;
use tierquote::estimator::EstimationResult;
use tierquote::output::csv::quote_to_csv;
use tierquote::output::json::render_json;
use tierquote::output::markdown::render_markdown;
use tierquote::output::render;
use tierquote::output::table::{render_quote_table, render_summary_table};
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "tierquote", about = "Tiered budget quotation engine")]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[command(flatten)]
    economics: EconomicArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct EconomicArgs {
    #[arg(long = "project-name")]
    project_name: Option<String>,
    #[arg(long = "ai-efficiency")]
    ai_efficiency_pct: Option<f64>,
    #[arg(long = "markup")]
    markup_pct: Option<f64>,
    #[arg(long = "rate")]
    ai_hourly_rate: Option<f64>,
    #[arg(long = "pm-factor")]
    pm_factor_pct: Option<f64>,
    #[arg(long = "testing-factor")]
    testing_factor_pct: Option<f64>,
    #[arg(long = "contingency-factor")]
    contingency_factor_pct: Option<f64>,
}

impl From<EconomicArgs> for ConfigOverrides {
    fn from(value: EconomicArgs) -> Self {
        Self {
            project_name: value.project_name,
            ai_efficiency_pct: value.ai_efficiency_pct,
            markup_pct: value.markup_pct,
            ai_hourly_rate: value.ai_hourly_rate,
            pm_factor_pct: value.pm_factor_pct,
            testing_factor_pct: value.testing_factor_pct,
            contingency_factor_pct: value.contingency_factor_pct,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Estimate a catalog and print the quotation
    Estimate {
        catalog: PathBuf,
        /// Print only the executive summary table
        #[arg(long)]
        summary: bool,
    },
    /// Write the narrative, tabular and structured artifacts to disk
    Export {
        catalog: PathBuf,
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(QuoteConfig::default_path);
    let mut config = QuoteConfig::load(Some(&config_path))?;
    config.apply_overrides(cli.economics.clone().into());

    match &cli.command {
        Commands::Config { init, show } => {
            handle_config_command(*init, *show, &config, &config_path)
        }
        Commands::Estimate { catalog, summary } => {
            let catalog = load_catalog(catalog)?;
            let result = estimate(Some(&catalog), Some(&config));
            if *summary {
                println!("{}", render_summary_table(&result));
                return Ok(());
            }
            print_quote(&result, cli.output)
        }
        Commands::Export { catalog, dir } => {
            let catalog = load_catalog(catalog)?;
            let result = estimate(Some(&catalog), Some(&config));
            export_quote(&result, dir)
        }
    }
}

fn handle_config_command(
    init: bool,
    show: bool,
    config: &QuoteConfig,
    config_path: &Path,
) -> Result<()> {
    if init {
        QuoteConfig::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if show || !init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed reading catalog: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed parsing catalog JSON: {}", path.display()))
}

fn print_quote(result: &EstimationResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_quote_table(result)),
        OutputFormat::Json => println!("{}", render_json(result)?),
        OutputFormat::Csv => println!("{}", quote_to_csv(result)?),
        OutputFormat::Markdown => println!("{}", render_markdown(result)),
    }
    Ok(())
}

fn export_quote(result: &EstimationResult, dir: &Path) -> Result<()> {
    let quote = render(result)?;
    fs::create_dir_all(dir)
        .with_context(|| format!("failed creating output directory: {}", dir.display()))?;

    let narrative_path = dir.join(format!("{}.md", quote.filename));
    let tabular_path = dir.join(format!("{}.csv", quote.filename));
    let structured_path = dir.join(format!("{}.json", quote.filename));
    fs::write(&narrative_path, &quote.narrative)
        .with_context(|| format!("failed writing {}", narrative_path.display()))?;
    fs::write(&tabular_path, &quote.tabular)
        .with_context(|| format!("failed writing {}", tabular_path.display()))?;
    fs::write(&structured_path, render_json(&quote.structured)?)
        .with_context(|| format!("failed writing {}", structured_path.display()))?;

    info!("quotation artifacts written for {}", result.project_name);
    println!("Wrote {}.{{md,csv,json}} to {}", quote.filename, dir.display());
    Ok(())
}
