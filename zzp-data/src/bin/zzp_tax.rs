use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use zzp_core::calculations::check_kor_status;
use zzp_core::{
    CalculationInput, CarParameters, MAX_INPUT_AMOUNT, RateTable, RepresentationMethod,
    TaxCalculator, TransactionSummary,
};
use zzp_data::report::{render_calculation, render_kor_status, render_summary};
use zzp_data::{BusinessProfile, TransactionLoader, handle_calculate_request};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Dutch income tax and VAT calculator for sole proprietors.
#[derive(Debug, Parser)]
#[command(name = "zzp-tax")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate income tax and VAT from yearly figures.
    Calculate(CalculateArgs),

    /// Summarise a transactions CSV and calculate tax from it.
    Summarize(SummarizeArgs),

    /// Check a yearly turnover against the small business scheme (KOR).
    Kor(KorArgs),

    /// Run a JSON calculate-tax request body and print the response.
    Request(RequestArgs),
}

/// Options shared by the subcommands that need a rate table.
#[derive(Debug, Args)]
struct ProfileArgs {
    /// TOML business profile with hours, starter history and car.
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Tax year; overrides the profile.
    #[arg(long)]
    year: Option<i32>,

    /// Print JSON instead of a table.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Args)]
struct CalculateArgs {
    /// Profit before entrepreneur deductions.
    #[arg(long, allow_hyphen_values = true)]
    gross_profit: Decimal,

    /// Hours worked in the business; overrides the profile.
    #[arg(long)]
    hours: Option<i64>,

    /// Claim startersaftrek regardless of the profile's history.
    #[arg(long, default_value_t = false)]
    starter: bool,

    /// Investments in business assets this year.
    #[arg(long, default_value_t = Decimal::ZERO)]
    investments: Decimal,

    /// Business meals, drinks and gifts.
    #[arg(long, default_value_t = Decimal::ZERO)]
    representation_costs: Decimal,

    /// `percentage` or `threshold`; overrides the profile.
    #[arg(long, value_parser = parse_representation_method)]
    representation_method: Option<RepresentationMethod>,

    /// Catalogue value of the business car; replaces the profile's car.
    #[arg(long)]
    car_catalog_value: Option<Decimal>,

    #[arg(long, default_value_t = false)]
    car_electric: bool,

    #[arg(long, default_value_t = false)]
    car_hydrogen_or_solar: bool,

    #[arg(long, default_value_t = 0)]
    car_private_km: i64,

    #[arg(long, default_value_t = Decimal::ZERO)]
    vat_on_sales: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    vat_on_expenses: Decimal,

    #[command(flatten)]
    common: ProfileArgs,
}

#[derive(Debug, Args)]
struct SummarizeArgs {
    /// Path to the categorised transactions CSV.
    #[arg(short, long)]
    file: PathBuf,

    /// Revenue for the year, excluding VAT.
    #[arg(long)]
    revenue: Decimal,

    #[arg(long, default_value_t = Decimal::ZERO)]
    vat_on_sales: Decimal,

    /// Hours worked in the business; overrides the profile.
    #[arg(long)]
    hours: Option<i64>,

    /// Claim startersaftrek regardless of the profile's history.
    #[arg(long, default_value_t = false)]
    starter: bool,

    #[command(flatten)]
    common: ProfileArgs,
}

#[derive(Debug, Args)]
struct KorArgs {
    /// Turnover for the calendar year.
    #[arg(long)]
    turnover: Decimal,

    /// The business is currently registered for KOR.
    #[arg(long, default_value_t = false)]
    opted_in: bool,

    #[arg(long, default_value_t = zzp_data::profile::DEFAULT_TAX_YEAR)]
    year: i32,

    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Args)]
struct RequestArgs {
    /// File holding the JSON request body.
    #[arg(short, long)]
    file: PathBuf,

    #[arg(long, default_value_t = zzp_data::profile::DEFAULT_TAX_YEAR)]
    year: i32,
}

fn parse_representation_method(s: &str) -> Result<RepresentationMethod, String> {
    RepresentationMethod::parse(s)
        .ok_or_else(|| format!("unknown representation method '{s}' (use percentage or threshold)"))
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Writes to stderr so `--json` output stays parseable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── helpers ─────────────────────────────────────────────────────────────────

fn load_profile(args: &ProfileArgs) -> Result<BusinessProfile> {
    let mut profile = match &args.profile {
        Some(path) => BusinessProfile::load(path)
            .with_context(|| format!("Failed to load profile: {}", path.display()))?,
        None => BusinessProfile::default(),
    };
    if let Some(year) = args.year {
        profile.tax_year = year;
    }
    Ok(profile)
}

fn rates_for_year(year: i32) -> Result<&'static RateTable> {
    RateTable::for_year(year).with_context(|| {
        format!(
            "No rate table for tax year {year} (supported: {:?})",
            RateTable::supported_years()
        )
    })
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("Failed to serialise output")?;
    println!("{text}");
    Ok(())
}

fn ensure_amounts_in_range(input: &CalculationInput) -> Result<()> {
    if let Some((field, amount)) = input.amount_out_of_range() {
        bail!("{field} of {amount} exceeds the limit of {MAX_INPUT_AMOUNT}");
    }
    Ok(())
}

// ─── subcommands ─────────────────────────────────────────────────────────────

fn run_calculate(args: CalculateArgs) -> Result<()> {
    let profile = load_profile(&args.common)?;
    let rates = profile.rates()?;

    let car = match args.car_catalog_value {
        Some(catalog_value) => Some(CarParameters {
            catalog_value,
            is_electric: args.car_electric,
            is_hydrogen_or_solar: args.car_hydrogen_or_solar,
            private_kilometers: args.car_private_km,
        }),
        None => profile.car,
    };

    let input = CalculationInput {
        gross_profit: args.gross_profit,
        hours_worked: args.hours.unwrap_or(profile.hours_worked),
        is_starter_eligible: args.starter || profile.is_starter_eligible(rates),
        yearly_investments: args.investments,
        representation_costs: args.representation_costs,
        representation_method: args
            .representation_method
            .unwrap_or(profile.representation_method),
        car,
        vat_on_sales: args.vat_on_sales,
        vat_on_expenses: args.vat_on_expenses,
    };
    debug!(?input, "calculation input");
    ensure_amounts_in_range(&input)?;

    let result = TaxCalculator::new(rates).calculate(&input);

    if args.common.json {
        print_json(&result.rounded())
    } else {
        print!("{}", render_calculation(rates.tax_year, &result));
        Ok(())
    }
}

fn run_summarize(args: SummarizeArgs) -> Result<()> {
    let profile = load_profile(&args.common)?;
    let rates = profile.rates()?;

    let transactions = TransactionLoader::load_from_file(rates, &args.file)
        .with_context(|| format!("Failed to load transactions: {}", args.file.display()))?;
    info!(count = transactions.len(), "loaded transactions");

    let summary = TransactionSummary::from_transactions(rates, &transactions);
    let input = CalculationInput {
        representation_method: profile.representation_method,
        car: profile.car,
        ..summary.calculation_input(
            args.revenue,
            args.vat_on_sales,
            args.hours.unwrap_or(profile.hours_worked),
            args.starter || profile.is_starter_eligible(rates),
        )
    };
    ensure_amounts_in_range(&input)?;
    let result = TaxCalculator::new(rates).calculate(&input);

    if args.common.json {
        print_json(&json!({ "summary": summary, "calculation": result.rounded() }))
    } else {
        print!("{}", render_summary(&summary));
        println!();
        print!("{}", render_calculation(rates.tax_year, &result));
        Ok(())
    }
}

fn run_kor(args: KorArgs) -> Result<()> {
    let rates = rates_for_year(args.year)?;
    let status = check_kor_status(rates, args.turnover, args.opted_in);

    if args.json {
        print_json(&status)
    } else {
        print!("{}", render_kor_status(&status));
        Ok(())
    }
}

fn read_request(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read: {}", path.display()))
}

fn run_request(args: RequestArgs) -> Result<()> {
    let rates = rates_for_year(args.year)?;
    let body = read_request(&args.file)?;

    let response = handle_calculate_request(rates, &body);

    println!("HTTP {}", response.status);
    print_json(&response.body)?;
    if !response.is_success() {
        bail!("request failed with status {}", response.status);
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Calculate(args) => run_calculate(args),
        Command::Summarize(args) => run_summarize(args),
        Command::Kor(args) => run_kor(args),
        Command::Request(args) => run_request(args),
    }
}
