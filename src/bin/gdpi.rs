use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use gdp_insights::format::{NOT_AVAILABLE, format_billions, format_number, format_percent};
use gdp_insights::models::{CountryMetrics, CountryWinner, YearValue};
use gdp_insights::{AnalysisConfig, ContinentResolver, Dataset, MetricFamily};
use gdp_insights::{analysis, prepare, storage};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "gdpi",
    version,
    about = "Summarize per-country GDP series: extremes, growth, world totals, continents"
)]
struct Cli {
    #[command(flatten)]
    opts: CommonArgs,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Wide GDP table: a Country column plus one column per year (billions of USD).
    #[arg(long)]
    data: PathBuf,
    /// Population table to derive per-capita columns from.
    #[arg(long)]
    population: Option<PathBuf>,
    /// Metric family to analyze.
    #[arg(long, value_enum, default_value_t = Family::Total)]
    family: Family,
    /// Year answering "actual" queries.
    #[arg(long, default_value_t = AnalysisConfig::DEFAULT_REFERENCE_YEAR)]
    reference_year: i32,
    /// Use the latest year present in the data instead of --reference-year.
    #[arg(long, default_value_t = false)]
    latest: bool,
    /// Locale for number formatting (en, de, fr, es, it, pt, nl).
    #[arg(long, default_value = "en")]
    locale: String,
    /// Save the result to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Metrics for a single country.
    Country { name: String },
    /// Category winners across countries.
    Compare {
        /// Country names separated by comma or semicolon.
        countries: String,
    },
    /// World totals and growth.
    World,
    /// Average growth per continent for a year.
    Continents {
        #[arg(long, default_value_t = AnalysisConfig::DEFAULT_REFERENCE_YEAR)]
        year: i32,
    },
    /// Largest economies at the reference year plus "Others".
    Share {
        #[arg(long, default_value_t = 5)]
        top: usize,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Family {
    Total,
    PerCapita,
}

impl From<Family> for MetricFamily {
    fn from(f: Family) -> Self {
        match f {
            Family::Total => MetricFamily::Total,
            Family::PerCapita => MetricFamily::PerCapita,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Serialize)]
struct WorldRow {
    year: i32,
    total: f64,
    growth_percent: Option<f64>,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

fn out_format(opts: &CommonArgs, path: &Path) -> Result<OutFormat> {
    if let Some(f) = opts.format {
        return Ok(f);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("json")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Ok(OutFormat::Csv),
        "json" => Ok(OutFormat::Json),
        other => bail!("unsupported format: {}", other),
    }
}

/// Save `value` as JSON, or `rows` as CSV when a flat form exists.
fn save<T: Serialize, R: Serialize>(opts: &CommonArgs, value: &T, rows: Option<&[R]>) -> Result<()> {
    let Some(path) = opts.out.as_ref() else {
        return Ok(());
    };
    match (out_format(opts, path)?, rows) {
        (OutFormat::Json, _) => storage::save_json(value, path)?,
        (OutFormat::Csv, Some(rows)) => storage::save_csv(rows, path)?,
        (OutFormat::Csv, None) => bail!("csv output is not available for this command, use json"),
    }
    eprintln!("Saved result to {}", path.display());
    Ok(())
}

fn fmt_amount(family: MetricFamily, v: f64, locale: &str) -> String {
    match family {
        MetricFamily::Total => format_billions(v, 2, locale),
        MetricFamily::PerCapita => format!("{} USD", format_number(v, 2, locale)),
    }
}

fn fmt_year_value(family: MetricFamily, yv: &YearValue, locale: &str) -> String {
    format!("{} ({})", fmt_amount(family, yv.value, locale), yv.year)
}

fn print_metrics(m: &CountryMetrics, reference_year: i32, locale: &str) {
    println!("  actual ({}): {}", reference_year, fmt_amount(m.family, m.actual, locale));
    println!("  max: {}", fmt_year_value(m.family, &m.max, locale));
    println!("  min: {}", fmt_year_value(m.family, &m.min, locale));
    println!("  avg growth: {}", format_percent(m.avg_growth_percent, locale));
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let opts = &cli.opts;

    let mut data: Dataset = storage::load_dataset_csv(&opts.data)?;
    if let Some(pop_path) = opts.population.as_ref() {
        let population = storage::load_population_csv(pop_path)?;
        data = prepare::merge_population(&data, &population);
    }
    let family = MetricFamily::from(opts.family);
    let config = if opts.latest {
        AnalysisConfig::latest_available(&data, family).unwrap_or_default()
    } else {
        AnalysisConfig::with_reference_year(opts.reference_year)
    };
    let locale = opts.locale.as_str();

    match &cli.cmd {
        Command::Country { name } => {
            match analysis::analyze_country(&data, name, family, &config) {
                Ok(metrics) => {
                    println!("{} • {}", name, family);
                    print_metrics(&metrics, config.reference_year, locale);
                    let winner = CountryWinner { country: name.clone(), metrics };
                    save::<_, YearValue>(opts, &winner, None)?;
                }
                Err(e) => {
                    log::warn!("{e}");
                    println!("{}: {}", name, NOT_AVAILABLE);
                }
            }
        }
        Command::Compare { countries } => {
            let list = parse_list(countries);
            match analysis::compare_countries(&data, &list, family, &config) {
                Ok(cmp) => {
                    let max = &cmp.overall_max_gdp;
                    let min = &cmp.overall_min_gdp;
                    println!(
                        "highest max: {}: {}",
                        max.country,
                        fmt_year_value(family, &max.metrics.max, locale)
                    );
                    println!(
                        "lowest min: {}: {}",
                        min.country,
                        fmt_year_value(family, &min.metrics.min, locale)
                    );
                    match &cmp.highest_growth {
                        Some(g) => println!(
                            "highest growth: {}: {}",
                            g.country,
                            format_percent(g.metrics.avg_growth_percent, locale)
                        ),
                        None => println!("highest growth: {}", NOT_AVAILABLE),
                    }
                    save::<_, YearValue>(opts, &cmp, None)?;
                }
                Err(e) => {
                    log::warn!("{e}");
                    println!("comparison: {}", NOT_AVAILABLE);
                }
            }
        }
        Command::World => match analysis::analyze_world(&data, family, &config) {
            Ok(world) => {
                println!("World • {}", family);
                println!("  actual ({}): {}", config.reference_year, fmt_amount(family, world.actual, locale));
                println!("  max: {}", fmt_year_value(family, &world.max, locale));
                println!("  min: {}", fmt_year_value(family, &world.min, locale));
                println!("  avg growth: {}", format_percent(world.avg_growth_percent, locale));
                for g in &world.world_growth_data {
                    println!("  {}: {}", g.year, format_percent(Some(g.value), locale));
                }
                let rows: Vec<WorldRow> = world
                    .world_total
                    .iter()
                    .map(|t| WorldRow {
                        year: t.year,
                        total: t.value,
                        growth_percent: world
                            .world_growth_data
                            .iter()
                            .find(|g| g.year == t.year)
                            .map(|g| g.value),
                    })
                    .collect();
                save(opts, &world, Some(rows.as_slice()))?;
            }
            Err(e) => {
                log::warn!("{e}");
                println!("World: {}", NOT_AVAILABLE);
            }
        },
        Command::Continents { year } => {
            let resolver = ContinentResolver::builtin();
            let growth = analysis::continent_growth_for(&data, family, *year, &resolver);
            if growth.is_empty() {
                println!("continents {}: {}", year, NOT_AVAILABLE);
            }
            for c in &growth {
                println!(
                    "{}: {} ({} countries)",
                    c.continent,
                    format_percent(Some(c.growth), locale),
                    c.countries
                );
            }
            save(opts, &growth, Some(growth.as_slice()))?;
        }
        Command::Share { top } => match analysis::top_share(&data, family, &config, *top) {
            Ok(slices) => {
                for s in &slices {
                    println!(
                        "{}: {} ({})",
                        s.label,
                        fmt_amount(family, s.value, locale),
                        format_percent(Some(s.percent), locale)
                    );
                }
                save(opts, &slices, Some(slices.as_slice()))?;
            }
            Err(e) => {
                log::warn!("{e}");
                println!("share: {}", NOT_AVAILABLE);
            }
        },
    }

    Ok(())
}
