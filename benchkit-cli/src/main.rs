//! BenchKit CLI - electronics bench calculators and reference lookups from the command line.

use anyhow::Context;
use benchkit::calc::{LedInput, TimerMode};
use benchkit::reference::{IcRecord, LibraryFilter, LibraryTab};
use benchkit::resistor::{encode, BandColor, BandMode, ResistorEncoding};
use benchkit::units::{
    parse_capacitance_value, parse_frequency_value, parse_inductance_value,
    parse_resistance_value,
};
use benchkit::vision::ComponentAnalysis;
use benchkit::{
    calc, route_query, solve, CalcReport, Calculation, ComponentAnalyzer, DatasheetCatalog,
    ElectricalQuantities, GeminiClient, IcDatabase, IcLookup, ImagePayload, Quantity,
    ResistorBands, Settings, SolveOutcome, TutorialCatalog,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(name = "benchkit")]
#[command(about = "Electronics bench toolkit: resistor codes, circuit calculators, IC pinouts", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Settings file (JSON) for the vision service
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve Ohm's law for one quantity from any two others
    Ohms {
        /// Quantity to solve for (voltage, current, resistance, power or v/i/r/p)
        #[arg(long, value_name = "QUANTITY")]
        solve: Quantity,

        /// Voltage in volts
        #[arg(long, default_value = "")]
        voltage: String,

        /// Current in amps
        #[arg(long, default_value = "")]
        current: String,

        /// Resistance in ohms
        #[arg(long, default_value = "")]
        resistance: String,

        /// Power in watts
        #[arg(long, default_value = "")]
        power: String,
    },

    /// Total resistance of resistors in series
    Series {
        /// Resistor values (e.g. 220, 4k7, 1M)
        #[arg(value_name = "R", required = true)]
        values: Vec<String>,
    },

    /// Equivalent resistance of resistors in parallel
    Parallel {
        /// Resistor values (e.g. 220, 4k7, 1M)
        #[arg(value_name = "R", required = true)]
        values: Vec<String>,
    },

    /// Series resistor for an LED
    Led {
        /// Supply voltage in volts
        #[arg(long, default_value_t = 5.0)]
        supply: f64,

        /// LED forward voltage in volts
        #[arg(long, default_value_t = 2.0)]
        forward: f64,

        /// LED current in milliamps
        #[arg(long, default_value_t = 20.0)]
        current_ma: f64,
    },

    /// Capacitive or inductive reactance
    Reactance {
        #[command(subcommand)]
        component: ReactanceCommand,
    },

    /// 555 timer timing
    Timer {
        #[command(subcommand)]
        mode: TimerCommand,
    },

    /// Resistor color codes
    Resistor {
        #[command(subcommand)]
        action: ResistorCommand,
    },

    /// Look up an IC pinout or search the IC database
    Ic {
        /// Part number or keyword (lists every IC when omitted)
        query: Option<String>,
    },

    /// Browse the datasheet catalog
    Datasheets {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = "all")]
        tab: LibraryTab,

        #[arg(long)]
        category: Option<String>,
    },

    /// Browse the tutorial catalog
    Tutorials {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = "all")]
        tab: LibraryTab,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        difficulty: Option<String>,
    },

    /// Show which tool a search query leads to
    Route {
        query: String,
    },

    /// Identify a component from a photo (needs a Gemini API key)
    Identify {
        /// Image file (jpg, png, webp)
        #[arg(value_name = "IMAGE")]
        image: PathBuf,

        /// Read resistor bands instead of identifying the component
        #[arg(long)]
        resistor: bool,
    },
}

#[derive(Subcommand)]
enum ReactanceCommand {
    /// Xc = 1 / (2πfC)
    Capacitor {
        /// Frequency (e.g. 1kHz)
        #[arg(long)]
        frequency: String,
        /// Capacitance (e.g. 100nF)
        #[arg(long)]
        value: String,
    },
    /// XL = 2πfL
    Inductor {
        /// Frequency (e.g. 1kHz)
        #[arg(long)]
        frequency: String,
        /// Inductance (e.g. 10mH)
        #[arg(long)]
        value: String,
    },
}

#[derive(Subcommand)]
enum TimerCommand {
    /// Free-running oscillator
    Astable {
        #[arg(long)]
        r1: String,
        #[arg(long)]
        r2: String,
        #[arg(long)]
        c: String,
    },
    /// One-shot pulse
    Monostable {
        #[arg(long)]
        r: String,
        #[arg(long)]
        c: String,
    },
}

#[derive(Subcommand)]
enum ResistorCommand {
    /// Decode 4 or 5 band colors into a value
    Decode {
        /// Band colors in order (e.g. brown black red gold)
        #[arg(value_name = "COLOR", num_args = 4..=5, required = true)]
        colors: Vec<BandColor>,
    },
    /// Find the band colors for a value
    Encode {
        /// Resistance (e.g. 4k7, 220, 1M)
        value: String,

        /// Use 5 bands (3 significant digits)
        #[arg(long)]
        five_band: bool,

        /// Tolerance in percent (defaults to 5 for 4-band, 1 for 5-band)
        #[arg(long)]
        tolerance: Option<f64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let format = cli.format;
    match cli.command {
        Commands::Ohms {
            solve: target,
            voltage,
            current,
            resistance,
            power,
        } => {
            let known = ElectricalQuantities::from_inputs(&voltage, &current, &resistance, &power);
            handle_ohms(target, &known, format)
        }
        Commands::Series { values } => {
            let values = parse_resistor_args(&values);
            handle_calculation(Calculation::ResistorSeries(values), format)
        }
        Commands::Parallel { values } => {
            let values = parse_resistor_args(&values);
            handle_calculation(Calculation::ResistorParallel(values), format)
        }
        Commands::Led {
            supply,
            forward,
            current_ma,
        } => handle_calculation(
            Calculation::LedResistor(LedInput {
                supply_voltage: Some(supply),
                forward_voltage: Some(forward),
                current_ma: Some(current_ma),
            }),
            format,
        ),
        Commands::Reactance { component } => {
            let calculation = match component {
                ReactanceCommand::Capacitor { frequency, value } => {
                    Calculation::CapacitorReactance {
                        frequency: parse_frequency_value(&frequency),
                        capacitance: parse_capacitance_value(&value),
                    }
                }
                ReactanceCommand::Inductor { frequency, value } => {
                    Calculation::InductorReactance {
                        frequency: parse_frequency_value(&frequency),
                        inductance: parse_inductance_value(&value),
                    }
                }
            };
            handle_calculation(calculation, format)
        }
        Commands::Timer { mode } => {
            let mode = match mode {
                TimerCommand::Astable { r1, r2, c } => TimerMode::Astable {
                    r1: parse_resistance_value(&r1),
                    r2: parse_resistance_value(&r2),
                    capacitance: parse_capacitance_value(&c),
                },
                TimerCommand::Monostable { r, c } => TimerMode::Monostable {
                    resistance: parse_resistance_value(&r),
                    capacitance: parse_capacitance_value(&c),
                },
            };
            handle_calculation(Calculation::Timer555(mode), format)
        }
        Commands::Resistor { action } => match action {
            ResistorCommand::Decode { colors } => handle_decode(&colors, format),
            ResistorCommand::Encode {
                value,
                five_band,
                tolerance,
            } => handle_encode(&value, five_band, tolerance, format),
        },
        Commands::Ic { query } => handle_ic(query.as_deref(), format),
        Commands::Datasheets {
            query,
            tab,
            category,
        } => {
            let mut filter = LibraryFilter::default().query(query).tab(tab);
            filter.category = category;
            handle_datasheets(&filter, format)
        }
        Commands::Tutorials {
            query,
            tab,
            category,
            difficulty,
        } => {
            let mut filter = LibraryFilter::default().query(query).tab(tab);
            filter.category = category;
            filter.difficulty = difficulty;
            handle_tutorials(&filter, format)
        }
        Commands::Route { query } => handle_route(&query, format),
        Commands::Identify { image, resistor } => {
            let settings = Settings::load(cli.config.as_deref())?;
            handle_identify(&settings, &image, resistor, format)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn parse_resistor_args(values: &[String]) -> Vec<f64> {
    for raw in values {
        if parse_resistance_value(raw).is_none() {
            tracing::warn!("ignoring unreadable resistor value '{}'", raw);
        }
    }
    calc::parse_resistances(values)
}

fn handle_ohms(
    target: Quantity,
    known: &ElectricalQuantities,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let solution = solve(target, known);

    if let OutputFormat::Json = format {
        print_json(&solution)?;
    } else {
        match solution.outcome {
            SolveOutcome::Solved { from, .. } => {
                println!("Solved {} from {} and {}", target, from.0, from.1);
                for q in Quantity::ALL {
                    let shown = solution.quantities.display(q);
                    if !shown.is_empty() {
                        println!("  {:<12} {} {}", format!("{}:", q.label()), shown, q.unit());
                    }
                }
            }
            SolveOutcome::Incomplete => {
                println!("Not enough known values to solve for {}", target);
            }
            SolveOutcome::DomainError { from } => {
                eprintln!(
                    "Error: {} is undefined for the given {} and {}",
                    target, from.0, from.1
                );
            }
        }
    }

    Ok(match solution.outcome {
        SolveOutcome::DomainError { .. } => 1,
        _ => 0,
    })
}

fn handle_calculation(calculation: Calculation, format: OutputFormat) -> anyhow::Result<i32> {
    let report = calculation.evaluate()?;
    output_report(&report, format)?;
    Ok(0)
}

fn output_report(report: &CalcReport, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Human => {
            println!("{}", report.kind.title());
            println!("{}", "─".repeat(40));
            for reading in &report.readings {
                println!("  {}", reading);
            }
            if let Some(ref note) = report.note {
                println!("  {}", note);
            }
            Ok(())
        }
    }
}

fn handle_decode(colors: &[BandColor], format: OutputFormat) -> anyhow::Result<i32> {
    let encoding = ResistorEncoding::from_colors(colors)?;
    let decoded = encoding.decode()?;

    match format {
        OutputFormat::Json => print_json(&decoded)?,
        OutputFormat::Human => {
            println!("{}", decoded);
            println!("  {} Ω, {} bands", decoded.ohms, encoding.mode().band_count());
        }
    }
    Ok(0)
}

fn handle_encode(
    value: &str,
    five_band: bool,
    tolerance: Option<f64>,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let ohms = parse_resistance_value(value)
        .with_context(|| format!("'{}' is not a resistance", value))?;
    let mode = if five_band {
        BandMode::FiveBand
    } else {
        BandMode::FourBand
    };
    let encoding = encode(ohms, mode, tolerance)?;

    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "ohms": ohms,
            "mode": mode,
            "colors": encoding.colors(),
        }))?,
        OutputFormat::Human => {
            let names: Vec<&str> = encoding.colors().iter().map(|c| c.name()).collect();
            println!("{}", names.join(" "));
        }
    }
    Ok(0)
}

fn print_ic(record: &IcRecord) {
    println!("{} ({})", record.name, record.id);
    println!("{}", record.description);
    println!("Packages: {}", record.packages.join(", "));
    println!("Pinout:");
    for (pin, info) in &record.pinout {
        println!("  {:>3}  {:<12} {}", pin, info.name, info.description);
    }
}

fn handle_ic(query: Option<&str>, format: OutputFormat) -> anyhow::Result<i32> {
    let db = IcDatabase::builtin();

    let Some(query) = query else {
        let all = db.search("");
        match format {
            OutputFormat::Json => print_json(&all)?,
            OutputFormat::Human => {
                for record in all {
                    println!("  {:<12} {}", record.id, record.name);
                }
                println!("\nCategories: {}", db.categories().join(", "));
            }
        }
        return Ok(0);
    };

    let lookup = match db.get(query) {
        Some(record) => IcLookup::Found(record),
        None => db.lookup(query),
    };

    match (lookup, format) {
        (IcLookup::Found(record), OutputFormat::Json) => print_json(record)?,
        (IcLookup::Found(record), OutputFormat::Human) => print_ic(record),
        (IcLookup::NotFound { .. }, fmt) => {
            let hits = db.search(query);
            match fmt {
                OutputFormat::Json => print_json(&hits)?,
                OutputFormat::Human if hits.is_empty() => {
                    println!("No ICs found matching \"{}\"", query);
                }
                OutputFormat::Human => {
                    for record in hits {
                        println!("  {:<12} {}", record.id, record.name);
                    }
                }
            }
        }
    }
    Ok(0)
}

fn handle_datasheets(filter: &LibraryFilter, format: OutputFormat) -> anyhow::Result<i32> {
    let catalog = DatasheetCatalog::builtin();
    let hits = catalog.filter(filter);

    match format {
        OutputFormat::Json => print_json(&hits)?,
        OutputFormat::Human if hits.is_empty() => println!("No datasheets found"),
        OutputFormat::Human => {
            for sheet in hits {
                let star = if catalog.is_starred(&sheet.id) { "*" } else { " " };
                println!(
                    "{} {:<30} {:<20} {:<16} {}",
                    star, sheet.name, sheet.manufacturer, sheet.category, sheet.file_size
                );
            }
        }
    }
    Ok(0)
}

fn handle_tutorials(filter: &LibraryFilter, format: OutputFormat) -> anyhow::Result<i32> {
    let catalog = TutorialCatalog::builtin();
    let hits = catalog.filter(filter);

    match format {
        OutputFormat::Json => print_json(&hits)?,
        OutputFormat::Human if hits.is_empty() => println!("No tutorials found"),
        OutputFormat::Human => {
            for tutorial in hits {
                let star = if catalog.is_starred(&tutorial.id) { "*" } else { " " };
                println!(
                    "{} {:<48} {:<14} {:<13} {}",
                    star, tutorial.title, tutorial.category, tutorial.difficulty, tutorial.duration
                );
            }
        }
    }
    Ok(0)
}

fn handle_route(query: &str, format: OutputFormat) -> anyhow::Result<i32> {
    let route = route_query(query);
    match format {
        OutputFormat::Json => print_json(&route)?,
        OutputFormat::Human => match route {
            Some(route) => println!("{}", route),
            None => println!("No matching tool"),
        },
    }
    Ok(0)
}

fn handle_identify(
    settings: &Settings,
    image: &Path,
    resistor: bool,
    format: OutputFormat,
) -> anyhow::Result<i32> {
    let payload = ImagePayload::from_path(image)
        .with_context(|| format!("reading {}", image.display()))?;
    let client = GeminiClient::from_settings(settings)?;
    let analyzer = ComponentAnalyzer::new(Arc::new(client));

    let runtime = tokio::runtime::Runtime::new()?;

    if resistor {
        let detected = runtime.block_on(analyzer.detect_bands(&payload, ResistorBands::default()))?;
        let Some(detected) = detected else {
            return Ok(1);
        };
        match format {
            OutputFormat::Json => print_json(&detected)?,
            OutputFormat::Human => {
                let names: Vec<&str> = detected.bands.active().iter().map(|c| c.name()).collect();
                println!("Bands: {}", names.join(" "));
                for (slot, name) in &detected.report.rejected {
                    println!("  ignored {}: {}", slot, name);
                }
                match detected.bands.decode() {
                    Ok(value) => println!("Value: {}", value),
                    Err(e) => println!("Value: unreadable ({})", e),
                }
            }
        }
        return Ok(0);
    }

    let analysis = runtime.block_on(analyzer.identify(&payload))?;
    let Some(analysis) = analysis else {
        return Ok(1);
    };
    match format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "analysis": analysis,
            "route": analysis.route(),
        }))?,
        OutputFormat::Human => {
            match &analysis {
                ComponentAnalysis::Identified(id) => {
                    println!("Type: {}", id.component_type);
                    if let Some(ref name) = id.name {
                        println!("Name: {}", name);
                    }
                    if let Some(ref description) = id.description {
                        println!("{}", description);
                    }
                }
                ComponentAnalysis::DescriptionOnly { description } => println!("{}", description),
            }
            if let Some(route) = analysis.route() {
                println!("Open: {}", route);
            }
        }
    }
    Ok(0)
}
