use clap::{Parser, Subcommand, ValueEnum};
use eoq_calculator::io::{presets, reporting};
use eoq_calculator::{Config, DomainKind, EoqAnalysis, Result};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "eoq")]
#[command(about = "Economic Order Quantity calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Read settings from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Args, Clone, Default)]
struct InputArgs {
    /// Annual demand in units (D)
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    demand: Option<f64>,

    /// Fixed cost per order or production run (S)
    #[arg(short = 's', long, allow_negative_numbers = true)]
    ordering_cost: Option<f64>,

    /// Holding cost per unit per year (H)
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    holding_cost: Option<f64>,
}

#[derive(Copy, Clone, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the EOQ and cost breakdown (default)
    Compute {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Sample the total-cost curve as CSV
    Curve {
        #[command(flatten)]
        inputs: InputArgs,

        /// Number of evenly spaced samples
        #[arg(long)]
        samples: Option<usize>,

        /// Quantity range to plot
        #[arg(long, value_enum)]
        domain: Option<DomainKind>,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the built-in example scenarios
    Scenarios {
        /// Only this scenario
        name: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // 1. LOGGING
    if cli.verbose {
        eoq_calculator::logging::init_with_level("debug");
    } else {
        eoq_calculator::logging::init();
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 2. CONFIGURATION
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // 3. DISPATCH
    match cli.command {
        Some(Commands::Compute { inputs, format }) => cmd_compute(&config, &inputs, format),
        Some(Commands::Curve {
            inputs,
            samples,
            domain,
            output,
        }) => cmd_curve(&config, &inputs, samples, domain, output),
        Some(Commands::Scenarios { name }) => cmd_scenarios(&config, name),
        None => cmd_compute(&config, &InputArgs::default(), OutputFormat::Text),
    }
}

fn analyze(
    config: &Config,
    args: &InputArgs,
    samples: Option<usize>,
    domain: Option<DomainKind>,
) -> Result<EoqAnalysis> {
    let inputs = config.resolve_inputs(args.demand, args.ordering_cost, args.holding_cost)?;
    let analysis = config.calculator(samples, domain).analyze(&inputs)?;
    Ok(analysis)
}

fn cmd_compute(config: &Config, args: &InputArgs, format: OutputFormat) -> Result<()> {
    let analysis = analyze(config, args, None, None)?;
    match format {
        OutputFormat::Text => print!("{}", reporting::render_text(&analysis, &config.report)),
        OutputFormat::Json => println!("{}", reporting::render_json(&analysis)?),
    }
    Ok(())
}

fn cmd_curve(
    config: &Config,
    args: &InputArgs,
    samples: Option<usize>,
    domain: Option<DomainKind>,
    output: Option<PathBuf>,
) -> Result<()> {
    let analysis = analyze(config, args, samples, domain)?;
    let curve = &analysis.curve;

    let optimum = curve.optimum();
    tracing::info!(
        eoq = optimum.quantity,
        total_cost = optimum.total_cost,
        min = curve.domain().min,
        max = curve.domain().max,
        "cost curve minimum"
    );

    match output {
        Some(path) => {
            let rows = reporting::write_curve_file(&path, curve)?;
            eprintln!("Wrote {} samples to {}", rows, path.display());
        }
        None => {
            reporting::write_curve(std::io::stdout().lock(), curve)?;
        }
    }
    Ok(())
}

fn cmd_scenarios(config: &Config, name: Option<String>) -> Result<()> {
    let selected = match name {
        Some(name) => match presets::find(&name) {
            Some(preset) => vec![preset],
            None => {
                return Err(eoq_calculator::Error::Config(format!(
                    "unknown scenario '{}'",
                    name
                )))
            }
        },
        None => presets::all(),
    };

    let calculator = config.calculator(None, None);
    for preset in selected {
        println!("--- {} ({}) ---", preset.name, preset.description);
        let analysis = calculator.analyze(&preset.inputs)?;
        println!("{}", reporting::render_text(&analysis, &config.report));
    }
    Ok(())
}
