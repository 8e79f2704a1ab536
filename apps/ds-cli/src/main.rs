use clap::{Parser, Subcommand, ValueEnum};
use ds_config::{ConfigResult, ScaleDocument};
use ds_core::Quantity;
use ds_core::units::{kgpm3, m, s};
use ds_scales::{ScaleSummary, ScaleSystemBuilder};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ds-cli")]
#[command(about = "dimscale CLI - derive nondimensionalization scales from base scales", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a unit-system document
    Validate {
        /// Path to the YAML or JSON document
        path: PathBuf,
    },
    /// List unit systems in a document
    List {
        /// Path to the YAML or JSON document
        path: PathBuf,
    },
    /// Show every scale and dimensionless constant of a unit system
    Show {
        /// Path to the YAML or JSON document
        path: PathBuf,
        /// Unit system ID
        system_id: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Convert a value between physical (SI) and nondimensional form
    Convert {
        /// Path to the YAML or JSON document
        path: PathBuf,
        /// Unit system ID
        system_id: String,
        /// Quantity name (e.g., length, velocity, traction)
        quantity: String,
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,
        /// Treat the value as nondimensional and convert it back to SI
        #[arg(long)]
        to_physical: bool,
    },
    /// Print an Earth-like unit system with explicit and free-fall time scales
    Demo,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Yaml,
    Json,
}

fn main() -> ConfigResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { path } => cmd_validate(&path),
        Commands::List { path } => cmd_list(&path),
        Commands::Show {
            path,
            system_id,
            format,
        } => cmd_show(&path, &system_id, format),
        Commands::Convert {
            path,
            system_id,
            quantity,
            value,
            to_physical,
        } => cmd_convert(&path, &system_id, &quantity, value, to_physical),
        Commands::Demo => cmd_demo(),
    }
}

fn load(path: &Path) -> ConfigResult<ScaleDocument> {
    ds_config::load(path)
}

fn cmd_validate(path: &Path) -> ConfigResult<()> {
    println!("Validating document: {}", path.display());
    let document = load(path)?;
    println!("✓ Document is valid ({} unit systems)", document.systems.len());
    Ok(())
}

fn cmd_list(path: &Path) -> ConfigResult<()> {
    let document = load(path)?;

    if document.systems.is_empty() {
        println!("No unit systems found in document");
    } else {
        println!("Unit systems in document:");
        for def in &document.systems {
            println!("  {} - {} ({})", def.id, def.name, def.precision);
        }
    }
    Ok(())
}

fn cmd_show(path: &Path, system_id: &str, format: Format) -> ConfigResult<()> {
    let document = load(path)?;
    let summary = document.build(system_id)?.summary();

    match format {
        Format::Table => print_summary(system_id, &summary),
        Format::Yaml => print!("{}", serde_yaml::to_string(&summary)?),
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn cmd_convert(
    path: &Path,
    system_id: &str,
    quantity: &str,
    value: f64,
    to_physical: bool,
) -> ConfigResult<()> {
    let quantity: Quantity = quantity.parse()?;
    let document = load(path)?;
    let system = document.build(system_id)?;
    tracing::debug!(system_id, %quantity, value, to_physical, "converting value");

    if to_physical {
        let physical = system.redimensionalize(quantity, value);
        println!("{} {} = {:e} {}", value, quantity, physical, quantity.si_unit());
    } else {
        let nondim = system.nondimensionalize(quantity, value);
        println!(
            "{} {} {} = {:e} (nondimensional)",
            value,
            quantity.si_unit(),
            quantity,
            nondim
        );
    }
    Ok(())
}

fn cmd_demo() -> ConfigResult<()> {
    let explicit = ScaleSystemBuilder::<f64>::new()
        .length_si(m(6.371e6))
        .density_si(kgpm3(5.514e3))
        .time_si(s(1.0))
        .build()?;
    print_summary("earth (time = 1 s)", &explicit.summary());

    let free_fall = ScaleSystemBuilder::<f64>::new()
        .length_si(m(6.371e6))
        .density_si(kgpm3(5.514e3))
        .build()?;
    print_summary("earth (free-fall time)", &free_fall.summary());
    Ok(())
}

fn print_summary(label: &str, summary: &ScaleSummary) {
    println!("\n=== {} [{}] ===", label, summary.precision);
    for (quantity, scale) in summary.scales() {
        println!(
            "{:<14} {:>16.6e} {}",
            quantity.name(),
            scale,
            quantity.si_unit()
        );
    }
    println!("{:<14} {:>16.6e}", "G (nondim)", summary.gravitational_constant);
    println!("{:<14} {:>16.6e}", "kB (nondim)", summary.boltzmann_constant);
    println!(
        "sources: mass={:?} time={:?} temperature={:?}",
        summary.sources.mass, summary.sources.time, summary.sources.temperature
    );
}
