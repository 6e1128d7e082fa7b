use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Generate C++ component headers from an IFC dictionary JSON export.
///
/// Writes IfcEnums.h, IfcClassComponents.h and IfcPropertyComponents.h
/// into the output folder, creating it if needed.
#[derive(Parser)]
#[command(name = "ifc-header-gen", version, about)]
struct Cli {
    /// IFC dictionary export (e.g., IFC.json).
    input: PathBuf,

    /// Folder receiving the generated headers.
    output_dir: PathBuf,

    /// Suppress non-error output.
    #[arg(long, short)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");

        // Print cause chain.
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = std::error::Error::source(cause);
        }

        process::exit(1);
    }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_tracing(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> ifc_header_gen::error::Result<()> {
    if !cli.quiet {
        eprintln!("Loading dictionary from {}", cli.input.display());
    }
    let dictionary = ifc_header_gen::schema::load_dictionary(&cli.input)?;
    if !cli.quiet {
        eprintln!(
            "Loaded {} classes, {} properties",
            dictionary.classes.len(),
            dictionary.properties.len()
        );
    }

    let report = ifc_header_gen::codegen::generate(&dictionary, &cli.output_dir)?;

    if !cli.quiet {
        let stats = &report.stats;
        eprintln!(
            "Generated {} enums, {} classes, {} properties",
            stats.enums_generated, stats.classes_generated, stats.properties_generated
        );
        if stats.duplicate_enum_codes > 0 {
            eprintln!(
                "Overwrote {} duplicate enumerated property codes",
                stats.duplicate_enum_codes
            );
        }
        if stats.identifier_collisions > 0 {
            eprintln!(
                "Found {} colliding enum identifiers (left as-is)",
                stats.identifier_collisions
            );
        }
        if stats.unknown_types_defaulted > 0 {
            eprintln!(
                "Defaulted {} unknown types to std::string",
                stats.unknown_types_defaulted
            );
        }
        eprintln!("Generated the following files:");
        for path in report.paths() {
            eprintln!("  {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_output_dir_is_a_usage_error() {
        let err = match Cli::try_parse_from(["ifc-header-gen", "in.json"]) {
            Ok(_) => panic!("expected a usage error"),
            Err(e) => e,
        };
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("Usage"));
    }

    #[test]
    fn no_arguments_is_a_usage_error() {
        assert!(Cli::try_parse_from(["ifc-header-gen"]).is_err());
    }

    #[test]
    fn positional_arguments_and_flags() {
        let cli = Cli::try_parse_from(["ifc-header-gen", "IFC.json", "out", "-q", "-vv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("IFC.json"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
    }
}
