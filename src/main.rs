//! countrygen main entry point
//!
//! Picks one artifact (or all of them) from the command line, loads the
//! dataset when that artifact needs it, and writes Go source to stdout.
//! Diagnostics go to stderr so output can be piped straight into a file.

use anyhow::Context;
use clap::{Parser, Subcommand};
use countrygen::config::Config;
use countrygen::dataset::{load_countries, Country};
use countrygen::generate::{Artifact, Generator};
use countrygen::lookup::{flag, lookup};
use countrygen::render::Renderer;
use log::{debug, error, info};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process;

/// ISO 3166-1 lookup table generator
///
/// Emits Go declarations mapping country codes to names, plus exhaustive
/// two- and three-letter combination lists.
#[derive(Parser, Debug)]
#[command(name = "countrygen", version, about)]
struct Cli {
    /// Country dataset (JSON array); overrides the config file
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    /// Config file (default: ~/.countrygen.cfg)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 26x26 alpha-2 lookup table
    Alpha2Table,
    /// 26x26x26 alpha-3 lookup table
    Alpha3Table,
    /// Alpha-2 code to name map
    Alpha2Map,
    /// Alpha-3 code to name map
    Alpha3Map,
    /// All two-letter combinations (default)
    Pairs,
    /// All three-letter combinations
    Triples,
    /// Complete Go file with every declaration
    All,
    /// Look up a country by alpha-2/alpha-3 code or by exact name
    Lookup {
        /// Code (case-insensitive) or country name (exact)
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    if cli.debug {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Stderr)
            .init();
        info!("countrygen version {} starting (debug mode)", countrygen::VERSION);
    } else {
        // Normal mode: errors only unless RUST_LOG says otherwise
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .init();
    }

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        process::exit(1);
    }
}

/// What a run should do once the command line is resolved
#[derive(Debug, PartialEq, Eq)]
enum Plan {
    Generate {
        artifacts: Vec<Artifact>,
        /// Set for full-file output
        package: Option<String>,
    },
    Lookup(String),
}

/// Map the subcommand onto artifacts, defaulting to `pairs`
fn plan(command: Option<Command>, config: &Config) -> Plan {
    let (artifacts, package) = match command.unwrap_or(Command::Pairs) {
        Command::Alpha2Table => (vec![Artifact::Alpha2Table], None),
        Command::Alpha3Table => (vec![Artifact::Alpha3Table], None),
        Command::Alpha2Map => (vec![Artifact::Alpha2Map], None),
        Command::Alpha3Map => (vec![Artifact::Alpha3Map], None),
        Command::Pairs => (vec![Artifact::Pairs], None),
        Command::Triples => (vec![Artifact::Triples], None),
        Command::All => (Artifact::ALL.to_vec(), Some(config.package())),
        Command::Lookup { query } => return Plan::Lookup(query),
    };
    Plan::Generate { artifacts, package }
}

/// `--dataset` wins over the config file, which wins over the default
fn dataset_path(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.dataset_path())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(path) = config.path() {
        info!("Config loaded from {}", path.display());
    }
    let dataset = dataset_path(cli.dataset, &config);

    let (artifacts, package) = match plan(cli.command, &config) {
        Plan::Generate { artifacts, package } => (artifacts, package),
        Plan::Lookup(query) => {
            let countries = load(&dataset)?;
            return print_lookup(&countries, &query);
        }
    };

    // The combination lists never touch the dataset
    let countries = if artifacts.iter().any(|a| a.needs_dataset()) {
        load(&dataset)?
    } else {
        debug!("Dataset not needed for {:?}", artifacts);
        Vec::new()
    };

    let renderer = Renderer::new(config.indent()?);
    let names = config.names();
    let generator = Generator {
        renderer: &renderer,
        names: &names,
        package: package.as_deref(),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    generator
        .generate(&artifacts, &countries, &mut out)
        .context("generation aborted")?;
    info!("Generated {} declaration(s)", artifacts.len());
    Ok(())
}

fn load(dataset: &Path) -> anyhow::Result<Vec<Country>> {
    load_countries(dataset)
        .with_context(|| format!("failed to load dataset {}", dataset.display()))
}

fn print_lookup(countries: &[Country], query: &str) -> anyhow::Result<()> {
    let country = lookup(countries, query)?;

    let mut out = io::stdout().lock();
    match flag(&country.alpha2) {
        Ok(emoji) => writeln!(
            out,
            "{}\t{}\t{}\t{}",
            country.alpha2, country.alpha3, country.name, emoji
        )?,
        Err(_) => writeln!(
            out,
            "{}\t{}\t{}",
            country.alpha2, country.alpha3, country.name
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("Failed to parse arguments")
    }

    #[test]
    fn test_default_command_is_pairs() {
        let cli = parse(&["countrygen"]);
        assert_eq!(
            plan(cli.command, &Config::defaults()),
            Plan::Generate {
                artifacts: vec![Artifact::Pairs],
                package: None,
            }
        );
    }

    #[test]
    fn test_single_artifact_commands() {
        for (arg, artifact) in [
            ("alpha2-table", Artifact::Alpha2Table),
            ("alpha3-table", Artifact::Alpha3Table),
            ("alpha2-map", Artifact::Alpha2Map),
            ("alpha3-map", Artifact::Alpha3Map),
            ("pairs", Artifact::Pairs),
            ("triples", Artifact::Triples),
        ] {
            let cli = parse(&["countrygen", arg]);
            assert_eq!(
                plan(cli.command, &Config::defaults()),
                Plan::Generate {
                    artifacts: vec![artifact],
                    package: None,
                },
                "command {}",
                arg
            );
        }
    }

    #[test]
    fn test_all_carries_configured_package() {
        let config = Config::parse("[output]\npackage = geo\n").unwrap();
        let cli = parse(&["countrygen", "all"]);
        assert_eq!(
            plan(cli.command, &config),
            Plan::Generate {
                artifacts: Artifact::ALL.to_vec(),
                package: Some("geo".to_string()),
            }
        );

        let cli = parse(&["countrygen", "all"]);
        match plan(cli.command, &Config::defaults()) {
            Plan::Generate { package, .. } => assert_eq!(package.as_deref(), Some("country")),
            other => panic!("unexpected plan {:?}", other),
        }
    }

    #[test]
    fn test_lookup_keeps_query() {
        let cli = parse(&["countrygen", "lookup", "United States of America"]);
        assert_eq!(
            plan(cli.command, &Config::defaults()),
            Plan::Lookup("United States of America".to_string())
        );
    }

    #[test]
    fn test_dataset_precedence() {
        let config = Config::parse("[dataset]\npath = from/config.json\n").unwrap();

        // Flag beats config file
        let cli = parse(&["countrygen", "--dataset", "from/flag.json", "alpha2-map"]);
        assert_eq!(
            dataset_path(cli.dataset, &config),
            PathBuf::from("from/flag.json")
        );

        // Global flag after the subcommand counts too
        let cli = parse(&["countrygen", "alpha2-map", "--dataset", "late.json"]);
        assert_eq!(dataset_path(cli.dataset, &config), PathBuf::from("late.json"));

        // Config file beats default
        let cli = parse(&["countrygen", "alpha2-map"]);
        assert_eq!(
            dataset_path(cli.dataset, &config),
            PathBuf::from("from/config.json")
        );

        // Default when neither is set
        let cli = parse(&["countrygen"]);
        assert_eq!(
            dataset_path(cli.dataset, &Config::defaults()),
            PathBuf::from("country/testdata/countries.json")
        );
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(Cli::try_parse_from(["countrygen", "alpha4-table"]).is_err());
        assert!(Cli::try_parse_from(["countrygen", "lookup"]).is_err());
    }
}
