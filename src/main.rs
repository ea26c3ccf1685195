use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use culture_ship_names::names::{process_source, NameLog, RngSource};
use culture_ship_names::{ensure_non_deterministic, Config, Corpus, NameGenerator, ShipPlan, ShipResource};

/// Prints random ship names from the Culture novels.
#[derive(Parser, Debug)]
#[command(name = "culture-ship", version, about)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// String placed between words (default "-")
    #[arg(short, long)]
    separator: Option<String>,

    /// String placed before the name, followed by the separator
    #[arg(short, long)]
    prefix: Option<String>,

    /// Number of names to print
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Word list with one entry per line, instead of the built-in ships
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Fixed seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Write the generated name as resource state to this file
    #[arg(long)]
    state: Option<PathBuf>,

    /// Opaque key=value pairs stored alongside the state
    #[arg(long = "keeper", value_parser = parse_keeper)]
    keepers: Vec<(String, String)>,
}

fn parse_keeper(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    let separator = args.separator.unwrap_or(config.generator.separator);
    let prefix = args.prefix.unwrap_or(config.generator.prefix);
    let prefix = (!prefix.is_empty()).then_some(prefix.as_str());
    let count = args.count.unwrap_or(config.generator.count);
    if count == 0 {
        bail!("count must be at least 1");
    }

    let corpus = match args.corpus.or_else(|| config.corpus.path.map(PathBuf::from)) {
        Some(path) => Corpus::from_file(&path)
            .with_context(|| format!("Failed to load word list {}", path.display()))?,
        None => Corpus::builtin(),
    };
    log::debug!("Corpus holds {} entries", corpus.len());
    let generator = NameGenerator::new(corpus);

    let names = match &args.state {
        Some(path) => {
            if count > 1 {
                bail!("--state stores a single name, got count {}", count);
            }
            let plan = ShipPlan {
                keepers: args.keepers.into_iter().collect::<BTreeMap<_, _>>(),
                prefix: prefix.map(String::from),
                separator: separator.clone(),
            };
            vec![create_state(&generator, plan, args.seed, path)?]
        }
        None => match args.seed {
            Some(seed) => {
                let mut source = RngSource::seeded(seed);
                (0..count)
                    .map(|_| generator.generate_with_prefix(&mut source, prefix, &separator))
                    .collect::<Result<Vec<_>, _>>()?
            }
            None => {
                ensure_non_deterministic();
                generator.generate_batch(process_source(), count, prefix, &separator)?
            }
        },
    };

    if let Some(directory) = &config.history.directory {
        let log = NameLog::open(Path::new(directory), &config.history.prefix)?;
        log.record_all(&names)?;
    }

    for name in &names {
        println!("{}", name);
    }
    Ok(())
}

fn create_state(
    generator: &NameGenerator,
    plan: ShipPlan,
    seed: Option<u64>,
    path: &Path,
) -> anyhow::Result<String> {
    let resource = ShipResource::new(generator);
    let state = match seed {
        Some(seed) => resource.create(plan, RngSource::seeded(seed))?,
        None => {
            ensure_non_deterministic();
            resource.create(plan, process_source())?
        }
    };
    state
        .save(path)
        .with_context(|| format!("Failed to write state {}", path.display()))?;
    Ok(state.id)
}
