use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use u_tsp::io::{instance_key, list_instances, load_instance, select_instance, ReferenceTable};
use u_tsp::report::Report;
use u_tsp::sa::{solve, AnnealingConfig, DeltaStrategy};

#[derive(Parser, Debug)]
#[command(name = "u-tsp")]
#[command(about = "Solve a Euclidean TSP instance with simulated annealing")]
struct Cli {
    /// Directory holding .tsp instances and solutions.txt
    #[arg(long, default_value = "../dataset")]
    dataset: PathBuf,

    /// Solve this instance file instead of choosing from the dataset
    #[arg(long, conflicts_with = "select")]
    file: Option<PathBuf>,

    /// 1-based index into the sorted dataset listing (skips the prompt)
    #[arg(long)]
    select: Option<usize>,

    /// Reference table; defaults to <dataset>/solutions.txt
    #[arg(long)]
    solutions: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 10_000.0)]
    initial_temperature: f64,

    #[arg(long, default_value_t = 0.9999)]
    cooling_rate: f64,

    #[arg(long, default_value_t = 1e-5)]
    min_temperature: f64,

    /// Stop after this many moves even if still hot (0 = no limit)
    #[arg(long, default_value_t = 0)]
    max_iterations: usize,

    /// Recompute the full tour length for every move
    #[arg(long)]
    full_recompute: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn annealing_config(&self) -> AnnealingConfig {
        let mut config = AnnealingConfig::default()
            .with_initial_temperature(self.initial_temperature)
            .with_cooling_rate(self.cooling_rate)
            .with_min_temperature(self.min_temperature)
            .with_max_iterations(self.max_iterations);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if self.full_recompute {
            config = config.with_delta_strategy(DeltaStrategy::Recompute);
        }
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.annealing_config();
    config.validate()?;

    let path = match &cli.file {
        Some(file) => file.clone(),
        None => choose_instance(&cli.dataset, cli.select, cli.json)?,
    };

    let instance = load_instance(&path)?;
    let solutions = cli
        .solutions
        .clone()
        .unwrap_or_else(|| cli.dataset.join("solutions.txt"));
    let references = ReferenceTable::load(&solutions).unwrap_or_else(|e| {
        warn!("{e}; reference comparison unavailable");
        ReferenceTable::new()
    });

    info!(
        estimated_iterations = config.estimated_iterations(),
        seed = ?config.seed,
        "solving"
    );
    let started = Instant::now();
    let mut rng = config.rng();
    let solution = solve(&instance, &config, &mut rng)?;
    let report =
        Report::new(&instance_key(&path), &solution, &references).with_elapsed(started.elapsed());

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Lists the dataset and returns the chosen file, prompting on stdin when
/// no selection was given on the command line.
///
/// With `--json` the prompt goes to stderr so stdout stays a single JSON
/// document.
fn choose_instance(dataset: &Path, select: Option<usize>, json: bool) -> Result<PathBuf> {
    let files = list_instances(dataset)?;
    let mut prompt: Box<dyn Write> = if json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let choice = match select {
        Some(choice) => choice,
        None => {
            writeln!(prompt, "Available .tsp files:")?;
            for (i, file) in files.iter().enumerate() {
                writeln!(prompt, "{}: {}", i + 1, file.display())?;
            }
            write!(prompt, "Select a file by entering its number: ")?;
            prompt.flush()?;

            let mut line = String::new();
            io::stdin()
                .lock()
                .read_line(&mut line)
                .context("failed to read selection")?;
            line.trim()
                .parse()
                .with_context(|| format!("not a number: {:?}", line.trim()))?
        }
    };

    let selected = select_instance(&files, choice)?;
    if select.is_none() {
        writeln!(prompt, "You selected: {}", selected.display())?;
    }
    Ok(selected.to_path_buf())
}
