//! Command line front end for the odds simulator.
//!
//! `odds run` estimates a single spot; `odds batch` runs a JSON file of
//! requests in parallel.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

use poker_odds::sim::{run_batch_with_progress, SimulationResponse};
use poker_odds::{
    CardParser, ErrorReport, OddsError, ParseMode, Scoring, SimConfig, SimulationRequest,
    Simulator,
};

#[derive(Parser)]
#[command(name = "odds", version, about = "Monte Carlo win/tie/lose odds for Hold'em hands")]
struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate odds for one hand
    Run(RunArgs),
    /// Run a JSON array of requests in parallel
    Batch(BatchArgs),
}

#[derive(Args)]
struct CommonArgs {
    /// JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Trials per hand
    #[arg(short = 'n', long)]
    simulations: Option<u64>,

    /// Score hands with random placeholder values instead of evaluating them
    #[arg(long)]
    placeholder: bool,

    /// Treat a lone rank (e.g. "A") as all four cards of that rank
    #[arg(long)]
    expand_ranks: bool,
}

#[derive(Args)]
struct RunArgs {
    /// Hole cards, e.g. "As Ks" or "A♠,K♠"
    #[arg(long)]
    hole: String,

    /// Known community cards
    #[arg(long, default_value = "")]
    board: String,

    /// Number of opponents
    #[arg(short, long)]
    opponents: Option<usize>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Args)]
struct BatchArgs {
    /// JSON file holding an array of requests
    input: PathBuf,

    /// Write responses here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Run(args) => run(args),
        Command::Batch(args) => batch(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Merge the config file (if any) with command line overrides.
fn load_config(common: &CommonArgs) -> Result<SimConfig, String> {
    let mut config = match &common.config {
        Some(path) => SimConfig::from_json_file(path).map_err(|e| e.to_string())?,
        None => SimConfig::default(),
    };

    if let Some(seed) = common.seed {
        config = config.with_seed(seed);
    }
    if let Some(n) = common.simulations {
        config = config.with_simulations(n);
    }
    if common.placeholder {
        config = config.with_scoring(Scoring::Placeholder);
    }
    if common.expand_ranks {
        config = config.with_parse_mode(ParseMode::ExpandRanks);
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn split_tokens(s: &str) -> Vec<String> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn run(args: RunArgs) -> ExitCode {
    let config = match load_config(&args.common) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut request = SimulationRequest::new(split_tokens(&args.hole), split_tokens(&args.board));
    request.num_opponents = args.opponents;

    let start = Instant::now();
    match run_with_progress(&request, config, !args.json) {
        Ok(result) => {
            if args.json {
                match serde_json::to_string(&result) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error encoding result: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                println!("{}", result);
                println!("({:.2}s)", start.elapsed().as_secs_f64());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            if args.json {
                let report = ErrorReport::from(&e);
                println!("{}", serde_json::to_string(&report).unwrap_or_default());
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_with_progress(
    request: &SimulationRequest,
    config: SimConfig,
    show_progress: bool,
) -> Result<poker_odds::SimulationResult, OddsError> {
    let parser = CardParser::new(config.parse_mode);
    let spot = request.to_spot(&parser, &config)?;
    let trials = request.simulations(&config);

    let bar = if show_progress {
        progress_bar(trials, "trials")
    } else {
        ProgressBar::hidden()
    };

    let mut simulator = Simulator::new(config);
    let result = simulator.simulate_observed(&spot, trials, None, |done| bar.set_position(done));
    bar.finish_and_clear();
    result
}

fn batch(args: BatchArgs) -> ExitCode {
    let config = match load_config(&args.common) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let requests: Vec<SimulationRequest> = match fs::read_to_string(&args.input)
        .map_err(|e| e.to_string())
        .and_then(|s| serde_json::from_str(&s).map_err(|e| e.to_string()))
    {
        Ok(requests) => requests,
        Err(e) => {
            eprintln!("Error reading {}: {}", args.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();
    let bar = progress_bar(requests.len() as u64, "requests");
    let results = run_batch_with_progress(&requests, &config, || bar.inc(1));
    bar.finish_and_clear();

    let failed = results.iter().filter(|r| r.is_err()).count();
    let responses: Vec<SimulationResponse> = results.into_iter().map(Into::into).collect();

    let json = match serde_json::to_string_pretty(&responses) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error encoding results: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match &args.output {
        Some(path) => match fs::write(path, json) {
            Ok(_) => eprintln!("Saved {} responses to {}", responses.len(), path.display()),
            Err(e) => {
                eprintln!("Error saving {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => println!("{}", json),
    }

    eprintln!(
        "{} requests in {:.2}s ({} failed)",
        responses.len(),
        start.elapsed().as_secs_f64(),
        failed
    );
    ExitCode::SUCCESS
}

fn progress_bar(len: u64, unit: &str) -> ProgressBar {
    let bar = ProgressBar::new(len);
    let template = format!("{{bar:40.cyan/blue}} {{pos}}/{{len}} {} ({{eta}})", unit);
    if let Ok(style) = ProgressStyle::with_template(&template) {
        bar.set_style(style);
    }
    bar
}
