use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use flightpath::loader::{self, LoadOptions};
use flightpath::report;
use flightpath::{RoutePlanner, SearchConfig, WeightAttribution};

/// Enumerate every route between requested cities and print the best three.
#[derive(Parser, Debug)]
#[command(name = "flightpath", version)]
#[command(about = "Ranks all simple flight paths by time or cost", long_about = None)]
struct Args {
    /// Flight data file (`count` line, then `src|dst|cost|time` lines)
    flight_data: PathBuf,

    /// Requested flights file (`count` line, then `origin|destination|T|C` lines)
    requests: PathBuf,

    /// Sum the weight of each traversed edge instead of each visited node
    #[arg(long)]
    edge_weights: bool,

    /// Load each route in the given direction only
    #[arg(long)]
    one_way: bool,

    /// Number of paths to report per flight
    #[arg(long)]
    top: Option<usize>,

    /// Stop enumerating a flight after this many paths
    #[arg(long)]
    max_candidates: Option<usize>,

    /// JSON search config; flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str::<SearchConfig>(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if args.edge_weights {
        config.attribution = WeightAttribution::Edge;
    }
    if let Some(k) = args.top {
        config.top_k = k;
    }
    if args.max_candidates.is_some() {
        config.max_candidates = args.max_candidates;
    }

    let options = LoadOptions { bidirectional: !args.one_way };
    let planner = RoutePlanner::open_file(&args.flight_data, options)
        .with_context(|| format!("loading flight data {}", args.flight_data.display()))?
        .with_config(config);
    info!(file = %args.flight_data.display(), "flight data loaded");

    let queries = loader::load_requests_file(&args.requests)
        .with_context(|| format!("loading requests {}", args.requests.display()))?;
    info!(count = queries.len(), "requests loaded");

    let reports = planner.run_batch(&queries);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.json {
        report::write_json(&mut out, &reports)?;
    } else {
        report::write_reports(&mut out, &reports)?;
    }
    out.flush()?;
    Ok(())
}
