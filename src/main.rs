use clap::{Parser, Subcommand};
use parking_lot::RwLock;
use segtrain::{
    build_graph_from_edge_table, build_sample_network, Annotation, EdgeRow, LevelDefaults,
    NetworkGraph, RestApi, SegmentationScorer, Session,
};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// OT network segmentation trainer
#[derive(Parser, Debug)]
#[command(name = "segtrain")]
#[command(about = "Purdue-level segmentation violation trainer", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Level assumed for an edge source without an explicit level
    #[arg(long, default_value_t = LevelDefaults::STANDARD.source, global = true)]
    source_default_level: u32,

    /// Level assumed for an edge target without an explicit level
    #[arg(long, default_value_t = LevelDefaults::STANDARD.target, global = true)]
    target_default_level: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the REST API for one training session
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// HTTP API port
        #[arg(long, default_value_t = 8501)]
        port: u16,
    },
    /// Print the sample network as JSON
    Sample,
    /// Print the violating edges of a network
    Violations {
        /// JSON array of edge rows; the sample network when omitted
        #[arg(short, long)]
        edges: Option<PathBuf>,
    },
    /// Score a JSON array of annotations against a network
    Score {
        /// JSON array of edge rows; the sample network when omitted
        #[arg(short, long)]
        edges: Option<PathBuf>,

        /// JSON array of annotations
        #[arg(short, long)]
        annotations: PathBuf,
    },
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

fn load_graph(edges: Option<&Path>) -> anyhow::Result<NetworkGraph> {
    match edges {
        Some(path) => {
            let rows: Vec<EdgeRow> = read_json(path)?;
            info!("Loaded {} edge rows from {:?}", rows.len(), path);
            Ok(build_graph_from_edge_table(&rows)?)
        }
        None => Ok(build_sample_network()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let scorer = SegmentationScorer::new(LevelDefaults {
        source: args.source_default_level,
        target: args.target_default_level,
    });

    match args.command {
        Command::Serve { host, port } => serve(scorer, host, port).await,
        Command::Sample => {
            println!("{}", serde_json::to_string_pretty(&build_sample_network().to_view())?);
            Ok(())
        }
        Command::Violations { edges } => {
            let graph = load_graph(edges.as_deref())?;
            for key in scorer.detect_violations(&graph) {
                println!("{}", key);
            }
            Ok(())
        }
        Command::Score { edges, annotations } => {
            let graph = load_graph(edges.as_deref())?;
            let annotations: Vec<Annotation> = read_json(&annotations)?;
            let report = scorer.score(&graph, &annotations);
            info!("Segmentation compliance: {}", report);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}

async fn serve(scorer: SegmentationScorer, host: String, port: u16) -> anyhow::Result<()> {
    info!("Starting segtrain v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Level defaults: source={}, target={}",
        scorer.defaults().source,
        scorer.defaults().target
    );

    let session = Arc::new(RwLock::new(Session::with_scorer(scorer)));

    let http_host = host.clone();
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on {}:{}", http_host, port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(session, &http_host, port).await {
                tracing::error!("HTTP server error: {}", e);
            }
        })
    });

    info!("HTTP API: http://{}:{}/", host, port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
