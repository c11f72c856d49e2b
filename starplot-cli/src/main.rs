mod config;
mod dataset;
mod error;
mod logging;

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;
use starplot_core::{ClusterController, ColumnDataSource, MappedPoints, MapperController};
use tracing::{debug, info};

use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(name = "starplot")]
#[command(about = "Cluster a dataset and project it onto star coordinates")]
#[command(version)]
struct Args {
    /// Dataset JSON file
    #[arg(short, long)]
    dataset: PathBuf,

    /// Configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Hide an axis before mapping (repeatable)
    #[arg(long = "hide")]
    hidden_axes: Vec<String>,

    /// Clustering algorithm id (overrides config)
    #[arg(long)]
    clustering: Option<String>,

    /// Mapping algorithm id (overrides config)
    #[arg(long)]
    mapping: Option<String>,

    /// Number of clusters (overrides config)
    #[arg(short = 'k', long)]
    n_clusters: Option<usize>,

    /// Seed for generated axis lengths (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(id) = &self.clustering {
            config.cluster.algorithm = Some(id.clone());
        }
        if let Some(id) = &self.mapping {
            config.mapper.algorithm = Some(id.clone());
        }
        if let Some(n) = self.n_clusters {
            config.cluster.n_clusters = n;
        }
        if self.seed.is_some() {
            config.axes.seed = self.seed;
        }
        config.hidden_axes.extend(self.hidden_axes.iter().cloned());

        Ok(config)
    }
}

#[derive(Serialize)]
struct Report {
    clustering: String,
    mapping: String,
    axis_status: Vec<(String, bool)>,
    labels: Vec<usize>,
    mapped_points: MappedPoints,
    source: ColumnDataSource,
}

fn run(args: &Args) -> Result<Report> {
    let config = args.resolve_config()?;
    debug!("Resolved config: {:?}", config);

    let dataset = Dataset::load(&args.dataset)?;
    let (dimension_values, vectors) = dataset.into_tables(&config.axes)?;
    info!(
        "Loaded {} samples over {} axes",
        dimension_values.n_samples(),
        dimension_values.n_axes()
    );

    let source = ColumnDataSource::shared();

    let mut mapper = MapperController::new(dimension_values, vectors, config.mapper)?
        .with_source(source.clone());
    for axis in &config.hidden_axes {
        mapper.update_axis_status(axis, false)?;
    }

    let mut clusters = ClusterController::new(config.cluster)?.with_source(source.clone());
    clusters.update_clusters(&mapper.dimension_values())?;

    let mapped_points = mapper.execute_mapping()?;
    info!(
        "Mapped {} points with {}, clustered with {} (k = {})",
        mapped_points.len(),
        mapper.active_algorithm_id(),
        clusters.active_algorithm_id(),
        clusters.number_of_clusters()
    );

    let report = Report {
        clustering: clusters.active_algorithm_id().to_string(),
        mapping: mapper.active_algorithm_id().to_string(),
        axis_status: mapper.axis_status(),
        labels: clusters.classes()?.to_vec(),
        mapped_points,
        source: source.read().clone(),
    };
    Ok(report)
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logging::init_with_filter(&args.log_level);
    info!("starplot {}", env!("CARGO_PKG_VERSION"));

    let report = run(&args)?;
    let json = serde_json::to_string_pretty(&report)?;

    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            info!("Wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
