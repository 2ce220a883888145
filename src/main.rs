use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

mod config;
mod domain;
mod error;
mod geojson;
mod geometry;
mod query;
mod store;

use config::FileConfig;
use geojson::{Feature, feature_collection, overlap_feature, parse_query_ring, region_feature};
use query::{RegionSource, find_intersecting};
use store::FileRegionStore;

/// Find stored GeoJSON map regions that overlap a drawn polygon
///
/// Examples:
///   # Query the stored set with a drawn polygon
///   mapoverlap -r regions.geojson -q query.geojson
///
///   # Read the query polygon from stdin, write matches to a file
///   cat query.geojson | mapoverlap -r regions.geojson -q - -o matches.geojson
///
///   # Emit the computed overlap geometry instead of the stored shapes
///   mapoverlap -r regions.geojson -q query.geojson --overlap
///
///   # Use a config file
///   mapoverlap --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "mapoverlap")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches mapoverlap.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stored regions file (GeoJSON FeatureCollection)
    #[arg(short = 'r', long)]
    regions: Option<PathBuf>,

    /// Query polygon file (GeoJSON Polygon or Feature wrapping one), "-" for stdin
    #[arg(short = 'q', long)]
    query: Option<PathBuf>,

    /// Output file for matching features (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Emit the computed overlap geometry instead of the stored shapes
    #[arg(long)]
    overlap: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            Some(toml::from_str(&contents).context("Failed to parse config file")?)
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load()
    };

    let regions_path = args
        .regions
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.regions.clone()));
    let query_path = args
        .query
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.query.clone()));
    let output = args
        .output
        .clone()
        .or_else(|| file_config.as_ref().and_then(|c| c.output.clone()));
    let overlap = args.overlap || file_config.as_ref().map(|c| c.overlap).unwrap_or(false);
    let verbose = args.verbose || file_config.as_ref().map(|c| c.verbose).unwrap_or(false);

    let Some(regions_path) = regions_path else {
        bail!("Must provide a stored regions file with --regions/-r");
    };
    let Some(query_path) = query_path else {
        bail!("Must provide a query polygon with --query/-q");
    };

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Regions: {}", regions_path.display());
        eprintln!("  Query: {}", query_path.display());
        eprintln!(
            "  Output: {}",
            output
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "stdout".to_string())
        );
        eprintln!("  Overlap geometry: {}", overlap);
        eprintln!();
    }

    let query_contents = if query_path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read query polygon from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(&query_path)
            .context(format!("Failed to read query file: {:?}", query_path))?
    };

    let query_ring = parse_query_ring(&query_contents).context("Invalid query polygon")?;
    if verbose {
        eprintln!("Query ring: {} points", query_ring.len());
    }

    let spinner = create_spinner("Loading stored regions...");
    let start = Instant::now();
    let store = FileRegionStore::new(&regions_path);
    let candidates = store
        .fetch_all_polygon_regions()
        .context("Failed to load stored regions")?;
    spinner.finish_with_message(format!(
        "Loaded {} stored regions [{:.1}s]",
        candidates.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Testing intersections...");
    let start = Instant::now();
    let matches =
        find_intersecting(&query_ring, &candidates).context("Intersection query failed")?;
    spinner.finish_with_message(format!(
        "Found {} intersecting regions [{:.1}s]",
        matches.len(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        use geo::Area;
        for m in &matches {
            eprintln!(
                "  Region {}: overlap area {:.6}",
                m.region.id,
                m.overlap.unsigned_area()
            );
        }
    }

    let features: Vec<Feature> = matches
        .iter()
        .filter_map(|m| {
            if overlap {
                Some(overlap_feature(&m.region, &m.overlap))
            } else {
                region_feature(&m.region)
            }
        })
        .collect();

    let collection = feature_collection(features);
    let json =
        serde_json::to_string_pretty(&collection).context("Failed to serialize result")?;

    match output {
        Some(path) => {
            std::fs::write(&path, &json)
                .context(format!("Failed to write output file: {:?}", path))?;
            eprintln!("Output: {}", path.display());
        }
        None => println!("{}", json),
    }

    if verbose {
        eprintln!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
