use std::path::PathBuf;

use baseline_eto_rs::eto_pipeline::{BaselineEtoLookup, GeoCoordinates};
use baseline_eto_rs::logger;
use clap::Parser;

/// Prints the average daily baseline ETo (inches/day) at a location.
#[derive(Parser, Debug)]
#[command(name = "lookup_eto")]
struct Args {
    /// latitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// longitude in degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// gap-filled container raster
    #[arg(default_value = "./Baseline_ETo_Data.bin")]
    data_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_with_default("warn");

    let mut lookup = BaselineEtoLookup::open(&args.data_file)?;
    let eto = lookup.daily_eto(GeoCoordinates {
        latitude: args.lat,
        longitude: args.lon,
    })?;

    println!("{:.3}", eto);
    Ok(())
}
