//! Print the bounding box of a circle as `minLat,minLon,maxLat,maxLon`.

use clap::Parser;
use geonear::{Point, compute_bounding_box};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Latitude of the centre, in degrees
    #[arg(long, default_value_t = 46.716993)]
    lat: f64,

    /// Longitude of the centre, in degrees
    #[arg(long, default_value_t = -71.269204)]
    lon: f64,

    /// Radius in kilometres
    #[arg(long, default_value_t = 2.0)]
    dist: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let bbox = compute_bounding_box(&Point::new(args.lon, args.lat), args.dist)?;
    println!("{}", bbox);
    Ok(())
}
