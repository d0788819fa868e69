use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use osmpath::{osm, Coordinate, SnapMetric};

#[derive(Debug, thiserror::Error)]
#[error("{0}: {1}")]
struct GraphLoadError(PathBuf, #[source] osm::Error);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// Guess from the first bytes of the file
    Auto,
    Xml,
    XmlGz,
    XmlBz2,
}

impl From<InputFormat> for osm::FileFormat {
    fn from(f: InputFormat) -> Self {
        match f {
            InputFormat::Auto => osm::FileFormat::Unknown,
            InputFormat::Xml => osm::FileFormat::Xml,
            InputFormat::XmlGz => osm::FileFormat::XmlGz,
            InputFormat::XmlBz2 => osm::FileFormat::XmlBz2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Snap {
    /// Squared distance over raw degrees
    Planar,
    /// Great-circle distance
    Haversine,
}

impl From<Snap> for SnapMetric {
    fn from(s: Snap) -> Self {
        match s {
            Snap::Planar => SnapMetric::Planar,
            Snap::Haversine => SnapMetric::Haversine,
        }
    }
}

/// Finds the shortest road route between two points
#[derive(Parser)]
#[command(version, about, allow_negative_numbers = true)]
struct Cli {
    /// The path to the OSM file
    osm_file: PathBuf,

    /// Latitude of the start point
    #[arg(value_parser = parse_finite)]
    start_lat: f64,

    /// Longitude of the start point
    #[arg(value_parser = parse_finite)]
    start_lon: f64,

    /// Latitude of the end point
    #[arg(value_parser = parse_finite)]
    end_lat: f64,

    /// Longitude of the end point
    #[arg(value_parser = parse_finite)]
    end_lon: f64,

    /// Format of the OSM file
    #[arg(long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Only route over highway=* ways with unrestricted access
    #[arg(long)]
    highways_only: bool,

    /// Drop way references to nodes missing from the file instead of failing
    #[arg(long)]
    skip_unknown_nodes: bool,

    /// Distance used to find the nodes closest to the start and end points
    #[arg(long, value_enum, default_value_t = Snap::Planar)]
    snap: Snap,

    /// Print the route as GeoJSON instead of "lon, lat" lines
    #[arg(long)]
    geojson: bool,

    /// Write the route to a file instead of the standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

fn parse_finite(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        Ok(_) => Err("value must be a finite number".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    colog::default_builder()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let options = osm::Options {
        file_format: cli.format.into(),
        way_filter: if cli.highways_only {
            &osm::HIGHWAYS
        } else {
            &osm::ALL_WAYS
        },
        skip_unknown_nodes: cli.skip_unknown_nodes,
    };
    let network = load_network(&cli.osm_file, &options)?;

    let start = Coordinate::new(cli.start_lat, cli.start_lon);
    let end = Coordinate::new(cli.end_lat, cli.end_lon);

    let coordinates = match network.find_route(start, end, cli.snap.into()) {
        Ok(route) => {
            log::info!(
                "found route with {} nodes, {:.3} km long",
                route.vertices().len(),
                route.distance()
            );
            Some(network.route_coordinates(&route)?)
        }
        Err(e) if e.is_no_route() => {
            log::info!("{}", e);
            None
        }
        Err(e) => return Err(e.into()),
    };

    match cli.output {
        Some(path) => {
            let mut w = BufWriter::new(File::create(path)?);
            write_route(&mut w, coordinates.as_deref(), cli.geojson)?;
            w.flush()?;
        }
        None => write_route(&mut io::stdout().lock(), coordinates.as_deref(), cli.geojson)?,
    }

    Ok(())
}

fn load_network<P: AsRef<Path>>(
    path: P,
    options: &osm::Options<'_>,
) -> Result<osmpath::Network, GraphLoadError> {
    osm::load_network_from_file(options, path.as_ref())
        .map_err(|e| GraphLoadError(PathBuf::from(path.as_ref()), e))
}

fn write_route<W: Write>(
    w: &mut W,
    coordinates: Option<&[Coordinate]>,
    geojson: bool,
) -> io::Result<()> {
    match (coordinates, geojson) {
        (Some(coordinates), false) => {
            for c in coordinates {
                writeln!(w, "{}, {}", c.lon, c.lat)?;
            }
            Ok(())
        }

        (None, false) => writeln!(w, "Unable to find a route between the given coordinates."),

        (Some(coordinates), true) => {
            writeln!(w, "{{")?;
            writeln!(w, "  \"type\": \"FeatureCollection\",")?;
            writeln!(w, "  \"features\": [")?;
            writeln!(w, "    {{")?;
            writeln!(w, "      \"type\": \"Feature\",")?;
            writeln!(w, "      \"properties\": {{}},")?;

            writeln!(w, "      \"geometry\": {{")?;
            writeln!(w, "        \"type\": \"LineString\",")?;
            writeln!(w, "        \"coordinates\": [")?;

            let mut nodes = coordinates.iter().peekable();
            while let Some(c) = nodes.next() {
                let suffix = if nodes.peek().is_some() { "," } else { "" };
                writeln!(w, "          [{}, {}]{}", c.lon, c.lat, suffix)?;
            }

            writeln!(w, "        ]")?;
            writeln!(w, "      }}")?;
            writeln!(w, "    }}")?;
            writeln!(w, "  ]")?;
            writeln!(w, "}}")
        }

        (None, true) => {
            writeln!(w, "{{")?;
            writeln!(w, "  \"type\": \"FeatureCollection\",")?;
            writeln!(w, "  \"features\": []")?;
            writeln!(w, "}}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(coordinates: Option<&[Coordinate]>, geojson: bool) -> String {
        let mut buf = Vec::new();
        write_route(&mut buf, coordinates, geojson).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output() {
        let route = [Coordinate::new(47.5, 21.6), Coordinate::new(47.55, 21.62)];
        assert_eq!(render(Some(&route[..]), false), "21.6, 47.5\n21.62, 47.55\n");
    }

    #[test]
    fn plain_output_no_route() {
        assert_eq!(
            render(None, false),
            "Unable to find a route between the given coordinates.\n"
        );
    }

    #[test]
    fn geojson_output() {
        let route = [Coordinate::new(47.5, 21.6), Coordinate::new(47.55, 21.62)];
        let out = render(Some(&route[..]), true);
        assert!(out.contains("\"type\": \"LineString\""));
        assert!(out.contains("          [21.6, 47.5],\n          [21.62, 47.55]\n"));
    }

    #[test]
    fn geojson_output_no_route() {
        let out = render(None, true);
        assert!(out.contains("\"features\": []"));
    }

    #[test]
    fn cli_arguments() {
        let cli = Cli::try_parse_from(["osmpath", "map.osm", "47.5", "-21.6", "47.55", "21.62"])
            .unwrap();
        assert_eq!(cli.osm_file, PathBuf::from("map.osm"));
        assert_eq!(cli.start_lon, -21.6);
        assert_eq!(cli.format, InputFormat::Auto);
        assert_eq!(cli.snap, Snap::Planar);
        assert!(cli.output.is_none());

        assert!(Cli::try_parse_from(["osmpath", "map.osm", "47.5", "21.6"]).is_err());
        assert!(Cli::try_parse_from(["osmpath", "map.osm", "NaN", "1", "2", "3"]).is_err());
        assert!(Cli::try_parse_from(["osmpath", "map.osm", "inf", "1", "2", "3"]).is_err());
    }
}
