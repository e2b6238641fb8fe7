//! MBB Routing MGT (CLI).
//!
//! Kommandozeilen-Frontend für den Dashboard-Kern: liest Backend-Responses
//! als JSON (Datei oder `-` für stdin) und gibt die aufbereiteten
//! View-Modelle als JSON auf stdout aus.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use glam::DVec2;
use mbb_routing_mgt::{
    aggregate, curve_between_points, map, payload, Bulge, CurveOptions, DashboardOptions,
    ReferenceCatalog,
};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "MBB Routing MGT: Kurven, Payloads und Latenz-Tabellen")]
struct Cli {
    /// Optionen-Datei (Standard: mbb_routing_mgt.toml neben der Binary)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON eingerückt ausgeben
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Gekrümmte Polyline zwischen zwei Punkten
    Curve {
        /// Startpunkt als lon,lat
        #[arg(long, value_parser = parse_lon_lat, allow_hyphen_values = true)]
        from: DVec2,

        /// Endpunkt als lon,lat
        #[arg(long, value_parser = parse_lon_lat, allow_hyphen_values = true)]
        to: DVec2,

        /// Anzahl Segmente (mindestens 64)
        #[arg(long)]
        segments: Option<usize>,

        /// Bogenhöhe relativ zur Sehnenlänge
        #[arg(long)]
        bow_factor: Option<f64>,

        /// Wölbungsrichtung
        #[arg(long, value_enum)]
        bulge: Option<BulgeArg>,
    },

    /// GeoJSON der konfigurierten Stationsverbindungen
    Connections {
        /// Eigener Katalog statt des eingebetteten
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Gateway-Latenztabelle pro Territorium
    GatewayTable {
        /// Response des Gateway-Endpunkts
        #[arg(long)]
        verifiers: PathBuf,

        /// Response des Territoriums-Endpunkts
        #[arg(long)]
        territories: PathBuf,

        /// Eigener Katalog für die Territoriums-Namen
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Uplink/Downlink pro EBR gruppieren
    GroupRoutes {
        /// Response des Filter-Route-Endpunkts
        input: PathBuf,
    },

    /// Gateway-Serien pro Region für die Trend-Charts
    ChartSeries {
        /// Response des Trend-Endpunkts
        input: PathBuf,
    },

    /// Knotenfolgen der Routing-Pfade pro EBR
    PathNodes {
        /// Response des Filter-Route-Endpunkts
        input: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum BulgeArg {
    North,
    South,
    Auto,
}

impl From<BulgeArg> for Bulge {
    fn from(arg: BulgeArg) -> Self {
        match arg {
            BulgeArg::North => Bulge::North,
            BulgeArg::South => Bulge::South,
            BulgeArg::Auto => Bulge::Auto,
        }
    }
}

/// Knotenfolgen eines EBR für beide Richtungen
#[derive(Serialize)]
struct RouteNodes {
    uplink: Vec<aggregate::PathNode>,
    downlink: Vec<aggregate::PathNode>,
}

fn main() -> ExitCode {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    log::debug!("MBB Routing MGT v{} startet...", env!("CARGO_PKG_VERSION"));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Abbruch: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(DashboardOptions::config_path);
    let mut options = DashboardOptions::load_from_file(&config_path);
    options.apply_env_overrides();

    match cli.command {
        Command::Curve {
            from,
            to,
            segments,
            bow_factor,
            bulge,
        } => {
            let curve = CurveOptions {
                segments: segments.unwrap_or(options.curve.segments),
                bow_factor: bow_factor.unwrap_or(options.curve.bow_factor),
                bulge: bulge.map(Bulge::from).unwrap_or(options.curve.bulge),
            };
            let points: Vec<[f64; 2]> = curve_between_points(from, to, &curve)
                .into_iter()
                .map(|p| [p.x, p.y])
                .collect();
            emit(&points, cli.pretty)
        }
        Command::Connections { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            emit(&map::catalog_geojson(&catalog, &options.curve), cli.pretty)
        }
        Command::GatewayTable {
            verifiers,
            territories,
            catalog,
        } => {
            let catalog = load_catalog(catalog.as_deref())?;
            let verifiers = payload::normalize_gateway_response(&read_json(&verifiers)?)
                .context("Gateway-Response nicht auswertbar")?;
            let territories = payload::normalize_territory_group(&read_json(&territories)?)
                .context("Territoriums-Response nicht auswertbar")?;
            let tables = aggregate::gateway_table(&verifiers, &territories, &catalog);
            emit(&tables, cli.pretty)
        }
        Command::GroupRoutes { input } => {
            let routes = payload::normalize_filter_route_response(&read_json(&input)?)
                .context("Filter-Route-Response nicht auswertbar")?;
            emit(
                &aggregate::group_routes(&routes.uplink, &routes.downlink),
                cli.pretty,
            )
        }
        Command::ChartSeries { input } => {
            let trend = payload::normalize_trend_response(&read_json(&input)?)
                .context("Trend-Response nicht auswertbar")?;
            emit(&aggregate::region_charts(&trend), cli.pretty)
        }
        Command::PathNodes { input } => {
            let routes = payload::normalize_filter_route_response(&read_json(&input)?)
                .context("Filter-Route-Response nicht auswertbar")?;
            let nodes: indexmap::IndexMap<String, RouteNodes> =
                aggregate::group_routes(&routes.uplink, &routes.downlink)
                    .into_iter()
                    .map(|(ebr, group)| {
                        let uplink = group
                            .uplink
                            .map(|u| aggregate::map_path_nodes(&u.paths))
                            .unwrap_or_default();
                        let downlink = group
                            .downlink
                            .map(|d| aggregate::map_path_nodes(&d.paths))
                            .unwrap_or_default();
                        (ebr, RouteNodes { uplink, downlink })
                    })
                    .collect();
            emit(&nodes, cli.pretty)
        }
    }
}

/// Parsed `lon,lat` in einen Punkt
fn parse_lon_lat(raw: &str) -> Result<DVec2, String> {
    let (lon, lat) = raw
        .split_once(',')
        .ok_or_else(|| format!("'{}': erwartet lon,lat", raw))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .map_err(|e| format!("Laengengrad '{}': {}", lon.trim(), e))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("Breitengrad '{}': {}", lat.trim(), e))?;
    Ok(DVec2::new(lon, lat))
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<ReferenceCatalog> {
    ReferenceCatalog::load_or_builtin(path).with_context(|| match path {
        Some(path) => format!("Katalog {} nicht ladbar", path.display()),
        None => "Eingebetteter Katalog nicht ladbar".to_string(),
    })
}

/// Liest eine Datei oder stdin (`-`) und dekodiert sie als JSON
fn read_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("stdin nicht lesbar")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Datei {} nicht lesbar", path.display()))?
    };
    payload::parse_body(&text).with_context(|| format!("Eingabe {}", path.display()))
}

fn emit<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", json);
    Ok(())
}
