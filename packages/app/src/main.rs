#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the incident map.

use clap::{Parser, Subcommand};
use incident_map_app::{COUNTIES_ENV, INCIDENTS_ENV, resolve_source, states_by_killed, top_counties};
use incident_map_session::{MapSession, SessionConfig};

#[derive(Parser)]
#[command(name = "incident_map", about = "US incident map session")]
struct Cli {
    /// Topology document URL or path (falls back to `INCIDENT_MAP_COUNTIES`)
    #[arg(long, global = true)]
    counties: Option<String>,

    /// Incident table URL or path (falls back to `INCIDENT_MAP_INCIDENTS`)
    #[arg(long, global = true)]
    incidents: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print per-state and top-county victim totals
    Summary {
        /// Number of counties to list
        #[arg(long, default_value = "10")]
        limit: usize,
    },
    /// Write the county features as GeoJSON
    Export {
        /// Output file; stdout if not set
        #[arg(long)]
        output: Option<String>,
    },
    /// Drive the map session from an interactive menu
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = SessionConfig::new(
        resolve_source(cli.counties, "counties", COUNTIES_ENV)?,
        resolve_source(cli.incidents, "incidents", INCIDENTS_ENV)?,
    );

    let session = MapSession::load(&config).await?;

    match cli.command {
        None | Some(Commands::Interactive) => incident_map_app::interactive::run(session)?,
        Some(Commands::Summary { limit }) => print_summary(&session, limit),
        Some(Commands::Export { output }) => export_geojson(&session, output.as_deref())?,
    }

    Ok(())
}

fn print_summary(session: &MapSession, limit: usize) {
    println!("{:<20} {:>8} {:>8}", "STATE", "KILLED", "INJURED");
    println!("{}", "-".repeat(38));
    for (name, totals) in states_by_killed(session) {
        println!("{:<20} {:>8} {:>8}", name, totals.killed, totals.injured);
    }

    println!();
    println!("{:<25} {:>8} {:>8}", "COUNTY / CITY", "KILLED", "INJURED");
    println!("{}", "-".repeat(43));
    for (name, killed, injured) in top_counties(session, limit) {
        println!("{name:<25} {killed:>8} {injured:>8}");
    }

    println!();
    println!(
        "{} of {} mapped counties have incident data",
        session.common_counties().len(),
        session
            .features
            .iter()
            .filter(|f| f.kind == incident_map_session::FeatureKind::County)
            .count()
    );
}

fn export_geojson(
    session: &MapSession,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let collection = session.county_feature_collection();
    let json = serde_json::to_string_pretty(&collection)?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            log::info!("Wrote {} county features to {path}", collection.features.len());
        }
        None => println!("{json}"),
    }

    Ok(())
}
