//! Headless dashboard front end.
//!
//! # Responsibility
//! - Load both survey documents and drive the dashboard handlers from the
//!   command line, using the in-memory map collaborators.
//! - Print the same view models the page would render.

use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use stonewall_core::{
    core_version, default_log_level, init_logging, ClusterLayer, Dashboard, DashboardConfig,
    EntryId, LoadState, MemoryClusterLayer, MemoryMapSurface,
};

const HEADLESS_WIDTH_PX: u32 = 1280;

type HeadlessDashboard = Dashboard<MemoryMapSurface, MemoryClusterLayer>;

#[derive(Debug, Parser)]
#[command(name = "stonewall", version, about = "Stone wall survey dashboard, headless")]
struct Cli {
    /// JSON config file; defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Point-entry GeoJSON (overrides config).
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Wall geometry GeoJSON (overrides config).
    #[arg(long, global = true)]
    walls: Option<PathBuf>,
    /// Absolute directory for rolling log files. Logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load states, counts, vocabularies and wall extent.
    Summary,
    /// Apply filters and list the visible entries.
    Filter {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "")]
        wall_type: String,
        #[arg(long, default_value = "")]
        vegetation: String,
    },
    /// Newest entries as feed cards.
    Recent {
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Focus the map on one entry and show its popup.
    Focus { entry_id: String },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("warning: {err}");
        }
    }

    let mut config = match cli.config.as_ref() {
        Some(path) => match DashboardConfig::load(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => DashboardConfig::default(),
    };
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(walls) = cli.walls {
        config.walls_path = walls;
    }
    if let Command::Recent { limit: Some(limit) } = cli.command {
        config.recent_entry_count = limit;
    }

    let mut dashboard = Dashboard::open(
        config,
        MemoryMapSurface::new(),
        MemoryClusterLayer::default(),
        HEADLESS_WIDTH_PX,
    );

    if let LoadState::Failed { message } = dashboard.entries() {
        error!("event=cli_run module=cli status=error reason=entries_unavailable");
        eprintln!("error: {message}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Command::Summary => print_summary(&dashboard),
        Command::Filter {
            query,
            wall_type,
            vegetation,
        } => run_filter(&mut dashboard, &query, &wall_type, &vegetation),
        Command::Recent { .. } => print_recent(&dashboard),
        Command::Focus { entry_id } => return run_focus(&mut dashboard, &entry_id),
    }
    ExitCode::SUCCESS
}

fn print_summary(dashboard: &HeadlessDashboard) {
    println!("stonewall version={}", core_version());
    for (layer, tiles) in &dashboard.map().base_layers {
        let marker = if *layer == dashboard.base_layer() { "*" } else { " " };
        println!("{marker} base layer {layer}: {}", tiles.url_template);
    }
    match dashboard.walls() {
        LoadState::Ready(walls) => {
            let bounds = walls.bounds();
            println!(
                "walls: {} paths, {} vertices",
                walls.paths().len(),
                walls.vertex_count()
            );
            if bounds.is_valid() {
                println!(
                    "walls extent: S {:.5} W {:.5} N {:.5} E {:.5}",
                    bounds.south, bounds.west, bounds.north, bounds.east
                );
            }
        }
        LoadState::Failed { message } => println!("walls: unavailable ({message})"),
        LoadState::Pending => println!("walls: pending"),
    }
    if let Some(notice) = dashboard.map_notice() {
        println!("notice: {notice}");
    }

    if let Some(engine) = dashboard.engine() {
        println!(
            "entries: {} total, {} on map {}",
            engine.features().len(),
            engine.layer().markers().len(),
            dashboard.entry_count_label()
        );
        let cluster = engine.layer().options();
        println!(
            "clustering: radius {}px, off from zoom {}",
            cluster.max_cluster_radius, cluster.disable_clustering_at_zoom
        );
    }
    println!("wall types:");
    for option in dashboard.wall_type_options() {
        println!("  {}", option.label);
    }
    println!("vegetation:");
    for option in dashboard.vegetation_options() {
        println!("  {}", option.label);
    }
}

fn run_filter(dashboard: &mut HeadlessDashboard, query: &str, wall_type: &str, vegetation: &str) {
    dashboard.on_search_input(query);
    dashboard.on_wall_type_change(wall_type);
    let matched = dashboard.on_vegetation_change(vegetation).unwrap_or(0);

    let Some(engine) = dashboard.engine() else {
        return;
    };
    for marker in engine.layer().markers() {
        println!(
            "{}\t{:.6}\t{:.6}",
            marker.entry_id, marker.position.lat, marker.position.lng
        );
    }
    println!(
        "{} matching, {} on map, {} total",
        matched,
        engine.layer().markers().len(),
        engine.features().len()
    );
}

fn print_recent(dashboard: &HeadlessDashboard) {
    println!("Recent entries {}", dashboard.entry_count_label());
    for card in dashboard.recent_cards() {
        println!("[{}] {}", card.entry_id, card.date_label);
        println!("  {}", card.summary);
        println!("  {}", card.collected_by);
    }
}

fn run_focus(dashboard: &mut HeadlessDashboard, entry_id: &str) -> ExitCode {
    let entry_id = EntryId::new(entry_id);
    if !dashboard.on_recent_entry_selected(&entry_id) {
        eprintln!("error: no marker for entry `{entry_id}`");
        return ExitCode::FAILURE;
    }

    if let Some((center, zoom)) = dashboard.map().view {
        println!("view: {:.6}, {:.6} @ zoom {}", center.lat, center.lng, zoom);
    }
    if let Some(marker) = dashboard
        .engine()
        .and_then(|engine| engine.marker(&entry_id))
    {
        println!("{}", marker.popup_html);
    }
    ExitCode::SUCCESS
}
