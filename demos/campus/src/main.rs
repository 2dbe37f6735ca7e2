//! campus — end-to-end demo for the campus_nav framework.
//!
//! Builds the reference campus layout (9 hubs, 5 roads), plans a walking
//! route from the Main Gate to the Library, and drives the motion
//! simulator with synthetic time steps until arrival.  Swap the embedded
//! JSON for files on disk to navigate a different campus without touching
//! code.

use std::io::Cursor;

use anyhow::Result;

use nav_core::Point;
use nav_motion::MotionSimulator;
use nav_route::{BuildingDirectory, RoutePlanner};
use nav_spatial::LayoutConfig;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Where the user starts: the Main Gate, just north of the entrance road.
const ORIGIN: Point = Point { x: 400.0, y: 50.0 };
const DESTINATION: &str = "Library";

/// Plane units per millisecond of elapsed time.
const WALK_SPEED: f32 = 0.05;
/// Synthetic time step between ticks, in milliseconds.
const TICK_STEP_MS: f32 = 1_000.0;

/// Display scale: one plane unit ≈ 1.5 m on the real campus.
const METERS_PER_UNIT: f32 = 1.5;

// ── Reference campus layout ───────────────────────────────────────────────────

const LAYOUT_JSON: &str = r#"{
  "hubs": [
    { "id": "entrance", "x": 400.0, "y": 90.0 },
    { "id": "quad",     "x": 400.0, "y": 220.0 },
    { "id": "plaza",    "x": 400.0, "y": 340.0 },
    { "id": "parking",  "x": 400.0, "y": 470.0 },
    { "id": "admin",    "x": 230.0, "y": 170.0 },
    { "id": "library",  "x": 230.0, "y": 320.0 },
    { "id": "arts",     "x": 570.0, "y": 170.0 },
    { "id": "res",      "x": 570.0, "y": 380.0 },
    { "id": "sports",   "x": 230.0, "y": 490.0 }
  ],
  "adjacency": {
    "entrance": ["quad"],
    "quad":     ["entrance", "plaza", "admin", "arts"],
    "plaza":    ["quad", "parking", "library", "res"],
    "parking":  ["plaza", "sports"],
    "admin":    ["quad", "library"],
    "library":  ["admin", "plaza", "sports"],
    "arts":     ["quad", "res"],
    "res":      ["arts", "plaza"],
    "sports":   ["library", "parking"]
  },
  "segments": [
    { "orientation": "horizontal", "fixed": 90.0,  "start": 20.0,  "end": 780.0 },
    { "orientation": "horizontal", "fixed": 340.0, "start": 230.0, "end": 570.0 },
    { "orientation": "vertical",   "fixed": 230.0, "start": 90.0,  "end": 590.0 },
    { "orientation": "vertical",   "fixed": 400.0, "start": 90.0,  "end": 590.0 },
    { "orientation": "vertical",   "fixed": 570.0, "start": 90.0,  "end": 590.0 }
  ],
  "snap_tolerance": 5.0
}"#;

const BUILDINGS_JSON: &str = r#"[
  { "name": "Library",        "rect": { "x": 100.0, "y": 300.0, "width": 100.0, "height": 80.0 } },
  { "name": "Admin Block",    "rect": { "x": 150.0, "y": 120.0, "width": 120.0, "height": 80.0 } },
  { "name": "Arts Center",    "rect": { "x": 540.0, "y": 120.0, "width": 120.0, "height": 90.0 } },
  { "name": "Residence Hall", "rect": { "x": 520.0, "y": 350.0, "width": 120.0, "height": 80.0 } },
  { "name": "Sports Complex", "rect": { "x": 150.0, "y": 460.0, "width": 140.0, "height": 90.0 } }
]"#;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== campus — campus_nav walking demo ===");
    println!();

    // 1. Build the road network from the layout config.
    let layout = LayoutConfig::from_json_reader(Cursor::new(LAYOUT_JSON))?;
    let network = layout.build_network()?;
    println!(
        "Road network: {} hubs, {} segments",
        network.hub_count(),
        network.segment_count()
    );

    // 2. Load the building snapshot.
    let buildings = BuildingDirectory::from_json_reader(Cursor::new(BUILDINGS_JSON))?;
    println!("Buildings: {}", buildings.len());
    for b in buildings.iter() {
        println!("  {:<16} center {}", b.name, b.center());
    }
    println!();

    // 3. Plan the route.
    let planner = RoutePlanner::new(&network, layout.snap_tolerance);
    let route = planner.plan(Some(ORIGIN), DESTINATION, &buildings)?;

    println!("Route {ORIGIN} -> {DESTINATION}:");
    let hubs: Vec<&str> = route.hub_path.iter().map(|&h| network.hub_ident(h)).collect();
    println!("  hub path : {}", hubs.join(" -> "));
    println!("  waypoints:");
    for (i, w) in route.waypoints.iter().enumerate() {
        println!("    {i:>2}  {w}");
    }
    println!(
        "  length {:.0} units (~{:.0} m), ETA {:.0} ms at {WALK_SPEED} units/ms",
        route.total_length,
        route.total_length * METERS_PER_UNIT,
        route.estimated_travel_time(WALK_SPEED)
    );
    println!();

    // 4. Walk it with synthetic time.
    let mut sim = MotionSimulator::new(route.waypoints.clone(), WALK_SPEED)?;
    println!("{:>10}  {:>16}  {:>9}  {}", "elapsed", "position", "progress", "arrived");
    println!("{}", "-".repeat(48));

    let mut elapsed = 0.0f32;
    loop {
        let state = sim.tick(elapsed);
        println!(
            "{:>8.0}ms  {:>16}  {:>8.1}%  {}",
            elapsed,
            state.position.to_string(),
            state.progress_fraction * 100.0,
            if state.arrived { "yes" } else { "no" }
        );
        if state.arrived {
            break;
        }
        elapsed += TICK_STEP_MS;
    }

    println!();
    println!("Arrived at {} after {:.0} ms of walking", sim.state().position, elapsed);

    Ok(())
}
