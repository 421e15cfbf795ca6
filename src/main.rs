use clap::{Parser, Subcommand};
use sdwater::record::{FIX_MARKER, FIX_MARKER_OFFSET};
use sdwater::sector::GRID_SIZE;
use sdwater::{SectorIndex, SectorStore, KNOWN_MATERIALS, NO_MATERIAL};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sdwater", about = "Water-block editor for .csdat sector save files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the 16x16 sector map with water presence per cell
    Map {
        /// Folder containing the sd<N>.csdat files
        folder: PathBuf,
        /// Emit the probe results as JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
    /// Show one sector's water fields
    Show {
        folder: PathBuf,
        /// Sector: decimal index 0-255, or grid cell "x,y"
        sector: SectorIndex,
        #[arg(long)]
        json: bool,
    },
    /// Stamp the water-block template into a sector that has none yet
    Add {
        folder: PathBuf,
        sector: SectorIndex,
    },
    /// Write water height and/or material into a sector
    Set {
        folder: PathBuf,
        sector: SectorIndex,
        /// Water height in meters, 0.0-50.0
        #[arg(long)]
        height: Option<f32>,
        /// Material path, a catalogue index from `materials`, or "00" for none
        #[arg(long)]
        material: Option<String>,
    },
    /// Clear a sector's water block
    Reset {
        folder: PathBuf,
        sector: SectorIndex,
    },
    /// List the known water material paths
    Materials,
}

#[derive(Serialize)]
struct SectorReport {
    sector: SectorIndex,
    x: u8,
    y: u8,
    water: bool,
    height: f32,
    material: String,
    fix_marker: String,
}

#[derive(Serialize)]
struct MapCell {
    sector: SectorIndex,
    x: u8,
    y: u8,
    water: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match Cli::parse().command {

        // ── Map ──────────────────────────────────────────────────────────────
        Commands::Map { folder, json } => {
            let store = SectorStore::open(&folder);
            if json {
                let cells: Vec<MapCell> = SectorIndex::all()
                    .map(|s| MapCell { sector: s, x: s.x(), y: s.y(), water: store.probe(s) })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&cells)?);
            } else {
                print_map(&store);
            }
        }

        // ── Show ─────────────────────────────────────────────────────────────
        Commands::Show { folder, sector, json } => {
            let store = SectorStore::open(&folder);
            let report = build_report(&store, sector)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let status = if report.water { "has water" } else { "no water" };
                println!("Sector {} ({},{}) — {}", report.sector, report.x, report.y, status);
                println!("  Height     {:.2} m", report.height);
                println!("  Material   {}", report.material);
                println!("  Fix marker {}{}", report.fix_marker,
                         if report.fix_marker == hex::encode(FIX_MARKER) { "" } else { "  (INVALID)" });
            }
        }

        // ── Add ──────────────────────────────────────────────────────────────
        Commands::Add { folder, sector } => {
            let store = SectorStore::open(&folder);
            let fields = store.add_water_block(sector)?;
            println!("Water block added to sector {sector}.");
            println!("Template defaults: height {:.2} m, material {}", fields.height, fields.path);
            println!("Adjust with: sdwater set {} {} --height H --material PATH",
                     folder.display(), sector);
        }

        // ── Set ──────────────────────────────────────────────────────────────
        Commands::Set { folder, sector, height, material } => {
            let store = SectorStore::open(&folder);
            // Unspecified fields keep their current stored values, the way the
            // original editor saved whatever the form was loaded with.
            let current = store.load(sector)?;
            let height = height.unwrap_or(current.height);
            if !(0.0..=50.0).contains(&height) {
                return Err(format!("Height {height} out of range (0.0-50.0)").into());
            }
            let material = match material {
                Some(m) => resolve_material(&m),
                None => current.path,
            };
            store.save(sector, height, &material)?;
            println!("Sector {sector} saved: height {height:.2} m, material {material}");
        }

        // ── Reset ────────────────────────────────────────────────────────────
        Commands::Reset { folder, sector } => {
            let store = SectorStore::open(&folder);
            store.reset(sector)?;
            println!("Sector {sector} reset: water cleared.");
        }

        // ── Materials ────────────────────────────────────────────────────────
        Commands::Materials => {
            println!("{:<4} Path", "#");
            for (i, path) in KNOWN_MATERIALS.iter().enumerate() {
                println!("{i:<4} {path}");
            }
            println!("{:<4} {NO_MATERIAL} (no material)", KNOWN_MATERIALS.len());
        }
    }

    Ok(())
}

// ── helpers ──────────────────────────────────────────────────────────────────

/// Draw the grid the way the original editor did: y=15 on the top row.
/// `~` water, `.` empty, space for a missing record file.
fn print_map(store: &SectorStore) {
    let mut water_count = 0usize;
    for y in (0..GRID_SIZE).rev() {
        print!("{y:>2} ");
        for x in 0..GRID_SIZE {
            let sector = SectorIndex::from_grid(x, y).unwrap();
            let cell = if store.probe(sector) {
                water_count += 1;
                '~'
            } else if store.exists(sector) {
                '.'
            } else {
                ' '
            };
            print!(" {cell}");
        }
        println!();
    }
    print!("   ");
    for x in 0..GRID_SIZE {
        print!("{:>2}", x % 10);
    }
    println!();
    println!("{water_count} sector(s) with water");
}

fn build_report(store: &SectorStore, sector: SectorIndex) -> Result<SectorReport, Box<dyn std::error::Error>> {
    let fields = store.load(sector)?;
    // Read the raw record once more for the marker bytes.
    let data = std::fs::read(store.record_path(sector))?;
    let marker_end = FIX_MARKER_OFFSET + FIX_MARKER.len();
    let marker = if data.len() >= marker_end {
        hex::encode(&data[FIX_MARKER_OFFSET..marker_end])
    } else {
        String::from("absent")
    };
    Ok(SectorReport {
        sector,
        x: sector.x(),
        y: sector.y(),
        water: sdwater::probe_water(&data),
        height: fields.height,
        material: fields.path,
        fix_marker: marker,
    })
}

/// Accept a catalogue index ("2"), a full path, or the "00" sentinel.
/// "00" is checked before index parsing — it is the no-material sentinel,
/// never catalogue entry zero.
fn resolve_material(arg: &str) -> String {
    if arg.is_empty() || arg == NO_MATERIAL {
        return NO_MATERIAL.to_owned();
    }
    if let Ok(i) = arg.parse::<usize>() {
        if let Some(path) = KNOWN_MATERIALS.get(i) {
            return (*path).to_owned();
        }
    }
    arg.to_owned()
}
