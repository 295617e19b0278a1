//! glider quickstart: a complete, minimal run from scratch.
//!
//! Demonstrates:
//!   1. Building a toroidal grid and seeding an initial pattern
//!   2. Constructing one GenerationSimulator for repeated pumping
//!   3. Running generations and reading the per-generation metrics
//!   4. Rendering grids (all rows, `*` alive / `-` dead)
//!
//! Run with:
//!   cargo run --example quickstart

use glider_core::CellState;
use glider_engine::{run_generation_metered, GenerationSimulator};
use glider_grid::Grid;

// ─── Grid parameters ────────────────────────────────────────────

const ROWS: u32 = 5;
const COLS: u32 = 9;

// Initial pattern: a glider near the top-left corner.
const SEED: [(i32, i32); 5] = [(0, 3), (1, 4), (2, 3), (2, 4), (2, 5)];

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== glider quickstart ===\n");

    // 1. Build and seed the starting grid.
    let mut grid = Grid::new(ROWS, COLS)?;
    for (row, col) in SEED {
        grid.assign(row, col, CellState::Alive);
    }
    println!(
        "Grid: {}x{} torus, {} cells, {} alive",
        ROWS,
        COLS,
        grid.cell_count(),
        grid.live_count(),
    );
    println!("{grid}");

    // 2. One simulator serves every generation.
    let mut sim = GenerationSimulator::new(ROWS, COLS)?;

    // 3. Pump five generations, printing each result.
    for generation in 1..=5 {
        let (next, metrics) = run_generation_metered(&grid, &mut sim)?;
        println!(
            "Generation {generation}: {} alive, {} queries resolved, {}us",
            next.live_count(),
            metrics.queries_resolved,
            metrics.total_us,
        );
        println!("{next}");
        grid = next;
    }

    println!("Done.");
    Ok(())
}
