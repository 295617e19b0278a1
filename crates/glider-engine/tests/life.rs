//! End-to-end generation tests: classic Life patterns driven through
//! the full protocol stack (simulator, stepper, counter, pump).

use glider_engine::{run_generation, GenerationSimulator};
use glider_test_utils::{grid_from_rows, random_soup, seeded_grid, GLIDER, TOAD};

#[test]
fn blinker_oscillates_with_period_two() {
    let start = grid_from_rows(&[
        "-----", //
        "-----",
        "-***-",
        "-----",
        "-----",
    ]);
    let vertical = grid_from_rows(&[
        "-----", //
        "--*--",
        "--*--",
        "--*--",
        "-----",
    ]);

    let mut sim = GenerationSimulator::new(5, 5).unwrap();
    let first = run_generation(&start, &mut sim).unwrap();
    assert_eq!(first, vertical);

    let second = run_generation(&first, &mut sim).unwrap();
    assert_eq!(second, start);
}

#[test]
fn block_is_a_still_life() {
    let start = grid_from_rows(&[
        "-----", //
        "-**--",
        "-**--",
        "-----",
        "-----",
    ]);

    let mut sim = GenerationSimulator::new(5, 5).unwrap();
    let mut grid = start.clone();
    for generation in 0..6 {
        grid = run_generation(&grid, &mut sim).unwrap();
        assert_eq!(grid, start, "changed at generation {generation}");
    }
}

#[test]
fn toad_oscillates_with_period_two() {
    let start = seeded_grid(6, 6, TOAD);
    let flipped = seeded_grid(6, 6, &[(1, 3), (2, 1), (2, 4), (3, 1), (3, 4), (4, 2)]);

    let mut sim = GenerationSimulator::new(6, 6).unwrap();
    let first = run_generation(&start, &mut sim).unwrap();
    assert_eq!(first, flipped);

    let second = run_generation(&first, &mut sim).unwrap();
    assert_eq!(second, start);
}

#[test]
fn lone_cell_goes_extinct_and_stays_extinct() {
    let start = seeded_grid(5, 5, &[(2, 2)]);

    let mut sim = GenerationSimulator::new(5, 5).unwrap();
    let first = run_generation(&start, &mut sim).unwrap();
    assert_eq!(first.live_count(), 0);

    let second = run_generation(&first, &mut sim).unwrap();
    assert_eq!(second.live_count(), 0);
}

#[test]
fn glider_translates_across_the_torus() {
    let start = seeded_grid(8, 8, GLIDER);
    let shifted: Vec<(i32, i32)> = GLIDER.iter().map(|&(r, c)| (r + 1, c + 1)).collect();

    let mut sim = GenerationSimulator::new(8, 8).unwrap();
    let mut grid = start.clone();
    for _ in 0..4 {
        let next = run_generation(&grid, &mut sim).unwrap();
        assert_eq!(next.live_count(), 5);
        assert_ne!(next, grid);
        grid = next;
    }
    assert_eq!(grid, seeded_grid(8, 8, &shifted));
}

#[test]
fn rerun_with_fresh_simulators_is_identical() {
    let source = random_soup(12, 12, 0.35, 7);

    let mut sim_a = GenerationSimulator::new(12, 12).unwrap();
    let mut sim_b = GenerationSimulator::new(12, 12).unwrap();

    let mut a = source.clone();
    let mut b = source.clone();
    for generation in 0..3 {
        a = run_generation(&a, &mut sim_a).unwrap();
        b = run_generation(&b, &mut sim_b).unwrap();
        assert_eq!(a, b, "diverged at generation {generation}");
    }
}
