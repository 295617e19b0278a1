//! Test fixtures and pattern library for glider development.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    grid_from_rows, pattern_library, random_soup, seeded_grid, BLINKER, BLOCK, GLIDER,
    R_PENTOMINO, TOAD,
};
