//! To ease access to most frequently items
//! 


pub use crate::graph::{CsrAdjacency, CsrGraph};

pub use crate::fglt::*;

pub use crate::validation::brute_force_orbits;
