//! This module implements the graphlet transform described in:
//!
//! *Fast Graphlet Transform of Sparse Graphs*. D. Floros, N. Pitsianis, X. Sun. HPEC 2020.
//! <https://arxiv.org/abs/2007.11111>
//!
//! For each vertex we get counts of the 16 orbits of connected graphlets with at most 4 vertices
//! (the graphlet degree vector). Counts are first obtained in a raw form (number of non induced occurrences),
//! from degrees, sums over neighbours and common neighbour scans, without enumerating subgraphs.
//! A fixed linear map then converts them to net (induced) orbit counts.
//!
//! Orbits (net numbering, see [ORBIT_NAMES]):
//! 0 vertex, 1 edge, 2-3 path on 3 vertices (end, center), 4 triangle, 5-6 path on 4 vertices (end, interior),
//! 7-8 claw (leaf, center), 9-11 paw (tail, base, center), 12 4-cycle, 13-14 diamond (off chord, on chord), 15 4-clique.

/// number of orbits of graphlets with at most 4 vertices
pub const NB_ORBITS: usize = 16;

pub mod params;
pub use params::{get_workers, FgltParams};

pub(crate) mod scratch;
pub(crate) mod counters;
pub(crate) mod scanner;

pub mod raw2net;
pub use raw2net::{net2raw, raw2net, raw_to_net};

pub mod orbits;
pub use orbits::{FgltResult, Graphlet, GraphletCensus, ORBIT_NAMES};

pub mod compute;
pub use compute::Fglt;
