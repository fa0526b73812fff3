//! Reference computations used to check the graphlet transform.

/// exhaustive enumeration of small induced subgraphs
pub mod bruteforce;
pub use bruteforce::brute_force_orbits;
