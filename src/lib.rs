//! lib target
//!
//! Per vertex graphlet degree vectors (graphlets up to 4 vertices) of large sparse undirected graphs,
//! computed by the fast graphlet transform. See module [fglt].


pub mod graph;

pub mod fglt;

pub mod validation;

pub mod prelude;
