//! Graph representation used by the graphlet transform.
//!
//! The transform works on a read-only compressed sparse row adjacency ([CsrAdjacency]):
//! a row offset array of length n+1 and a column index array of length m, each undirected edge
//! appearing twice.
//! [CsrGraph] owns such an adjacency and can be built from an edge list, a sprs matrix or a petgraph graph.

pub mod adjacency;
pub use adjacency::CsrAdjacency;

pub mod csrgraph;
pub use csrgraph::CsrGraph;
