//! Orbit counts returned by the transform and graph level graphlet census.



use ndarray::{Array2, ArrayView1};

use super::NB_ORBITS;


/// Describes net orbits, index is the row in count matrices.
pub const ORBIT_NAMES: [&str; NB_ORBITS] = [
    "vertex",
    "edge",
    "2-path end",
    "2-path center",
    "triangle",
    "3-path end",
    "3-path interior",
    "claw leaf",
    "claw center",
    "paw tail",
    "paw base",
    "paw center",
    "4-cycle",
    "diamond off-chord",
    "diamond on-chord",
    "4-clique",
];


/// The connected graphlets with at most 4 vertices, in increasing order of size then density.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Graphlet {
    Vertex,
    Edge,
    Path2,
    Triangle,
    Path3,
    Claw,
    Paw,
    Cycle4,
    Diamond,
    Clique4,
}

impl Graphlet {
    pub const ALL: [Graphlet; 10] = [
        Graphlet::Vertex,
        Graphlet::Edge,
        Graphlet::Path2,
        Graphlet::Triangle,
        Graphlet::Path3,
        Graphlet::Claw,
        Graphlet::Paw,
        Graphlet::Cycle4,
        Graphlet::Diamond,
        Graphlet::Clique4,
    ];

    /// an orbit of the graphlet and the number of vertices of one occurrence lying in that orbit
    pub fn counting_orbit(&self) -> (usize, f64) {
        match self {
            Graphlet::Vertex => (0, 1.),
            Graphlet::Edge => (1, 2.),
            Graphlet::Path2 => (3, 1.),
            Graphlet::Triangle => (4, 3.),
            Graphlet::Path3 => (6, 2.),
            Graphlet::Claw => (8, 1.),
            Graphlet::Paw => (11, 1.),
            Graphlet::Cycle4 => (12, 4.),
            Graphlet::Diamond => (13, 2.),
            Graphlet::Clique4 => (15, 4.),
        }
    }
} // end of impl Graphlet



/// Number of induced occurrences of each graphlet in a graph
#[derive(Clone, Debug)]
pub struct GraphletCensus {
    counts: [f64; 10],
}

impl GraphletCensus {
    /// net is a 16 x nb_nodes matrix of net orbit counts
    pub fn from_net(net: &Array2<f64>) -> Self {
        assert_eq!(net.nrows(), NB_ORBITS);
        let mut counts = [0.; 10];
        for (rank, graphlet) in Graphlet::ALL.iter().enumerate() {
            let (orbit, multiplicity) = graphlet.counting_orbit();
            counts[rank] = net.row(orbit).sum() / multiplicity;
        }
        GraphletCensus { counts }
    }

    pub fn get_count(&self, graphlet: Graphlet) -> f64 {
        // variants are declared in the order of ALL
        self.counts[graphlet as usize]
    }

    pub fn dump(&self) {
        for (rank, graphlet) in Graphlet::ALL.iter().enumerate() {
            log::info!("graphlet {:?} : {:.0}", graphlet, self.counts[rank]);
        }
    }
} // end of impl GraphletCensus



/// Result of the transform
pub struct FgltResult {
    /// raw counts, 16 x nb_nodes
    raw: Array2<f64>,
    /// net counts, 16 x nb_nodes
    net: Array2<f64>,
    /// for each adjacency entry, number of common neighbours of its two vertices
    edge_triangles: Vec<f64>,
} // end of struct FgltResult


impl FgltResult {
    pub(crate) fn new(raw: Array2<f64>, net: Array2<f64>, edge_triangles: Vec<f64>) -> Self {
        FgltResult { raw, net, edge_triangles }
    }

    pub fn get_nb_nodes(&self) -> usize {
        self.net.ncols()
    }

    /// raw counts, row o is raw orbit o
    pub fn get_raw(&self) -> &Array2<f64> {
        &self.raw
    }

    /// net counts, row o is net orbit o, column i the graphlet degree vector of vertex i
    pub fn get_net(&self) -> &Array2<f64> {
        &self.net
    }

    /// graphlet degree vector of vertex i
    pub fn get_gdv(&self, i: usize) -> ArrayView1<f64> {
        self.net.column(i)
    }

    /// indexed as the column index array of the adjacency
    pub fn get_edge_triangles(&self) -> &[f64] {
        &self.edge_triangles
    }

    pub fn get_census(&self) -> GraphletCensus {
        GraphletCensus::from_net(&self.net)
    }

    /// gives back raw, net matrices and the per edge common neighbours
    pub fn into_parts(self) -> (Array2<f64>, Array2<f64>, Vec<f64>) {
        (self.raw, self.net, self.edge_triangles)
    }
} // end of impl FgltResult

//=========================================================================================

// end of mod tests
