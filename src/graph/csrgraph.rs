//! Owned compressed adjacency built from edge lists, sprs matrices or petgraph graphs.
//!
//! Construction goes through a sprs triplet matrix: both orientations of each edge are added,
//! self loops are skipped and the conversion to csr merges duplicated edges.



use anyhow::anyhow;

use sprs::{CsMatI, TriMatI};

use petgraph::graph::{Graph, IndexType};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;

use super::adjacency::CsrAdjacency;


/// An undirected, loop free, simple graph stored in compressed sparse row form.
#[derive(Clone, Debug)]
pub struct CsrGraph {
    row_offset: Vec<usize>,
    col_index: Vec<usize>,
} // end of struct CsrGraph


impl CsrGraph {
    // takes a triplet matrix already symmetrised
    fn from_trimat(trimat: TriMatI<f64, usize>) -> Self {
        let csmat: CsMatI<f64, usize> = trimat.to_csr();
        let (row_offset, col_index, _data) = csmat.into_raw_storage();
        log::debug!(
            "CsrGraph nb_nodes : {}, nb edge entries : {}",
            row_offset.len() - 1,
            col_index.len()
        );
        CsrGraph { row_offset, col_index }
    }

    /// builds a graph with nodes 0..nb_nodes from a list of undirected edges.
    /// Orientation of edges is irrelevant, duplicates are merged and self loops dropped.
    pub fn from_edges(nb_nodes: usize, edges: &[(usize, usize)]) -> anyhow::Result<Self> {
        let mut trimat = TriMatI::<f64, usize>::with_capacity((nb_nodes, nb_nodes), 2 * edges.len());
        for &(i, j) in edges {
            if i >= nb_nodes || j >= nb_nodes {
                log::error!("CsrGraph::from_edges edge ({},{}) out of range, nb_nodes : {}", i, j, nb_nodes);
                return Err(anyhow!("edge ({},{}) out of range, nb_nodes : {}", i, j, nb_nodes));
            }
            if i != j {
                trimat.add_triplet(i, j, 1.);
                trimat.add_triplet(j, i, 1.);
            }
        }
        Ok(CsrGraph::from_trimat(trimat))
    } // end of from_edges

    /// takes the pattern of a square sparse matrix, symmetrised. Diagonal terms are dropped.
    pub fn from_csmat<F>(csmat: &CsMatI<F, usize>) -> anyhow::Result<Self> {
        let (nb_row, nb_col) = csmat.shape();
        if nb_row != nb_col {
            return Err(anyhow!("CsrGraph::from_csmat needs a square matrix, got ({},{})", nb_row, nb_col));
        }
        let mut trimat = TriMatI::<f64, usize>::with_capacity((nb_row, nb_row), 2 * csmat.nnz());
        let mut iter = csmat.iter();
        while let Some((_val, (i, j))) = iter.next() {
            if i != j {
                trimat.add_triplet(i, j, 1.);
                trimat.add_triplet(j, i, 1.);
            }
        }
        Ok(CsrGraph::from_trimat(trimat))
    } // end of from_csmat

    /// converts an undirected petgraph graph, node i of the result is NodeIndex::new(i)
    pub fn from_petgraph<N, E, Ix>(graph: &Graph<N, E, Undirected, Ix>) -> Self
    where
        Ix: IndexType,
    {
        let nb_nodes = graph.node_count();
        let mut trimat = TriMatI::<f64, usize>::with_capacity((nb_nodes, nb_nodes), 2 * graph.edge_count());
        for edge in graph.edge_references() {
            let (i, j) = (edge.source().index(), edge.target().index());
            if i != j {
                trimat.add_triplet(i, j, 1.);
                trimat.add_triplet(j, i, 1.);
            }
        }
        CsrGraph::from_trimat(trimat)
    } // end of from_petgraph

    /// the view on which the transform operates
    pub fn view(&self) -> CsrAdjacency<'_> {
        CsrAdjacency::new(&self.row_offset, &self.col_index)
    }

    pub fn get_nb_nodes(&self) -> usize {
        self.row_offset.len() - 1
    }

    /// number of undirected edges
    pub fn get_nb_edges(&self) -> usize {
        self.col_index.len() / 2
    }
} // end of impl CsrGraph

//=========================================================================================

// end of mod tests
