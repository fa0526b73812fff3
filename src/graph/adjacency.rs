//! read only view on a compressed sparse row adjacency



use std::ops::Range;

use anyhow::anyhow;

use sprs::CsMatI;


/// A read-only view of an undirected graph in compressed sparse row form.
///
/// Neighbours of vertex i are `col_index[row_offset[i] .. row_offset[i+1]]`.
/// The graph must be symmetric: if k is a neighbour of i then i is a neighbour of k.
/// Neighbour order is arbitrary. The view does not check its input, an out of range
/// index makes slice accesses panic. Use [CsrAdjacency::check] to validate data coming from outside.
#[derive(Copy, Clone, Debug)]
pub struct CsrAdjacency<'a> {
    /// length nb_nodes + 1, non decreasing, last value is nb_edge_entries
    row_offset: &'a [usize],
    /// length nb_edge_entries
    col_index: &'a [usize],
} // end of struct CsrAdjacency


impl<'a> CsrAdjacency<'a> {
    /// row_offset must have length nb_nodes + 1 (so at least 1).
    pub fn new(row_offset: &'a [usize], col_index: &'a [usize]) -> Self {
        debug_assert!(!row_offset.is_empty());
        CsrAdjacency { row_offset, col_index }
    }

    /// view the pattern of a square csr matrix. Values are ignored.
    pub fn from_csmat<F>(csmat: &'a CsMatI<F, usize>) -> Self {
        assert!(csmat.is_csr());
        assert_eq!(csmat.rows(), csmat.cols());
        CsrAdjacency::new(csmat.indptr().into_raw_storage(), csmat.indices())
    }

    /// number of vertices
    pub fn get_nb_nodes(&self) -> usize {
        self.row_offset.len() - 1
    }

    /// number of adjacency entries (twice the number of undirected edges)
    pub fn get_nb_edge_entries(&self) -> usize {
        self.col_index.len()
    }

    /// number of neighbours of vertex i
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.row_offset[i + 1] - self.row_offset[i]
    }

    /// positions in column index array of the edges out of i
    #[inline]
    pub fn edge_range(&self, i: usize) -> Range<usize> {
        self.row_offset[i]..self.row_offset[i + 1]
    }

    /// neighbours of vertex i
    #[inline]
    pub fn neighbours(&self, i: usize) -> &'a [usize] {
        &self.col_index[self.edge_range(i)]
    }

    pub fn get_row_offset(&self) -> &'a [usize] {
        self.row_offset
    }

    pub fn get_col_index(&self) -> &'a [usize] {
        self.col_index
    }

    /// Checks the structural assumptions the graphlet transform relies on:
    /// offsets start at 0, do not decrease and end at nb_edge_entries, indices are in range,
    /// there is no self loop and the adjacency is symmetric.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.row_offset.is_empty() {
            log::error!("CsrAdjacency::check empty row offset array");
            return Err(anyhow!("row offset array must have length nb_nodes + 1"));
        }
        if self.row_offset[0] != 0 {
            return Err(anyhow!("first row offset must be 0, got {}", self.row_offset[0]));
        }
        if let Some(w) = self.row_offset.windows(2).position(|w| w[0] > w[1]) {
            log::error!("CsrAdjacency::check row offsets decreasing at row {}", w);
            return Err(anyhow!("row offsets decreasing at row {}", w));
        }
        let nb_nodes = self.get_nb_nodes();
        let nb_entries = self.get_nb_edge_entries();
        if self.row_offset[nb_nodes] != nb_entries {
            return Err(anyhow!(
                "last row offset {} differs from number of column indices {}",
                self.row_offset[nb_nodes],
                nb_entries
            ));
        }
        if let Some(&j) = self.col_index.iter().find(|&&j| j >= nb_nodes) {
            log::error!("CsrAdjacency::check column index {} out of range", j);
            return Err(anyhow!("column index {} out of range, nb_nodes : {}", j, nb_nodes));
        }
        // symmetry, with a linear scan of the row of j as rows need not be sorted
        for i in 0..nb_nodes {
            for &j in self.neighbours(i) {
                if j == i {
                    return Err(anyhow!("self loop at vertex {}", i));
                }
                if !self.neighbours(j).contains(&i) {
                    log::error!("CsrAdjacency::check edge ({},{}) has no reverse", i, j);
                    return Err(anyhow!("adjacency not symmetric, edge ({},{}) has no reverse", i, j));
                }
            }
        }
        Ok(())
    } // end of check
} // end of impl CsrAdjacency

//=========================================================================================

// end of mod tests
