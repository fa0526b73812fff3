//! Common neighbour scans.
//!
//! The first scan walks, for a vertex i, the neighbours of its neighbours and counts for each vertex j
//! reached how many neighbours of i it is adjacent to. When j is itself a neighbour of i this count is
//! the number of triangles sharing the edge (i,j), stored in the per edge buffer (named c3 below).
//! From these counts we get triangles (raw 4), triangle with a tail at the far end (raw 10),
//! 4-cycles (raw 12) and diamonds seen from a chord end (raw 14).
//!
//! The second scan runs once c3 is complete for all edges and gives diamonds seen from an off chord
//! vertex (raw 13) and 4-cliques (raw 15).
//!
//! Both scans only touch worker scratch entries reachable from i and clean them before returning.


use crate::graph::CsrAdjacency;

use super::counters::binomial2;
use super::scratch::WorkerScratch;


/// raw counts produced by the common neighbour scan of a vertex
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct NeighbourhoodCounts {
    /// raw 4
    pub(crate) triangles: f64,
    /// raw 10, sum over incident edges (i,k) of c3 * (degree(k) - 2)
    pub(crate) tailed_inner: f64,
    /// raw 12, pairs of 2-paths between i and another vertex
    pub(crate) cycles: f64,
    /// raw 14, sum over incident edges of C(c3, 2)
    pub(crate) chorded: f64,
} // end of struct NeighbourhoodCounts


/// Scan of the 2-hop neighbourhood of i.
/// c3_i is the slice of the per edge buffer for the edges of i (positions adj.edge_range(i)).
pub(crate) fn common_neighbours(
    adj: &CsrAdjacency,
    degrees: &[f64],
    i: usize,
    scratch: &mut WorkerScratch,
    c3_i: &mut [f64],
) -> NeighbourhoodCounts {
    let WorkerScratch { is_ngbh, is_used, counts, touched } = scratch;
    debug_assert!(touched.is_empty());
    debug_assert_eq!(c3_i.len(), adj.degree(i));
    //
    let range_i = adj.edge_range(i);
    let first_edge = range_i.start;
    for id_i in range_i {
        let k = adj.get_col_index()[id_i];
        is_ngbh[k] = id_i + 1;
        for &j in adj.neighbours(k) {
            if j == i {
                continue;
            }
            if !is_used[j] {
                counts[j] = 0.;
                is_used[j] = true;
                touched.push(j);
            }
            counts[j] += 1.;
        }
    }
    // reduction on touched vertices
    let mut res = NeighbourhoodCounts::default();
    for &j in touched.iter() {
        let common = counts[j];
        res.cycles += binomial2(common);
        if is_ngbh[j] != 0 {
            c3_i[is_ngbh[j] - 1 - first_edge] = common;
            res.triangles += common;
            res.tailed_inner += common * (degrees[j] - 2.);
            res.chorded += binomial2(common);
        }
        is_used[j] = false;
    }
    touched.clear();
    // each triangle was seen from its two edges at i
    res.triangles /= 2.;
    //
    remove_neighbours(adj, i, is_ngbh);
    log::trace!("common_neighbours vertex {} : {:?}", i, res);
    res
} // end of common_neighbours


/// unmark neighbours of i, cost is degree of i.
fn remove_neighbours(adj: &CsrAdjacency, i: usize, is_ngbh: &mut [usize]) {
    for &k in adj.neighbours(i) {
        is_ngbh[k] = 0;
    }
}


/// raw counts needing the per edge common neighbours of the whole graph
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct CliqueCounts {
    /// raw 13, sum over triangles (i,a,b) of c3(a,b) - 1
    pub(crate) diamond_side: f64,
    /// raw 15
    pub(crate) cliques: f64,
} // end of struct CliqueCounts


/// c3 is the full per edge buffer, filled by [common_neighbours] for every vertex.
pub(crate) fn cliques(adj: &CsrAdjacency, c3: &[f64], i: usize, scratch: &mut WorkerScratch) -> CliqueCounts {
    let WorkerScratch { is_ngbh, is_used, .. } = scratch;
    let col_index = adj.get_col_index();
    for id_i in adj.edge_range(i) {
        is_ngbh[col_index[id_i]] = id_i + 1;
    }
    //
    let mut res = CliqueCounts::default();
    for &a in adj.neighbours(i) {
        // flag neighbours of a inside N(i), i.e the third vertices of triangles on (i,a)
        for id_a in adj.edge_range(a) {
            let b = col_index[id_a];
            if is_ngbh[b] != 0 {
                is_used[b] = true;
                res.diamond_side += c3[id_a] - 1.;
            }
        }
        // a 4-clique {i,a,b,c} is found once per ordered pair (b,c), from each of its 3 vertices a
        for &b in adj.neighbours(a) {
            if !is_used[b] {
                continue;
            }
            res.cliques += adj.neighbours(b).iter().filter(|&&c| is_used[c]).count() as f64;
        }
        for &b in adj.neighbours(a) {
            is_used[b] = false;
        }
    }
    // each triangle (i,a,b) was seen from a and from b
    res.diamond_side /= 2.;
    res.cliques /= 6.;
    //
    remove_neighbours(adj, i, is_ngbh);
    log::trace!("cliques vertex {} : {:?}", i, res);
    res
} // end of cliques

//=========================================================================================

// end of mod tests
