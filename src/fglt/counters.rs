//! Raw orbit counts obtained from degrees alone or from sums over neighbours.
//!
//! - raw 1 : degree
//! - raw 2 : paths of length 2 ending at the vertex, sum of neighbour degrees minus own degree
//! - raw 3, 8 : C(degree, 2) and C(degree, 3), pairs and triples of neighbours
//! - raw 7 : sum over neighbours k of C(degree(k) - 1, 2)
//! - raw 6, 11 : closed forms from degree, raw 2 and triangles
//! - raw 5, 9 : sums of raw 2 and triangle counts of neighbours, they need a barrier after the scan pass.



use ndarray::ArrayView1;

use rayon::prelude::*;

use crate::graph::CsrAdjacency;


/// C(x,2), exact zero below 2
#[inline]
pub(crate) fn binomial2(x: f64) -> f64 {
    if x < 2. {
        0.
    } else {
        x * (x - 1.) * 0.5
    }
}

/// C(x,3), exact zero below 3
#[inline]
pub(crate) fn binomial3(x: f64) -> f64 {
    if x < 3. {
        0.
    } else {
        x * (x - 1.) * (x - 2.) / 6.
    }
}


/// degree of every vertex, in parallel
pub(crate) fn degrees(adj: &CsrAdjacency) -> Vec<f64> {
    (0..adj.get_nb_nodes())
        .into_par_iter()
        .map(|i| adj.degree(i) as f64)
        .collect()
} // end of degrees


/// counts obtained by one pass over the neighbours degrees
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct PathCounts {
    /// raw 2
    pub(crate) path2: f64,
    /// raw 7, the vertex hangs on a neighbour with two other neighbours
    pub(crate) claw_leaf: f64,
} // end of struct PathCounts


/// sum over neighbours of degrees, the self term is removed afterwards as each neighbour counts i among its own.
pub(crate) fn path_counts(adj: &CsrAdjacency, degrees: &[f64], i: usize) -> PathCounts {
    let mut counts = PathCounts::default();
    for &k in adj.neighbours(i) {
        counts.path2 += degrees[k];
        counts.claw_leaf += binomial2(degrees[k] - 1.);
    }
    counts.path2 -= degrees[i];
    counts
} // end of path_counts


/// raw orbits depending only on quantities of the vertex itself
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct ClosedForms {
    /// raw 3, pairs of neighbours
    pub(crate) star2: f64,
    /// raw 6, path of length 3 with i inside
    pub(crate) path3_inner: f64,
    /// raw 8, triples of neighbours
    pub(crate) star3: f64,
    /// raw 11, a triangle and another neighbour
    pub(crate) tailed_center: f64,
} // end of struct ClosedForms


pub(crate) fn closed_forms(degree: f64, path2: f64, triangles: f64) -> ClosedForms {
    // a neighbour combined with a path 2 starting at i comes back on i twice per triangle
    let path3_inner = if degree > 0. { (degree - 1.) * path2 - 2. * triangles } else { 0. };
    let tailed_center = if triangles > 0. { triangles * (degree - 2.) } else { 0. };
    ClosedForms {
        star2: binomial2(degree),
        path3_inner,
        star3: binomial3(degree),
        tailed_center,
    }
} // end of closed_forms


/// counts needing raw 2 and triangle counts of neighbours
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct SecondHopSums {
    /// raw 5
    pub(crate) path3_end: f64,
    /// raw 9
    pub(crate) tailed_tail: f64,
} // end of struct SecondHopSums


/// path2, star2 and triangles are the raw 2, 3, 4 rows, complete for all vertices.
pub(crate) fn second_hop_sums(
    adj: &CsrAdjacency,
    path2: &ArrayView1<f64>,
    star2: &ArrayView1<f64>,
    triangles: &ArrayView1<f64>,
    i: usize,
) -> SecondHopSums {
    let mut sums = SecondHopSums::default();
    for &k in adj.neighbours(i) {
        sums.path3_end += path2[k];
        sums.tailed_tail += triangles[k];
    }
    // remove walks coming back to i by its neighbour pairs and by its triangles
    sums.path3_end -= 2. * star2[i] + 2. * triangles[i];
    sums.tailed_tail -= 2. * triangles[i];
    sums
} // end of second_hop_sums

//=========================================================================================

// end of mod tests
