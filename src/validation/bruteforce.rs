//! Exhaustive enumeration of connected induced subgraphs with at most 4 vertices.
//!
//! Cost is O(n^4), only for small graphs. It gives net orbit counts directly and is the reference
//! the transform is checked against.



use ndarray::Array2;

use crate::fglt::NB_ORBITS;
use crate::graph::CsrAdjacency;


// dense adjacency, row major
struct Dense {
    nb_nodes: usize,
    adjacent: Vec<bool>,
}

impl Dense {
    fn new(adj: &CsrAdjacency) -> Self {
        let nb_nodes = adj.get_nb_nodes();
        let mut adjacent = vec![false; nb_nodes * nb_nodes];
        for i in 0..nb_nodes {
            for &j in adj.neighbours(i) {
                adjacent[i * nb_nodes + j] = true;
            }
        }
        Dense { nb_nodes, adjacent }
    }

    #[inline]
    fn has_edge(&self, i: usize, j: usize) -> bool {
        self.adjacent[i * self.nb_nodes + j]
    }

    // degrees of the vertices of subset in the induced subgraph, and number of edges
    fn induced_degrees<const N: usize>(&self, subset: &[usize; N]) -> ([usize; N], usize) {
        let mut degrees = [0usize; N];
        for a in 0..N {
            for b in a + 1..N {
                if self.has_edge(subset[a], subset[b]) {
                    degrees[a] += 1;
                    degrees[b] += 1;
                }
            }
        }
        let nb_edges = degrees.iter().sum::<usize>() / 2;
        (degrees, nb_edges)
    }
} // end of impl Dense


// orbit of a vertex of induced degree degree in a connected 3-subgraph with nb_edges edges
fn orbit3(degree: usize, nb_edges: usize) -> usize {
    match (nb_edges, degree) {
        (3, _) => 4,
        (_, 1) => 2,
        _ => 3,
    }
}

// orbit of a vertex in a connected 4-subgraph. max_degree separates path from claw and cycle from paw.
fn orbit4(degree: usize, nb_edges: usize, max_degree: usize) -> usize {
    match (nb_edges, max_degree, degree) {
        (3, 2, 1) => 5,
        (3, 2, _) => 6,
        (3, _, 1) => 7,
        (3, _, _) => 8,
        (4, 2, _) => 12,
        (4, _, 1) => 9,
        (4, _, 2) => 10,
        (4, _, _) => 11,
        (5, _, 2) => 13,
        (5, _, _) => 14,
        _ => 15,
    }
}


/// Returns net orbit counts as a 16 x nb_nodes matrix.
pub fn brute_force_orbits(adj: &CsrAdjacency) -> Array2<f64> {
    let nb_nodes = adj.get_nb_nodes();
    if nb_nodes > 200 {
        log::warn!("brute_force_orbits on {} nodes, this will be slow", nb_nodes);
    }
    let dense = Dense::new(adj);
    let mut net = Array2::<f64>::zeros((NB_ORBITS, nb_nodes));
    for i in 0..nb_nodes {
        net[[0, i]] = 1.;
        net[[1, i]] = adj.degree(i) as f64;
    }
    //
    for a in 0..nb_nodes {
        for b in a + 1..nb_nodes {
            for c in b + 1..nb_nodes {
                let triple = [a, b, c];
                let (degrees, nb_edges) = dense.induced_degrees(&triple);
                if nb_edges >= 2 {
                    for (v, d) in triple.iter().zip(degrees.iter()) {
                        net[[orbit3(*d, nb_edges), *v]] += 1.;
                    }
                }
                for d in c + 1..nb_nodes {
                    let quad = [a, b, c, d];
                    let (degrees, nb_edges) = dense.induced_degrees(&quad);
                    // two disjoint edges or a triangle with an isolated vertex are not connected
                    if nb_edges < 3 || degrees.iter().any(|&x| x == 0) {
                        continue;
                    }
                    let max_degree = degrees.iter().copied().max().unwrap_or(0);
                    for (v, x) in quad.iter().zip(degrees.iter()) {
                        net[[orbit4(*x, nb_edges, max_degree), *v]] += 1.;
                    }
                }
            }
        }
    }
    log::debug!("brute_force_orbits done, nb_nodes : {}", nb_nodes);
    net
} // end of brute_force_orbits

//=========================================================================================

// end of mod tests
