//! Runs the passes of the graphlet transform.
//!
//! 1. degrees (parallel)
//! 2. allocation of worker scratch and of the per edge common neighbours buffer. Failure aborts before any output is written.
//! 3. common neighbour scan, neighbour degree sums and closed forms (parallel), giving raw 0-4, 6-8, 10-12, 14
//! 4. counters released, then second hop sums and clique scan (parallel), giving raw 5, 9, 13, 15
//! 5. raw to net (parallel), then remaining scratch released.
//!
//! Each pass ends with the join of a rayon parallel iterator, later passes read counts of arbitrary vertices
//! written by the previous ones.



use std::time::SystemTime;
use cpu_time::ProcessTime;

use anyhow::anyhow;

use ndarray::{Array2, ArrayView1, ArrayViewMut1, ArrayViewMut2, Zip};
use rayon::prelude::*;

use crate::graph::CsrAdjacency;

use super::counters::{self, PathCounts, SecondHopSums};
use super::orbits::FgltResult;
use super::params::FgltParams;
use super::raw2net::raw_to_net;
use super::scanner::{self, CliqueCounts, NeighbourhoodCounts};
use super::scratch::{try_filled, ScratchPool};
use super::NB_ORBITS;


// per vertex output of pass 3
#[derive(Copy, Clone, Debug)]
struct FirstPass {
    degree: f64,
    paths: PathCounts,
    ngbh: NeighbourhoodCounts,
}

impl FirstPass {
    fn fill(&self, col: &mut ArrayViewMut1<f64>) {
        let closed = counters::closed_forms(self.degree, self.paths.path2, self.ngbh.triangles);
        col[0] = 1.;
        col[1] = self.degree;
        col[2] = self.paths.path2;
        col[3] = closed.star2;
        col[4] = self.ngbh.triangles;
        col[6] = closed.path3_inner;
        col[7] = self.paths.claw_leaf;
        col[8] = closed.star3;
        col[10] = self.ngbh.tailed_inner;
        col[11] = closed.tailed_center;
        col[12] = self.ngbh.cycles;
        col[14] = self.ngbh.chorded;
    }
} // end of impl FirstPass


// per vertex output of pass 4
#[derive(Copy, Clone, Debug)]
struct SecondPass {
    sums: SecondHopSums,
    cliques: CliqueCounts,
}

impl SecondPass {
    fn fill(&self, col: &mut ArrayViewMut1<f64>) {
        col[5] = self.sums.path3_end;
        col[9] = self.sums.tailed_tail;
        col[13] = self.cliques.diamond_side;
        col[15] = self.cliques.cliques;
    }
}


// cut the per edge buffer in the disjoint slices of each vertex edges
fn split_by_vertex<'b>(adj: &CsrAdjacency, buffer: &'b mut [f64]) -> Vec<&'b mut [f64]> {
    let mut slices = Vec::with_capacity(adj.get_nb_nodes());
    let mut rest = buffer;
    for i in 0..adj.get_nb_nodes() {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(adj.degree(i));
        slices.push(head);
        rest = tail;
    }
    slices
} // end of split_by_vertex



/// The fast graphlet transform.
///
/// ```
/// use fglt::prelude::*;
///
/// // a triangle with a pendant vertex
/// let graph = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).unwrap();
/// let fglt = Fglt::new(FgltParams::new(2));
/// let res = fglt.compute(&graph.view()).unwrap();
/// // vertex 2 is the center of a paw
/// assert_eq!(res.get_gdv(2)[11], 1.);
/// ```
pub struct Fglt {
    params: FgltParams,
} // end of struct Fglt


impl Fglt {
    pub fn new(params: FgltParams) -> Self {
        Fglt { params }
    }

    pub fn get_params(&self) -> &FgltParams {
        &self.params
    }

    /// computes raw and net counts in newly allocated matrices
    pub fn compute(&self, adj: &CsrAdjacency) -> anyhow::Result<FgltResult> {
        let nb_nodes = adj.get_nb_nodes();
        let mut raw = Array2::<f64>::zeros((NB_ORBITS, nb_nodes));
        let mut net = Array2::<f64>::zeros((NB_ORBITS, nb_nodes));
        let edge_triangles = self.run(adj, raw.view_mut(), net.view_mut())?;
        Ok(FgltResult::new(raw, net, edge_triangles))
    } // end of compute

    /// Computes into caller allocated 16 x nb_nodes matrices. Every cell of both is written once.
    /// On error neither matrix has been written.
    pub fn compute_into(
        &self,
        adj: &CsrAdjacency,
        raw: ArrayViewMut2<f64>,
        net: ArrayViewMut2<f64>,
    ) -> anyhow::Result<()> {
        self.run(adj, raw, net).map(|_| ())
    }

    // returns the per edge common neighbours buffer
    fn run(&self, adj: &CsrAdjacency, mut raw: ArrayViewMut2<f64>, mut net: ArrayViewMut2<f64>) -> anyhow::Result<Vec<f64>> {
        let nb_nodes = adj.get_nb_nodes();
        let expected = (NB_ORBITS, nb_nodes);
        if raw.dim() != expected || net.dim() != expected {
            log::error!(
                "Fglt bad output shapes, expected : {:?}, raw : {:?}, net : {:?}",
                expected,
                raw.dim(),
                net.dim()
            );
            return Err(anyhow!("output matrices must have shape {:?}", expected));
        }
        //
        let cpu_start = ProcessTime::now();
        let sys_start = SystemTime::now();
        let nb_workers = self.params.get_nb_workers();
        log::info!(
            "Fglt nb_nodes : {}, nb edge entries : {}, nb_workers : {}",
            nb_nodes,
            adj.get_nb_edge_entries(),
            nb_workers
        );
        let pool = match rayon::ThreadPoolBuilder::new().num_threads(nb_workers).build() {
            Ok(pool) => pool,
            Err(e) => {
                log::error!("Fglt could not build thread pool : {}", e);
                return Err(anyhow!("could not build thread pool : {}", e));
            }
        };
        let edge_triangles = pool.install(|| self.passes(adj, &mut raw, &mut net))?;
        //
        log::info!(
            "Fglt total sys time(s) {:.2e} cpu time(s) {:.2e}",
            sys_start.elapsed().map(|d| d.as_secs_f64()).unwrap_or(0.),
            cpu_start.elapsed().as_secs_f64()
        );
        Ok(edge_triangles)
    } // end of run

    // runs inside the pool, so that rayon::current_thread_index addresses a scratch slot
    fn passes(
        &self,
        adj: &CsrAdjacency,
        raw: &mut ArrayViewMut2<f64>,
        net: &mut ArrayViewMut2<f64>,
    ) -> anyhow::Result<Vec<f64>> {
        let nb_nodes = adj.get_nb_nodes();
        //
        let degrees = counters::degrees(adj);
        log::debug!("Fglt degrees done");
        //
        let mut scratch = ScratchPool::new(self.params.get_nb_workers(), nb_nodes)?;
        let mut edge_triangles = try_filled(adj.get_nb_edge_entries(), 0f64)?;
        //
        let first: Vec<FirstPass> = split_by_vertex(adj, &mut edge_triangles)
            .into_par_iter()
            .enumerate()
            .map(|(i, c3_i)| {
                let ngbh = scanner::common_neighbours(adj, &degrees, i, &mut scratch.acquire(), c3_i);
                let paths = counters::path_counts(adj, &degrees, i);
                FirstPass { degree: degrees[i], paths, ngbh }
            })
            .collect();
        Zip::from(raw.columns_mut())
            .and(ArrayView1::from(&first[..]))
            .par_for_each(|mut col, pass| pass.fill(&mut col));
        drop(first);
        log::debug!("Fglt common neighbours scan done");
        //
        scratch.release_counters();
        let second: Vec<SecondPass> = {
            let raw_done = raw.view();
            let (path2, star2, triangles) = (raw_done.row(2), raw_done.row(3), raw_done.row(4));
            let edge_triangles = &edge_triangles;
            (0..nb_nodes)
                .into_par_iter()
                .map(|i| {
                    let sums = counters::second_hop_sums(adj, &path2, &star2, &triangles, i);
                    let cliques = scanner::cliques(adj, edge_triangles, i, &mut scratch.acquire());
                    SecondPass { sums, cliques }
                })
                .collect()
        };
        Zip::from(raw.columns_mut())
            .and(ArrayView1::from(&second[..]))
            .par_for_each(|mut col, pass| pass.fill(&mut col));
        drop(second);
        log::debug!("Fglt clique scan done");
        //
        raw_to_net(&raw.view(), net)?;
        drop(scratch);
        log::debug!("Fglt raw to net done");
        //
        Ok(edge_triangles)
    } // end of passes
} // end of impl Fglt

//=========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use ndarray::ShapeBuilder;
    use rand::distributions::{Distribution, Uniform};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    use crate::fglt::counters::binomial2;
    use crate::fglt::orbits::Graphlet;
    use crate::graph::CsrGraph;
    use crate::validation::bruteforce::brute_force_orbits;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // Erdos-Renyi graph with edge probability p
    fn random_graph(nb_nodes: usize, p: f64, seed: u64) -> CsrGraph {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let unif = Uniform::<f64>::new(0., 1.);
        let mut edges = Vec::new();
        for i in 0..nb_nodes {
            for j in i + 1..nb_nodes {
                if unif.sample(&mut rng) < p {
                    edges.push((i, j));
                }
            }
        }
        CsrGraph::from_edges(nb_nodes, &edges).unwrap()
    } // end of random_graph

    fn run(graph: &CsrGraph, nb_workers: usize) -> FgltResult {
        Fglt::new(FgltParams::new(nb_workers)).compute(&graph.view()).unwrap()
    }

    #[test]
    fn square_cycle() {
        log_init_test();
        let graph = CsrGraph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let res = run(&graph, 2);
        let (raw, net) = (res.get_raw(), res.get_net());
        for i in 0..4 {
            assert_eq!(net[[0, i]], 1.);
            assert_eq!(net[[1, i]], 2.);
            assert_eq!(raw[[2, i]], 2.);
            assert_eq!(raw[[3, i]], 1.);
            assert_eq!(net[[3, i]], 1.);
            assert_eq!(raw[[4, i]], 0.);
            assert_eq!(net[[4, i]], 0.);
            assert_eq!(net[[12, i]], 1.);
        }
        assert_eq!(res.get_census().get_count(Graphlet::Cycle4), 1.);
    } // end of square_cycle

    #[test]
    fn single_triangle() {
        log_init_test();
        let graph = CsrGraph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let res = run(&graph, 1);
        for i in 0..3 {
            assert_eq!(res.get_net()[[1, i]], 2.);
            assert_eq!(res.get_net()[[4, i]], 1.);
            assert_eq!(res.get_net()[[2, i]], 0.);
            assert_eq!(res.get_net()[[3, i]], 0.);
        }
        assert_eq!(res.get_edge_triangles(), &[1.; 6]);
    } // end of single_triangle

    #[test]
    fn isolated_vertices() {
        log_init_test();
        let graph = CsrGraph::from_edges(5, &[(0, 1), (1, 2)]).unwrap();
        let res = run(&graph, 3);
        for i in [3, 4] {
            let gdv = res.get_gdv(i);
            assert_eq!(gdv[0], 1.);
            assert!((1..NB_ORBITS).all(|o| gdv[o] == 0.));
        }
        // graph without any vertex
        let empty = CsrGraph::from_edges(0, &[]).unwrap();
        let res = run(&empty, 2);
        assert_eq!(res.get_net().dim(), (NB_ORBITS, 0));
    } // end of isolated_vertices

    #[test]
    fn degree_and_star_rows() {
        log_init_test();
        let graph = random_graph(60, 0.1, 117);
        let adj = graph.view();
        let res = run(&graph, 4);
        for i in 0..adj.get_nb_nodes() {
            let degree = adj.degree(i) as f64;
            assert_eq!(res.get_net()[[0, i]], 1.);
            assert_eq!(res.get_net()[[1, i]], degree);
            assert_eq!(res.get_raw()[[3, i]], binomial2(degree));
            assert_eq!(res.get_net()[[3, i]] + res.get_net()[[4, i]], binomial2(degree));
        }
    } // end of degree_and_star_rows

    #[test]
    fn edge_triangles_symmetric() {
        log_init_test();
        let graph = random_graph(50, 0.2, 3);
        let adj = graph.view();
        let res = run(&graph, 3);
        let c3 = res.get_edge_triangles();
        assert_eq!(c3.len(), adj.get_nb_edge_entries());
        for i in 0..adj.get_nb_nodes() {
            for id_i in adj.edge_range(i) {
                let k = adj.get_col_index()[id_i];
                let id_k = adj.edge_range(k).find(|&p| adj.get_col_index()[p] == i).unwrap();
                assert_eq!(c3[id_i], c3[id_k]);
            }
        }
    } // end of edge_triangles_symmetric

    #[test]
    fn matches_brute_force() {
        log_init_test();
        let named: Vec<(usize, Vec<(usize, usize)>)> = vec![
            (4, vec![(0, 1), (1, 2), (2, 3)]),
            (4, vec![(0, 1), (0, 2), (0, 3)]),
            (4, vec![(0, 1), (1, 2), (2, 0), (2, 3)]),
            (4, vec![(0, 1), (0, 2), (1, 2), (0, 3), (1, 3)]),
            (4, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
            (6, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)]),
        ];
        for (nb_nodes, edges) in named {
            let graph = CsrGraph::from_edges(nb_nodes, &edges).unwrap();
            let res = run(&graph, 2);
            assert_eq!(res.get_net(), &brute_force_orbits(&graph.view()));
        }
        for seed in 0..8 {
            let graph = random_graph(16, 0.15 + 0.05 * seed as f64, seed);
            let res = run(&graph, 3);
            assert_eq!(res.get_net(), &brute_force_orbits(&graph.view()), "seed {}", seed);
        }
    } // end of matches_brute_force

    #[test]
    fn triangles_against_brute_force() {
        log_init_test();
        let graph = random_graph(25, 0.3, 11);
        let res = run(&graph, 2);
        let brute = brute_force_orbits(&graph.view());
        let nb_triangles = brute.row(4).sum() / 3.;
        assert_eq!(res.get_raw().row(4).sum() / 3., nb_triangles);
        assert_eq!(res.get_census().get_count(Graphlet::Triangle), nb_triangles);
    } // end of triangles_against_brute_force

    #[test]
    fn idempotent_and_worker_independent() {
        log_init_test();
        let graph = random_graph(200, 0.05, 9);
        let first = run(&graph, 4);
        let second = run(&graph, 4);
        assert_eq!(first.get_raw(), second.get_raw());
        assert_eq!(first.get_net(), second.get_net());
        assert_eq!(first.get_edge_triangles(), second.get_edge_triangles());
        let single = run(&graph, 1);
        assert_eq!(first.get_net(), single.get_net());
    } // end of idempotent_and_worker_independent

    #[test]
    fn caller_allocated_outputs() {
        log_init_test();
        let graph = random_graph(30, 0.2, 5);
        let adj = graph.view();
        let fglt = Fglt::new(FgltParams::new(2));
        let mut raw = Array2::<f64>::from_elem((NB_ORBITS, 30), -1.);
        let mut net = Array2::<f64>::from_elem((NB_ORBITS, 30), -1.);
        fglt.compute_into(&adj, raw.view_mut(), net.view_mut()).unwrap();
        let res = fglt.compute(&adj).unwrap();
        assert_eq!(&raw, res.get_raw());
        assert_eq!(&net, res.get_net());
        // column major outputs are also accepted
        let mut raw_f = Array2::<f64>::zeros((NB_ORBITS, 30).f());
        let mut net_f = Array2::<f64>::zeros((NB_ORBITS, 30).f());
        fglt.compute_into(&adj, raw_f.view_mut(), net_f.view_mut()).unwrap();
        assert_eq!(&net_f, res.get_net());
        // bad shape, nothing written
        let mut bad_raw = Array2::<f64>::from_elem((NB_ORBITS, 29), -1.);
        let mut net = Array2::<f64>::from_elem((NB_ORBITS, 30), -1.);
        assert!(fglt.compute_into(&adj, bad_raw.view_mut(), net.view_mut()).is_err());
        assert!(net.iter().all(|&v| v == -1.));
        assert!(bad_raw.iter().all(|&v| v == -1.));
    } // end of caller_allocated_outputs
} // end of mod tests
