//! Per worker scratch memory for neighbourhood scans.
//!
//! Each worker of the thread pool owns one [WorkerScratch], addressed by its index in the pool.
//! A scan leaves every array of the slot as it found it (all marks and flags cleared), clearing only the
//! entries it touched, so a slot goes from one vertex to the next without any O(nb_nodes) reset.



use anyhow::anyhow;

use parking_lot::{Mutex, MutexGuard};


/// allocates a vector of len copies of value, reporting allocation failure instead of aborting.
pub(crate) fn try_filled<T: Clone>(len: usize, value: T) -> anyhow::Result<Vec<T>> {
    let mut v = Vec::<T>::new();
    if let Err(e) = v.try_reserve_exact(len) {
        log::error!("working memory allocation failed, asked for {} items : {}", len, e);
        return Err(anyhow!("working memory allocation failed : {}", e));
    }
    v.resize(len, value);
    Ok(v)
} // end of try_filled



/// Scratch arrays of one worker, all sized to the number of vertices.
pub(crate) struct WorkerScratch {
    /// for a direct neighbour k of the scanned vertex, 1 + position of the edge (i,k). 0 otherwise.
    pub(crate) is_ngbh: Vec<usize>,
    /// set when a vertex is in touched. Reused as a second marking in the clique scan.
    pub(crate) is_used: Vec<bool>,
    /// for a touched vertex j, number of neighbours of the scanned vertex adjacent to j
    pub(crate) counts: Vec<f64>,
    /// distinct vertices reached in two hops. Never exceeds nb_nodes so pushes do not reallocate.
    pub(crate) touched: Vec<usize>,
} // end of struct WorkerScratch


impl WorkerScratch {
    fn new(nb_nodes: usize) -> anyhow::Result<Self> {
        let is_ngbh = try_filled(nb_nodes, 0usize)?;
        let is_used = try_filled(nb_nodes, false)?;
        let counts = try_filled(nb_nodes, 0f64)?;
        let mut touched = Vec::<usize>::new();
        if let Err(e) = touched.try_reserve_exact(nb_nodes) {
            log::error!("working memory allocation failed for touched list : {}", e);
            return Err(anyhow!("working memory allocation failed : {}", e));
        }
        Ok(WorkerScratch { is_ngbh, is_used, counts, touched })
    }

    // drop the two hop counters, marking arrays stay
    fn release_counters(&mut self) {
        self.counts = Vec::new();
        self.touched = Vec::new();
    }

    #[allow(unused)]
    pub(crate) fn is_clean(&self) -> bool {
        self.touched.is_empty() && self.is_ngbh.iter().all(|&p| p == 0) && self.is_used.iter().all(|&u| !u)
    }
} // end of impl WorkerScratch



/// One scratch slot per worker of the pool running the passes.
///
/// A slot is only ever locked from the worker whose pool index it carries, and a worker holds
/// its guard for one vertex without calling back into rayon, so locking never waits.
pub(crate) struct ScratchPool {
    slots: Vec<Mutex<WorkerScratch>>,
} // end of struct ScratchPool


impl ScratchPool {
    /// allocates nb_workers slots for a graph with nb_nodes vertices. Fails as a whole if any allocation fails.
    pub(crate) fn new(nb_workers: usize, nb_nodes: usize) -> anyhow::Result<Self> {
        log::debug!("ScratchPool allocating {} slots of size {}", nb_workers, nb_nodes);
        let mut slots = Vec::with_capacity(nb_workers);
        for _ in 0..nb_workers {
            slots.push(Mutex::new(WorkerScratch::new(nb_nodes)?));
        }
        Ok(ScratchPool { slots })
    }

    pub(crate) fn get_nb_slots(&self) -> usize {
        self.slots.len()
    }

    /// the slot of the calling worker. Outside a pool (or in a bigger pool) the index is folded on existing slots.
    pub(crate) fn acquire(&self) -> MutexGuard<'_, WorkerScratch> {
        let idx = rayon::current_thread_index().unwrap_or(0) % self.slots.len();
        self.slots[idx].lock()
    }

    /// frees counters and touched lists once the common neighbour scan is done
    pub(crate) fn release_counters(&mut self) {
        for slot in &mut self.slots {
            slot.get_mut().release_counters();
        }
    }

    #[allow(unused)]
    pub(crate) fn is_clean(&mut self) -> bool {
        self.slots.iter_mut().all(|s| s.get_mut().is_clean())
    }
} // end of impl ScratchPool

//=========================================================================================

// end of mod tests
