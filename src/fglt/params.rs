//! defines parameters for the graphlet transform


/// Worker count queried by a host before the transform runs, so it can size its own buffers or reporting.
/// This is the number of workers used by [FgltParams::default].
pub fn get_workers() -> usize {
    num_cpus::get()
}


#[derive(Debug, Copy, Clone)]
pub struct FgltParams {
    /// number of threads of the pool running the passes. Scratch memory is nb_workers * nb_nodes.
    nb_workers: usize,
} // end of FgltParams


impl FgltParams {
    /// a null worker count is raised to 1
    pub fn new(nb_workers: usize) -> Self {
        if nb_workers == 0 {
            log::warn!("FgltParams asked for 0 worker, using 1");
        }
        FgltParams { nb_workers: nb_workers.max(1) }
    }

    ///
    pub fn get_nb_workers(&self) -> usize {
        self.nb_workers
    }
} // end of impl FgltParams


impl Default for FgltParams {
    fn default() -> Self {
        FgltParams::new(get_workers())
    }
}
