//! Linear map from raw (overlapping, non induced) orbit counts to net (induced) orbit counts.
//!
//! The map is upper triangular with unit diagonal: net orbit o only depends on raw orbits o..16.
//! A raw count of orbit o counts every occurrence of the pattern of o as a (non induced) subgraph,
//! so it also counts the denser graphlets containing that pattern. The inverse map [net2raw] lists
//! these multiplicities.
//!
//! Terms are evaluated in a fixed order so that results are reproducible to the bit.


use anyhow::anyhow;

use ndarray::{ArrayView1, ArrayView2, ArrayViewMut1, ArrayViewMut2, Zip};

use super::NB_ORBITS;


/// net counts f of a vertex from its raw counts d. Both have length 16.
#[rustfmt::skip]
pub fn raw2net(d: &ArrayView1<f64>, f: &mut ArrayViewMut1<f64>) {
    debug_assert_eq!(d.len(), NB_ORBITS);
    debug_assert_eq!(f.len(), NB_ORBITS);
    f[ 0] = d[ 0];
    f[ 1] = d[ 1];
    f[ 2] = d[ 2] - 2. * d[ 4];
    f[ 3] = d[ 3] -      d[ 4];
    f[ 4] = d[ 4];
    f[ 5] = d[ 5] - 2. * d[ 9] -      d[10] - 2. * d[12] + 4. * d[13] + 2. * d[14] - 6. * d[15];
    f[ 6] = d[ 6] -      d[10] - 2. * d[11] - 2. * d[12] + 2. * d[13] + 4. * d[14] - 6. * d[15];
    f[ 7] = d[ 7] -      d[ 9] -      d[10] + 2. * d[13] +      d[14] - 3. * d[15];
    f[ 8] = d[ 8] -      d[11] +      d[14] -      d[15];
    f[ 9] = d[ 9] - 2. * d[13] + 3. * d[15];
    f[10] = d[10] - 2. * d[13] - 2. * d[14] + 6. * d[15];
    f[11] = d[11] - 2. * d[14] + 3. * d[15];
    f[12] = d[12] -      d[13] -      d[14] + 3. * d[15];
    f[13] = d[13] - 3. * d[15];
    f[14] = d[14] - 3. * d[15];
    f[15] = d[15];
} // end of raw2net


/// inverse of [raw2net]: coefficient (o, p) is the number of occurrences of the raw pattern of orbit o
/// at a vertex in orbit p of an induced graphlet.
#[rustfmt::skip]
pub fn net2raw(f: &ArrayView1<f64>, d: &mut ArrayViewMut1<f64>) {
    debug_assert_eq!(f.len(), NB_ORBITS);
    debug_assert_eq!(d.len(), NB_ORBITS);
    d[ 0] = f[ 0];
    d[ 1] = f[ 1];
    d[ 2] = f[ 2] + 2. * f[ 4];
    d[ 3] = f[ 3] +      f[ 4];
    d[ 4] = f[ 4];
    d[ 5] = f[ 5] + 2. * f[ 9] +      f[10] + 2. * f[12] + 4. * f[13] + 2. * f[14] + 6. * f[15];
    d[ 6] = f[ 6] +      f[10] + 2. * f[11] + 2. * f[12] + 2. * f[13] + 4. * f[14] + 6. * f[15];
    d[ 7] = f[ 7] +      f[ 9] +      f[10] + 2. * f[13] +      f[14] + 3. * f[15];
    d[ 8] = f[ 8] +      f[11] +      f[14] +      f[15];
    d[ 9] = f[ 9] + 2. * f[13] + 3. * f[15];
    d[10] = f[10] + 2. * f[13] + 2. * f[14] + 6. * f[15];
    d[11] = f[11] + 2. * f[14] + 3. * f[15];
    d[12] = f[12] +      f[13] +      f[14] + 3. * f[15];
    d[13] = f[13] + 3. * f[15];
    d[14] = f[14] + 3. * f[15];
    d[15] = f[15];
} // end of net2raw


/// Applies [raw2net] to each column of raw (shape 16 x nb_nodes), in parallel, writing the corresponding column of net.
/// This is the entry point for callers having raw counts from another source.
pub fn raw_to_net(raw: &ArrayView2<f64>, net: &mut ArrayViewMut2<f64>) -> anyhow::Result<()> {
    if raw.nrows() != NB_ORBITS || raw.dim() != net.dim() {
        log::error!("raw_to_net bad shapes, raw : {:?}, net : {:?}", raw.dim(), net.dim());
        return Err(anyhow!(
            "raw_to_net expects two {} x n matrices, got raw {:?} and net {:?}",
            NB_ORBITS,
            raw.dim(),
            net.dim()
        ));
    }
    Zip::from(net.columns_mut())
        .and(raw.columns())
        .par_for_each(|mut f, d| raw2net(&d, &mut f));
    Ok(())
} // end of raw_to_net

//=========================================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use ndarray::{Array1, Array2};
    use rand::distributions::{Distribution, Uniform};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn inverse_round_trip() {
        log_init_test();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4664397);
        let unif = Uniform::<i32>::new(-1000, 1000);
        let mut f = Array1::<f64>::zeros(NB_ORBITS);
        let mut d_back = Array1::<f64>::zeros(NB_ORBITS);
        let mut f_back = Array1::<f64>::zeros(NB_ORBITS);
        for _ in 0..200 {
            let d = Array1::from_iter((0..NB_ORBITS).map(|_| unif.sample(&mut rng) as f64));
            raw2net(&d.view(), &mut f.view_mut());
            net2raw(&f.view(), &mut d_back.view_mut());
            assert_eq!(d, d_back);
            net2raw(&d.view(), &mut f_back.view_mut());
            raw2net(&f_back.view(), &mut d_back.view_mut());
            assert_eq!(d, d_back);
        }
    } // end of inverse_round_trip

    #[test]
    fn unit_columns() {
        log_init_test();
        // raw counts of a lone 4-clique vertex map to a single net orbit 15
        let mut d = Array1::<f64>::zeros(NB_ORBITS);
        let mut f = Array1::<f64>::zeros(NB_ORBITS);
        let mut unit = Array1::<f64>::zeros(NB_ORBITS);
        unit[15] = 1.;
        net2raw(&unit.view(), &mut d.view_mut());
        assert_eq!(d[5], 6.);
        assert_eq!(d[12], 3.);
        raw2net(&d.view(), &mut f.view_mut());
        assert_eq!(f, unit);
        // lower orbits never depend on higher net values
        let d = Array1::from_iter((0..NB_ORBITS).map(|o| if o < 5 { 0. } else { 1. }));
        raw2net(&d.view(), &mut f.view_mut());
        assert!((0..5).all(|o| f[o] == 0.));
    } // end of unit_columns

    #[test]
    fn matrix_transform() {
        log_init_test();
        let nb_nodes = 7;
        let raw = Array2::<f64>::from_shape_fn((NB_ORBITS, nb_nodes), |(o, i)| ((o + 1) * (i + 2)) as f64);
        let mut net = Array2::<f64>::zeros((NB_ORBITS, nb_nodes));
        raw_to_net(&raw.view(), &mut net.view_mut()).unwrap();
        let mut f = Array1::<f64>::zeros(NB_ORBITS);
        for i in 0..nb_nodes {
            raw2net(&raw.column(i), &mut f.view_mut());
            assert_eq!(net.column(i), f);
        }
        //
        let mut bad = Array2::<f64>::zeros((NB_ORBITS, nb_nodes + 1));
        assert!(raw_to_net(&raw.view(), &mut bad.view_mut()).is_err());
        assert!(bad.iter().all(|&v| v == 0.));
    } // end of matrix_transform
} // end of mod tests
