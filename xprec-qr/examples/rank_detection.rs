//! Rank detection with column-pivoted QR
//!
//! Builds a 6x5 matrix whose last two columns are copies of earlier ones,
//! decomposes it and prints the pivot order, the diagonal of R and the
//! estimated numerical rank.

use xprec_qr::{Tensor, decompose};

fn main() -> Result<(), xprec_qr::QrError> {
    let base = [
        [2.0, 0.0, 0.0],
        [0.0, 3.0, 0.0],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0],
    ];
    // columns: b0, b1, b2, b1, b0
    let source = [0, 1, 2, 1, 0];
    let a = Tensor::from_fn((6, 5), |idx| base[idx[0]][source[idx[1]]]);

    let qr = decompose(a)?;

    println!("pivot order:      {:?}", qr.permutation_indices());
    println!("transpositions:   {:?}", qr.transpositions());
    let diag: Vec<f64> = (0..qr.diag_size()).map(|k| qr.qr[[k, k]]).collect();
    println!("diag(R):          {:?}", diag);
    println!("nonzero pivots:   {}", qr.nonzero_pivots());
    println!("rank (rtol=1e-12): {}", qr.effective_rank(1e-12));

    Ok(())
}
