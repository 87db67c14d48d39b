//! Back-substitution through a small Gaussian Bayes network.
//!
//! Run with: cargo run -p compositional-linear --example conditional_solve
//!
//! Set `RUST_LOG=compositional_linear=debug` to see each solve.
//!
//! This example demonstrates:
//! - Building conditionals with zero, one and two parents
//! - Solving them in reverse elimination order
//! - Detecting an indeterminate (singular) conditional
//! - The transpose solve used in gradient passes

use compositional_core::{Key, VectorValues};
use compositional_linear::{Diagonal, GaussianConditional, LinearError};
use nalgebra::{dmatrix, dvector, DMatrix};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), LinearError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Gaussian Conditionals: Back-Substitution ===\n");

    let x1 = Key::symbol(b'x', 1);
    let x2 = Key::symbol(b'x', 2);
    let x3 = Key::symbol(b'x', 3);

    // -------------------------------------------------------------------------
    // 1. A chain x1 <- x2 <- x3, as elimination of x1, x2, x3 would leave it
    // -------------------------------------------------------------------------
    println!("1. Building the Bayes network");
    println!("-----------------------------\n");

    let p3 = GaussianConditional::new(
        x3,
        dvector![2.0, 1.0],
        dmatrix![1.0, 0.5; 0.0, 2.0],
        Some(Diagonal::unit(2)),
    )?;
    let p2 = GaussianConditional::with_parent(
        x2,
        dvector![0.0, 1.0],
        DMatrix::identity(2, 2),
        x3,
        -DMatrix::<f64>::identity(2, 2),
        Some(Diagonal::unit(2)),
    )?;
    let p1 = GaussianConditional::with_parents2(
        x1,
        dvector![1.0, 0.0],
        dmatrix![2.0, 0.0; 0.0, 2.0],
        x2,
        -DMatrix::<f64>::identity(2, 2),
        x3,
        dmatrix![0.5, 0.0; 0.0, 0.5],
        Some(Diagonal::sigmas(dvector![0.1, 0.1])?),
    )?;

    for c in [&p3, &p2, &p1] {
        println!("{}", c);
    }

    // -------------------------------------------------------------------------
    // 2. Solve in reverse elimination order
    // -------------------------------------------------------------------------
    println!("2. Back-substitution");
    println!("--------------------\n");

    let mut solution = VectorValues::new();
    for c in [&p3, &p2, &p1] {
        let frontal = c.solve(&solution)?;
        for (key, value) in frontal.iter() {
            solution.set(key, value.clone());
        }
    }
    println!("{}", solution);

    // -------------------------------------------------------------------------
    // 3. Transpose pass (gradient propagation), forward elimination order
    // -------------------------------------------------------------------------
    println!("3. Transpose solve");
    println!("------------------\n");

    let mut gy = solution.clone();
    for c in [&p1, &p2, &p3] {
        c.solve_transpose_in_place(&mut gy)?;
    }
    println!("{}", gy);

    // -------------------------------------------------------------------------
    // 4. A singular conditional is reported, not returned
    // -------------------------------------------------------------------------
    println!("4. Indeterminate system");
    println!("-----------------------\n");

    let singular = GaussianConditional::new(
        x1,
        dvector![1.0, 1.0],
        dmatrix![1.0, 1.0; 0.0, 0.0],
        None,
    )?;
    match singular.solve(&VectorValues::new()) {
        Ok(v) => println!("unexpected solution:\n{}", v),
        Err(e) => println!("error: {}", e),
    }

    // -------------------------------------------------------------------------
    // 5. Equality tolerates row sign flips from the factorization
    // -------------------------------------------------------------------------
    println!("\n5. Equality up to row scale");
    println!("---------------------------\n");

    let flipped = GaussianConditional::new(
        x3,
        dvector![-2.0, -1.0],
        dmatrix![-1.0, -0.5; 0.0, -2.0],
        Some(Diagonal::unit(2)),
    )?;
    println!("p3 == flipped p3: {}", p3.equals(&flipped, 1e-9));

    Ok(())
}
