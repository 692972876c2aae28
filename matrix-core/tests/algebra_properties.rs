use matrix_core::{DenseMatrix, Matrix, MatrixCoreError};

// Helper for float comparison in tests
fn assert_approx_eq_matrix(a: &DenseMatrix, b: &DenseMatrix, tolerance: f64) {
    assert_eq!(a.dims(), b.dims(), "Matrix dimensions differ");
    for (i, (x, y)) in a.data().iter().zip(b.data()).enumerate() {
        let diff = (x - y).abs();
        assert!(
            diff <= tolerance,
            "Verification failed at index {}: expected {}, got {}, diff {}",
            i,
            y,
            x,
            diff
        );
    }
}

// Deterministic pseudo-random fill so the properties run over several shapes.
fn sample(rows: usize, cols: usize, seed: u64) -> DenseMatrix {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let data = (0..rows * cols)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) % 2001) as f64 / 10.0 - 100.0
        })
        .collect();
    DenseMatrix::new(rows, cols, data).unwrap()
}

const SHAPES: [(usize, usize); 6] = [(1, 1), (1, 5), (4, 1), (2, 2), (3, 7), (10, 10)];

#[test]
fn test_add_then_sub_reconstructs() {
    for (seed, &(r, c)) in SHAPES.iter().enumerate() {
        let a = sample(r, c, seed as u64);
        let b = sample(r, c, seed as u64 + 100);
        let back = a.add(&b).unwrap().sub(&b).unwrap();
        assert_approx_eq_matrix(&back, &a, 1e-9);
    }
}

#[test]
fn test_double_transpose_is_identity() {
    for (seed, &(r, c)) in SHAPES.iter().enumerate() {
        let a = sample(r, c, seed as u64);
        let t = a.transpose().unwrap();
        assert_eq!(t.dims(), (c, r));
        for i in 0..r {
            for j in 0..c {
                assert_eq!(t[(j, i)], a[(i, j)]);
            }
        }
        assert_eq!(t.transpose().unwrap(), a);
    }
}

#[test]
fn test_multiply_shape_rule() {
    for &(ar, ac) in &SHAPES {
        for &(br, bc) in &SHAPES {
            let a = sample(ar, ac, 1);
            let b = sample(br, bc, 2);
            match a.multiply(&b) {
                Ok(r) => {
                    assert_eq!(ac, br);
                    assert_eq!(r.dims(), (ar, bc));
                }
                Err(MatrixCoreError::DimensionMismatch { left, right, .. }) => {
                    assert_ne!(ac, br);
                    assert_eq!(left, (ar, ac));
                    assert_eq!(right, (br, bc));
                }
                Err(e) => panic!("Unexpected error: {}", e),
            }
        }
    }
}

#[test]
fn test_scalar_identity_and_zero() {
    for (seed, &(r, c)) in SHAPES.iter().enumerate() {
        let a = sample(r, c, seed as u64);
        assert_eq!(a.scalar_multiply(1.0).unwrap(), a);
        let zero = a.scalar_multiply(0.0).unwrap();
        assert_eq!(zero, DenseMatrix::zeros(r, c).unwrap());
    }
}

#[test]
fn test_concrete_scenarios() {
    let a = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = DenseMatrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    assert_eq!(a.add(&b).unwrap().data(), &[6.0, 8.0, 10.0, 12.0]);
    assert_eq!(a.sub(&b).unwrap().data(), &[-4.0, -4.0, -4.0, -4.0]);
    assert_eq!(a.multiply(&b).unwrap().data(), &[19.0, 22.0, 43.0, 50.0]);

    let row = DenseMatrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
    let col = DenseMatrix::from_rows(&[vec![1.0], vec![2.0], vec![3.0]]).unwrap();
    let r = row.multiply(&col).unwrap();
    assert_eq!(r.dims(), (1, 1));
    assert_eq!(r.data(), &[14.0]);
}

#[test]
fn test_fill_from_console_style_tokens() {
    let mut m = DenseMatrix::<f64>::zeros(2, 2).unwrap();
    let input = "1.5 -2\n3e1\n  4  \n";
    m.fill(input.split_whitespace()).unwrap();
    assert_eq!(m.data(), &[1.5, -2.0, 30.0, 4.0]);
}
