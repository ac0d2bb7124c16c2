use crate::IndexError;

/// Euclidean length of `v`.
#[inline]
pub fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// In-place L2 normalization helper to keep allocations down during hot paths.
///
/// Unlike a silent no-op on zero vectors, degenerate input is rejected so a
/// zero-norm embedding can never turn into NaN scores downstream.
pub fn l2_normalize_in_place(v: &mut [f32]) -> Result<(), IndexError> {
    if v.is_empty() {
        return Err(IndexError::EmptyVector);
    }
    let norm = l2_norm(v);
    if !norm.is_finite() {
        return Err(IndexError::NonFinite);
    }
    if norm == 0.0 {
        return Err(IndexError::ZeroNorm);
    }
    let inv_norm = norm.recip();
    for x in v.iter_mut() {
        *x *= inv_norm;
    }
    Ok(())
}

/// Return a unit-length copy of `v`.
pub fn l2_normalize(v: &[f32]) -> Result<Vec<f32>, IndexError> {
    let mut out = v.to_vec();
    l2_normalize_in_place(&mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l2_normalize_simple_vector() {
        let v = l2_normalize(&[3.0, 4.0]).expect("normalize");
        // L2 norm of [3, 4] is 5, so normalized should be [0.6, 0.8]
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn l2_normalize_maintains_unit_length() {
        for input in [
            vec![1.0f32, 2.0, 3.0, 4.0, 5.0],
            vec![-1.0, 2.0, -3.0, 4.0],
            vec![1e-10, 1e-10, 1e-10],
        ] {
            let v = l2_normalize(&input).expect("normalize");
            assert!((l2_norm(&v) - 1.0).abs() < 1e-5, "input {input:?}");
        }
    }

    #[test]
    fn l2_normalize_large_vector() {
        let input: Vec<f32> = (0..1000).map(|i| i as f32).collect();
        let v = l2_normalize(&input).expect("normalize");
        assert!((l2_norm(&v) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn l2_normalize_unit_length_within_tolerance() {
        let v = l2_normalize(&[0.3, -1.7, 2.2, 0.01]).expect("normalize");
        assert!((l2_norm(&v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn l2_normalize_idempotent() {
        let once = l2_normalize(&[1.0, 2.0, 3.0]).expect("first pass");
        let twice = l2_normalize(&once).expect("second pass");
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).abs() < 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn l2_normalize_preserves_direction() {
        let v = l2_normalize(&[1.0, 2.0, 3.0]).expect("normalize");
        assert!((v[1] / v[0] - 2.0).abs() < 1e-5);
        assert!((v[2] / v[0] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn zero_vector_is_rejected() {
        let mut v = vec![0.0f32, 0.0, 0.0];
        assert_eq!(l2_normalize_in_place(&mut v), Err(IndexError::ZeroNorm));
        // Left untouched on failure.
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_vector_is_rejected() {
        assert_eq!(l2_normalize(&[]), Err(IndexError::EmptyVector));
    }

    #[test]
    fn non_finite_vector_is_rejected() {
        assert_eq!(l2_normalize(&[f32::NAN, 1.0]), Err(IndexError::NonFinite));
        assert_eq!(
            l2_normalize(&[f32::INFINITY, 1.0]),
            Err(IndexError::NonFinite)
        );
    }
}
