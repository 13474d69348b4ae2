//! Random pokes that shake blocks out of local minima.

use rand::Rng;

use crate::error::Result;
use crate::forces::sink::{ForceSink, apply_checked};
use crate::geometry::{Block, Vector};

/// Standard normal sample via Box-Muller.
///
/// Samples are re-drawn while `z / 10 + 0.5` falls outside `[0, 1]`, so the
/// result always lies in `[-5, 5]`.
pub fn randn<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        // (0, 1]: keeps ln finite.
        let u = 1.0 - rng.r#gen::<f64>();
        let v = 1.0 - rng.r#gen::<f64>();
        let z = (-2.0 * u.ln()).sqrt() * (std::f64::consts::TAU * v).cos();
        let clamped = z / 10.0 + 0.5;
        if (0.0..=1.0).contains(&clamped) {
            return z;
        }
    }
}

/// Apply `(scale * randn, scale * randn)` at the centre of every movable block.
pub fn apply_random_pokes<R, S>(blocks: &[Block], scale: f64, rng: &mut R, sink: &mut S) -> Result<()>
where
    R: Rng + ?Sized,
    S: ForceSink + ?Sized,
{
    for (i, block) in blocks.iter().enumerate() {
        if block.is_static {
            continue;
        }
        let force = Vector::new(scale * randn(rng), scale * randn(rng));
        apply_checked(sink, i, block.position, force)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::forces::sink::AppliedForce;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_randn_bounded_and_centred() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let samples: Vec<f64> = (0..20_000).map(|_| randn(&mut rng)).collect();
        assert!(samples.iter().all(|z| z.abs() <= 5.0));

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.05, "mean {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance {var}");
    }

    #[test]
    fn test_randn_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(randn(&mut a), randn(&mut b));
        }
    }

    #[test]
    fn test_pokes_only_movable_blocks() {
        let blocks = vec![
            Block::rectangle(0.0, 0.0, 10.0, 10.0),
            Block::rectangle(50.0, 0.0, 10.0, 10.0).into_static(),
            Block::rectangle(100.0, 0.0, 10.0, 10.0),
        ];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut out: Vec<AppliedForce> = Vec::new();
        apply_random_pokes(&blocks, 0.05, &mut rng, &mut out).unwrap();

        let touched: Vec<_> = out.iter().map(|f| f.block).collect();
        assert_eq!(touched, vec![0, 2]);
        assert_eq!(out[1].point, Vector::new(100.0, 0.0));
        assert!(out.iter().all(|f| f.force.x.abs() <= 0.25 && f.force.y.abs() <= 0.25));
    }

    #[test]
    fn test_zero_scale_is_silent() {
        let blocks = vec![Block::rectangle(0.0, 0.0, 10.0, 10.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut out: Vec<AppliedForce> = Vec::new();
        apply_random_pokes(&blocks, 0.0, &mut rng, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_non_finite_scale_rejected() {
        let blocks = vec![Block::rectangle(0.0, 0.0, 10.0, 10.0)];
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut out: Vec<AppliedForce> = Vec::new();
        let err = apply_random_pokes(&blocks, f64::INFINITY, &mut rng, &mut out);
        assert_eq!(err, Err(LayoutError::NonFiniteForce { block: 0 }));
    }
}
