use std::hint::black_box;

/// Deliberately wasteful floating point loop: `sin(i) * sqrt(i)` for every
/// `i < iterations`. Runs on the calling thread with no yield points.
pub fn heavy_computation(iterations: u64) -> f64 {
    let mut acc = 0.0_f64;
    for i in 0..iterations {
        let x = i as f64;
        acc += black_box(x.sin() * x.sqrt());
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn zero_iterations_is_free() {
        assert_eq!(heavy_computation(0), 0.0);
    }

    #[test]
    fn result_is_deterministic() {
        let expected: f64 = (0..1_000u64).map(|i| (i as f64).sin() * (i as f64).sqrt()).sum();
        assert!((heavy_computation(1_000) - expected).abs() < 1e-9);
    }

    #[test]
    fn cost_scales_with_iterations() {
        let started = Instant::now();
        heavy_computation(1_000);
        let fast = started.elapsed();

        let started = Instant::now();
        heavy_computation(5_000_000);
        let slow = started.elapsed();

        assert!(slow > fast, "fast={fast:?} slow={slow:?}");
    }
}
