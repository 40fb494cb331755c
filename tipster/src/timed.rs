//! Timing of computations.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Timed<V> {
    pub value: V,
    pub elapsed: Duration,
}
impl<V> Timed<V> {
    pub fn result<E>(f: impl FnOnce() -> Result<V, E>) -> Result<Timed<V>, E> {
        let start_time = Instant::now();
        f().map(|value| {
            let elapsed = start_time.elapsed();
            Timed { value, elapsed }
        })
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_millis() as f64 / 1_000.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_ok() {
        let timed = Timed::<_>::result(|| Ok::<_, ()>(42)).unwrap();
        assert_eq!(42, timed.value);
        assert!(timed.elapsed_secs() >= 0.0);
    }

    #[test]
    fn result_err() {
        assert_eq!(Err("boom"), Timed::<u8>::result(|| Err("boom")));
    }
}
