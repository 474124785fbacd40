/// Evenly spaced samples over a closed interval, emitted left to right so
/// repeated chart renders of the same domain are reproducible.
pub struct Linspace {
    start: f64,
    step: f64,
    index: usize,
    len: usize,
}

impl Linspace {
    pub fn new(min: f64, max: f64, n: usize) -> Linspace {
        let step = if n > 1 {
            (max - min) / (n - 1) as f64
        } else {
            0.0
        };
        Linspace {
            start: min,
            step,
            index: 0,
            len: n,
        }
    }
}

impl Iterator for Linspace {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        if self.index >= self.len {
            None
        } else {
            let i = self.index;
            self.index += 1;
            // Multiply rather than accumulate, so the last sample lands on
            // max without drift.
            Some(self.start + self.step * i as f64)
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.len - self.index;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Linspace {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_the_interval_inclusively() {
        let samples: Vec<f64> = Linspace::new(0.0, 10.0, 5).collect();
        assert_eq!(samples, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
    }

    #[test]
    fn single_sample_sits_on_min() {
        let samples: Vec<f64> = Linspace::new(3.0, 9.0, 1).collect();
        assert_eq!(samples, vec![3.0]);
    }

    #[test]
    fn is_monotone_left_to_right() {
        let samples: Vec<f64> = Linspace::new(-4.0, 4.0, 101).collect();
        assert_eq!(samples.len(), 101);
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*samples.last().unwrap(), 4.0);
    }
}
