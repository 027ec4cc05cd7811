use crate::algebra::FloatT;

/// Fixed-capacity ring buffer of the most recently accepted objective values.
///
/// Once full, every [`push`](FunctionValueHistory::push) overwrites the
/// oldest entry.  Only the running maximum is needed by the non-monotone
/// line search, but the full window is kept for diagnostics.

#[derive(Debug, Clone)]
pub struct FunctionValueHistory<T> {
    values: Vec<T>,
    // slot that the next push writes to
    head: usize,
    len: usize,
}

impl<T> FunctionValueHistory<T>
where
    T: FloatT,
{
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be positive");
        Self {
            values: vec![T::zero(); capacity],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Fill the whole window with copies of `v`.
    pub fn fill(&mut self, v: T) {
        self.values.fill(v);
        self.head = 0;
        self.len = self.capacity();
    }

    pub fn push(&mut self, v: T) {
        self.values[self.head] = v;
        self.head = (self.head + 1) % self.capacity();
        self.len = usize::min(self.len + 1, self.capacity());
    }

    /// Largest stored value, or `-inf` when empty.
    pub fn max(&self) -> T {
        self.iter().fold(T::neg_infinity(), T::max)
    }

    /// Most recently pushed value.
    pub fn last(&self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let cap = self.capacity();
        Some(self.values[(self.head + cap - 1) % cap])
    }

    /// Stored values, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        let cap = self.capacity();
        let start = (self.head + cap - self.len) % cap;
        (0..self.len).map(move |i| self.values[(start + i) % cap])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_wraps() {
        let mut h = FunctionValueHistory::<f64>::new(3);
        assert!(h.is_empty());
        assert_eq!(h.max(), f64::NEG_INFINITY);
        assert_eq!(h.last(), None);

        h.push(5.);
        h.push(1.);
        assert_eq!(h.len(), 2);
        assert_eq!(h.max(), 5.);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![5., 1.]);

        h.push(2.);
        h.push(0.);
        // 5 has dropped out of the window
        assert_eq!(h.len(), 3);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![1., 2., 0.]);
        assert_eq!(h.max(), 2.);
        assert_eq!(h.last(), Some(0.));
    }

    #[test]
    fn test_history_fill() {
        let mut h = FunctionValueHistory::<f64>::new(4);
        h.push(10.);
        h.fill(-1.);
        assert_eq!(h.len(), 4);
        assert_eq!(h.max(), -1.);

        h.push(-3.);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![-1., -1., -1., -3.]);
        assert_eq!(h.max(), -1.);

        h.clear();
        assert!(h.is_empty());
        h.push(7.);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![7.]);
    }

    #[test]
    fn test_history_single_slot() {
        let mut h = FunctionValueHistory::<f32>::new(1);
        h.push(1.);
        h.push(2.);
        assert_eq!(h.len(), 1);
        assert_eq!(h.max(), 2.);
    }
}
