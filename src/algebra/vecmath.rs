use super::{FloatT, ScalarMath, VectorMath};
use std::iter::zip;

impl<T: FloatT> ScalarMath for T {
    type T = T;

    fn clamp_to(&self, lo: T, hi: T) -> T {
        if *self < lo {
            lo
        } else if *self > hi {
            hi
        } else {
            *self
        }
    }

    fn safe_div(&self, den: T, fallback: T) -> T {
        if den == T::zero() {
            return fallback;
        }
        let q = *self / den;
        if q.is_finite() {
            q
        } else {
            fallback
        }
    }
}

impl<T: FloatT> VectorMath for [T] {
    type T = T;

    fn copy_from(&mut self, src: &[T]) -> &mut Self {
        self.copy_from_slice(src);
        self
    }

    fn scalarop(&mut self, op: impl Fn(T) -> T) -> &mut Self {
        for x in &mut *self {
            *x = op(*x);
        }
        self
    }

    fn set(&mut self, c: T) -> &mut Self {
        self.scalarop(|_x| c)
    }

    fn scale(&mut self, c: T) -> &mut Self {
        self.scalarop(|x| x * c)
    }

    fn negate(&mut self) -> &mut Self {
        self.scalarop(|x| -x)
    }

    fn dot(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        accumulate_pairwise(self.len(), &|i| self[i] * y[i])
    }

    fn dist(&self, y: &[T]) -> T {
        assert_eq!(self.len(), y.len());
        let dist2 = accumulate_pairwise(self.len(), &|i| T::powi(self[i] - y[i], 2));
        T::sqrt(dist2)
    }

    fn sum(&self) -> T {
        accumulate_pairwise(self.len(), &|i| self[i])
    }

    fn sumsq(&self) -> T {
        self.dot(self)
    }

    // 2-norm
    fn norm(&self) -> T {
        T::sqrt(self.sumsq())
    }

    // Returns infinity norm
    fn norm_inf(&self) -> T {
        let mut out = T::zero();
        for v in self.iter().map(|v| v.abs()) {
            if v.is_nan() {
                return T::nan();
            }
            out = if v > out { v } else { out };
        }
        out
    }

    // max absolute difference (mostly used for unit testing)
    fn norm_inf_diff(&self, b: &[T]) -> T {
        zip(self, b).fold(T::zero(), |acc, (x, y)| T::max(acc, T::abs(*x - *y)))
    }

    fn minimum(&self) -> T {
        self.iter().fold(T::infinity(), |r, &s| T::min(r, s))
    }

    fn maximum(&self) -> T {
        self.iter().fold(-T::infinity(), |r, &s| T::max(r, s))
    }

    fn is_finite(&self) -> bool {
        self.iter().all(|&x| T::is_finite(x))
    }

    fn axpby(&mut self, a: T, x: &[T], b: T) -> &mut Self {
        assert_eq!(self.len(), x.len());

        zip(&mut *self, x).for_each(|(y, x)| *y = a * (*x) + b * (*y));
        self
    }

    fn waxpby(&mut self, a: T, x: &[T], b: T, y: &[T]) -> &mut Self {
        assert_eq!(self.len(), x.len());
        assert_eq!(self.len(), y.len());

        for (w, (x, y)) in zip(&mut *self, zip(x, y)) {
            *w = a * (*x) + b * (*y);
        }
        self
    }
}

// ---------------------------------------------------------------------
// pairwise accumulator for sums and dot products.  Keeps the rounding
// error growth at O(log n) rather than O(n) for long vectors.

const BASE_CASE_DIM: usize = 32;

fn accumulate_pairwise<T, F>(n: usize, op: &F) -> T
where
    T: FloatT,
    F: Fn(usize) -> T,
{
    return inner(op, 0, n);

    fn inner<T, F>(op: &F, start: usize, n: usize) -> T
    where
        T: FloatT,
        F: Fn(usize) -> T,
    {
        if n < BASE_CASE_DIM {
            (start..start + n).fold(T::zero(), |acc, i| acc + op(i))
        } else {
            let n2 = n / 2;
            inner(op, start, n2) + inner(op, start + n2, n - n2)
        }
    }
}
