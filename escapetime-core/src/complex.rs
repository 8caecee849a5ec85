use std::ops::{Add, Mul, Sub};

/// A complex number as two `f64` components.
///
/// A small `Copy` type built for the tight iteration loop. We roll our own
/// rather than pulling in `num` so the arithmetic in the hot path stays
/// fully in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `re² + im²` — the squared magnitude, cheap enough for the bailout test.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// `√(re² + im²)`.
    #[inline]
    pub fn norm(self) -> f64 {
        self.norm_sq().sqrt()
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

/// Scalar multiplication: `Complex * f64`.
impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self {
            re: self.re * rhs,
            im: self.im * rhs,
        }
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im >= 0.0 {
            write!(f, "{} + {}i", self.re, self.im)
        } else {
            write!(f, "{} - {}i", self.re, -self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn addition() {
        let c = Complex::new(1.0, 2.0) + Complex::new(3.0, 4.0);
        assert!(approx_eq(c.re, 4.0));
        assert!(approx_eq(c.im, 6.0));
    }

    #[test]
    fn subtraction() {
        let c = Complex::new(5.0, 3.0) - Complex::new(2.0, 1.0);
        assert!(approx_eq(c.re, 3.0));
        assert!(approx_eq(c.im, 2.0));
    }

    #[test]
    fn multiplication() {
        // (1 + 2i)(3 + 4i) = -5 + 10i
        let c = Complex::new(1.0, 2.0) * Complex::new(3.0, 4.0);
        assert!(approx_eq(c.re, -5.0));
        assert!(approx_eq(c.im, 10.0));
    }

    #[test]
    fn squaring() {
        // (1 + i)² = 2i
        let z = Complex::new(1.0, 1.0);
        let z2 = z * z;
        assert!(approx_eq(z2.re, 0.0));
        assert!(approx_eq(z2.im, 2.0));
    }

    #[test]
    fn scalar_multiplication() {
        let c = Complex::new(2.0, 3.0) * 4.0;
        assert!(approx_eq(c.re, 8.0));
        assert!(approx_eq(c.im, 12.0));
    }

    #[test]
    fn norms() {
        let a = Complex::new(3.0, 4.0);
        assert!(approx_eq(a.norm_sq(), 25.0));
        assert!(approx_eq(a.norm(), 5.0));
    }

    #[test]
    fn display_signs() {
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "1 + 2i");
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1 - 2i");
    }
}
