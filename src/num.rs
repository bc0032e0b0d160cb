//! Complex numbers and the minimal float abstraction the engines are generic over.

use core::fmt;

// Minimal float trait for the generic engines (no_std, trig through libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn sin_cos(self) -> (Self, Self) {
        (self.sin(), self.cos())
    }
    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn pi() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrtf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
    fn pi() -> Self {
        core::f32::consts::PI
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn sqrt(self) -> Self {
        libm::sqrt(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }
    fn pi() -> Self {
        core::f64::consts::PI
    }
}

/// A complex value with real part `re` and imaginary part `im`.
///
/// Arithmetic never mutates its operands; every operation returns a new
/// value. There is no canonical form, so `-0.0` and `0.0` imaginary parts
/// are kept as they are.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complex<T: Float> {
    pub re: T,
    pub im: T,
}

impl<T: Float> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
    pub fn zero() -> Self {
        Self {
            re: T::zero(),
            im: T::zero(),
        }
    }
    /// A purely real sample, as produced by the column reader.
    pub fn from_real(re: T) -> Self {
        Self { re, im: T::zero() }
    }
    /// Unit phasor `cos(theta) + i sin(theta)`.
    #[inline(always)]
    pub fn expi(theta: T) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { re: cos, im: sin }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }
    #[allow(clippy::should_implement_trait)]
    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }
    /// Multiply both components by a real factor.
    #[inline(always)]
    pub fn scale(self, factor: T) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }
    pub fn conj(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }
    /// Magnitude `sqrt(re² + im²)`.
    pub fn norm(self) -> T {
        (self.re * self.re + self.im * self.im).sqrt()
    }
    /// Component-wise absolute value, the form spectrum tables are printed in.
    pub fn abs_parts(self) -> Self {
        Self {
            re: self.re.abs(),
            im: self.im.abs(),
        }
    }
}

impl<T: Float> Default for Complex<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.re, self.im)
    }
}

impl<T: Float> core::ops::Neg for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

impl<T: Float> core::ops::Add for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Complex::<T>::add(self, other)
    }
}

impl<T: Float> core::ops::Sub for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Complex::<T>::sub(self, other)
    }
}

impl<T: Float> core::ops::Mul for Complex<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Complex::<T>::mul(self, other)
    }
}

pub type Complex32 = Complex<f32>;
pub type Complex64 = Complex<f64>;

#[cfg(all(feature = "internal-tests", test))]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_complex_operations() {
        let a = Complex64::new(1.0, -2.0);
        let b = Complex64::new(3.0, 4.0);
        let c = a.mul(b);
        assert_eq!(c, Complex64::new(11.0, -2.0));
        assert_eq!(a.add(b), Complex64::new(4.0, 2.0));
        assert_eq!(a.sub(b), Complex64::new(-2.0, -6.0));
        let n = -a;
        assert_eq!(n.re, -1.0);
        assert_eq!(n.im, 2.0);
    }

    #[test]
    fn test_operands_untouched() {
        let a = Complex64::new(1.5, 2.5);
        let b = Complex64::new(-0.5, 4.0);
        let _ = a * b + a - b;
        assert_eq!(a, Complex64::new(1.5, 2.5));
        assert_eq!(b, Complex64::new(-0.5, 4.0));
    }

    #[test]
    fn test_expi_quarter_turn() {
        let w = Complex64::expi(<f64 as Float>::pi() / 2.0);
        assert!(w.re.abs() < 1e-12);
        assert!((w.im - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nan_propagates() {
        let a = Complex64::new(f64::NAN, 0.0);
        let c = a.mul(Complex64::new(1.0, 1.0));
        assert!(c.re.is_nan() && c.im.is_nan());
    }

    proptest! {
        #[test]
        fn prop_mul_commutes(ar in -1e3f64..1e3, ai in -1e3f64..1e3, br in -1e3f64..1e3, bi in -1e3f64..1e3) {
            let a = Complex64::new(ar, ai);
            let b = Complex64::new(br, bi);
            let ab = a.mul(b);
            let ba = b.mul(a);
            prop_assert!((ab.re - ba.re).abs() < 1e-9);
            prop_assert!((ab.im - ba.im).abs() < 1e-9);
        }

        #[test]
        fn prop_norm_is_multiplicative(ar in -1e2f64..1e2, ai in -1e2f64..1e2, br in -1e2f64..1e2, bi in -1e2f64..1e2) {
            let a = Complex64::new(ar, ai);
            let b = Complex64::new(br, bi);
            let lhs = a.mul(b).norm();
            let rhs = a.norm() * b.norm();
            prop_assert!((lhs - rhs).abs() <= 1e-9 * rhs.max(1.0));
        }
    }
}
