//! Fixed-width floats (§4.2/§4.3): width is always 32 or 64, tagged secret
//! like `BigInt`. Kept as a thin wrapper rather than folding into `BigInt`
//! because float constant-folding (§4.7) has its own NaN/inf rules the
//! integer overflow model doesn't share.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    pub width: u32,
    pub secret: bool,
    pub value: f64,
}

impl Float {
    pub fn new(value: f64, width: u32, secret: bool) -> Self {
        debug_assert!(width == 32 || width == 64, "float width must be 32 or 64");
        Float { width, secret, value }
    }

    pub fn is_secret(&self) -> bool {
        self.secret
    }

    pub fn add(&self, other: &Float) -> Float {
        assert_eq!(self.width, other.width, "width mismatch");
        Float::new(self.value + other.value, self.width, self.secret || other.secret)
    }

    pub fn sub(&self, other: &Float) -> Float {
        assert_eq!(self.width, other.width, "width mismatch");
        Float::new(self.value - other.value, self.width, self.secret || other.secret)
    }

    pub fn mul(&self, other: &Float) -> Float {
        assert_eq!(self.width, other.width, "width mismatch");
        Float::new(self.value * other.value, self.width, self.secret || other.secret)
    }

    /// `width == 32` narrows through an `f32` round-trip so constant-folding
    /// matches the precision the code generator will actually emit.
    pub fn narrowed(&self) -> f64 {
        if self.width == 32 {
            self.value as f32 as f64
        } else {
            self.value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secret_taint_propagates() {
        let a = Float::new(1.0, 64, true);
        let b = Float::new(2.0, 64, false);
        assert!(a.add(&b).is_secret());
    }

    #[test]
    fn width_32_narrows_precision() {
        let f = Float::new(0.1, 32, false);
        assert_eq!(f.narrowed(), 0.1f32 as f64);
    }
}
