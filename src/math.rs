use num_bigint::BigUint;
use num_traits::{One, Zero};

// 2x2 matrix over arbitrary-precision unsigned integers
#[derive(Clone, Debug)]
pub struct Matrix2 {
    pub a: BigUint,
    pub b: BigUint,
    pub c: BigUint,
    pub d: BigUint,
}

impl Matrix2 {
    /// The identity matrix.
    pub fn identity() -> Self {
        Matrix2 {
            a: BigUint::one(),
            b: BigUint::zero(),
            c: BigUint::zero(),
            d: BigUint::one(),
        }
    }

    /// The Fibonacci companion matrix `[[1, 1], [1, 0]]`. Its n-th power holds
    /// F(n+1) in `a`, F(n) in `b` and `c`, and F(n-1) in `d`.
    pub fn fibonacci_base() -> Self {
        Matrix2 {
            a: BigUint::one(),
            b: BigUint::one(),
            c: BigUint::one(),
            d: BigUint::zero(),
        }
    }

    pub fn mul(&self, other: &Matrix2) -> Matrix2 {
        Matrix2 {
            a: &self.a * &other.a + &self.b * &other.c,
            b: &self.a * &other.b + &self.b * &other.d,
            c: &self.c * &other.a + &self.d * &other.c,
            d: &self.c * &other.b + &self.d * &other.d,
        }
    }

    // Exponentiation by squaring, O(log exp) multiplications
    pub fn pow(mut self, mut exp: u64) -> Matrix2 {
        let mut result = Matrix2::identity();
        while exp > 0 {
            if exp % 2 == 1 {
                result = result.mul(&self);
            }
            self = self.mul(&self);
            exp /= 2;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroth_power_is_identity() {
        let m = Matrix2::fibonacci_base().pow(0);
        assert_eq!(m.a, BigUint::one());
        assert_eq!(m.b, BigUint::zero());
        assert_eq!(m.c, BigUint::zero());
        assert_eq!(m.d, BigUint::one());
    }

    #[test]
    fn powers_of_the_companion_matrix_hold_fibonacci_numbers() {
        // F(0)..=F(10)
        let fibs: Vec<u32> = vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for n in 1..=9u64 {
            let m = Matrix2::fibonacci_base().pow(n);
            assert_eq!(m.a, BigUint::from(fibs[n as usize + 1]));
            assert_eq!(m.b, BigUint::from(fibs[n as usize]));
            assert_eq!(m.c, BigUint::from(fibs[n as usize]));
            assert_eq!(m.d, BigUint::from(fibs[n as usize - 1]));
        }
    }
}
