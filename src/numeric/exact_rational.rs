// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

use num_traits::{One, ToPrimitive, Zero};
use rug::{Integer, Rational};

/// Arbitrary-precision rational backed by GMP. Every comparison is exact.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ExactRational(pub Rational);

impl ExactRational {
    /// Lifts a double into an exact rational. Every finite `f64` is a dyadic
    /// rational, so the lift never rounds; NaN and infinities yield `None`.
    pub fn try_from_f64(value: f64) -> Option<Self> {
        Rational::from_f64(value).map(ExactRational)
    }

    /// `num / den` in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    pub fn from_num_den(num: i64, den: i64) -> Self {
        assert!(den != 0, "zero denominator");
        ExactRational(Rational::from((num, den)))
    }

    /// Sign as an ordering against zero.
    pub fn cmp_zero(&self) -> Ordering {
        self.0.cmp0()
    }

    pub fn is_positive(&self) -> bool {
        self.cmp_zero() == Ordering::Greater
    }

    pub fn is_negative(&self) -> bool {
        self.cmp_zero() == Ordering::Less
    }

    pub fn abs(&self) -> Self {
        ExactRational(self.0.clone().abs())
    }
}

impl<'a, 'b> Add<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn add(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result += &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Sub<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn sub(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result -= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Mul<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    fn mul(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result *= &rhs.0;
        ExactRational(result)
    }
}

impl<'a, 'b> Div<&'b ExactRational> for &'a ExactRational {
    type Output = ExactRational;

    /// Panics on a zero divisor, like `rug::Rational`. Callers test the
    /// denominator first.
    fn div(self, rhs: &'b ExactRational) -> ExactRational {
        let mut result = self.0.clone();
        result /= &rhs.0;
        ExactRational(result)
    }
}

impl Add for ExactRational {
    type Output = ExactRational;
    fn add(mut self, rhs: ExactRational) -> ExactRational {
        self.0 += rhs.0;
        self
    }
}

impl Sub for ExactRational {
    type Output = ExactRational;
    fn sub(mut self, rhs: ExactRational) -> ExactRational {
        self.0 -= rhs.0;
        self
    }
}

impl Mul for ExactRational {
    type Output = ExactRational;
    fn mul(mut self, rhs: ExactRational) -> ExactRational {
        self.0 *= rhs.0;
        self
    }
}

impl Div for ExactRational {
    type Output = ExactRational;
    fn div(mut self, rhs: ExactRational) -> ExactRational {
        self.0 /= rhs.0;
        self
    }
}

impl<'c> AddAssign<&'c ExactRational> for ExactRational {
    fn add_assign(&mut self, rhs: &'c ExactRational) {
        self.0 += &rhs.0;
    }
}

impl<'d> SubAssign<&'d ExactRational> for ExactRational {
    fn sub_assign(&mut self, rhs: &'d ExactRational) {
        self.0 -= &rhs.0;
    }
}

impl Neg for ExactRational {
    type Output = ExactRational;
    fn neg(self) -> ExactRational {
        ExactRational(-self.0)
    }
}

impl Neg for &ExactRational {
    type Output = ExactRational;
    fn neg(self) -> ExactRational {
        ExactRational(-self.0.clone())
    }
}

impl Zero for ExactRational {
    fn zero() -> Self {
        ExactRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.cmp_zero() == Ordering::Equal
    }
}

impl One for ExactRational {
    fn one() -> Self {
        ExactRational(Rational::from(1))
    }
}

impl ToPrimitive for ExactRational {
    fn to_i64(&self) -> Option<i64> {
        Integer::from(self.0.trunc_ref()).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Integer::from(self.0.trunc_ref()).to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for ExactRational {
    fn from(value: i32) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<i64> for ExactRational {
    fn from(value: i64) -> Self {
        ExactRational(Rational::from(value))
    }
}

impl From<Rational> for ExactRational {
    fn from(value: Rational) -> Self {
        ExactRational(value)
    }
}

impl fmt::Display for ExactRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
