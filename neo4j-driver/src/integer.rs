// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Lossless 64-bit integer wrapper
//!
//! Graph databases return integers as signed 64-bit values. Clients that
//! treat numbers as doubles lose precision beyond 2^53, so integers are kept
//! in [`Integer`] and only converted to `f64` on request.
//!
//! Conversion policy for [`Integer::to_number`]: values outside the safe range
//! are rejected with [`ValueError::OutOfSafeRange`]. Use
//! [`Integer::to_number_lossy`] to round to the nearest double instead.

use crate::error::ValueError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest integer a double holds exactly together with its neighbours (2^53 - 1)
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Smallest integer a double holds exactly together with its neighbours
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Signed 64-bit integer, addressable as high and low 32-bit halves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Integer {
    value: i64,
}

impl Integer {
    pub const ZERO: Integer = Integer { value: 0 };
    pub const ONE: Integer = Integer { value: 1 };
    pub const MAX_VALUE: Integer = Integer { value: i64::MAX };
    pub const MIN_VALUE: Integer = Integer { value: i64::MIN };
    pub const MAX_SAFE_VALUE: Integer = Integer { value: MAX_SAFE_INTEGER };
    pub const MIN_SAFE_VALUE: Integer = Integer { value: MIN_SAFE_INTEGER };

    /// Create from the two's complement halves of a 64-bit value
    pub const fn from_bits(low: i32, high: i32) -> Self {
        Integer {
            value: ((high as i64) << 32) | (low as u32 as i64),
        }
    }

    /// Create from a double
    ///
    /// NaN and infinities become zero, values beyond the 64-bit range
    /// saturate, fractions are truncated toward zero.
    pub fn from_number(value: f64) -> Self {
        if !value.is_finite() {
            return Integer::ZERO;
        }
        // `as` saturates at the i64 bounds and truncates toward zero
        Integer { value: value as i64 }
    }

    /// Parse from text in the given radix (2..=36), with optional sign
    pub fn from_string(text: &str, radix: u32) -> Result<Self, ValueError> {
        if !(2..=36).contains(&radix) {
            return Err(ValueError::InvalidRadix(radix));
        }
        i64::from_str_radix(text.trim(), radix)
            .map(Integer::from)
            .map_err(|_| ValueError::InvalidInteger {
                value: text.to_string(),
                radix,
            })
    }

    pub const fn low_bits(&self) -> i32 {
        self.value as i32
    }

    pub const fn high_bits(&self) -> i32 {
        (self.value >> 32) as i32
    }

    pub const fn as_i64(&self) -> i64 {
        self.value
    }

    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.value < 0
    }

    pub const fn is_positive(&self) -> bool {
        self.value >= 0
    }

    pub const fn is_odd(&self) -> bool {
        self.value & 1 == 1
    }

    pub const fn is_even(&self) -> bool {
        self.value & 1 == 0
    }

    /// Whether the value converts to a double without loss
    pub const fn in_safe_range(&self) -> bool {
        self.value >= MIN_SAFE_INTEGER && self.value <= MAX_SAFE_INTEGER
    }

    /// Convert to a double, failing outside the safe range
    pub fn to_number(&self) -> Result<f64, ValueError> {
        if self.in_safe_range() {
            Ok(self.value as f64)
        } else {
            Err(ValueError::OutOfSafeRange(self.value))
        }
    }

    /// Convert to the nearest double (ties to even)
    pub fn to_number_lossy(&self) -> f64 {
        self.value as f64
    }

    /// Render in the given radix (2..=36), lowercase digits
    pub fn to_string_radix(&self, radix: u32) -> Result<String, ValueError> {
        if !(2..=36).contains(&radix) {
            return Err(ValueError::InvalidRadix(radix));
        }
        if radix == 10 {
            return Ok(self.value.to_string());
        }

        let mut magnitude = self.value.unsigned_abs();
        if magnitude == 0 {
            return Ok("0".to_string());
        }
        let mut digits = Vec::new();
        while magnitude > 0 {
            digits.push(DIGITS[(magnitude % radix as u64) as usize]);
            magnitude /= radix as u64;
        }
        if self.value < 0 {
            digits.push(b'-');
        }
        digits.reverse();
        Ok(digits.into_iter().map(char::from).collect())
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for Integer {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Integer::from_string(s, 10)
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                fn from(value: $t) -> Self {
                    Integer { value: value as i64 }
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, u8, u16, u32);

impl From<Integer> for i64 {
    fn from(value: Integer) -> Self {
        value.value
    }
}

/// Create an [`Integer`]
pub fn int(value: impl Into<Integer>) -> Integer {
    value.into()
}

/// Convert to a double, failing outside the safe range
pub fn to_number(value: impl Into<Integer>) -> Result<f64, ValueError> {
    value.into().to_number()
}

/// Exact decimal rendering
pub fn to_string(value: impl Into<Integer>) -> String {
    value.into().to_string()
}

pub fn in_safe_range(value: impl Into<Integer>) -> bool {
    value.into().in_safe_range()
}

mod private {
    pub trait Sealed {}
    impl Sealed for super::Integer {}
    impl Sealed for f64 {}
}

/// Numeric representation of temporal components
///
/// Implemented for [`Integer`] (lossless, the default) and `f64` (native
/// number representation used when lossless integers are disabled).
pub trait Numeric:
    Copy + fmt::Debug + fmt::Display + PartialEq + Send + Sync + private::Sealed + 'static
{
    /// Whole-number value; `f64` fractions truncate toward zero
    fn to_integer(&self) -> Integer;

    /// Whether the value holds a whole number
    fn is_integral(&self) -> bool;

    fn from_integer(value: Integer) -> Self;
}

impl Numeric for Integer {
    fn to_integer(&self) -> Integer {
        *self
    }

    fn is_integral(&self) -> bool {
        true
    }

    fn from_integer(value: Integer) -> Self {
        value
    }
}

impl Numeric for f64 {
    fn to_integer(&self) -> Integer {
        Integer::from_number(*self)
    }

    fn is_integral(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }

    fn from_integer(value: Integer) -> Self {
        value.to_number_lossy()
    }
}
