//! Dimension-checked physical quantities.
//!
//! A [`Quantity`] stores its value in coherent SI together with a
//! [`Dimension`], the vector of exponents over the base dimensions mass,
//! length, time, temperature, angle and electric current. Addition,
//! subtraction and comparison check that both sides agree; multiplication,
//! division and powers combine the exponent vectors.

use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{PhysicsError, Result};
use crate::units::Unit;

// Exponents are kept in twelfths so square, cube and fourth roots stay exact.
const DENOMINATOR: i32 = 12;
const BASE_COUNT: usize = 6;
const BASE_SYMBOLS: [&str; BASE_COUNT] = ["kg", "m", "s", "K", "rad", "A"];
const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Exponents over (mass, length, time, temperature, angle, current).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimension {
    exponents: [i32; BASE_COUNT],
}

impl Dimension {
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0, 0);
    pub const MASS: Self = Self::new(1, 0, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::new(0, 1, 0, 0, 0, 0);
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0);
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 1, 0, 0);
    pub const ANGLE: Self = Self::new(0, 0, 0, 0, 1, 0);
    pub const CURRENT: Self = Self::new(0, 0, 0, 0, 0, 1);

    pub const AREA: Self = Self::new(0, 2, 0, 0, 0, 0);
    pub const VOLUME: Self = Self::new(0, 3, 0, 0, 0, 0);
    pub const VELOCITY: Self = Self::new(0, 1, -1, 0, 0, 0);
    pub const ACCELERATION: Self = Self::new(0, 1, -2, 0, 0, 0);
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0);
    pub const ENERGY: Self = Self::new(1, 2, -2, 0, 0, 0);
    pub const POWER: Self = Self::new(1, 2, -3, 0, 0, 0);
    /// Pressure, stress and volumetric energy density share this dimension.
    pub const PRESSURE: Self = Self::new(1, -1, -2, 0, 0, 0);
    pub const DENSITY: Self = Self::new(1, -3, 0, 0, 0, 0);
    pub const IRRADIANCE: Self = Self::new(1, 0, -3, 0, 0, 0);
    pub const SOLID_ANGLE: Self = Self::new(0, 0, 0, 0, 2, 0);
    pub const MAGNETIC_FLUX_DENSITY: Self = Self::new(1, 0, -2, 0, 0, -1);
    pub const ANGULAR_MOMENTUM: Self = Self::new(1, 2, -1, 0, 0, 0);

    /// Builds a dimension from integer exponents.
    pub const fn new(
        mass: i32,
        length: i32,
        time: i32,
        temperature: i32,
        angle: i32,
        current: i32,
    ) -> Self {
        Self {
            exponents: [
                mass * DENOMINATOR,
                length * DENOMINATOR,
                time * DENOMINATOR,
                temperature * DENOMINATOR,
                angle * DENOMINATOR,
                current * DENOMINATOR,
            ],
        }
    }

    pub fn is_dimensionless(self) -> bool {
        self == Self::NONE
    }

    /// True for plain ratios and plane angles. Solid angles and other powers
    /// of the radian do not qualify.
    pub fn is_angle_or_ratio(self) -> bool {
        self == Self::NONE || self == Self::ANGLE
    }

    pub fn powi(self, n: i32) -> Self {
        self.map(|exponent| exponent * n)
    }

    /// Scales every exponent by `power`, or `None` if a scaled exponent is not
    /// a multiple of 1/12.
    pub fn powf(self, power: f64) -> Option<Self> {
        let mut exponents = [0; BASE_COUNT];
        for (scaled, &exponent) in exponents.iter_mut().zip(&self.exponents) {
            let exact = f64::from(exponent) * power;
            let rounded = exact.round();
            if (exact - rounded).abs() > 1e-9 {
                return None;
            }
            *scaled = rounded as i32;
        }
        Some(Self { exponents })
    }

    pub fn recip(self) -> Self {
        self.map(|exponent| -exponent)
    }

    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        Self {
            exponents: self.exponents.map(f),
        }
    }

    fn zip_with(self, rhs: Self, f: impl Fn(i32, i32) -> i32) -> Self {
        let mut exponents = self.exponents;
        for (lhs, rhs) in exponents.iter_mut().zip(rhs.exponents) {
            *lhs = f(*lhs, rhs);
        }
        Self { exponents }
    }
}

impl Mul for Dimension {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Div for Dimension {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a - b)
    }
}

fn gcd(mut a: i32, mut b: i32) -> i32 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn write_superscript(f: &mut fmt::Formatter<'_>, n: i32) -> fmt::Result {
    if n < 0 {
        f.write_char('⁻')?;
    }
    for digit in n.unsigned_abs().to_string().bytes() {
        f.write_char(SUPERSCRIPT_DIGITS[usize::from(digit - b'0')])?;
    }
    Ok(())
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for (symbol, &exponent) in BASE_SYMBOLS.iter().zip(&self.exponents) {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_char('·')?;
            }
            first = false;
            f.write_str(symbol)?;
            if exponent % DENOMINATOR != 0 {
                let divisor = gcd(exponent.abs(), DENOMINATOR);
                write!(f, "^({}/{})", exponent / divisor, DENOMINATOR / divisor)?;
            } else if exponent != DENOMINATOR {
                write_superscript(f, exponent / DENOMINATOR)?;
            }
        }
        Ok(())
    }
}

/// A value in SI tagged with its physical dimension.
#[derive(Clone, Copy, Debug)]
pub struct Quantity {
    value: f64,
    dimension: Dimension,
}

impl Quantity {
    #[inline]
    pub const fn from_si(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    /// `value` expressed in `unit`.
    #[inline]
    pub fn new(value: f64, unit: Unit) -> Self {
        Self::from_si(value * unit.scale, unit.dimension)
    }

    #[inline]
    pub const fn dimensionless(value: f64) -> Self {
        Self::from_si(value, Dimension::NONE)
    }

    #[inline]
    pub const fn radians(value: f64) -> Self {
        Self::from_si(value, Dimension::ANGLE)
    }

    #[inline]
    pub const fn si_value(self) -> f64 {
        self.value
    }

    #[inline]
    pub const fn dimension(self) -> Dimension {
        self.dimension
    }

    /// Value of this quantity expressed in `unit`.
    pub fn value_in(self, unit: Unit) -> Result<f64> {
        self.expect(unit.dimension, "unit conversion")?;
        Ok(self.value / unit.scale)
    }

    /// Like [`Quantity::value_in`], but keeps the unit symbol for display.
    pub fn display_in(self, unit: Unit) -> Result<InUnit> {
        Ok(InUnit {
            value: self.value_in(unit)?,
            symbol: unit.symbol,
        })
    }

    /// Returns `self` if it has `dimension`, otherwise a mismatch naming `operation`.
    pub fn expect(self, dimension: Dimension, operation: &'static str) -> Result<Self> {
        if self.dimension == dimension {
            Ok(self)
        } else {
            Err(PhysicsError::DimensionMismatch {
                operation,
                expected: dimension,
                found: self.dimension,
            })
        }
    }

    /// Raw value of a dimensionless quantity.
    pub fn ratio(self, operation: &'static str) -> Result<f64> {
        Ok(self.expect(Dimension::NONE, operation)?.value)
    }

    pub(crate) fn positive(self, operation: &'static str, name: &'static str) -> Result<Self> {
        if self.value > 0.0 {
            Ok(self)
        } else {
            Err(PhysicsError::domain(operation, name, self.value, "must be positive"))
        }
    }

    pub(crate) fn non_negative(self, operation: &'static str, name: &'static str) -> Result<Self> {
        if self.value >= 0.0 {
            Ok(self)
        } else {
            Err(PhysicsError::domain(operation, name, self.value, "must not be negative"))
        }
    }

    pub fn is_finite(self) -> bool {
        self.value.is_finite()
    }

    pub fn abs(self) -> Self {
        Self::from_si(self.value.abs(), self.dimension)
    }

    pub fn try_cmp(self, other: Self) -> Result<Ordering> {
        let other = other.expect(self.dimension, "comparison")?;
        self.value
            .partial_cmp(&other.value)
            .ok_or_else(|| PhysicsError::domain("comparison", "value", f64::NAN, "not a number"))
    }

    pub fn powi(self, n: i32) -> Self {
        Self::from_si(self.value.powi(n), self.dimension.powi(n))
    }

    pub fn powf(self, power: f64) -> Result<Self> {
        if self.value < 0.0 && power.fract() != 0.0 {
            return Err(PhysicsError::domain(
                "powf",
                "base",
                self.value,
                "negative base with a fractional power",
            ));
        }
        let dimension = self.dimension.powf(power).ok_or_else(|| {
            PhysicsError::domain(
                "powf",
                "power",
                power,
                "dimension exponents must stay multiples of 1/12",
            )
        })?;
        Ok(Self::from_si(self.value.powf(power), dimension))
    }

    pub fn sqrt(self) -> Result<Self> {
        if self.value < 0.0 {
            return Err(PhysicsError::domain("sqrt", "radicand", self.value, "negative"));
        }
        let dimension = self.dimension.powf(0.5).ok_or_else(|| {
            PhysicsError::domain("sqrt", "power", 0.5, "dimension exponents must stay multiples of 1/12")
        })?;
        Ok(Self::from_si(self.value.sqrt(), dimension))
    }

    pub fn cbrt(self) -> Result<Self> {
        let dimension = self.dimension.powf(1.0 / 3.0).ok_or_else(|| {
            PhysicsError::domain(
                "cbrt",
                "power",
                1.0 / 3.0,
                "dimension exponents must stay multiples of 1/12",
            )
        })?;
        Ok(Self::from_si(self.value.cbrt(), dimension))
    }

    fn transcendental(
        self,
        operation: &'static str,
        f: impl FnOnce(f64) -> f64,
        output: Dimension,
    ) -> Result<Self> {
        if !self.dimension.is_angle_or_ratio() {
            return Err(PhysicsError::DimensionMismatch {
                operation,
                expected: Dimension::NONE,
                found: self.dimension,
            });
        }
        Ok(Self::from_si(f(self.value), output))
    }

    pub fn sin(self) -> Result<Self> {
        self.transcendental("sin", f64::sin, Dimension::NONE)
    }

    pub fn cos(self) -> Result<Self> {
        self.transcendental("cos", f64::cos, Dimension::NONE)
    }

    pub fn tan(self) -> Result<Self> {
        self.transcendental("tan", f64::tan, Dimension::NONE)
    }

    /// Arc tangent; the result is an angle.
    pub fn atan(self) -> Result<Self> {
        self.transcendental("atan", f64::atan, Dimension::ANGLE)
    }

    pub fn cosh(self) -> Result<Self> {
        self.transcendental("cosh", f64::cosh, Dimension::NONE)
    }

    pub fn sinh(self) -> Result<Self> {
        self.transcendental("sinh", f64::sinh, Dimension::NONE)
    }

    pub fn tanh(self) -> Result<Self> {
        self.transcendental("tanh", f64::tanh, Dimension::NONE)
    }

    pub fn atanh(self) -> Result<Self> {
        if self.value.abs() >= 1.0 {
            return Err(PhysicsError::domain("atanh", "argument", self.value, "must lie in (-1, 1)"));
        }
        self.transcendental("atanh", f64::atanh, Dimension::NONE)
    }

    pub fn acosh(self) -> Result<Self> {
        if self.value < 1.0 {
            return Err(PhysicsError::domain("acosh", "argument", self.value, "below 1"));
        }
        self.transcendental("acosh", f64::acosh, Dimension::NONE)
    }

    pub fn ln(self) -> Result<Self> {
        if self.value <= 0.0 {
            return Err(PhysicsError::domain("ln", "argument", self.value, "not positive"));
        }
        self.transcendental("ln", f64::ln, Dimension::NONE)
    }

    pub fn exp(self) -> Result<Self> {
        self.transcendental("exp", f64::exp, Dimension::NONE)
    }
}

impl Add for Quantity {
    type Output = Result<Quantity>;

    fn add(self, rhs: Self) -> Result<Quantity> {
        let rhs = rhs.expect(self.dimension, "addition")?;
        Ok(Self::from_si(self.value + rhs.value, self.dimension))
    }
}

impl Sub for Quantity {
    type Output = Result<Quantity>;

    fn sub(self, rhs: Self) -> Result<Quantity> {
        let rhs = rhs.expect(self.dimension, "subtraction")?;
        Ok(Self::from_si(self.value - rhs.value, self.dimension))
    }
}

impl Mul for Quantity {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_si(self.value * rhs.value, self.dimension * rhs.dimension)
    }
}

impl Div for Quantity {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::from_si(self.value / rhs.value, self.dimension / rhs.dimension)
    }
}

impl Mul<f64> for Quantity {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f64) -> Self {
        Self::from_si(self.value * scalar, self.dimension)
    }
}

impl Div<f64> for Quantity {
    type Output = Self;

    #[inline]
    fn div(self, scalar: f64) -> Self {
        Self::from_si(self.value / scalar, self.dimension)
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;

    #[inline]
    fn mul(self, quantity: Quantity) -> Quantity {
        quantity * self
    }
}

impl Div<Quantity> for f64 {
    type Output = Quantity;

    #[inline]
    fn div(self, quantity: Quantity) -> Quantity {
        Quantity::from_si(self / quantity.value, quantity.dimension.recip())
    }
}

impl Neg for Quantity {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_si(-self.value, self.dimension)
    }
}

impl PartialEq for Quantity {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.value == other.value
    }
}

/// Quantities of different dimensions are unordered.
impl PartialOrd for Quantity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimension != other.dimension {
            return None;
        }
        self.value.partial_cmp(&other.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        if !self.dimension.is_dimensionless() {
            write!(f, " {}", self.dimension)?;
        }
        Ok(())
    }
}

/// A value converted to a named unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InUnit {
    pub value: f64,
    pub symbol: &'static str,
}

impl fmt::Display for InUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)?;
        write!(f, " {}", self.symbol)
    }
}
