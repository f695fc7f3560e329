//! Fixed-step composite quadrature rules sharing one partition of the interval

use std::fmt;

/// Uniform partition of an integration interval into `count` subintervals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partition {
    /// Lower integration limit
    pub begin: f64,
    /// Upper integration limit
    pub end: f64,
    /// Number of subintervals
    pub count: usize,
    /// Width of each subinterval
    pub step: f64,
}

impl Partition {
    /// Partition `[begin, end]` into `count` equal subintervals
    ///
    /// A zero count is accepted and produces an infinite (or NaN) step, which
    /// then propagates through the rules unchanged.
    pub fn new(begin: f64, end: f64, count: usize) -> Self {
        Self {
            begin,
            end,
            count,
            step: (end - begin) / count as f64,
        }
    }

    /// The i-th grid point `begin + i·step`
    pub fn point(&self, i: usize) -> f64 {
        self.begin + i as f64 * self.step
    }
}

/// The three supported integration rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuadratureRule {
    /// Rectangle rule sampling the left endpoint of every subinterval
    Midpoint,
    /// Composite trapezoidal rule
    Trapezoidal,
    /// Composite Simpson's rule over pairs of subintervals
    Simpson,
}

impl QuadratureRule {
    /// Every rule, in reporting order
    pub const ALL: [Self; 3] = [Self::Midpoint, Self::Trapezoidal, Self::Simpson];

    /// Approximate the integral of `f` over the partition
    pub fn integrate<F>(self, partition: &Partition, f: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Midpoint => midpoint(partition, f),
            Self::Trapezoidal => trapezoidal(partition, f),
            Self::Simpson => simpson(partition, f),
        }
    }

    /// Lower-case name used in console output
    pub const fn name(self) -> &'static str {
        match self {
            Self::Midpoint => "midpoint",
            Self::Trapezoidal => "trapezoidal",
            Self::Simpson => "Simpson's",
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rectangle rule evaluated at `begin + (i - 1)·step` for i = 1..=count
///
/// Despite the name the sample sits at the left edge of each subinterval,
/// not its center.
pub fn midpoint<F>(partition: &Partition, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut integral = 0.0;
    for i in 0..partition.count {
        integral += partition.step * f(partition.point(i));
    }
    integral
}

/// Composite trapezoidal rule
///
/// The upper endpoint is sampled at `end` directly rather than at
/// `begin + count·step`.
pub fn trapezoidal<F>(partition: &Partition, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let mut integral = f(partition.begin) + f(partition.end);

    for i in 1..partition.count {
        integral += 2.0 * f(partition.point(i));
    }

    (partition.step / 2.0) * integral
}

/// Composite Simpson's rule
///
/// Only `count / 2` whole panels are summed, so an odd count silently drops
/// the final subinterval.
pub fn simpson<F>(partition: &Partition, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let samples: Vec<f64> = (0..=partition.count)
        .map(|i| f(partition.point(i)))
        .collect();

    let sum: f64 = samples
        .windows(3)
        .step_by(2)
        .map(|panel| match panel {
            [left, center, right] => left + 4.0 * center + right,
            _ => 0.0,
        })
        .sum();

    sum * partition.step / 3.0
}

/// One value per quadrature rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByRule<T> {
    /// Value for the midpoint rule
    pub midpoint: T,
    /// Value for the trapezoidal rule
    pub trapezoidal: T,
    /// Value for Simpson's rule
    pub simpson: T,
}

impl<T> ByRule<T> {
    /// Build a value for every rule from a generator
    pub fn from_fn<G>(mut generate: G) -> Self
    where
        G: FnMut(QuadratureRule) -> T,
    {
        Self {
            midpoint: generate(QuadratureRule::Midpoint),
            trapezoidal: generate(QuadratureRule::Trapezoidal),
            simpson: generate(QuadratureRule::Simpson),
        }
    }

    /// Value for `rule`
    pub const fn get(&self, rule: QuadratureRule) -> &T {
        match rule {
            QuadratureRule::Midpoint => &self.midpoint,
            QuadratureRule::Trapezoidal => &self.trapezoidal,
            QuadratureRule::Simpson => &self.simpson,
        }
    }

    /// Mutable value for `rule`
    pub const fn get_mut(&mut self, rule: QuadratureRule) -> &mut T {
        match rule {
            QuadratureRule::Midpoint => &mut self.midpoint,
            QuadratureRule::Trapezoidal => &mut self.trapezoidal,
            QuadratureRule::Simpson => &mut self.simpson,
        }
    }

    /// Transform every value, keeping the rule association
    pub fn map<U, G>(self, mut transform: G) -> ByRule<U>
    where
        G: FnMut(T) -> U,
    {
        ByRule {
            midpoint: transform(self.midpoint),
            trapezoidal: transform(self.trapezoidal),
            simpson: transform(self.simpson),
        }
    }

    /// Pairs of (rule, value) in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (QuadratureRule, &T)> {
        QuadratureRule::ALL
            .into_iter()
            .map(move |rule| (rule, self.get(rule)))
    }
}
