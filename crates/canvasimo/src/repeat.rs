//! Numeric loops.

use crate::geom::ArgumentCountError;

/// A range of values visited with a fixed step, from `start` toward `end`.
///
/// The direction is inferred from the bounds and the sign of `step` is
/// ignored. `end` is excluded. A zero step visits nothing.
///
/// ```
/// use canvasimo::Repeat;
///
/// let values: Vec<f64> = Repeat::with_step(10.0, 0.0, -4.0).into_iter().collect();
/// assert_eq!(values, vec![10.0, 6.0, 2.0]);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Repeat {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Repeat {
    /// From zero to `end`.
    pub fn new(end: f64) -> Self {
        Repeat::with_step(0.0, end, 1.0)
    }

    pub fn range(start: f64, end: f64) -> Self {
        Repeat::with_step(start, end, 1.0)
    }

    pub fn with_step(start: f64, end: f64, step: f64) -> Self {
        Repeat { start, end, step }
    }

    /// Builds a loop from `[end]`, `[start, end]` or `[start, end, step]`.
    ///
    /// NaN values are read as zero.
    pub fn from_args(args: &[f64]) -> Result<Self, ArgumentCountError> {
        let arg = |idx: usize| if args[idx].is_nan() { 0.0 } else { args[idx] };
        match args.len() {
            1 => Ok(Repeat::new(arg(0))),
            2 => Ok(Repeat::range(arg(0), arg(1))),
            3 => Ok(Repeat::with_step(arg(0), arg(1), arg(2))),
            found => Err(ArgumentCountError::InvalidArgumentCount {
                expected: "1, 2 or 3 values",
                found,
            }),
        }
    }

    pub fn iter(&self) -> RepeatIter {
        let step = self.step.abs();
        RepeatIter {
            current: self.start,
            end: self.end,
            step: if self.end > self.start { step } else { -step },
        }
    }
}

impl IntoIterator for Repeat {
    type Item = f64;
    type IntoIter = RepeatIter;

    fn into_iter(self) -> RepeatIter {
        self.iter()
    }
}

/// Iterator over the values of a [`Repeat`].
#[derive(Clone, Debug)]
pub struct RepeatIter {
    current: f64,
    end: f64,
    step: f64,
}

impl Iterator for RepeatIter {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let before_end = if self.step > 0.0 {
            self.current < self.end
        } else {
            self.current > self.end
        };

        if self.step == 0.0 || !before_end {
            return None;
        }

        let value = self.current;
        self.current += self.step;

        Some(value)
    }
}

#[test]
fn forward() {
    let values: Vec<f64> = Repeat::new(3.0).into_iter().collect();
    assert_eq!(values, vec![0.0, 1.0, 2.0]);

    let values: Vec<f64> = Repeat::range(2.0, 4.0).into_iter().collect();
    assert_eq!(values, vec![2.0, 3.0]);
}

#[test]
fn backward() {
    let values: Vec<f64> = Repeat::new(-3.0).into_iter().collect();
    assert_eq!(values, vec![0.0, -1.0, -2.0]);

    // The sign of the step doesn't matter.
    let values: Vec<f64> = Repeat::with_step(0.0, 10.0, -5.0).into_iter().collect();
    assert_eq!(values, vec![0.0, 5.0]);
}

#[test]
fn empty_loops() {
    assert_eq!(Repeat::with_step(0.0, 10.0, 0.0).iter().count(), 0);
    assert_eq!(Repeat::range(5.0, 5.0).iter().count(), 0);
}

#[test]
fn from_args() {
    assert_eq!(Repeat::from_args(&[5.0]), Ok(Repeat::new(5.0)));
    assert_eq!(Repeat::from_args(&[1.0, 5.0]), Ok(Repeat::range(1.0, 5.0)));
    assert_eq!(
        Repeat::from_args(&[std::f64::NAN, 5.0, 2.0]),
        Ok(Repeat::with_step(0.0, 5.0, 2.0))
    );
    assert_eq!(
        Repeat::from_args(&[]),
        Err(ArgumentCountError::InvalidArgumentCount {
            expected: "1, 2 or 3 values",
            found: 0,
        })
    );
    assert!(Repeat::from_args(&[1.0, 2.0, 3.0, 4.0]).is_err());
}
