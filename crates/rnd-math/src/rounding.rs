//! Rounding a value to a multiple of a step.

use rnd_core::Real;

/// Rounding convention for [`round_to_step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Largest multiple of the step not above the value.
    Down,
    /// Smallest multiple of the step not below the value.
    Up,
    /// Whichever of `Down` / `Up` is closer; ties go up.
    Closest,
}

/// Round `value` to a multiple of `step` using the given convention.
///
/// A zero `step` returns `value` unchanged.
pub fn round_to_step(value: Real, step: Real, convention: Rounding) -> Real {
    if step == 0.0 {
        return value;
    }
    let down = (value / step).floor() * step;
    let up = (value / step).ceil() * step;
    match convention {
        Rounding::Down => down,
        Rounding::Up => up,
        Rounding::Closest => {
            if (value - down).abs() < (value - up).abs() {
                down
            } else {
                up
            }
        }
    }
}
