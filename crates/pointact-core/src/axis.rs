//! Axis constraint types used by action plugins that restrict motion.
//!
//! An action's configuration stores a [`LockAxis`] policy; when a gesture is
//! recognised the policy is resolved to a concrete [`Axis`] that travels on
//! the prepared action for the rest of the gesture.

/// A concrete movement constraint.
///
/// `Xy` means unconstrained: both components of reported motion pass through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Xy,
}

impl Axis {
    /// The perpendicular axis, or `None` when unconstrained.
    pub fn opposite(self) -> Option<Axis> {
        match self {
            Axis::X => Some(Axis::Y),
            Axis::Y => Some(Axis::X),
            Axis::Xy => None,
        }
    }

    /// Parses `"x"`, `"y"` or `"xy"`. Any other input is rejected so callers
    /// can keep their previous value.
    pub fn parse(value: &str) -> Option<Axis> {
        match value {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "xy" => Some(Axis::Xy),
            _ => None,
        }
    }
}

impl Default for Axis {
    fn default() -> Self {
        Axis::Xy
    }
}

/// A configured axis-lock policy.
///
/// `Start` defers the choice to the axis the gesture started on, which is
/// stored separately in the action's configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LockAxis {
    X,
    Y,
    Xy,
    Start,
}

impl LockAxis {
    /// Resolves the policy to the axis that constrains the gesture.
    pub fn resolve(self, start_axis: Axis) -> Axis {
        match self {
            LockAxis::X => Axis::X,
            LockAxis::Y => Axis::Y,
            LockAxis::Xy => Axis::Xy,
            LockAxis::Start => start_axis,
        }
    }

    /// Parses `"x"`, `"y"`, `"xy"` or `"start"`. Any other input is rejected
    /// so callers can keep their previous value.
    pub fn parse(value: &str) -> Option<LockAxis> {
        match value {
            "x" => Some(LockAxis::X),
            "y" => Some(LockAxis::Y),
            "xy" => Some(LockAxis::Xy),
            "start" => Some(LockAxis::Start),
            _ => None,
        }
    }
}

impl Default for LockAxis {
    fn default() -> Self {
        LockAxis::Xy
    }
}
