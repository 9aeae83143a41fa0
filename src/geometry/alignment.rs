use crate::error::{CurveError, Result};
use crate::math::angle_2d::signed_angle;
use crate::math::{Point2, TOLERANCE};

/// Turning sense of a curve, derived from the deflection sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveDirection {
    /// Right-hand bend, negative deflection.
    Clockwise,
    /// Left-hand bend, positive deflection.
    CounterClockwise,
}

/// A 3-point horizontal alignment: entry tangent PC→PI, exit tangent PI→PT.
///
/// PC and PI, and PI and PT, must be distinct, and the three points must not
/// be collinear (the deflection angle must be nonzero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment {
    pc: Point2,
    pi: Point2,
    pt: Point2,
}

impl Alignment {
    /// Creates a validated alignment from its three control points.
    ///
    /// # Errors
    ///
    /// Returns an error if either tangent leg is degenerate or the points
    /// are collinear.
    pub fn new(pc: Point2, pi: Point2, pt: Point2) -> Result<Self> {
        if [pc, pi, pt]
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(
                CurveError::MalformedAlignment("control point is not finite".into()).into(),
            );
        }
        if (pi - pc).norm() < TOLERANCE {
            return Err(
                CurveError::MalformedAlignment("PC and PI coincide".into()).into(),
            );
        }
        if (pt - pi).norm() < TOLERANCE {
            return Err(
                CurveError::MalformedAlignment("PI and PT coincide".into()).into(),
            );
        }

        let alignment = Self { pc, pi, pt };
        if alignment.signed_deflection().abs() < TOLERANCE {
            return Err(CurveError::MalformedAlignment(
                "control points are collinear, deflection is zero".into(),
            )
            .into());
        }
        Ok(alignment)
    }

    /// Point of curvature (start of the entry tangent).
    #[must_use]
    pub fn pc(&self) -> Point2 {
        self.pc
    }

    /// Point of intersection (tangent apex).
    #[must_use]
    pub fn pi(&self) -> Point2 {
        self.pi
    }

    /// Point of tangency (end of the exit tangent).
    #[must_use]
    pub fn pt(&self) -> Point2 {
        self.pt
    }

    /// Signed deflection angle from the entry direction PC→PI to the exit
    /// direction PI→PT, in radians.
    ///
    /// Positive is a counter-clockwise (left) bend, negative clockwise.
    #[must_use]
    pub fn signed_deflection(&self) -> f64 {
        signed_angle(&(self.pi - self.pc), &(self.pt - self.pi))
    }

    /// Turning sense of the bend.
    #[must_use]
    pub fn direction(&self) -> CurveDirection {
        if self.signed_deflection() < 0.0 {
            CurveDirection::Clockwise
        } else {
            CurveDirection::CounterClockwise
        }
    }

    /// Length of the entry leg PC↔PI.
    #[must_use]
    pub fn entry_leg(&self) -> f64 {
        (self.pi - self.pc).norm()
    }

    /// Length of the exit leg PI↔PT.
    #[must_use]
    pub fn exit_leg(&self) -> f64 {
        (self.pt - self.pi).norm()
    }

    /// The same alignment traversed from the other end (PC and PT swapped).
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            pc: self.pt,
            pi: self.pi,
            pt: self.pc,
        }
    }

    /// Scales PC and PT away from (or toward) the apex by `factor`, keeping
    /// PI fixed. The deflection is unchanged; the legs scale by `factor`.
    ///
    /// # Errors
    ///
    /// Returns an error if `factor` collapses a leg below tolerance.
    pub fn scaled_about_pi(&self, factor: f64) -> Result<Self> {
        Self::new(
            self.pi + (self.pc - self.pi) * factor,
            self.pi,
            self.pi + (self.pt - self.pi) * factor,
        )
    }
}
