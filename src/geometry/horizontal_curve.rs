use std::f64::consts::TAU;

use nalgebra::Rotation2;

use crate::error::{CurveError, Result};
use crate::math::angle_2d::{bearing, to_dms};
use crate::math::polyline_2d::linspace;
use crate::math::{Point2, TOLERANCE};

use super::alignment::{Alignment, CurveDirection};

/// A circular curve designed onto an alignment.
///
/// Derivation is pure: the alignment and radius go in, the deflection,
/// tangent length, and arc length come out, after the tangent clearance on
/// both legs has been checked. `round_about` selects the major arc (the
/// sweep is complemented to `2π − deflection`).
#[derive(Debug, Clone)]
pub struct HorizontalCurve {
    alignment: Alignment,
    radius: f64,
    signed_deflection: f64,
    deflection: f64,
    tangent_length: f64,
    arc_length: f64,
    round_about: bool,
}

/// A generated station point on the curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    /// Cumulative arc length from PC, in meters.
    pub station: f64,
    /// Station name, the distance zero-padded to three digits.
    pub name: String,
    /// Position in the working coordinate system.
    pub position: Point2,
}

/// Generation output: the station points plus the layout anchors.
#[derive(Debug, Clone)]
pub struct CurveLayout {
    /// Station points from PC to PT, strictly increasing stations.
    pub points: Vec<CurvePoint>,
    /// True point of curvature, at tangent length from PI on the entry leg.
    pub pc: Point2,
    /// Tangent apex.
    pub pi: Point2,
    /// True point of tangency, at tangent length from PI on the exit leg.
    pub pt: Point2,
    /// Center of curvature.
    pub center: Point2,
    /// Intersection of the center→PI ray with the arc.
    pub mid_ordinate: Point2,
}

impl HorizontalCurve {
    /// Derives the curve parameters for `alignment` at the design `radius`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRadius` for a non-positive or non-finite radius, and
    /// `InsufficientTangentRun` when either leg is shorter than the tangent
    /// length the radius requires.
    pub fn derive(alignment: &Alignment, radius: f64, round_about: bool) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(CurveError::InvalidRadius { radius }.into());
        }

        let signed_deflection = alignment.signed_deflection();
        let deflection = signed_deflection.abs();
        let tangent_length = radius * (deflection / 2.0).tan();

        let entry = alignment.entry_leg();
        if entry < tangent_length {
            return Err(CurveError::InsufficientTangentRun {
                leg: "entry",
                required: tangent_length,
                available: entry,
            }
            .into());
        }
        let exit = alignment.exit_leg();
        if exit < tangent_length {
            return Err(CurveError::InsufficientTangentRun {
                leg: "exit",
                required: tangent_length,
                available: exit,
            }
            .into());
        }

        let mut arc_length = radius * deflection;
        if round_about {
            arc_length = TAU * radius - arc_length;
        }

        Ok(Self {
            alignment: *alignment,
            radius,
            signed_deflection,
            deflection,
            tangent_length,
            arc_length,
            round_about,
        })
    }

    /// The alignment the curve was derived from.
    #[must_use]
    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    /// Design radius in meters.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Signed deflection angle in radians (positive = counter-clockwise).
    #[must_use]
    pub fn signed_deflection(&self) -> f64 {
        self.signed_deflection
    }

    /// Absolute deflection angle in radians.
    #[must_use]
    pub fn deflection(&self) -> f64 {
        self.deflection
    }

    /// The deflection rendered as degrees-minutes-seconds.
    #[must_use]
    pub fn deflection_dms(&self) -> String {
        to_dms(self.signed_deflection)
    }

    /// Turning sense of the bend.
    #[must_use]
    pub fn direction(&self) -> CurveDirection {
        self.alignment.direction()
    }

    /// Tangent length `radius · tan(deflection / 2)`, in meters.
    #[must_use]
    pub fn tangent_length(&self) -> f64 {
        self.tangent_length
    }

    /// Length of the traversed arc, in meters.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// Whether the curve traverses the major arc.
    #[must_use]
    pub fn is_round_about(&self) -> bool {
        self.round_about
    }

    /// External distance `radius / cos(deflection/2) - radius`: how far the
    /// apex sits beyond the arc along the center→PI line.
    #[must_use]
    pub fn external_distance(&self) -> f64 {
        self.radius / (self.deflection / 2.0).cos() - self.radius
    }

    /// True PC and PT: the points at tangent length from PI along the entry
    /// and exit legs.
    #[must_use]
    pub fn tangent_points(&self) -> (Point2, Point2) {
        let pi = self.alignment.pi();
        let pc = pi + (self.alignment.pc() - pi).normalize() * self.tangent_length;
        let pt = pi + (self.alignment.pt() - pi).normalize() * self.tangent_length;
        (pc, pt)
    }

    /// Generates station points every `division` meters along the arc.
    ///
    /// Stations start at 0 (the true PC) and end at the arc length (the true
    /// PT); the interior block is spaced exactly `division` apart and both
    /// end segments absorb half the leftover, so they are equal and no runt
    /// segment lands on one end only.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDivision` unless `0 < division ≤ arc_length`.
    pub fn generate(&self, division: f64) -> Result<CurveLayout> {
        if !division.is_finite() || division <= 0.0 || division > self.arc_length {
            return Err(CurveError::InvalidDivision {
                division,
                arc_length: self.arc_length,
            }
            .into());
        }

        let stations = self.stations(division);

        // Normalized arc: center of curvature at the origin, departure from
        // (0, R) drawing clockwise. Negating y selects the counter-clockwise
        // bend, negating x the major arc.
        let flip_y = self.signed_deflection > 0.0;
        let local: Vec<Point2> = stations
            .iter()
            .map(|station| {
                let theta = station / self.radius;
                let mut x = self.radius * theta.sin();
                let mut y = self.radius * theta.cos();
                if flip_y {
                    y = -y;
                }
                if self.round_about {
                    x = -x;
                }
                Point2::new(x, y)
            })
            .collect();

        // Rigid placement: the first local point lands on the true PC, then
        // everything rotates about it by the bearing of PC→PI.
        let (pc, pt) = self.tangent_points();
        let pi = self.alignment.pi();
        let shift = pc - local[0];
        let rotation = Rotation2::new(bearing(&pc, &pi));
        let place = |p: Point2| pc + rotation * (p + shift - pc);

        let points = stations
            .iter()
            .zip(&local)
            .map(|(&station, &p)| CurvePoint {
                station,
                name: format!("{station:03.0}"),
                position: place(p),
            })
            .collect();

        let center = place(Point2::origin());
        let mid_ordinate = center + (pi - center).normalize() * self.radius;

        Ok(CurveLayout {
            points,
            pc,
            pi,
            pt,
            center,
            mid_ordinate,
        })
    }

    /// Station distances: 0, an evenly spaced interior block, the arc
    /// length. Duplicates from an exact division are dropped.
    fn stations(&self, division: f64) -> Vec<f64> {
        let n = (self.arc_length / division).floor();
        let rest = (self.arc_length - n * division).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = n as usize + 1;

        let mut stations = Vec::with_capacity(count + 2);
        stations.push(0.0);
        for station in linspace(rest / 2.0, self.arc_length - rest / 2.0, count) {
            if station > stations[stations.len() - 1] + TOLERANCE {
                stations.push(station);
            }
        }
        if self.arc_length > stations[stations.len() - 1] + TOLERANCE {
            stations.push(self.arc_length);
        }
        stations
    }
}
