use super::{Point2, Vector2};

/// Returns the signed angle from `from` to `to`, in radians.
///
/// Uses the `atan2(cross, dot)` convention: positive when `to` lies
/// counter-clockwise of `from`, negative when clockwise, in `(-π, π]`.
#[must_use]
pub fn signed_angle(from: &Vector2, to: &Vector2) -> f64 {
    from.perp(to).atan2(from.dot(to))
}

/// Returns the bearing of the direction from `from` to `to`, in radians.
///
/// Measured counter-clockwise from the +x axis, in `(-π, π]`.
#[must_use]
pub fn bearing(from: &Point2, to: &Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Renders an angle in radians as signed degrees-minutes-seconds with one
/// decimal on the seconds, e.g. `-51°20′42.4″`.
#[must_use]
pub fn to_dms(angle: f64) -> String {
    let degrees = angle.to_degrees();
    // Round in tenths of arc-seconds first so 59.96″ carries into the minute.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_tenths = (degrees.abs() * 36000.0).round() as u64;
    #[allow(clippy::cast_precision_loss)]
    let seconds = (total_tenths % 600) as f64 / 10.0;
    let whole_minutes = total_tenths / 600;
    let minutes = whole_minutes % 60;
    let deg = whole_minutes / 60;
    let sign = if degrees < 0.0 && total_tenths > 0 {
        "-"
    } else {
        ""
    };
    format!("{sign}{deg}°{minutes:02}′{seconds:04.1}″")
}
