//! Estimate the design curve hidden in a surveyed road centerline.
//!
//! Runs the full pipeline on a digitized centerline: even resampling,
//! RANSAC circle consensus, alignment reconstruction and the verification
//! point table on the recovered curve.
//!
//! Usage:
//!   cargo run --example estimate_centerline

use curvelis::estimation::{estimate_curve, EstimateConfig, RansacCircleConfig};
use curvelis::geometry::CurvePoint;
use curvelis::math::Point2;

/// Digitized centerline of a curved road section in UTM zone 47N.
#[allow(clippy::unreadable_literal)]
fn surveyed_centerline() -> Vec<Point2> {
    vec![
        Point2::new(681119.0450817, 1527757.4696346),
        Point2::new(681119.3968534, 1527757.6504096),
        Point2::new(681143.6579172, 1527756.5851417),
        Point2::new(681159.0136977, 1527756.6929437),
        Point2::new(681173.4631250, 1527759.6319443),
        Point2::new(681189.6597877, 1527767.1997959),
        Point2::new(681200.3085576, 1527776.5055463),
        Point2::new(681208.2744513, 1527787.3780785),
        Point2::new(681214.6224477, 1527799.4765282),
        Point2::new(681214.9790651, 1527799.4806670),
        Point2::new(681220.5513379, 1527819.9152865),
        Point2::new(681220.9922170, 1527833.4072438),
        Point2::new(681219.2690322, 1527849.8834369),
        Point2::new(681216.6632099, 1527865.2979926),
        Point2::new(681213.7011911, 1527880.3589159),
        Point2::new(681208.0542947, 1527900.6247882),
    ]
}

fn main() -> curvelis::Result<()> {
    env_logger::init();

    let centerline = surveyed_centerline();

    // Fixed seed keeps the report reproducible between runs.
    let config = EstimateConfig::new().with_ransac(RansacCircleConfig::new().with_seed(7));
    let estimate = estimate_curve(&centerline, &config)?;

    println!("=== Survey Samples ===");
    println!("Centerline vertices: {}", centerline.len());
    println!("Resampled points:    {}", estimate.samples.len());

    println!("\n=== Circle Consensus ===");
    println!(
        "Center:  ({:.3}, {:.3})",
        estimate.fit.center.x, estimate.fit.center.y
    );
    println!("Radius:  {:.3} m", estimate.fit.radius);
    println!(
        "Inliers: {} of {} samples",
        estimate.fit.inliers.len(),
        estimate.samples.len()
    );

    println!("\n=== Reconstructed Alignment ===");
    print_anchor("PC", &estimate.alignment.pc());
    print_anchor("PI", &estimate.alignment.pi());
    print_anchor("PT", &estimate.alignment.pt());

    println!("\n=== Curve Parameters ===");
    println!("Radius:            {:.3} m", estimate.curve.radius());
    println!(
        "Deflection:        {:.6}° ({})",
        estimate.curve.signed_deflection().to_degrees(),
        estimate.curve.deflection_dms()
    );
    println!("Direction:         {:?}", estimate.curve.direction());
    println!("Tangent length:    {:.3} m", estimate.curve.tangent_length());
    println!("Curve length:      {:.3} m", estimate.curve.arc_length());
    println!(
        "External distance: {:.3} m",
        estimate.curve.external_distance()
    );

    println!("\n=== Verification Points ===");
    println!(
        "{:>4}  {:>8}  {:>12}  {:>13}",
        "Name", "Station", "Easting", "Northing"
    );
    let points = &estimate.layout.points;
    if points.len() > 12 {
        for point in &points[..6] {
            print_row(point);
        }
        println!("{:>4}", "...");
        for point in &points[points.len() - 6..] {
            print_row(point);
        }
    } else {
        for point in points {
            print_row(point);
        }
    }

    Ok(())
}

fn print_anchor(name: &str, position: &Point2) {
    println!("{name:>2}: ({:.3}, {:.3})", position.x, position.y);
}

fn print_row(point: &CurvePoint) {
    println!(
        "{:>4}  {:8.3}  {:12.3}  {:13.3}",
        point.name, point.station, point.position.x, point.position.y
    );
}
