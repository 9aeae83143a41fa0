//! Point tables for designed circular curves.
//!
//! Derives a horizontal curve from a 3-point alignment (approach point,
//! apex, departure point) and a design radius, then prints the curve
//! parameters, the layout anchors and the evenly divided point-on-curve
//! table. Runs once for a surveyed UTM alignment and once for a
//! right-hand bend in local coordinates.
//!
//! Usage:
//!   cargo run --example curve_table

use curvelis::geometry::{Alignment, HorizontalCurve};
use curvelis::math::Point2;

fn main() -> curvelis::Result<()> {
    env_logger::init();

    println!("=== Curve Point Tables ===");

    // Surveyed alignment in UTM zone 47N, radius and division in metres.
    let surveyed = Alignment::new(
        Point2::new(542_939.592, 1_560_557.148),
        Point2::new(543_219.123, 1_560_612.552),
        Point2::new(543_408.493, 1_560_534.688),
    )?;
    report("Surveyed UTM alignment", &surveyed, 500.0, 10.0)?;

    // Right-hand bend in local coordinates.
    let right_bend = Alignment::new(
        Point2::new(0.0, 0.0),
        Point2::new(1000.0, 0.0),
        Point2::new(1800.0, -1000.0),
    )?;
    report("Local right-hand bend", &right_bend, 500.0, 20.0)?;

    Ok(())
}

fn report(title: &str, alignment: &Alignment, radius: f64, division: f64) -> curvelis::Result<()> {
    let curve = HorizontalCurve::derive(alignment, radius, false)?;
    let layout = curve.generate(division)?;

    println!("\n--- {title} ---");
    println!("Radius:            {:.3} m", curve.radius());
    println!(
        "Deflection:        {:.6}° ({})",
        curve.signed_deflection().to_degrees(),
        curve.deflection_dms()
    );
    println!("Direction:         {:?}", curve.direction());
    println!("Tangent length:    {:.3} m", curve.tangent_length());
    println!("Curve length:      {:.3} m", curve.arc_length());
    println!("External distance: {:.3} m", curve.external_distance());

    println!();
    print_anchor("PC", &layout.pc);
    print_anchor("PI", &layout.pi);
    print_anchor("PT", &layout.pt);
    print_anchor("O", &layout.center);
    print_anchor("MO", &layout.mid_ordinate);

    println!();
    println!(
        "{:>4}  {:>8}  {:>12}  {:>13}",
        "Name", "Station", "Easting", "Northing"
    );
    for point in &layout.points {
        println!(
            "{:>4}  {:8.3}  {:12.3}  {:13.3}",
            point.name, point.station, point.position.x, point.position.y
        );
    }

    Ok(())
}

fn print_anchor(name: &str, position: &Point2) {
    println!("{name:>2}: ({:.3}, {:.3})", position.x, position.y);
}
