//! Demonstration of the GPS-anchored placement core: builds the default
//! scene, simulates a short walk toward the model, and prints the placement
//! decisions a rendering host would apply each step.

use geoanchor::{
    format_coordinate, format_distance, parse_override, CsvFormatter, FixResolver, GeoCoordinate,
    GpsFix, JsonFormatter, ObjectTracker, SceneConfig, TextFormatter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== GPS-Anchored Placement Demo ===\n");

    let config = SceneConfig::default();
    let mut resolver =
        FixResolver::new(config.fallback_location)?.with_min_accuracy(config.gps.min_accuracy_m);

    // No live fix yet: the fallback location applies
    let (origin, source) = resolver.resolve(None);
    println!(
        "Reference ({:?}): {}",
        source,
        format_coordinate(origin.latitude, origin.longitude, 6)
    );

    let mut tracker = ObjectTracker::new(origin, config.visibility)?;
    for object in config.tracked_objects()? {
        tracker.add_object(object)?;
    }
    println!("Tracking {} objects\n", tracker.objects().len());

    simulate_walk(&mut tracker, &mut resolver)?;
    demonstrate_manual_override(&mut tracker)?;
    demonstrate_log_formats(&tracker)?;

    Ok(())
}

/// Feed a few northbound fixes through the resolver and show how the
/// placements change
fn simulate_walk(
    tracker: &mut ObjectTracker,
    resolver: &mut FixResolver,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Simulated walk (4 fixes, heading north) ---");
    let formatter = TextFormatter::new();
    let start = tracker.reference().origin;

    for step in 1..=4u64 {
        let fix = GpsFix {
            coordinate: GeoCoordinate::new(
                start.latitude + 0.0001 * step as f64,
                start.longitude,
            )?
            .with_accuracy(4.0 + step as f64)?,
            timestamp_ms: step * 1_000,
        };

        let (origin, source) = resolver.resolve(Some(fix));
        tracker.update_reference(origin)?;

        println!(
            "\nstep {} ({:?}) at {}",
            step,
            source,
            format_coordinate(origin.latitude, origin.longitude, 6)
        );
        for placement in tracker.placements() {
            println!("  {}", formatter.format(&placement));
        }

        if let Some((nearest, distance)) = tracker.nearest_object() {
            println!("  nearest: {} ({})", nearest.id, format_distance(distance));
        }
    }
    println!();
    Ok(())
}

/// Recenter the scene from a pasted coordinate string, including one that
/// must be rejected without touching the reference
fn demonstrate_manual_override(
    tracker: &mut ObjectTracker,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Manual override ---");

    let before = tracker.reference().origin;
    match parse_override("not, numbers") {
        Ok(_) => unreachable!("parser accepted garbage"),
        Err(err) => println!("rejected 'not, numbers': {}", err),
    }
    assert_eq!(tracker.reference().origin, before);

    let coord = parse_override("-23.5506, -46.6334")?;
    tracker.update_reference(coord)?;
    println!(
        "recentered on {}\n",
        format_coordinate(coord.latitude, coord.longitude, 4)
    );
    Ok(())
}

/// Show the structured output formats available for logging
fn demonstrate_log_formats(tracker: &ObjectTracker) -> Result<(), Box<dyn std::error::Error>> {
    println!("--- Log formats ---");

    let placements = tracker.placements();

    let csv = CsvFormatter::new();
    println!("{}", csv.header());
    for placement in &placements {
        println!("{}", csv.format(placement));
    }

    if let Some(first) = placements.first() {
        println!("\n{}", JsonFormatter::pretty().format(first)?);
    }
    Ok(())
}
