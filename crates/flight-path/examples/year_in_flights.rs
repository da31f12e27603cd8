use chrono::{TimeZone, Utc};
use flight_path::{
    airplane_rotation, camera_position, generate_flight_segments, generate_year_flight_paths,
    VisitedLocation, DEFAULT_FRAME_RATE,
};

fn visit(name: &str, latitude: f64, longitude: f64, date: (i32, u32, u32)) -> VisitedLocation {
    VisitedLocation {
        name: name.to_string(),
        latitude,
        longitude,
        visited_at: Utc.with_ymd_and_hms(date.0, date.1, date.2, 12, 0, 0).unwrap(),
    }
}

fn main() {
    let visits = vec![
        visit("San Francisco", 37.7749, -122.4194, (2024, 1, 4)),
        visit("Tokyo", 35.6762, 139.6503, (2024, 3, 18)),
        visit("Singapore", 1.3521, 103.8198, (2024, 6, 2)),
        visit("Paris", 48.8566, 2.3522, (2024, 9, 21)),
        visit("New York", 40.7128, -74.0060, (2024, 12, 30)),
    ];

    let paths = generate_year_flight_paths(visits);
    println!("Year in flights: {} hops", paths.len());

    for path in &paths {
        println!(
            "\n{} -> {}",
            path.start.name.as_deref().unwrap_or("?"),
            path.end.name.as_deref().unwrap_or("?")
        );
        println!(
            "  {:.0} km, bearing {:.1} deg, ~{:.1} h in the air, {:.1}s on screen",
            path.distance_km,
            path.bearing_deg,
            path.estimated_flight_hours,
            path.duration_ms / 1000.0
        );

        let segments = generate_flight_segments(path, DEFAULT_FRAME_RATE);
        println!("  {} animation frames", segments.len());

        // Sample a mid-flight frame the way the renderer would consume it.
        let mid = segments.len() / 2;
        let rotation = airplane_rotation(
            &segments[mid],
            segments.get(mid - 1),
            segments.get(mid + 1),
        );
        let camera = camera_position(&segments[mid]);
        println!(
            "  mid-flight: ({:.3}, {:.3}) alt {:.2}, yaw {:.1}, camera at ({:.3}, {:.3})",
            segments[mid].latitude,
            segments[mid].longitude,
            segments[mid].altitude,
            rotation.yaw_deg,
            camera.latitude,
            camera.longitude
        );
    }
}
