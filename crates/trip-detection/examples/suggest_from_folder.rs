use std::path::PathBuf;

use trip_detection::{AlbumSuggester, ExiftoolRunner};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "heic", "tiff", "dng", "nef", "cr3"];

fn main() {
    env_logger::init();

    let folder = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut paths: Vec<PathBuf> = std::fs::read_dir(&folder)
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|e| IMAGE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    println!("Found {} image files in {}", paths.len(), folder.display());

    let mut runner = ExiftoolRunner::new().unwrap();
    let photos = runner.extract(&paths).unwrap();
    let dated = photos.iter().filter(|p| p.taken_at.is_some()).count();
    let located = photos.iter().filter(|p| p.has_coordinates()).count();
    println!("Ingested {} photos ({} dated, {} with GPS)", photos.len(), dated, located);

    let suggester = AlbumSuggester::with_default_config();
    let suggestions = suggester.suggest(photos).unwrap();

    println!("\nSuggestions: {} total", suggestions.len());
    for s in &suggestions {
        println!(
            "  {} — \"{}\" ({} photos, confidence {})",
            s.id,
            s.title,
            s.photos.len(),
            s.confidence
        );
        println!("      {}", s.reason);
        println!(
            "      {} → {}",
            s.start_date.format("%Y-%m-%d"),
            s.end_date.format("%Y-%m-%d")
        );
    }
}
