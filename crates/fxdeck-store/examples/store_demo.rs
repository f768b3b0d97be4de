//! Store demo: create, save, search, export and import presets.
//!
//! Run with: cargo run -p fxdeck-store --example store_demo

use fxdeck_store::{PresetStore, PresetType, StoreError};
use serde_json::json;

fn main() -> Result<(), StoreError> {
    let workdir =
        tempfile::tempdir().map_err(|e| StoreError::create_dir(std::env::temp_dir(), e))?;
    let root = workdir.path().join("presets");

    // --- Creating presets ---
    println!("=== Creating Presets ===\n");

    let mut store = PresetStore::new(&root);
    let looks = [
        ("Warm Sunset", PresetType::Color, "Color Grades", 0.7, &["warm", "film"][..]),
        ("Cold Steel", PresetType::Color, "Color Grades", 0.6, &["blue"][..]),
        ("Film Burn", PresetType::Transition, "Transitions", 0.9, &["film", "leak"][..]),
    ];

    for (name, kind, category, intensity, tags) in looks {
        let mut preset = store
            .create(name, kind.as_str(), category, intensity)
            .with_tags(tags.iter().copied())
            .with_param("contrast", 0.1)
            .with_param("color_tint", json!({"r": 1.0, "g": 0.95, "b": 0.9}));
        let path = store.save_new(&mut preset)?;
        println!("  {:4} {:16} -> {}", preset.id, name, path.display());
        // Reload so the next create sees the new id.
        store.load()?;
    }

    // --- Browsing ---
    println!("\n=== Categories ===\n");
    for category in store.categories() {
        println!("  {:20} {} presets", category, store.presets_in_category(category).len());
    }

    println!("\n=== Search: \"film\" ===\n");
    for preset in store.search("film", None, None) {
        println!("  {:4} {} ({})", preset.id, preset.name, preset.preset_type);
    }

    // --- Bundles ---
    println!("\n=== Export / Import ===\n");
    let bundle = workdir.path().join("bundle.json");
    let exported = store.export_all(&bundle)?;
    println!("  exported {} presets", exported);

    let report = store.import(&bundle)?;
    println!(
        "  imported {} presets, {} with new ids: {:?}",
        report.count(),
        report.reassigned,
        report.imported
    );

    Ok(())
}
