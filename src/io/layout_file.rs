//! Layout file reading and writing.
//!
//! Layout files are JSON documents shaped like a store snapshot:
//! `{ "columns": 12, "items": [{ "id": "a", "x": 0, "y": 0, "w": 2, "h": 1 }] }`.

use crate::layout::LayoutState;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Reads and validates a layout file.
pub fn load_layout(path: &Path) -> Result<LayoutState> {
    let file = File::open(path).with_context(|| format!("Failed to open layout file {}", path.display()))?;
    let layout: LayoutState = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse layout file {}", path.display()))?;
    layout
        .validate()
        .with_context(|| format!("Invalid layout in {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        columns = layout.columns,
        items = layout.items.len(),
        "layout loaded"
    );
    Ok(layout)
}

/// Writes a layout as pretty-printed JSON, replacing any existing file.
pub fn save_layout(path: &Path, layout: &LayoutState) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create layout file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, layout).context("Failed to serialize layout")?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::info!(path = %path.display(), items = layout.items.len(), "layout saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::GridItem;
    use std::env;
    use std::fs;

    #[test]
    fn test_rejects_invalid_layout() {
        let path = env::temp_dir().join("gridpanel_invalid_layout.json");
        fs::write(&path, r#"{"columns": 4, "items": [{"id": "a", "x": 0, "y": 0, "w": 0, "h": 1}]}"#).unwrap();

        let err = load_layout(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("zero width or height"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_names_path() {
        let path = env::temp_dir().join("gridpanel_does_not_exist.json");
        let err = load_layout(&path).unwrap_err();
        assert!(err.to_string().contains("gridpanel_does_not_exist.json"));
    }

    #[test]
    fn test_items_default_to_empty() {
        let path = env::temp_dir().join("gridpanel_empty_layout.json");
        fs::write(&path, r#"{"columns": 6}"#).unwrap();

        let layout = load_layout(&path).unwrap();
        assert_eq!(layout, LayoutState::new(6, Vec::<GridItem>::new()));
        let _ = fs::remove_file(&path);
    }
}
