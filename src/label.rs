use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Normalized YOLO box geometry, every field in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub x_center: f64,
    pub y_center: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self { x_center: 0.5, y_center: 0.5, width: 0.8, height: 0.8 }
    }
}

/// Write a single-object YOLO label line, replacing any previous file.
pub fn write_label(path: &Path, class_id: u32, bbox: BoundingBox) -> Result<()> {
    let mut f = File::create(path)
        .with_context(|| format!("cannot create label file {}", path.display()))?;
    writeln!(
        f,
        "{} {} {} {} {}",
        class_id, bbox.x_center, bbox.y_center, bbox.width, bbox.height
    )
    .with_context(|| format!("cannot write label file {}", path.display()))?;
    Ok(())
}
