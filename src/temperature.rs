use image::RgbImage;

use crate::colormap::ColorIndexTable;

/// Temperature encoded by colormap index 0.
pub const MIN_TEMP_C: f64 = 10.0;
/// Temperature encoded by colormap index 255.
pub const MAX_TEMP_C: f64 = 60.0;

/// Temperature in degrees Celsius encoded by a colormap index.
pub fn index_to_celsius(index: u8) -> f64 {
    index as f64 / 255.0 * (MAX_TEMP_C - MIN_TEMP_C) + MIN_TEMP_C
}

/// Hottest temperature decodable from `rgb` through the inverse colormap.
///
/// Pixels whose color is not in the table contribute nothing. `None` means
/// not a single pixel resolved (the image was never colormapped, or was
/// re-encoded lossily).
pub fn max_temperature(rgb: &RgbImage, table: &ColorIndexTable) -> Option<f64> {
    // The scale is increasing, so the hottest index is the hottest pixel.
    let mut hottest: Option<u8> = None;
    for p in rgb.pixels() {
        if let Some(index) = table.index_of((p[0], p[1], p[2])) {
            if hottest.map_or(true, |h| index > h) {
                hottest = Some(index);
            }
        }
    }
    hottest.map(index_to_celsius)
}
