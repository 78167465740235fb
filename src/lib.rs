use anyhow::{anyhow, Context, Result};
use image::io::Reader as ImageReader;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

pub mod colormap;
pub mod label;
pub mod temperature;

pub use colormap::{jet_colormap, ColorIndexTable, COLORMAP_SIZE};
pub use label::{write_label, BoundingBox};
pub use temperature::{index_to_celsius, max_temperature, MAX_TEMP_C, MIN_TEMP_C};

const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Images whose maximum temperature reaches this value (inclusive) are
    /// labeled with the abnormal class.
    pub threshold: f64,
    pub bbox: BoundingBox,
    pub abnormal_class: u32,
    pub normal_class: u32,
    pub num_workers: usize,
}

pub fn default_config(threshold: f64) -> Config {
    Config {
        threshold,
        bbox: BoundingBox::default(),
        abnormal_class: 0,
        normal_class: 1,
        num_workers: num_cpus::get().max(1),
    }
}

#[derive(Debug, Clone)]
pub struct Params {
    pub image_dir: PathBuf,
    pub output_dir: PathBuf,
    pub config: Config,
}

/// Tally one worker reports for its shard. `skipped` counts images that got
/// no label: unreadable files and images with zero colormap-decodable pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShardResult {
    pub abnormal: usize,
    pub normal: usize,
    pub skipped: usize,
}

impl ShardResult {
    fn absorb(&mut self, other: ShardResult) {
        self.abnormal += other.abnormal;
        self.normal += other.normal;
        self.skipped += other.skipped;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub abnormal: usize,
    pub normal: usize,
    pub skipped: usize,
}

/// Image files directly inside `dir`, sorted by path.
///
/// Only the literal extensions `jpg`, `jpeg` and `png` are matched;
/// subdirectories are not entered.
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read image directory {}", dir.display()))?;
    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            if IMAGE_EXTENSIONS.contains(&ext) {
                images.push(path);
            }
        }
    }
    images.sort();
    Ok(images)
}

/// Split `items` into `parts` contiguous shards.
///
/// The split is disjoint and exhaustive, preserves order, and shard lengths
/// differ by at most one (earlier shards take the extra element). With more
/// parts than items the trailing shards are empty.
pub fn partition<T: Clone>(items: &[T], parts: usize) -> Vec<Vec<T>> {
    let parts = parts.max(1);
    let base = items.len() / parts;
    let extra = items.len() % parts;
    let mut shards = Vec::with_capacity(parts);
    let mut offset = 0;
    for i in 0..parts {
        let len = base + usize::from(i < extra);
        shards.push(items[offset..offset + len].to_vec());
        offset += len;
    }
    shards
}

fn label_path_for(image_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = image_path.file_stem().and_then(|s| s.to_str()).unwrap_or("label");
    output_dir.join(format!("{}.txt", stem))
}

/// Label every image in one shard, in order.
///
/// Unreadable files and images where no pixel decodes through the table are
/// skipped and tallied, never classified. A label that cannot be written is
/// an error and stops the run.
pub fn label_shard(
    shard: &[PathBuf],
    table: &ColorIndexTable,
    output_dir: &Path,
    config: &Config,
) -> Result<ShardResult> {
    let mut result = ShardResult::default();
    for path in shard {
        let decoded = ImageReader::open(path)
            .map_err(anyhow::Error::from)
            .and_then(|r| r.decode().map_err(anyhow::Error::from));
        let rgb = match decoded {
            Ok(img) => img.to_rgb8(),
            Err(err) => {
                warn!("skipping unreadable image {}: {}", path.display(), err);
                result.skipped += 1;
                continue;
            }
        };
        let Some(max_c) = max_temperature(&rgb, table) else {
            info!("no colormap pixels in {}, not labeling", path.display());
            result.skipped += 1;
            continue;
        };
        let label_path = label_path_for(path, output_dir);
        if max_c >= config.threshold {
            write_label(&label_path, config.abnormal_class, config.bbox)?;
            result.abnormal += 1;
        } else {
            write_label(&label_path, config.normal_class, config.bbox)?;
            result.normal += 1;
        }
    }
    Ok(result)
}

/// Run the whole batch: discover, shard, label in parallel, aggregate.
pub fn process(params: Params) -> Result<BatchSummary> {
    let Params { image_dir, output_dir, config } = params;
    info!("Starting auto-labeling");
    info!("Image directory: {}", image_dir.display());
    info!("Output directory: {}", output_dir.display());
    info!("Threshold: {} C", config.threshold);

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("cannot create output directory {}", output_dir.display()))?;

    let images = discover_images(&image_dir)?;
    info!("Discovered {} images", images.len());

    let start = Instant::now();
    let table = Arc::new(ColorIndexTable::jet());
    let shards = partition(&images, config.num_workers);

    // Static fork-join: one thread per shard, results come back through the
    // join handles, summed only after every worker has finished.
    let mut handles = Vec::with_capacity(shards.len());
    for shard in shards {
        let table = Arc::clone(&table);
        let output_dir = output_dir.clone();
        let config = config.clone();
        handles.push(thread::spawn(move || label_shard(&shard, &table, &output_dir, &config)));
    }

    let mut totals = ShardResult::default();
    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle
            .join()
            .map_err(|_| anyhow!("labeling worker {} panicked", i))?
            .with_context(|| format!("labeling worker {} failed", i))?;
        totals.absorb(result);
    }

    info!("Labeling took {} ms", start.elapsed().as_millis());
    Ok(BatchSummary {
        total: images.len(),
        abnormal: totals.abnormal,
        normal: totals.normal,
        skipped: totals.skipped,
    })
}
