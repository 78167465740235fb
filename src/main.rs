// CLI entry for thermolabel
use anyhow::Result;
use clap::{Parser, ValueHint};
use std::path::PathBuf;
use thermolabel::{default_config, process, BoundingBox, Params};

#[derive(Parser, Debug)]
#[command(name = "thermolabel", version, about = "Threshold auto-labeling for JET-colormapped thermal images")]
struct Cli {
    /// Directory containing the thermal images
    #[arg(long = "image-dir", value_hint = ValueHint::DirPath)]
    image_dir: PathBuf,
    /// Directory the label files are written to
    #[arg(long = "output-dir", value_hint = ValueHint::DirPath)]
    output_dir: PathBuf,
    /// Temperature threshold in degrees Celsius
    #[arg(long)]
    threshold: f64,

    /// Bounding box center x (0..1)
    #[arg(long = "x-center", default_value_t = 0.5)]
    x_center: f64,
    /// Bounding box center y (0..1)
    #[arg(long = "y-center", default_value_t = 0.5)]
    y_center: f64,
    /// Bounding box width (0..1)
    #[arg(long, default_value_t = 0.8)]
    width: f64,
    /// Bounding box height (0..1)
    #[arg(long, default_value_t = 0.8)]
    height: f64,

    /// Class id written for images at or above the threshold
    #[arg(long = "abnormal-class", default_value_t = 0)]
    abnormal_class: u32,
    /// Class id written for images below the threshold
    #[arg(long = "normal-class", default_value_t = 1)]
    normal_class: u32,

    /// Number of worker threads
    #[arg(long)]
    workers: Option<usize>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let mut cfg = default_config(cli.threshold);
    cfg.bbox = BoundingBox {
        x_center: cli.x_center,
        y_center: cli.y_center,
        width: cli.width,
        height: cli.height,
    };
    cfg.abnormal_class = cli.abnormal_class;
    cfg.normal_class = cli.normal_class;
    if let Some(v) = cli.workers {
        cfg.num_workers = v.max(1);
    }
    let summary = process(Params {
        image_dir: cli.image_dir,
        output_dir: cli.output_dir,
        config: cfg,
    })?;
    println!(
        "Labeled {} of {} images: {} abnormal, {} normal, {} skipped",
        summary.abnormal + summary.normal,
        summary.total,
        summary.abnormal,
        summary.normal,
        summary.skipped
    );
    Ok(())
}
