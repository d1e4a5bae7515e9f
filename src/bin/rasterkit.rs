use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use rasterkit::{Job, PixelBuffer, Point, Rect, Size};

#[derive(Parser, Debug)]
#[command(name = "rasterkit", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cut a rectangle out of an image.
    Crop(CropArgs),
    /// Cut a region around the image center.
    CropCenter(SizedCropArgs),
    /// Cut a region from the top edge, centered horizontally.
    CropTop(SizedCropArgs),
    /// Copy an image onto a background, replacing pixels.
    Paste(PasteArgs),
    /// Copy an image onto the center of a background.
    PasteCenter(PasteCenterArgs),
    /// Alpha-blend an image over a background.
    Overlay(OverlayArgs),
    /// Run a JSON job file.
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct InOut {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct CropArgs {
    #[command(flatten)]
    io: InOut,

    /// Left edge.
    #[arg(long, allow_hyphen_values = true)]
    x: i32,

    /// Top edge.
    #[arg(long, allow_hyphen_values = true)]
    y: i32,

    /// Region width.
    #[arg(long)]
    width: u32,

    /// Region height.
    #[arg(long)]
    height: u32,
}

#[derive(Args, Debug)]
struct SizedCropArgs {
    #[command(flatten)]
    io: InOut,

    /// Region width.
    #[arg(long)]
    width: u32,

    /// Region height.
    #[arg(long)]
    height: u32,
}

#[derive(Args, Debug)]
struct Layering {
    /// Background image.
    #[arg(long)]
    bg: PathBuf,

    /// Image drawn on top.
    #[arg(long)]
    fg: PathBuf,

    /// Output image; the format follows the extension.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct PasteArgs {
    #[command(flatten)]
    layers: Layering,

    /// Left edge of the pasted image.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    x: i32,

    /// Top edge of the pasted image.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y: i32,
}

#[derive(Args, Debug)]
struct PasteCenterArgs {
    #[command(flatten)]
    layers: Layering,
}

#[derive(Args, Debug)]
struct OverlayArgs {
    #[command(flatten)]
    layers: Layering,

    /// Left edge of the overlay.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    x: i32,

    /// Top edge of the overlay.
    #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
    y: i32,

    /// Overlay opacity, clamped to [0, 1].
    #[arg(long, default_value_t = 1.0)]
    opacity: f64,
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Job JSON.
    #[arg(long)]
    job: PathBuf,

    /// Starting image; omit when the job defines a canvas.
    #[arg(long)]
    base: Option<PathBuf>,

    /// Output image; the format follows the extension.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Command::Crop(args) => {
            let img = load(&args.io.in_path)?;
            let rect = Rect::from_origin_size(
                Point::new(args.x, args.y),
                Size::new(args.width, args.height),
            );
            save(rasterkit::crop(&img, rect), &args.io.out)
        }
        Command::CropCenter(args) => {
            let img = load(&args.io.in_path)?;
            save(
                rasterkit::crop_center(&img, args.width, args.height),
                &args.io.out,
            )
        }
        Command::CropTop(args) => {
            let img = load(&args.io.in_path)?;
            save(
                rasterkit::crop_top(&img, args.width, args.height),
                &args.io.out,
            )
        }
        Command::Paste(args) => {
            let (bg, fg) = load_pair(&args.layers)?;
            let out = rasterkit::paste(&bg, &fg, Point::new(args.x, args.y));
            save(out, &args.layers.out)
        }
        Command::PasteCenter(args) => {
            let (bg, fg) = load_pair(&args.layers)?;
            save(rasterkit::paste_center(&bg, &fg), &args.layers.out)
        }
        Command::Overlay(args) => {
            let (bg, fg) = load_pair(&args.layers)?;
            let out = rasterkit::overlay(&bg, &fg, Point::new(args.x, args.y), args.opacity);
            save(out, &args.layers.out)
        }
        Command::Run(args) => cmd_run(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.job)
        .with_context(|| format!("read job '{}'", args.job.display()))?;
    let job = Job::from_json(&text).with_context(|| "parse job JSON")?;
    // Fail before decoding any layer file; run_job checks again for library callers.
    job.validate()?;

    let root = args.job.parent().unwrap_or_else(|| Path::new("."));
    let mut layers = BTreeMap::new();
    for key in job.layer_keys() {
        let rel = &job.layers[key];
        let img = load(&root.join(rel)).with_context(|| format!("load layer '{key}'"))?;
        layers.insert(key.to_string(), img);
    }

    let base = args.base.as_deref().map(load).transpose()?;
    let out = rasterkit::run_job(&job, base, &layers)?;
    save(out, &args.out)
}

fn load(path: &Path) -> anyhow::Result<PixelBuffer> {
    let img = image::open(path).with_context(|| format!("open image '{}'", path.display()))?;
    Ok(PixelBuffer::from(img.to_rgba8()))
}

fn load_pair(layers: &Layering) -> anyhow::Result<(PixelBuffer, PixelBuffer)> {
    Ok((load(&layers.bg)?, load(&layers.fg)?))
}

fn save(buf: PixelBuffer, path: &Path) -> anyhow::Result<()> {
    if buf.size().is_empty() {
        anyhow::bail!(
            "result is empty ({}x{}); nothing written to '{}'",
            buf.width(),
            buf.height(),
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let (width, height) = (buf.width(), buf.height());
    buf.into_rgba_image()?
        .save(path)
        .with_context(|| format!("write image '{}'", path.display()))?;

    tracing::info!(width, height, "wrote {}", path.display());
    Ok(())
}
