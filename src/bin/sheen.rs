use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sheen::{Readable as _, Surface2d as _};

#[derive(Parser, Debug)]
#[command(name = "sheen", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint a single masked shine frame as a PNG.
    Frame(FrameArgs),
    /// Paint a run of frames at a fixed frame rate, reusing one pixel buffer.
    Sequence(SequenceArgs),
    /// Print sampled text-reveal states as JSON.
    Reveal(RevealArgs),
    /// Show or change the persisted theme.
    Theme(ThemeArgs),
}

#[derive(Parser, Debug)]
struct ShineArgs {
    /// Mask image (PNG, JPEG, ... or SVG).
    #[arg(long)]
    mask: PathBuf,

    /// Canvas width in pixels.
    #[arg(long)]
    width: u32,

    /// Canvas height in pixels.
    #[arg(long)]
    height: u32,

    /// JSON file with shine option overrides (camelCase keys).
    #[arg(long)]
    options: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    shine: ShineArgs,

    /// Time in milliseconds.
    #[arg(long, allow_negative_numbers = true)]
    t: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    shine: ShineArgs,

    /// Frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Number of frames to paint.
    #[arg(long)]
    frames: u32,

    /// Start time in milliseconds.
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// Directory receiving `frame_00000.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Parser, Debug)]
struct RevealArgs {
    /// Text to split.
    #[arg(long)]
    text: String,

    /// Use the line-by-line about reveal instead of the letter-by-letter name reveal.
    #[arg(long)]
    about: bool,

    /// Wrap width for the about reveal.
    #[arg(long)]
    max_line_chars: Option<usize>,

    /// Wall-clock seconds since the reveal started.
    #[arg(long, default_value_t = 0.0)]
    at: f64,
}

#[derive(Parser, Debug)]
struct ThemeArgs {
    /// JSON preference file.
    #[arg(long)]
    prefs: PathBuf,

    /// Flip the stored theme.
    #[arg(long)]
    toggle: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
        Command::Reveal(args) => cmd_reveal(args),
        Command::Theme(args) => cmd_theme(args),
    }
}

fn load_overrides(path: Option<&Path>) -> anyhow::Result<sheen::ShineOverrides> {
    match path {
        Some(p) => sheen::ShineOverrides::load(p)
            .with_context(|| format!("load shine options '{}'", p.display())),
        None => Ok(sheen::ShineOverrides::default()),
    }
}

fn prepare(args: &ShineArgs) -> anyhow::Result<(sheen::PixmapSurface, sheen::MaskImage)> {
    let surface = sheen::PixmapSurface::new(args.width, args.height)?;
    if surface.canvas().is_empty() {
        tracing::debug!(mask = %args.mask.display(), "empty canvas, skipping mask load");
        return Ok((surface, sheen::MaskImage::empty()));
    }
    let mask = sheen::MaskImage::load(&args.mask, (args.width, args.height))?;
    Ok((surface, mask))
}

fn write_png(surface: &sheen::PixmapSurface, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    surface
        .to_rgba_image()?
        .save_with_format(out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", out.display()))?;
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let overrides = load_overrides(args.shine.options.as_deref())?;
    let (mut surface, mask) = prepare(&args.shine)?;

    sheen::paint(&mut surface, args.t, &mask, None, Some(&overrides))?;
    if surface.canvas().is_empty() {
        eprintln!("empty canvas, nothing written");
        return Ok(());
    }
    write_png(&surface, &args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    if args.fps == 0 {
        anyhow::bail!("--fps must be > 0");
    }
    let overrides = load_overrides(args.shine.options.as_deref())?;
    let (mut surface, mask) = prepare(&args.shine)?;
    let mut painter = sheen::ShinePainter::new(overrides)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    let frame_ms = 1000.0 / f64::from(args.fps);
    for i in 0..args.frames {
        let t = args.start + f64::from(i) * frame_ms;
        painter.paint_frame(&mut surface, t, &mask)?;
        write_png(&surface, &args.out_dir.join(format!("frame_{i:05}.png")))?;
    }

    tracing::info!(
        frames = args.frames,
        canvas = ?surface.canvas(),
        "sequence complete"
    );
    eprintln!(
        "wrote {} frames to {}",
        args.frames,
        args.out_dir.display()
    );
    Ok(())
}

fn cmd_reveal(args: RevealArgs) -> anyhow::Result<()> {
    let mut reveal = if args.about {
        sheen::about_reveal(&args.text, args.max_line_chars)?
    } else {
        sheen::name_reveal(&args.text)?
    };
    reveal.advance(args.at);

    let json = serde_json::to_string_pretty(&reveal.sample()).context("serialize reveal")?;
    println!("{json}");
    Ok(())
}

fn cmd_theme(args: ThemeArgs) -> anyhow::Result<()> {
    let mut store = sheen::ThemeStore::new(sheen::ThemeEnv::new(
        sheen::JsonFileStorage::new(&args.prefs),
        sheen::EnvProbe,
    ));
    if args.toggle {
        store.toggle();
    }
    println!("{}", store.get().as_str());
    Ok(())
}
