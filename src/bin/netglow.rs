use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "netglow", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate up to a frame and write it as a PNG.
    Frame(FrameArgs),
    /// Write a numbered PNG sequence.
    Render(RenderArgs),
    /// Print the effective configuration as JSON.
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Configuration JSON. Missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured random seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Logical surface width.
    #[arg(long, default_value_t = 800.0)]
    width: f64,

    /// Logical surface height.
    #[arg(long, default_value_t = 600.0)]
    height: f64,

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Simulated frames per second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Hold the pointer at `x,y` for the whole run.
    #[arg(long, value_parser = parse_point)]
    pointer: Option<netglow::Point>,

    /// Panel rectangle `x,y,w,h` for the border markers. Defaults to a centred panel.
    #[arg(long, value_parser = parse_panel)]
    panel: Option<netglow::Rect>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Frame index (0-based); frames before it are simulated first.
    #[arg(long, default_value_t = 0)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct RenderArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Number of frames to write.
    #[arg(long)]
    frames: u64,

    /// Output directory for `frame_00000.png` and onwards.
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// Configuration JSON to merge over the defaults.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Config(args) => cmd_config(args),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<netglow::BackdropConfig> {
    match path {
        Some(p) => netglow::BackdropConfig::from_path(p)
            .with_context(|| format!("load config '{}'", p.display())),
        None => Ok(netglow::BackdropConfig::default()),
    }
}

fn mount(scene: &SceneArgs) -> anyhow::Result<(netglow::Backdrop, netglow::FrameClock)> {
    let mut config = load_config(scene.config.as_deref())?;
    if let Some(seed) = scene.seed {
        config.seed = seed;
    }
    let clock = netglow::FrameClock::new(netglow::Fps::new(scene.fps, 1)?);
    let surface = netglow::SurfaceDesc::new(scene.width, scene.height)
        .with_device_pixel_ratio(scene.dpr);
    let mut backdrop = netglow::Backdrop::mount(config, surface)?;

    let panel = scene
        .panel
        .unwrap_or_else(|| default_panel(scene.width, scene.height));
    backdrop.set_panel(panel);
    if let Some(p) = scene.pointer {
        backdrop.handle(&netglow::InputEvent::PointerMove { x: p.x, y: p.y });
    }
    Ok((backdrop, clock))
}

/// A login-card sized panel centred on the surface.
fn default_panel(width: f64, height: f64) -> netglow::Rect {
    let w = (width * 0.8).min(400.0);
    let h = (height * 0.8).min(480.0);
    netglow::Rect::from_center_size((width / 2.0, height / 2.0), (w, h))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (mut backdrop, clock) = mount(&args.scene)?;

    for idx in 0..args.frame {
        backdrop.tick(clock.timestamp(netglow::FrameIndex(idx)));
    }
    let frame = backdrop
        .tick(clock.timestamp(netglow::FrameIndex(args.frame)))
        .context("backdrop stopped before the requested frame")?;
    if frame.is_empty() {
        anyhow::bail!("surface has no area; nothing to write");
    }

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    netglow::write_png(&args.out, frame)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    backdrop.unmount();
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let (mut backdrop, clock) = mount(&args.scene)?;
    let range = netglow::FrameRange::new(netglow::FrameIndex(0), netglow::FrameIndex(args.frames))?;
    let mut sink = netglow::PngSequenceSink::new(&args.out_dir);
    let stats = backdrop.render_range(clock, range, &mut sink)?;

    if stats.render_failures > 0 {
        eprintln!("{} frame(s) failed to render", stats.render_failures);
    }
    eprintln!(
        "wrote {} frames to {}",
        stats.frames_pushed,
        args.out_dir.display()
    );
    backdrop.unmount();
    Ok(())
}

fn cmd_config(args: ConfigArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;
    let json = serde_json::to_string_pretty(&config).context("serialize config")?;
    println!("{json}");
    Ok(())
}

fn parse_numbers<const N: usize>(s: &str) -> Result<[f64; N], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != N {
        return Err(format!("expected {N} comma-separated numbers, got \"{s}\""));
    }
    let mut out = [0.0; N];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|e| format!("invalid number \"{part}\": {e}"))?;
    }
    Ok(out)
}

fn parse_point(s: &str) -> Result<netglow::Point, String> {
    let [x, y] = parse_numbers::<2>(s)?;
    Ok(netglow::Point::new(x, y))
}

fn parse_panel(s: &str) -> Result<netglow::Rect, String> {
    let [x, y, w, h] = parse_numbers::<4>(s)?;
    if w < 0.0 || h < 0.0 {
        return Err("panel width and height must be >= 0".to_owned());
    }
    Ok(netglow::Rect::new(x, y, x + w, y + h))
}
