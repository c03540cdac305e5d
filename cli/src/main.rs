use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use serde_json::Value;
use sierpinski::color::{Color, ColorError};
use sierpinski::config::{ConfigError, ExplorerConfig};
use sierpinski::engine::EngineCore;
use sierpinski::geometry::Point;
use sierpinski::input::{Control, UnknownControl, WheelDelta};
use sierpinski::path::{PathCounter, PathRecorder};
use sierpinski::render::RenderStats;
use sierpinski::svg::SvgPath;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid gesture {input:?}: {reason}")]
    Gesture { input: String, reason: String },
    #[error("invalid surface size {width}x{height}")]
    Surface { width: f64, height: f64 },
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sierpinski-cli", about = "Render a Sierpinski explorer scene")]
struct Cli {
    /// Surface width in pixels.
    #[arg(long, env = "SIERPINSKI_WIDTH", default_value_t = 800.0)]
    width: f64,

    /// Surface height in pixels.
    #[arg(long, env = "SIERPINSKI_HEIGHT", default_value_t = 600.0)]
    height: f64,

    /// Subdivision stop width; lower is finer.
    #[arg(long, env = "SIERPINSKI_MIN_SIZE")]
    min_size: Option<f64>,

    /// Hard ceiling on subdivision depth.
    #[arg(long, env = "SIERPINSKI_MAX_DEPTH")]
    max_depth: Option<u32>,

    /// Cut budget per triangle render.
    #[arg(long, env = "SIERPINSKI_MAX_CUTS")]
    max_cuts: Option<u64>,

    /// Main triangle colour (`#rgb`, `#rrggbb` or `rgb(r, g, b)`).
    #[arg(long, env = "SIERPINSKI_FILL", value_parser = parse_color)]
    fill: Option<Color>,

    /// Pixels moved per directional gesture.
    #[arg(long, env = "SIERPINSKI_PAN_STEP")]
    pan_step: Option<f64>,

    /// Zoom factor per wheel notch or zoom gesture.
    #[arg(long, env = "SIERPINSKI_SCALE_STEP")]
    scale_step: Option<f64>,

    /// Leave out the quarter-size companion triangle.
    #[arg(long)]
    no_companion: bool,

    /// JSON config file; flags override its values.
    #[arg(long, env = "SIERPINSKI_CONFIG")]
    config: Option<PathBuf>,

    /// Gesture to replay after reset, in order: `pan:DX,DY`, `zoom:X,Y,DY`,
    /// or a control (`left`, `right`, `up`, `down`, `in`, `out`, `reset`).
    #[arg(long = "gesture", short = 'g')]
    gestures: Vec<Gesture>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the scene as an SVG document.
    Svg {
        /// Output file; stdout when absent.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the recorded path commands as JSON.
    Commands,
    /// Print render statistics as JSON.
    Stats,
}

/// One replayed input event.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    /// Drag from the origin by `(dx, dy)`.
    Pan { dx: f64, dy: f64 },
    /// Wheel notch at `(x, y)`; negative `dy` zooms in.
    Zoom { x: f64, y: f64, dy: f64 },
    Control(Control),
}

impl FromStr for Gesture {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CliError::Gesture { input: s.to_string(), reason: reason.to_string() };

        if let Some(args) = s.strip_prefix("pan:") {
            let [dx, dy] = parse_numbers::<2>(args).map_err(|_| invalid("expected pan:DX,DY"))?;
            return Ok(Self::Pan { dx, dy });
        }
        if let Some(args) = s.strip_prefix("zoom:") {
            let [x, y, dy] = parse_numbers::<3>(args).map_err(|_| invalid("expected zoom:X,Y,DY"))?;
            return Ok(Self::Zoom { x, y, dy });
        }
        s.parse::<Control>()
            .map(Self::Control)
            .map_err(|UnknownControl(name)| invalid(&format!("unknown control {name:?}")))
    }
}

impl Gesture {
    fn apply(self, core: &mut EngineCore) {
        match self {
            Self::Pan { dx, dy } => {
                let start = Point::new(0.0, 0.0);
                core.on_pointer_down(start);
                core.on_pointer_move(Point::new(dx, dy));
                core.on_pointer_up(Point::new(dx, dy));
            }
            Self::Zoom { x, y, dy } => {
                core.on_wheel(Point::new(x, y), WheelDelta { dx: 0.0, dy });
            }
            Self::Control(control) => {
                core.on_control(control);
            }
        }
    }
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    if !(cli.width.is_finite() && cli.height.is_finite() && cli.width > 0.0 && cli.height > 0.0) {
        return Err(CliError::Surface { width: cli.width, height: cli.height });
    }

    let config = build_config(&cli)?;
    let mut core = EngineCore::new(config)?;
    core.set_viewport(cli.width, cli.height);
    for gesture in &cli.gestures {
        tracing::debug!(?gesture, "replaying gesture");
        gesture.apply(&mut core);
    }

    match cli.command {
        Command::Svg { output } => run_svg(&core, output),
        Command::Commands => run_commands(&core),
        Command::Stats => run_stats(&core),
    }
}

fn build_config(cli: &Cli) -> Result<ExplorerConfig, CliError> {
    let raw = cli.config.as_ref().map(fs::read_to_string).transpose()?;
    resolve_config(raw.as_deref(), cli)
}

/// Merge the config file (if any) with flag overrides, then validate once.
fn resolve_config(raw: Option<&str>, cli: &Cli) -> Result<ExplorerConfig, CliError> {
    let mut config = match raw {
        Some(raw) => serde_json::from_str::<ExplorerConfig>(raw)?,
        None => ExplorerConfig::default(),
    };
    if let Some(v) = cli.min_size {
        config.min_size = v;
    }
    if let Some(v) = cli.max_depth {
        config.max_depth = v;
    }
    if let Some(v) = cli.max_cuts {
        config.max_cuts = v;
    }
    if let Some(v) = cli.fill {
        config.fill = v;
    }
    if let Some(v) = cli.pan_step {
        config.pan_step = v;
    }
    if let Some(v) = cli.scale_step {
        config.scale_step = v;
    }
    if cli.no_companion {
        config.companion = false;
    }
    config.validate()?;
    Ok(config)
}

fn run_svg(core: &EngineCore, output: Option<PathBuf>) -> Result<(), CliError> {
    let mut svg = SvgPath::new();
    let stats = core.render_into(&mut svg);
    log_stats(&stats);

    let document = svg.to_document(core.viewport_width, core.viewport_height);
    match output {
        Some(path) => {
            fs::write(&path, document)?;
            tracing::info!(path = %path.display(), "svg written");
        }
        None => io::stdout().write_all(document.as_bytes())?,
    }
    Ok(())
}

fn run_commands(core: &EngineCore) -> Result<(), CliError> {
    let mut recorder = PathRecorder::new();
    let stats = core.render_into(&mut recorder);
    log_stats(&stats);
    print_json(&serde_json::to_value(recorder.commands())?)
}

fn run_stats(core: &EngineCore) -> Result<(), CliError> {
    let mut counter = PathCounter::new();
    let stats = core.render_into(&mut counter);
    print_json(&serde_json::to_value(stats)?)
}

fn log_stats(stats: &RenderStats) {
    tracing::info!(cuts = stats.cuts, culled = stats.culled, max_depth = stats.max_depth, "scene rendered");
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

fn parse_color(raw: &str) -> Result<Color, ColorError> {
    raw.parse()
}

/// Parse exactly `N` comma-separated finite numbers.
fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N], String> {
    let values = raw
        .split(',')
        .map(|part| match part.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            Ok(v) => Err(format!("{part:?}: {v} is not finite")),
            Err(e) => Err(format!("{part:?}: {e}")),
        })
        .collect::<Result<Vec<_>, _>>()?;
    <[f64; N]>::try_from(values).map_err(|v| format!("expected {N} numbers, got {}", v.len()))
}
