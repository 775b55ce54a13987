use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;

use dial_engine::face::FaceStyle;
use dial_engine::logging::LoggingConfig;
use dial_engine::paint::Color;
use dial_engine::time::Zone;

/// Headless host for the dial: ticks once per second and writes each frame as SVG.
#[derive(Parser, Debug)]
#[command(name = "dial-studio", version, about, long_about = None)]
pub struct Cli {
    /// Side length of the square viewport, in pixels.
    #[arg(long, default_value_t = 300.0)]
    pub size: f32,

    /// Frames to render before exiting; 0 keeps ticking until the process is killed.
    #[arg(long, default_value_t = 0)]
    pub ticks: u64,

    /// Override the redraw delay the face asks for (milliseconds).
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// SVG file rewritten on every frame.
    #[arg(short, long, default_value = "dial.svg")]
    pub out: PathBuf,

    /// Persisted state file, restored on start and checkpointed after every frame.
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    /// Decompose time at a fixed UTC offset instead of local time.
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset_minutes: Option<i32>,

    /// Stroke width for the dial and hands.
    #[arg(long, default_value_t = 8.0)]
    pub stroke_width: f32,

    /// Ink color as `#rrggbb`.
    #[arg(long, default_value = "#000000")]
    pub ink: String,

    /// Log filter in env_logger syntax; falls back to RUST_LOG, then `info`.
    #[arg(long)]
    pub log: Option<String>,
}

/// Resolved studio configuration.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub size: f32,
    pub ticks: Option<u64>,
    pub interval: Option<Duration>,
    pub out: PathBuf,
    pub state: Option<PathBuf>,
    pub zone: Zone,
    pub style: FaceStyle,
    pub logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            ticks: None,
            interval: None,
            out: PathBuf::from("dial.svg"),
            state: None,
            zone: Zone::Local,
            style: FaceStyle::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TryFrom<Cli> for StudioConfig {
    type Error = anyhow::Error;

    fn try_from(cli: Cli) -> Result<Self> {
        if !(cli.size.is_finite() && cli.size >= 0.0) {
            bail!("--size must be a non-negative number, got {}", cli.size);
        }

        let zone = match cli.utc_offset_minutes {
            None => Zone::Local,
            Some(m) => Zone::from_offset_minutes(m)
                .with_context(|| format!("--utc-offset-minutes {m} is not a valid offset"))?,
        };

        let interval = match cli.interval_ms {
            Some(0) => bail!("--interval-ms must be greater than zero"),
            Some(ms) => Some(Duration::from_millis(ms)),
            None => None,
        };

        let ink = parse_hex_color(&cli.ink)
            .with_context(|| format!("--ink {:?} is not a #rrggbb color", cli.ink))?;

        Ok(Self {
            size: cli.size,
            ticks: (cli.ticks > 0).then_some(cli.ticks),
            interval,
            out: cli.out,
            state: cli.state,
            zone,
            style: FaceStyle { stroke_width: cli.stroke_width, ink },
            logging: LoggingConfig { env_filter: cli.log, ..LoggingConfig::default() },
        })
    }
}

fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::from_srgb_u8(byte(0)?, byte(2)?, byte(4)?, 255))
}
