//! Command-line options for the simulator.

use clap::{Parser, ValueEnum};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};
use splash_common::SplashConfig;
use splash_common::config::{
    DEFAULT_CAPTION,
    DEFAULT_CAPTION_SCALE,
    DEFAULT_CAPTION_SPACING,
    DEFAULT_FRAME_RATE,
    DEFAULT_STROKE_WIDTH,
    DEFAULT_WORDMARK,
};

/// Window size used by the classic raylib splash example.
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 450;

#[derive(Parser, Debug)]
#[command(
    name = "simulator",
    version,
    about = "Play the splash logo animation in a desktop window"
)]
pub struct Args {
    /// Animation ticks per second.
    #[arg(long, value_name = "FPS", default_value_t = DEFAULT_FRAME_RATE)]
    pub fps: u32,

    /// Square stroke width in pixels; the square side is its square.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_STROKE_WIDTH)]
    pub stroke_width: u32,

    /// Background color (`#RRGGBB`).
    #[arg(long, value_name = "#RRGGBB", value_parser = parse_color, default_value = "#F5F5F5")]
    pub background: Rgb565,

    /// Logo and text color (`#RRGGBB`).
    #[arg(long, value_name = "#RRGGBB", value_parser = parse_color, default_value = "#000000")]
    pub logo_color: Rgb565,

    /// Caption font.
    #[arg(long, value_enum, default_value_t = CaptionFont::Builtin)]
    pub caption_font: CaptionFont,

    /// Caption glyph scale factor.
    #[arg(long, value_name = "SCALE", default_value_t = DEFAULT_CAPTION_SCALE)]
    pub caption_scale: f32,

    /// Extra pixels between caption glyphs.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CAPTION_SPACING)]
    pub caption_spacing: f32,

    /// Text revealed inside the square.
    #[arg(long, default_value = DEFAULT_WORDMARK)]
    pub wordmark: String,

    /// Text faded in above the logo.
    #[arg(long, default_value = DEFAULT_CAPTION)]
    pub caption: String,

    #[arg(long, value_name = "PX", default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    #[arg(long, value_name = "PX", default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Window pixels per simulated pixel.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub pixel_scale: u32,
}

/// Fonts selectable for the caption.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum CaptionFont {
    /// Built-in 6x10 font (scaled by `--caption-scale`).
    Builtin,
    Profont12,
    Profont18,
    /// 10x20 ASCII font.
    Large,
}

impl CaptionFont {
    /// Font override for [`SplashConfig`]; `None` keeps the built-in default.
    pub fn font(self) -> Option<&'static MonoFont<'static>> {
        match self {
            Self::Builtin => None,
            Self::Profont12 => Some(&PROFONT_12_POINT),
            Self::Profont18 => Some(&PROFONT_18_POINT),
            Self::Large => Some(&FONT_10X20),
        }
    }
}

impl Args {
    pub fn splash_config(&self) -> SplashConfig {
        SplashConfig::with_frame_rate(self.fps)
            .background(self.background)
            .logo_color(self.logo_color)
            .stroke_width(self.stroke_width)
            .caption_font(self.caption_font.font())
            .caption_font_scale(self.caption_scale)
            .caption_spacing(self.caption_spacing)
            .wordmark(self.wordmark.as_str())
            .caption(self.caption.as_str())
    }
}

/// Parse `#RRGGBB` (the `#` is optional) into RGB565.
pub fn parse_color(value: &str) -> Result<Rgb565, String> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("expected a color like #RRGGBB, got `{value}`"));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|err| format!("invalid color `{value}`: {err}"))
    };
    let rgb = Rgb888::new(channel(0..2)?, channel(2..4)?, channel(4..6)?);
    Ok(rgb.into())
}
