use gpui::Rgba;
use thiserror::Error;

/// Creates an RGBA color from a hex value and alpha component.
pub fn rgb_a(hex: u32, a: f32) -> Rgba {
    let [_, r, g, b] = hex.to_be_bytes().map(|b| (b as f32) / 255.0);
    Rgba { r, g, b, a }
}

/// Extension trait for modifying RGBA colors.
pub trait RgbaExt {
    /// Returns a new color with the specified alpha value.
    fn alpha(self, alpha: f32) -> Self;
}

impl RgbaExt for Rgba {
    fn alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

pub const TRANSPARENT: Rgba = Rgba {
    r: 0.,
    g: 0.,
    b: 0.,
    a: 0.,
};

#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    #[error("`{0}` is not a valid hex color")]
    Hex(String),
    #[error("`{0}` is not a valid color function")]
    Function(String),
    #[error("unknown color `{0}`")]
    Unknown(String),
}

/// Parses the color notations used by theme files: `#rgb`, `#rgba`,
/// `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()`, `hsla()` and a few
/// named colors.
pub fn parse_color(input: &str) -> Result<Rgba, ColorError> {
    let color = input.trim().to_ascii_lowercase();

    if color.starts_with('#') {
        return Rgba::try_from(color.as_str()).map_err(|_| ColorError::Hex(input.to_string()));
    }

    if let Some((name, args)) = color
        .strip_suffix(')')
        .and_then(|color| color.split_once('('))
    {
        return parse_function(name.trim(), args)
            .ok_or_else(|| ColorError::Function(input.to_string()));
    }

    match color.as_str() {
        "white" => Ok(rgb_a(0xffffff, 1.)),
        "black" => Ok(rgb_a(0x000000, 1.)),
        "transparent" => Ok(TRANSPARENT),
        _ => Err(ColorError::Unknown(input.to_string())),
    }
}

fn parse_function(name: &str, args: &str) -> Option<Rgba> {
    let args: Vec<&str> = args.split(',').map(str::trim).collect();

    let alpha = match (name, args.len()) {
        ("rgb" | "hsl", 3) => 1.,
        ("rgba" | "hsla", 4) => args[3].parse::<f32>().ok()?.clamp(0., 1.),
        _ => return None,
    };

    match name {
        "rgb" | "rgba" => {
            let channel = |arg: &str| -> Option<f32> {
                Some(arg.parse::<f32>().ok()?.clamp(0., 255.) / 255.)
            };

            Some(Rgba {
                r: channel(args[0])?,
                g: channel(args[1])?,
                b: channel(args[2])?,
                a: alpha,
            })
        }

        _ => {
            let percent = |arg: &str| -> Option<f32> {
                Some(arg.strip_suffix('%')?.trim().parse::<f32>().ok()?.clamp(0., 100.) / 100.)
            };

            let hue = args[0].trim_end_matches("deg").parse::<f32>().ok()?;
            Some(hsl_to_rgba(hue, percent(args[1])?, percent(args[2])?, alpha))
        }
    }
}

fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Rgba {
    let chroma = (1. - (2. * lightness - 1.).abs()) * saturation;
    let sector = hue.rem_euclid(360.) / 60.;
    let x = chroma * (1. - (sector % 2. - 1.).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.),
        1 => (x, chroma, 0.),
        2 => (0., chroma, x),
        3 => (0., x, chroma),
        4 => (x, 0., chroma),
        _ => (chroma, 0., x),
    };

    let m = lightness - chroma / 2.;

    Rgba {
        r: r + m,
        g: g + m,
        b: b + m,
        a: alpha,
    }
}
