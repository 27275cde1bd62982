use crate::error::ConfigError;
use glam::Vec3;
use std::fmt;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn from_hex(s: &str) -> Result<Self, ConfigError> {
        let bad = || ConfigError::BadColor(s.to_string());
        let hex = s
            .strip_prefix('#')
            .filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(bad)?;
        let channel = |h: &str| u8::from_str_radix(h, 16).map_err(|_| bad());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(bad()),
        }
    }

    fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32)
    }

    fn from_vec3(v: Vec3) -> Self {
        let c = v.round().clamp(Vec3::ZERO, Vec3::splat(255.0));
        Self::new(c.x as u8, c.y as u8, c.z as u8)
    }

    /// Per-channel linear blend, rounded to integer channels.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Self::from_vec3(self.to_vec3().lerp(other.to_vec3(), t))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An animated property value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f32),
    Percent(f32),
    Px(f32),
    Color(Rgb),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Percent(_) => "percent",
            Value::Px(_) => "px",
            Value::Color(_) => "color",
        }
    }

    /// Numeric payload for scalar kinds.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::Number(v) | Value::Percent(v) | Value::Px(v) => Some(v),
            Value::Color(_) => None,
        }
    }

    /// Blend two values of the same kind. Mismatched kinds are rejected when
    /// a track is built, so here they just hold `self`.
    pub fn lerp(&self, other: &Value, t: f32) -> Value {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        match (*self, *other) {
            (Value::Number(a), Value::Number(b)) => Value::Number(mix(a, b)),
            (Value::Percent(a), Value::Percent(b)) => Value::Percent(mix(a, b)),
            (Value::Px(a), Value::Px(b)) => Value::Px(mix(a, b)),
            (Value::Color(a), Value::Color(b)) => Value::Color(a.lerp(b, t)),
            _ => *self,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(v) => write!(f, "{}", trim_float(*v)),
            Value::Percent(v) => write!(f, "{}%", trim_float(*v)),
            Value::Px(v) => write!(f, "{}px", trim_float(*v)),
            Value::Color(c) => c.fmt(f),
        }
    }
}

// Two decimals at most, no trailing zeros: 42.5, 100, 0.33
fn trim_float(v: f32) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
        assert!(Rgb::from_hex("ff8000").is_err());
        assert!(Rgb::from_hex("#ff80").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#aéé").is_err());
    }

    #[test]
    fn color_blend_rounds_each_channel() {
        let a = Rgb::new(0, 0, 0);
        let b = Rgb::new(255, 100, 3);
        assert_eq!(a.lerp(b, 0.5), Rgb::new(128, 50, 2));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn formats_css_units() {
        assert_eq!(Value::Percent(42.5).to_string(), "42.5%");
        assert_eq!(Value::Px(-12.0).to_string(), "-12px");
        assert_eq!(Value::Number(1.0).to_string(), "1");
        assert_eq!(Value::Number(-0.001).to_string(), "0");
        assert_eq!(Value::Color(Rgb::new(1, 2, 3)).to_string(), "rgb(1, 2, 3)");
    }
}
