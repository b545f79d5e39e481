use serde::{Deserialize, Serialize};

/// Straight-alpha colour with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorDef {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorDef {
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Build from 8-bit channels and a `[0, 1]` alpha, the way CSS writes them.
    pub fn from_rgb8_alpha(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::rgba(r / 255.0, g / 255.0, b / 255.0, a)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Scale alpha, keeping the colour channels.
    pub fn fade(self, factor: f64) -> Self {
        self.with_alpha(self.a * factor)
    }

    /// Add `delta` (in 8-bit units) to each colour channel, saturating at full intensity.
    pub fn brighten(self, delta: f64) -> Self {
        let up = |c: f64| (c + delta / 255.0).min(1.0);
        Self::rgba(up(self.r), up(self.g), up(self.b), self.a)
    }

    /// Premultiplied RGBA8.
    pub fn to_rgba8_premul(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        let a = self.a.clamp(0.0, 1.0);
        [
            to_u8(self.r.clamp(0.0, 1.0) * a),
            to_u8(self.g.clamp(0.0, 1.0) * a),
            to_u8(self.b.clamp(0.0, 1.0) * a),
            to_u8(a),
        ]
    }

    /// Straight-alpha RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        let to_u8 = |x: f64| (x.clamp(0.0, 1.0) * 255.0).round() as u8;
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Linear interpolation of straight channels.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Parse any CSS colour: hex, named colours, `rgb()`/`rgba()` in either syntax, `hsl()`,
    /// `hwb()` and the rest `csscolorparser` understands.
    ///
    /// Comma-separated `rgb()`/`rgba()` keeps its exact channel values; other forms go through
    /// 8-bit channels.
    pub fn parse(s: &str) -> Result<Self, String> {
        let t = s.trim();
        if let Some(ch) = parse_css_channels(t) {
            return Ok(ch.to_color());
        }
        let [r, g, b, a] = csscolorparser::parse(t)
            .map_err(|e| format!("unrecognized colour \"{s}\": {e}"))?
            .to_rgba8();
        Ok(Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        ))
    }
}

impl std::str::FromStr for ColorDef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for ColorDef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Text(s) => ColorDef::parse(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

/// Channels of a CSS `rgb()` / `rgba()` value: colour in 8-bit units, alpha only when present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssChannels {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: Option<f64>,
}

impl CssChannels {
    pub fn to_color(self) -> ColorDef {
        ColorDef::from_rgb8_alpha(self.r, self.g, self.b, self.a.unwrap_or(1.0))
    }

    /// Like [`CssChannels::to_color`] but substituting `alpha` when the value had no alpha.
    pub fn to_color_or_alpha(self, alpha: f64) -> ColorDef {
        ColorDef::from_rgb8_alpha(self.r, self.g, self.b, self.a.unwrap_or(alpha))
    }
}

/// Parse `rgb(r, g, b)` or `rgba(r, g, b, a)`. Anything else is `None`.
pub fn parse_css_channels(s: &str) -> Option<CssChannels> {
    let s = s.trim();
    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let mut parts = body.split(',').map(|p| p.trim().parse::<f64>());
    let r = parts.next()?.ok()?;
    let g = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    let a = match parts.next() {
        Some(v) => Some(v.ok()?),
        None => None,
    };
    if parts.next().is_some() {
        return None;
    }
    if ![r, g, b].iter().all(|c| c.is_finite()) || a.is_some_and(|a| !a.is_finite()) {
        return None;
    }
    Some(CssChannels { r, g, b, a })
}

#[cfg(test)]
#[path = "../../tests/unit/paint/color.rs"]
mod tests;
