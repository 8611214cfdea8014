use std::fmt;

/// Hue in degrees, saturation and lightness in percent, alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Hsla {
    pub const fn new(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.0}%, {:.1}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// A color together with its CSS string, formatted once at creation so the
/// render loop never allocates.
#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    hsla: Hsla,
    css: String,
}

impl Paint {
    pub fn new(hsla: Hsla) -> Self {
        Self {
            css: hsla.to_string(),
            hsla,
        }
    }

    #[inline]
    pub fn hsla(&self) -> Hsla {
        self.hsla
    }

    #[inline]
    pub fn css(&self) -> &str {
        &self.css
    }
}

impl From<Hsla> for Paint {
    fn from(hsla: Hsla) -> Self {
        Self::new(hsla)
    }
}
