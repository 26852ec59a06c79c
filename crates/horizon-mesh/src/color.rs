//! RGBA colors and per-index color gradients.

/// Linear RGBA color, each channel nominally in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Per-channel linear interpolation. `t = 0` gives `self`, `t = 1` gives `other`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::from_array(c)
    }
}

/// Two-stop gradient sampled by index across a family of `count` items.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorGradient {
    pub start: Rgba,
    pub end: Rgba,
}

impl ColorGradient {
    pub const fn new(start: Rgba, end: Rgba) -> Self {
        Self { start, end }
    }

    /// A gradient that yields the same color for every index.
    pub const fn solid(color: Rgba) -> Self {
        Self::new(color, color)
    }

    /// Color for item `index` out of `count`.
    ///
    /// The first item gets `start`, the last gets `end`. A single-item family
    /// gets `start`.
    pub fn at(&self, index: u32, count: u32) -> Rgba {
        if count <= 1 {
            return self.start;
        }
        let t = index.min(count - 1) as f32 / (count - 1) as f32;
        self.start.lerp(self.end, t)
    }
}
