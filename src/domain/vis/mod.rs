//! Vis domain — server-side rendering of map and markdown PNGs.

pub mod client;

/// Parameters for `vis/map.png` — a rendered map tile centered on a
/// coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct MapParams {
    pub lat: f64,
    pub lon: f64,
    pub width: u32,
    pub height: u32,
    pub zoom: u32,
    pub text: String,
}

impl MapParams {
    /// A 500x500 map at zoom level 8 with no caption.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            width: 500,
            height: 500,
            zoom: 8,
            text: String::new(),
        }
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn zoom(mut self, zoom: u32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Caption drawn onto the map.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}

/// Parameters for `vis/markdown.png` — text rendered to an image.
///
/// Colors are hex strings without the leading `#`, as the server expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownParams {
    pub text: String,
    pub color_text: String,
    pub color_background: String,
    pub padding: u32,
    pub uppercase: bool,
}

impl MarkdownParams {
    /// Black-on-white text, 10px padding, uppercased.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color_text: "000000".to_string(),
            color_background: "ffffff".to_string(),
            padding: 10,
            uppercase: true,
        }
    }

    pub fn color_text(mut self, hex: impl Into<String>) -> Self {
        self.color_text = hex.into();
        self
    }

    pub fn color_background(mut self, hex: impl Into<String>) -> Self {
        self.color_background = hex.into();
        self
    }

    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }
}
