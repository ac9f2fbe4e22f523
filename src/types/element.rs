use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::geometry::BoundingBox;

/// One rendered element captured from the page, a hotspot candidate.
///
/// Field names follow the capture layer's camelCase JSON. Everything except
/// the tag and geometry is optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementDescriptor {
    pub tag: String,
    #[serde(default)]
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub z_index: i64,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
}

fn default_font_size() -> f64 {
    16.0
}

impl ElementDescriptor {
    /// A bare element with default typography and no identifying strings.
    pub fn new(tag: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            tag: tag.into(),
            text: String::new(),
            x,
            y,
            width,
            height,
            class_name: String::new(),
            id: String::new(),
            z_index: 0,
            font_size: default_font_size(),
            font_weight: FontWeight::default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_font(mut self, font_size: f64, font_weight: FontWeight) -> Self {
        self.font_size = font_size;
        self.font_weight = font_weight;
        self
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Lowercased tag, the form every tag rule compares against.
    pub fn tag_lower(&self) -> String {
        self.tag.to_ascii_lowercase()
    }
}

/// CSS font weight as reported by the browser.
///
/// Computed styles report weights as numeric strings (`"700"`), hand-written
/// fixtures use numbers or the `bold`/`normal` keywords. All three forms are
/// accepted; anything else is kept verbatim and treated as not bold.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Numeric(f64),
    Other(String),
}

impl FontWeight {
    pub fn is_bold(&self) -> bool {
        match self {
            FontWeight::Bold => true,
            FontWeight::Numeric(w) => *w >= 700.0,
            FontWeight::Normal | FontWeight::Other(_) => false,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFontWeight {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for FontWeight {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawFontWeight::deserialize(deserializer)? {
            RawFontWeight::Number(w) => FontWeight::Numeric(w),
            RawFontWeight::Text(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case("bold") {
                    FontWeight::Bold
                } else if trimmed.eq_ignore_ascii_case("normal") {
                    FontWeight::Normal
                } else if let Ok(w) = trimmed.parse::<f64>() {
                    FontWeight::Numeric(w)
                } else {
                    FontWeight::Other(s)
                }
            }
        })
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FontWeight::Normal => serializer.serialize_str("normal"),
            FontWeight::Bold => serializer.serialize_str("bold"),
            FontWeight::Numeric(w) => serializer.serialize_f64(*w),
            FontWeight::Other(s) => serializer.serialize_str(s),
        }
    }
}
