use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{CompositeError, Result};
use crate::parsing::Value;

/// Free-form presentation values keyed by name (CSS-like: `background-color`).
pub type Styles = BTreeMap<String, Value>;

/// Presentation options for one page.
///
/// The document baseline comes from frontmatter; each page owns a clone with
/// that page's decorators folded in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageOption {
    /// Whether a page without its own h1 inherits the previous one.
    pub default_h1: bool,
    pub default_h2: bool,
    pub default_h3: bool,
    pub theme: String,
    pub layout: String,
    pub resource_dir: String,
    /// `W:H`, e.g. `16:9`.
    pub aspect_ratio: String,
    pub slide_width: u32,
    pub slide_height: u32,
    pub styles: Styles,
}

/// Pixel size of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSize {
    pub width: u32,
    pub height: u32,
}

impl PageOption {
    pub const DEFAULT_ASPECT_RATIO: &'static str = "16:9";
    pub const DEFAULT_SLIDE_WIDTH: u32 = 720;
    pub const DEFAULT_SLIDE_HEIGHT: u32 = 405;

    /// Sets a known field with a typed value, or inserts/overwrites a style.
    pub fn set(&mut self, key: &str, value: Value) -> Result<()> {
        match OptionField::lookup(key) {
            Some(field) => field.apply(self, value),
            None => {
                self.styles.insert(key.to_string(), value);
                Ok(())
            }
        }
    }

    /// Resolves the slide size from the aspect ratio and explicit dimensions.
    ///
    /// Overriding the ratio together with the height derives the width;
    /// overriding the ratio otherwise derives the height from the width.
    pub fn computed_slide_size(&self) -> Result<SlideSize> {
        let (ratio_w, ratio_h) = parse_aspect_ratio(&self.aspect_ratio)?;

        let ratio_changed = self.aspect_ratio != Self::DEFAULT_ASPECT_RATIO;
        let width_changed = self.slide_width != Self::DEFAULT_SLIDE_WIDTH;
        let height_changed = self.slide_height != Self::DEFAULT_SLIDE_HEIGHT;

        if ratio_changed && width_changed && height_changed {
            return Err(CompositeError::OverconstrainedSlideSize);
        }

        let (width, height) = (self.slide_width, self.slide_height);
        if !ratio_changed {
            return Ok(SlideSize { width, height });
        }

        if height_changed {
            Ok(SlideSize {
                width: scale(height, ratio_w, ratio_h),
                height,
            })
        } else {
            Ok(SlideSize {
                width,
                height: scale(width, ratio_h, ratio_w),
            })
        }
    }

    /// Fails when the slide-sizing fields are inconsistent.
    pub fn validate(&self) -> Result<()> {
        self.computed_slide_size().map(|_| ())
    }
}

impl Default for PageOption {
    fn default() -> Self {
        Self {
            default_h1: false,
            default_h2: true,
            default_h3: true,
            theme: "default".to_string(),
            layout: "content".to_string(),
            resource_dir: ".".to_string(),
            aspect_ratio: Self::DEFAULT_ASPECT_RATIO.to_string(),
            slide_width: Self::DEFAULT_SLIDE_WIDTH,
            slide_height: Self::DEFAULT_SLIDE_HEIGHT,
            styles: Styles::new(),
        }
    }
}

fn scale(value: u32, numerator: u32, denominator: u32) -> u32 {
    let scaled = u64::from(value) * u64::from(numerator) / u64::from(denominator);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

fn parse_aspect_ratio(raw: &str) -> Result<(u32, u32)> {
    static ASPECT_RATIO: OnceLock<Regex> = OnceLock::new();
    let re = ASPECT_RATIO
        .get_or_init(|| Regex::new(r"^(\d+):(\d+)$").expect("Invalid aspect ratio regex"));

    let invalid = || CompositeError::InvalidAspectRatio(raw.to_string());
    let caps = re.captures(raw).ok_or_else(invalid)?;
    let w: u32 = caps[1].parse().map_err(|_| invalid())?;
    let h: u32 = caps[2].parse().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    Ok((w, h))
}

/// The known option fields and their typed setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionField {
    DefaultH1,
    DefaultH2,
    DefaultH3,
    Theme,
    Layout,
    ResourceDir,
    AspectRatio,
    SlideWidth,
    SlideHeight,
}

impl OptionField {
    const ALL: [OptionField; 9] = [
        OptionField::DefaultH1,
        OptionField::DefaultH2,
        OptionField::DefaultH3,
        OptionField::Theme,
        OptionField::Layout,
        OptionField::ResourceDir,
        OptionField::AspectRatio,
        OptionField::SlideWidth,
        OptionField::SlideHeight,
    ];

    fn name(self) -> &'static str {
        match self {
            OptionField::DefaultH1 => "default_h1",
            OptionField::DefaultH2 => "default_h2",
            OptionField::DefaultH3 => "default_h3",
            OptionField::Theme => "theme",
            OptionField::Layout => "layout",
            OptionField::ResourceDir => "resource_dir",
            OptionField::AspectRatio => "aspect_ratio",
            OptionField::SlideWidth => "slide_width",
            OptionField::SlideHeight => "slide_height",
        }
    }

    fn lookup(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == key)
    }

    fn apply(self, option: &mut PageOption, value: Value) -> Result<()> {
        match self {
            OptionField::DefaultH1 => option.default_h1 = self.boolean(value)?,
            OptionField::DefaultH2 => option.default_h2 = self.boolean(value)?,
            OptionField::DefaultH3 => option.default_h3 = self.boolean(value)?,
            OptionField::Theme => option.theme = value.to_string(),
            OptionField::Layout => option.layout = value.to_string(),
            OptionField::ResourceDir => option.resource_dir = value.to_string(),
            OptionField::AspectRatio => option.aspect_ratio = value.to_string(),
            OptionField::SlideWidth => option.slide_width = self.dimension(value)?,
            OptionField::SlideHeight => option.slide_height = self.dimension(value)?,
        }
        Ok(())
    }

    fn boolean(self, value: Value) -> Result<bool> {
        match value.coerced() {
            Value::Bool(b) => Ok(b),
            other => Err(self.mismatch("a boolean", &other)),
        }
    }

    fn dimension(self, value: Value) -> Result<u32> {
        match value.coerced() {
            Value::Int(i) => {
                u32::try_from(i).map_err(|_| self.mismatch("a pixel size", &Value::Int(i)))
            }
            other => Err(self.mismatch("a pixel size", &other)),
        }
    }

    fn mismatch(self, expected: &'static str, found: &Value) -> CompositeError {
        CompositeError::OptionType {
            key: self.name().to_string(),
            expected,
            found: found.to_string(),
        }
    }
}
