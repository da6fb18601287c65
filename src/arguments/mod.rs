//! Image transformation arguments
//!
//! Typed model of the transformation options understood by the image
//! service, rendered as URL path segments in the service's canonical
//! order:
//!
//! ```text
//! /meta/trim/LxT:RxB/fit-in/WxH/halign/valign/smart/filters:a():b()/image-url
//! ```
//!
//! Every field is optional so the same type serves call sites, the
//! configured defaults, and named aliases. [`Arguments::merged_with`]
//! resolves the three layers, most specific last.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UrlError;

/// Trim mode for removing surrounding space from the source image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trim {
    /// Trim based on the top-left pixel color, the service default
    Auto,
    TopLeft,
    BottomRight,
}

impl Trim {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trim::Auto => "trim",
            Trim::TopLeft => "trim:top-left",
            Trim::BottomRight => "trim:bottom-right",
        }
    }
}

impl FromStr for Trim {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "trim" => Ok(Trim::Auto),
            "top-left" => Ok(Trim::TopLeft),
            "bottom-right" => Ok(Trim::BottomRight),
            _ => Err(UrlError::invalid_argument(
                "trim",
                format!("unknown trim mode: {}", s),
            )),
        }
    }
}

/// Fit-in mode: resize to fit inside the target box instead of cropping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitIn {
    FitIn,
    FullFitIn,
    AdaptiveFitIn,
    AdaptiveFullFitIn,
}

impl FitIn {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitIn::FitIn => "fit-in",
            FitIn::FullFitIn => "full-fit-in",
            FitIn::AdaptiveFitIn => "adaptive-fit-in",
            FitIn::AdaptiveFullFitIn => "adaptive-full-fit-in",
        }
    }
}

impl FromStr for FitIn {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fit-in" => Ok(FitIn::FitIn),
            "full-fit-in" => Ok(FitIn::FullFitIn),
            "adaptive-fit-in" => Ok(FitIn::AdaptiveFitIn),
            "adaptive-full-fit-in" => Ok(FitIn::AdaptiveFullFitIn),
            _ => Err(UrlError::invalid_argument(
                "fit_in",
                format!("unknown fit-in mode: {}", s),
            )),
        }
    }
}

/// Horizontal crop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    Left,
    /// Center is the service default and is never emitted in the URL
    Center,
    Right,
}

impl HAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            HAlign::Left => "left",
            HAlign::Center => "center",
            HAlign::Right => "right",
        }
    }
}

impl FromStr for HAlign {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            _ => Err(UrlError::invalid_argument(
                "halign",
                format!("unknown horizontal alignment: {}", s),
            )),
        }
    }
}

/// Vertical crop alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VAlign {
    Top,
    /// Middle is the service default and is never emitted in the URL
    Middle,
    Bottom,
}

impl VAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            VAlign::Top => "top",
            VAlign::Middle => "middle",
            VAlign::Bottom => "bottom",
        }
    }
}

impl FromStr for VAlign {
    type Err = UrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(VAlign::Top),
            "middle" => Ok(VAlign::Middle),
            "bottom" => Ok(VAlign::Bottom),
            _ => Err(UrlError::invalid_argument(
                "valign",
                format!("unknown vertical alignment: {}", s),
            )),
        }
    }
}

/// Manual crop box, rendered as `LxT:RxB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crop {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Transformation arguments for a generated URL
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arguments {
    /// Return image metadata as JSON instead of the image itself
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<Trim>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop: Option<Crop>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit_in: Option<FitIn>,
    /// Target width in pixels (0 means derive from the aspect ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Target height in pixels (0 means derive from the aspect ratio)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_horizontal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flip_vertical: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub halign: Option<HAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valign: Option<VAlign>,
    /// Content-aware crop using the service's feature detection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smart: Option<bool>,
    /// Filter pipeline entries, e.g. `quality(80)` or `grayscale()`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<String>>,
}

impl Arguments {
    /// Merge two argument sets, fields set in `overrides` winning
    pub fn merged_with(&self, overrides: &Arguments) -> Arguments {
        Arguments {
            meta: overrides.meta.or(self.meta),
            trim: overrides.trim.or(self.trim),
            crop: overrides.crop.or(self.crop),
            fit_in: overrides.fit_in.or(self.fit_in),
            width: overrides.width.or(self.width),
            height: overrides.height.or(self.height),
            flip_horizontal: overrides.flip_horizontal.or(self.flip_horizontal),
            flip_vertical: overrides.flip_vertical.or(self.flip_vertical),
            halign: overrides.halign.or(self.halign),
            valign: overrides.valign.or(self.valign),
            smart: overrides.smart.or(self.smart),
            filters: overrides.filters.clone().or_else(|| self.filters.clone()),
        }
    }

    /// Render the options as URL path segments in the service's order
    pub fn path_segments(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if self.meta.unwrap_or(false) {
            parts.push("meta".to_string());
        }

        if let Some(trim) = self.trim {
            parts.push(trim.as_str().to_string());
        }

        if let Some(crop) = self.crop {
            parts.push(format!(
                "{}x{}:{}x{}",
                crop.left, crop.top, crop.right, crop.bottom
            ));
        }

        if let Some(fit_in) = self.fit_in {
            parts.push(fit_in.as_str().to_string());
        }

        if let Some(dimensions) = self.dimensions_segment() {
            parts.push(dimensions);
        }

        // Default alignments are implied and must not appear in the path
        if let Some(halign) = self.halign {
            if halign != HAlign::Center {
                parts.push(halign.as_str().to_string());
            }
        }

        if let Some(valign) = self.valign {
            if valign != VAlign::Middle {
                parts.push(valign.as_str().to_string());
            }
        }

        if self.smart.unwrap_or(false) {
            parts.push("smart".to_string());
        }

        if let Some(filters) = &self.filters {
            if !filters.is_empty() {
                parts.push(format!("filters:{}", filters.join(":")));
            }
        }

        parts
    }

    /// Render the unsigned URL path: options followed by the image URL
    pub fn to_path(&self, image_url: &str) -> String {
        let mut parts = self.path_segments();
        parts.push(image_url.to_string());
        parts.join("/")
    }

    /// The `WxH` segment, present when any dimension or flip is requested
    ///
    /// Flips render as a minus sign on the corresponding dimension, so a
    /// flip without an explicit size produces `-0x0`.
    fn dimensions_segment(&self) -> Option<String> {
        let flip_horizontal = self.flip_horizontal.unwrap_or(false);
        let flip_vertical = self.flip_vertical.unwrap_or(false);

        if self.width.is_none() && self.height.is_none() && !flip_horizontal && !flip_vertical {
            return None;
        }

        let width = self.width.unwrap_or(0);
        let height = self.height.unwrap_or(0);

        let width = if flip_horizontal {
            format!("-{}", width)
        } else {
            width.to_string()
        };
        let height = if flip_vertical {
            format!("-{}", height)
        } else {
            height.to_string()
        };

        Some(format!("{}x{}", width, height))
    }
}
