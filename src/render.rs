//! Icon rendering to SVG markup and PNG rasters.
//!
//! Markup text is the common intermediate form: every icon is first turned
//! into a standalone `<svg>` document, which is then parsed by usvg and drawn
//! by resvg onto a padded, transparent pixmap.

use std::borrow::Cow;
use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::color::HexColor;
use crate::error::RenderError;
use crate::icon::{IconRecord, IconSource, LibraryKind, StrokeIcon};
use crate::markup::{self, AttributeRewriter, SVG_NAMESPACE, SvgNode, Verbatim};

/// Smallest transparent margin around a rasterized icon, in pixels.
pub const MIN_PADDING: u32 = 20;

/// Transparent margin for a given stroke weight.
///
/// Thick strokes extend past the icon's nominal bounds, so the margin grows
/// with the weight: `max(20, ceil(stroke_weight * 4))`.
pub fn padding_for(stroke_weight: f32) -> u32 {
    let stroke_padding = (stroke_weight.max(0.0) * 4.0).ceil() as u32;
    stroke_padding.max(MIN_PADDING)
}

// ============================================================================
// RasterImage
// ============================================================================

/// A rendered icon: straight-alpha RGBA pixels plus their PNG encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    pixels: RgbaImage,
    png: Vec<u8>,
}

impl RasterImage {
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The encoded PNG file contents.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    pub fn into_png(self) -> Vec<u8> {
        self.png
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders catalog icons at a requested size, color and stroke weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct IconRenderer;

impl IconRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders an icon to a standalone SVG document.
    ///
    /// Stroke libraries get a fresh `<svg>` root carrying the stroke color
    /// and weight. FontAwesome trees are rebuilt with every `fill` replaced
    /// by `color` and the root sized to `size`.
    pub fn render_to_markup(
        &self,
        icon: &IconRecord,
        size: u32,
        color: HexColor,
        stroke_weight: f32,
    ) -> String {
        match &icon.source {
            IconSource::FontAwesome(tree) => solid_markup(tree, size, color),
            IconSource::Lucide(stroke) => {
                stroke_markup(LibraryKind::Lucide, stroke, size, color, stroke_weight)
            }
            IconSource::Tabler(stroke) => {
                stroke_markup(LibraryKind::Tabler, stroke, size, color, stroke_weight)
            }
            IconSource::Phosphor(stroke) => {
                stroke_markup(LibraryKind::Phosphor, stroke, size, color, stroke_weight)
            }
        }
    }

    /// Renders an icon to a PNG raster of `size + 2 * padding_for(stroke_weight)`
    /// pixels per side, with the icon centered on a transparent background.
    pub fn render_to_raster(
        &self,
        icon: &IconRecord,
        size: u32,
        color: HexColor,
        stroke_weight: f32,
    ) -> Result<RasterImage, RenderError> {
        let markup = self.render_to_markup(icon, size, color, stroke_weight);
        let padding = padding_for(stroke_weight);
        let pixels = rasterize_markup(&markup, size, padding)?;
        let png = encode_png(&pixels)?;

        tracing::debug!(
            icon = %icon.id,
            size,
            padding,
            bytes = png.len(),
            "rasterized icon"
        );
        Ok(RasterImage { pixels, png })
    }
}

// ============================================================================
// Markup
// ============================================================================

/// Recolors fills and sizes the root of a solid icon tree.
struct SolidFill {
    color: String,
    size: String,
}

impl AttributeRewriter for SolidFill {
    fn rewrite<'a>(&self, depth: usize, name: &str, value: &'a str) -> Option<Cow<'a, str>> {
        match name {
            "fill" => Some(Cow::Owned(self.color.clone())),
            "width" | "height" | "xmlns" if depth == 0 => None,
            _ => Some(Cow::Borrowed(value)),
        }
    }

    fn extra(&self, depth: usize) -> Vec<(&'static str, String)> {
        if depth > 0 {
            return Vec::new();
        }
        vec![
            ("width", self.size.clone()),
            ("height", self.size.clone()),
            ("xmlns", SVG_NAMESPACE.to_string()),
        ]
    }
}

fn solid_markup(tree: &SvgNode, size: u32, color: HexColor) -> String {
    let rewriter = SolidFill {
        color: color.to_string(),
        size: size.to_string(),
    };
    markup::serialize(tree, &rewriter)
}

fn stroke_markup(
    library: LibraryKind,
    icon: &StrokeIcon,
    size: u32,
    color: HexColor,
    stroke_weight: f32,
) -> String {
    let view_box = icon
        .view_box
        .as_deref()
        .unwrap_or(library.default_view_box());
    let size = size.to_string();
    let stroke_width = stroke_weight * library.stroke_scale();

    let mut out = String::from("<svg");
    markup::push_attribute(&mut out, "xmlns", SVG_NAMESPACE);
    markup::push_attribute(&mut out, "width", &size);
    markup::push_attribute(&mut out, "height", &size);
    markup::push_attribute(&mut out, "viewBox", view_box);
    markup::push_attribute(&mut out, "fill", "none");
    markup::push_attribute(&mut out, "stroke", &color.to_string());
    markup::push_attribute(&mut out, "stroke-width", &stroke_width.to_string());
    markup::push_attribute(&mut out, "stroke-linecap", "round");
    markup::push_attribute(&mut out, "stroke-linejoin", "round");
    out.push('>');
    for element in &icon.elements {
        markup::write_node(&mut out, element, &Verbatim, 1);
    }
    out.push_str("</svg>");
    out
}

// ============================================================================
// Rasterization
// ============================================================================

/// Draws SVG markup scaled to `size` and centered on a transparent square
/// surface with `padding` pixels on every side.
pub fn rasterize_markup(markup: &str, size: u32, padding: u32) -> Result<RgbaImage, RenderError> {
    let tree = Tree::from_str(markup, &Options::default())
        .map_err(|err| RenderError::Markup(err.to_string()))?;

    let side = size.saturating_add(padding.saturating_mul(2));
    let mut pixmap = Pixmap::new(side, side).ok_or(RenderError::Surface {
        width: side,
        height: side,
    })?;

    // Fit the larger dimension to `size`, center the other one
    let tree_size = tree.size();
    let scale = size as f32 / tree_size.width().max(tree_size.height());
    let offset_x = padding as f32 + (size as f32 - tree_size.width() * scale) / 2.0;
    let offset_y = padding as f32 + (size as f32 - tree_size.height() * scale) / 2.0;
    let transform = Transform::from_row(scale, 0.0, 0.0, scale, offset_x, offset_y);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Ok(pixmap_to_rgba_image(&pixmap))
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in img.pixels_mut().zip(pixmap.pixels()) {
        // tiny_skia uses premultiplied alpha
        let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
        *dst = Rgba([r, g, b, a]);
    }
    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

fn encode_png(pixels: &RgbaImage) -> Result<Vec<u8>, RenderError> {
    let mut bytes = Vec::new();
    pixels.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
