use anyhow::{anyhow, Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use resvg::usvg::fontdb;
use resvg::{tiny_skia, usvg};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Rasterizes SVG markup into square RGBA icons.
pub struct Renderer {
    options: usvg::Options<'static>,
}

impl Renderer {
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        Self::with_fontdb(fontdb)
    }

    pub fn with_fontdb(mut fontdb: fontdb::Database) -> Self {
        resolve_generic_families(&mut fontdb);
        log::debug!("Loaded {} font faces", fontdb.len());

        let mut options = usvg::Options::default();
        options.fontdb = Arc::new(fontdb);
        Self { options }
    }

    /// Render `svg` stretched to exactly `size`×`size` pixels.
    pub fn render(&self, svg: &str, size: u32) -> Result<RgbaImage> {
        let tree = usvg::Tree::from_str(svg, &self.options).context("parse SVG")?;

        // usvg drops text it has no face for instead of failing.
        if self.options.fontdb.len() == 0 && svg.contains("<text") {
            return Err(anyhow!("no fonts installed to draw SVG text"));
        }

        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| anyhow!("failed to allocate pixmap {size}x{size}"))?;

        let svg_size = tree.size();
        let sx = size as f32 / svg_size.width();
        let sy = size as f32 / svg_size.height();
        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(sx, sy),
            &mut pixmap.as_mut(),
        );

        // tiny-skia stores premultiplied alpha; PNG wants straight alpha.
        let data: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();

        RgbaImage::from_raw(size, size, data)
            .ok_or_else(|| anyhow!("pixel buffer does not match {size}x{size}"))
    }
}

/// Point the generic families at installed faces.
///
/// fontdb defaults `sans-serif` to "Arial" and friends; on hosts without
/// those every `font-family: X, sans-serif` list resolves to nothing.
fn resolve_generic_families(fontdb: &mut fontdb::Database) {
    let mut installed: Vec<String> = fontdb
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.clone()))
        .collect();
    installed.sort();
    installed.dedup();

    let generics: [(fontdb::Family, fn(&str) -> bool); 3] = [
        (fontdb::Family::SansSerif, |n| n.contains("Sans") && !n.contains("Mono")),
        (fontdb::Family::Serif, |n| n.contains("Serif")),
        (fontdb::Family::Monospace, |n| n.contains("Mono")),
    ];
    for (generic, looks_right) in generics {
        let current = fontdb.family_name(&generic).to_owned();
        if installed.contains(&current) {
            continue;
        }
        let fallback = installed
            .iter()
            .find(|name| looks_right(name.as_str()))
            .or_else(|| installed.first())
            .cloned();
        let Some(fallback) = fallback else {
            return;
        };

        log::debug!("Font '{current}' not installed, using '{fallback}'");
        match generic {
            fontdb::Family::SansSerif => fontdb.set_sans_serif_family(fallback),
            fontdb::Family::Serif => fontdb.set_serif_family(fallback),
            _ => fontdb.set_monospace_family(fallback),
        }
    }
}

/// Encode `image` as PNG into `path`, replacing any existing file.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    PngEncoder::new_with_quality(&mut writer, CompressionType::Best, FilterType::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .with_context(|| format!("encode {}", path.display()))?;

    // Flush here; BufWriter's drop would swallow the error.
    writer
        .flush()
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
