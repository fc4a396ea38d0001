//! Command implementations: inspect, render, scan.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ninepatch_core::codec::{decode_png, encode_png};
use ninepatch_core::{NinePatch, NinePatchConfig, PatchError, PixelBuffer, Render, declarations};

use crate::discover::{discover, patch_stem};

/// Load a patch image from disk as RGBA8.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if ext != "png" {
        return Err(PatchError::UnsupportedFormat(format!(
            "{}: only PNG patch images can be decoded",
            path.display()
        ))
        .into());
    }
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(decode_png(&bytes)?)
}

/// Print the decoded geometry of a patch image as JSON.
pub fn inspect(path: &Path) -> Result<String> {
    let image = load_image(path)?;
    let patch = NinePatch::decode(&image)?;
    Ok(serde_json::to_string_pretty(&patch.report())?)
}

fn write_render(
    render: &Render,
    out_dir: &Path,
    name: &str,
    config: &NinePatchConfig,
) -> Result<PathBuf> {
    let png_path = out_dir.join(format!("{name}.png"));
    fs::write(&png_path, encode_png(render.raster())?)
        .with_context(|| format!("writing {}", png_path.display()))?;
    if config.emit_css {
        let css_path = out_dir.join(format!("{name}.css"));
        let css = declarations(render, &config.background_color)?.to_css();
        fs::write(&css_path, css).with_context(|| format!("writing {}", css_path.display()))?;
    }
    Ok(png_path)
}

/// Render one patch image at each content size; returns the written PNGs.
///
/// A simple layout is written once, since the host sizes it.
pub fn render_file(
    path: &Path,
    sizes: &[(u32, u32)],
    config: &NinePatchConfig,
) -> Result<Vec<PathBuf>> {
    let image = load_image(path)?;
    let patch = NinePatch::decode(&image)
        .with_context(|| format!("decoding {}", path.display()))?;
    let stem = patch_stem(path);
    fs::create_dir_all(&config.output_dir)?;

    let mut written = Vec::new();
    for &(w, h) in sizes {
        let render = patch.render_for_content(w, h)?;
        let name = match render {
            Render::Simple(_) => stem.clone(),
            Render::Grid(_) => {
                let (ow, oh) = render.raster().dimensions();
                format!("{stem}_{ow}x{oh}")
            }
        };
        let out = write_render(&render, &config.output_dir, &name, config)?;
        log::info!("Wrote {}", out.display());
        written.push(out);
        if matches!(render, Render::Simple(_)) {
            break;
        }
    }
    Ok(written)
}

/// Render every discovered patch image in `dir`. Per-file failures are
/// logged and skipped; returns the number of images rendered.
pub fn scan(dir: &Path, sizes: &[(u32, u32)], config: &NinePatchConfig) -> Result<usize> {
    let default_size = [(config.default_width, config.default_height)];
    let sizes = if sizes.is_empty() {
        &default_size[..]
    } else {
        sizes
    };

    let found = discover(dir)?;
    log::info!("Discovered {} patch images in {}", found.len(), dir.display());
    let mut rendered = 0;
    for path in &found {
        match render_file(path, sizes, config) {
            Ok(_) => rendered += 1,
            Err(e) => log::warn!("Skipping {}: {e:#}", path.display()),
        }
    }
    Ok(rendered)
}
