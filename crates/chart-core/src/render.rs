// File: crates/chart-core/src/render.rs
// Summary: CPU raster surface helpers shared by single charts and figures (PNG, RGBA, file output).

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};

pub(crate) fn raster_surface(width: i32, height: i32) -> Result<skia::Surface> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })
}

pub(crate) fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Read back the surface as unpremultiplied RGBA8: `(pixels, width, height, stride)`.
pub(crate) fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let stride = w as usize * 4;
    let mut pixels = vec![0u8; stride * h as usize];
    if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
        return Err(ChartError::Surface { width: w, height: h });
    }
    Ok((pixels, w as u32, h as u32, stride))
}

/// Write `bytes` to `path`, creating parent directories first.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, bytes).map_err(io_err)?;
    log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
