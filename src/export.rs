use std::path::Path;

use anyhow::{Context, Result, bail};
use eframe::egui::{ColorImage, Rect};

/// Crop a viewport screenshot to `region` (in points) and write it as PNG.
pub fn save_png(
    path: &Path,
    screenshot: &ColorImage,
    region: Option<Rect>,
    pixels_per_point: f32,
) -> Result<()> {
    let image = match region {
        Some(rect) => screenshot.region(&rect, Some(pixels_per_point)),
        None => screenshot.clone(),
    };
    let [width, height] = image.size;
    if width == 0 || height == 0 {
        bail!("Nothing to export: the chart area is empty");
    }

    image::save_buffer_with_format(
        path,
        &rgba_bytes(&image),
        width as u32,
        height as u32,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("writing {}", path.display()))
}

/// Flatten an egui image into tightly packed RGBA8.
pub fn rgba_bytes(image: &ColorImage) -> Vec<u8> {
    image
        .pixels
        .iter()
        .flat_map(|c| c.to_srgba_unmultiplied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::Color32;

    #[test]
    fn packs_four_bytes_per_pixel() {
        let image = ColorImage::new([3, 2], Color32::from_rgb(10, 20, 30));
        let bytes = rgba_bytes(&image);
        assert_eq!(bytes.len(), 3 * 2 * 4);
        assert_eq!(&bytes[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn writes_png_file() {
        let path = std::env::temp_dir().join("series_viewer_export_test.png");
        let image = ColorImage::new([4, 4], Color32::WHITE);
        save_png(&path, &image, None, 1.0).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_image_is_rejected() {
        let path = std::env::temp_dir().join("series_viewer_empty.png");
        let image = ColorImage::new([0, 0], Color32::WHITE);
        assert!(save_png(&path, &image, None, 1.0).is_err());
    }
}
