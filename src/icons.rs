use crate::error::{AssetGenError, Result};
use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};

pub const ICONS_DIR: &str = "icons";

/// Chrome extension manifest icon sizes.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

/// Resizes the logo into the extension icon set, one `icon{size}.png` per
/// target size, using Lanczos3 resampling.
pub fn render_icon_set(logo_path: &Path, out_dir: &Path) -> Result<Vec<PathBuf>> {
    let img = image::open(logo_path).map_err(|e| AssetGenError::ImageError(e.to_string()))?;

    fs::create_dir_all(out_dir).map_err(|e| AssetGenError::IoError(e.to_string()))?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let resized = img.resize_exact(size, size, FilterType::Lanczos3);
        let path = out_dir.join(format!("icon{}.png", size));
        resized
            .save(&path)
            .map_err(|e| AssetGenError::ImageError(e.to_string()))?;
        written.push(path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};
    use std::env;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        env::temp_dir().join(format!("assetgen-test-{}", Uuid::new_v4()))
    }

    fn write_test_logo(dir: &Path) -> PathBuf {
        fs::create_dir_all(dir).unwrap();
        let mut img = RgbaImage::new(64, 64);
        for pixel in img.pixels_mut() {
            *pixel = Rgba([30, 30, 60, 255]);
        }
        let path = dir.join("logo.png");
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_render_icon_set_dimensions() {
        let dir = temp_dir();
        let logo = write_test_logo(&dir);
        let out_dir = dir.join("icons");

        let written = render_icon_set(&logo, &out_dir).unwrap();

        assert_eq!(written.len(), 3);
        for (path, size) in written.iter().zip(ICON_SIZES) {
            assert_eq!(path, &out_dir.join(format!("icon{}.png", size)));
            let icon = image::open(path).unwrap();
            assert_eq!(icon.width(), size);
            assert_eq!(icon.height(), size);
        }

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_icon_set_missing_logo() {
        let dir = temp_dir();
        let result = render_icon_set(&dir.join("missing.png"), &dir.join("icons"));

        assert!(matches!(result, Err(AssetGenError::ImageError(_))));
        assert!(!dir.join("icons").exists());
    }
}
