use crate::error::{AssetGenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const ASSETS_DIR: &str = "assets";
pub const LOGO_PATH: &str = "assets/logo.png";

const LOGO_PROMPT: &str = "A sleek, modern app icon for a smart notebook web extension. \
    The design features a minimalist glowing notebook. Dark mode aesthetic, neon blue and \
    purple accents, high quality, vector style, flat design but premium, solid dark background.";

#[derive(Debug, Clone)]
pub struct AssetSpec {
    pub path: PathBuf,
    pub prompt: String,
}

impl AssetSpec {
    fn new(path: &str, prompt: &str) -> Self {
        Self {
            path: PathBuf::from(path),
            prompt: prompt.to_string(),
        }
    }
}

/// The fixed set of assets the extension ships with: one logo and three
/// promotional images for the web store listing.
pub fn generation_plan() -> Vec<AssetSpec> {
    vec![
        AssetSpec::new(LOGO_PATH, LOGO_PROMPT),
        AssetSpec::new(
            "assets/promo_1.png",
            "A futuristic laptop screen with glowing code and a colorful notebook hovering \
             out of it, dark mode aesthetic, neon purple and blue glowing lights, high \
             quality, 3d render.",
        ),
        AssetSpec::new(
            "assets/promo_2.png",
            "A minimalist illustration of a glowing brain connected to a sleek neon binder \
             clip, representing AI saving knowledge, dark premium aesthetic, vector art.",
        ),
        AssetSpec::new(
            "assets/promo_3.png",
            "A sleek abstract dashboard interface showing knowledge nodes connecting into a \
             central notebook, futuristic UI, glassmorphism, dark background with vibrant \
             cyber accents.",
        ),
    ]
}

/// Writes image bytes verbatim, creating parent directories as needed.
pub fn save_image(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AssetGenError::IoError(e.to_string()))?;
    }

    fs::write(path, bytes).map_err(|e| AssetGenError::IoError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        env::temp_dir().join(format!("assetgen-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_generation_plan_shape() {
        let plan = generation_plan();
        assert_eq!(plan.len(), 4);
        assert_eq!(plan[0].path, PathBuf::from("assets/logo.png"));
        assert_eq!(plan[1].path, PathBuf::from("assets/promo_1.png"));
        assert_eq!(plan[2].path, PathBuf::from("assets/promo_2.png"));
        assert_eq!(plan[3].path, PathBuf::from("assets/promo_3.png"));
        assert!(plan.iter().all(|asset| !asset.prompt.is_empty()));
    }

    #[test]
    fn test_save_image_creates_parent_dirs() {
        let dir = temp_dir();
        let path = dir.join("nested/logo.png");
        let bytes = [0x89u8, 0x50, 0x4e, 0x47];

        save_image(&path, &bytes).unwrap();

        assert_eq!(fs::read(&path).unwrap(), bytes);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_image_writes_bytes_verbatim() {
        let dir = temp_dir();
        let path = dir.join("promo_1.png");
        let bytes: Vec<u8> = (0..=255).collect();

        save_image(&path, &bytes).unwrap();

        assert_eq!(fs::read(&path).unwrap(), bytes);
        fs::remove_dir_all(&dir).unwrap();
    }
}
