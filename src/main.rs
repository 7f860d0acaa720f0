use assetgen::{assets, icons, logger, Config, DeepInfraClient, ImageGenerationRequest};
use base64::Engine as _;
use std::fs;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = logger::init_with_config(
        logger::LoggerConfig::development().with_level(logger::LogLevel::Info),
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    let config = Config::from_env();

    let client = match DeepInfraClient::new(config) {
        Ok(client) => {
            log::info!("✅ DeepInfra client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ {}", e);
            process::exit(1);
        }
    };

    // Logs elapsed time on drop at the end of the run.
    let _run_timer = logger::timer("asset generation");

    if let Err(e) = fs::create_dir_all(assets::ASSETS_DIR) {
        log::error!("❌ Failed to create {} directory: {}", assets::ASSETS_DIR, e);
    }

    let plan = assets::generation_plan();
    let mut generated = 0usize;

    for asset in &plan {
        log::info!("🎨 Generating {}...", asset.path.display());

        let request = ImageGenerationRequest::new(&asset.prompt);

        match client.image().generate(request).await {
            Ok(response) => {
                match base64::engine::general_purpose::STANDARD.decode(&response.image_data) {
                    Ok(image_bytes) => match assets::save_image(&asset.path, &image_bytes) {
                        Ok(_) => {
                            log::info!("💾 Saved {}", asset.path.display());
                            generated += 1;
                        }
                        Err(e) => {
                            log::error!("❌ Failed to save {}: {}", asset.path.display(), e);
                        }
                    },
                    Err(e) => {
                        log::error!("❌ Failed to decode base64 image: {}", e);
                    }
                }
            }
            Err(e) => {
                log::error!("❌ Error generating {}: {}", asset.path.display(), e);
            }
        }
    }

    log::info!("📊 Generated {}/{} assets", generated, plan.len());

    let logo_path = Path::new(assets::LOGO_PATH);
    if logo_path.exists() {
        log::info!("🖼️  Resizing logo for Chrome extension icons...");

        match icons::render_icon_set(logo_path, Path::new(icons::ICONS_DIR)) {
            Ok(written) => {
                for path in &written {
                    log::info!("💾 Saved {}", path.display());
                }
                log::info!("✅ Icons created successfully");
            }
            Err(e) => {
                log::error!("❌ Error resizing image: {}", e);
            }
        }
    } else {
        log::warn!("⚠️  {} not found, skipping icon resize", logo_path.display());
    }

    log::info!("🎉 Asset generation complete");
}
