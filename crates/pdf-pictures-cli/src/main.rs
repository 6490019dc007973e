use anyhow::{Result, bail};
use clap::Parser;
use pdf_pictures::RgbImage;
use std::path::{Path, PathBuf};

mod args;

use args::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the input images, reporting and skipping any that fail to decode
async fn load_inputs(paths: &[PathBuf]) -> Result<Vec<RgbImage>> {
    let mut images = Vec::with_capacity(paths.len());
    for (path, result) in pdf_pictures::load_images(paths).await {
        match result {
            Ok(image) => {
                log::info!(
                    "Loaded {} ({}x{})",
                    path.display(),
                    image.width(),
                    image.height()
                );
                images.push(image);
            }
            Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
        }
    }

    if images.is_empty() {
        bail!("None of the {} input image(s) could be loaded", paths.len());
    }
    if images.len() < paths.len() {
        eprintln!(
            "Warning: {} of {} image(s) could not be loaded and were skipped",
            paths.len() - images.len(),
            paths.len()
        );
    }
    Ok(images)
}

/// Output path with the file name normalized to end in `.pdf`
fn output_path(output: &Path) -> PathBuf {
    match output.file_name().and_then(|name| name.to_str()) {
        Some(name) => output.with_file_name(pdf_pictures::normalize_pdf_file_name(name)),
        None => output.to_path_buf(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Compose {
            input,
            output,
            layout,
            save_config,
        } => {
            let options = layout.resolve().await?;
            options.validate()?;

            if let Some(path) = save_config {
                options.save(&path).await?;
                log::info!("Layout options saved to {}", path.display());
            }

            let images = load_inputs(&input).await?;
            let page_count = images.len();

            let bytes = pdf_pictures::compose_async(images, options).await?;
            let output = output_path(&output);
            pdf_pictures::save_pdf(&bytes, &output).await?;

            println!("Composed {} page(s) → {}", page_count, output.display());
        }

        Commands::Plan { input, layout } => {
            let options = layout.resolve().await?;
            let images = load_inputs(&input).await?;
            let dimensions: Vec<(u32, u32)> = images.iter().map(|i| i.dimensions()).collect();

            let plan = pdf_pictures::plan(&dimensions, &options)?;
            let (page_width, page_height) = plan.page_dimensions_mm;
            println!("Composition Plan:");
            println!(
                "  Page: {} {:?} ({} x {} mm)",
                options.page_size.name(),
                options.orientation,
                page_width,
                page_height
            );
            println!("  Pages: {}", plan.page_count());
            println!("  Overflow policy: {:?}", options.overflow);
            println!("  Images past the content area: {}", plan.overflowing_content);
            println!("  Images past the page edge: {}", plan.overflowing_page);
            for (index, page) in plan.pages.iter().enumerate() {
                println!(
                    "  [{}] image at ({:.1}, {:.1}) mm, {:.1} x {:.1} mm",
                    index + 1,
                    page.image.x,
                    page.image.y,
                    page.image.width,
                    page.image.height
                );
            }
        }
    }

    Ok(())
}
