use pdf_pictures::*;
use std::path::PathBuf;

#[test]
fn test_default_options() {
    let options = LayoutOptions::default();
    assert_eq!(options.page_size, PageSize::A4);
    assert_eq!(options.orientation, Orientation::Portrait);
    assert_eq!(options.margins, Margins::uniform(10.0));
    assert_eq!(options.margin_color, RgbColor::WHITE);
    assert_eq!(options.background_color, RgbColor::WHITE);
    assert_eq!(options.overflow, OverflowPolicy::Spill);
    assert_eq!(options.embedding, ImageEmbedding::InMemory);
    assert!(options.validate().is_ok());
}

#[test]
fn test_content_dimensions() {
    let options = LayoutOptions {
        orientation: Orientation::Landscape,
        margins: Margins {
            top_mm: 5.0,
            bottom_mm: 15.0,
            left_mm: 20.0,
            right_mm: 7.0,
        },
        ..Default::default()
    };

    assert_eq!(options.page_dimensions_mm(), (297.0, 210.0));
    assert_eq!(options.content_dimensions_mm(), (270.0, 190.0));
}

#[test]
fn test_validation_margin_sums() {
    let mut options = LayoutOptions::default();

    // Exactly the page width leaves a zero-width content area
    options.margins.left_mm = 105.0;
    options.margins.right_mm = 105.0;
    match options.validate() {
        Err(ComposeError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("Left and right margins"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }

    options.margins.right_mm = 104.0;
    assert!(options.validate().is_ok());

    options.margins.top_mm = 200.0;
    options.margins.bottom_mm = 97.0;
    match options.validate() {
        Err(ComposeError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("Top and bottom margins"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }
}

#[test]
fn test_validation_negative_margin() {
    let mut options = LayoutOptions::default();
    options.margins.bottom_mm = -1.0;
    match options.validate() {
        Err(ComposeError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("bottom margin"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }

    options.margins.bottom_mm = f32::NAN;
    assert!(options.validate().is_err());
}

#[test]
fn test_zero_margins_are_valid() {
    let options = LayoutOptions {
        margins: Margins::uniform(0.0),
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = LayoutOptions {
        page_size: PageSize::Letter,
        orientation: Orientation::Landscape,
        margins: Margins {
            top_mm: 12.5,
            bottom_mm: 3.0,
            left_mm: 0.0,
            right_mm: 20.0,
        },
        margin_color: RgbColor::new(30, 144, 255),
        background_color: RgbColor::new(18, 18, 18),
        overflow: OverflowPolicy::Fit,
        embedding: ImageEmbedding::Staged {
            staging_dir: Some(PathBuf::from("/tmp/staging")),
        },
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = LayoutOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);

    let json = std::fs::read_to_string(path).unwrap();
    assert!(json.contains("\"#1E90FF\""));
    assert!(json.contains("\"#121212\""));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(
        temp_file.path(),
        r##"{ "page_size": "Letter", "margin_color": "#000000" }"##,
    )
    .unwrap();

    let loaded = LayoutOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.page_size, PageSize::Letter);
    assert_eq!(loaded.margin_color, RgbColor::BLACK);
    assert_eq!(loaded.margins, Margins::default());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_rejects_bad_color() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), r#"{ "margin_color": "blue" }"#).unwrap();

    let result = LayoutOptions::load(temp_file.path()).await;
    match result {
        Err(ComposeError::InvalidConfiguration(msg)) => {
            assert!(msg.contains("Failed to parse config"));
        }
        _ => panic!("Expected InvalidConfiguration error"),
    }
}
