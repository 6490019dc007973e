use pdf_pictures::*;

#[test]
fn test_page_size_dimensions() {
    assert_eq!(PageSize::A4.dimensions_mm(), (210.0, 297.0));
    assert_eq!(PageSize::Letter.dimensions_mm(), (215.9, 279.4));
}

#[test]
fn test_page_size_orientation() {
    assert_eq!(
        PageSize::A4.dimensions_with_orientation(Orientation::Portrait),
        (210.0, 297.0)
    );
    assert_eq!(
        PageSize::A4.dimensions_with_orientation(Orientation::Landscape),
        (297.0, 210.0)
    );
    assert_eq!(
        PageSize::Letter.dimensions_with_orientation(Orientation::Landscape),
        (279.4, 215.9)
    );
}

#[test]
fn test_color_from_hex() {
    let color: RgbColor = "#1E90FF".parse().unwrap();
    assert_eq!(color.channels(), (30, 144, 255));

    // Hex digits are case-insensitive
    let lower: RgbColor = "#1e90ff".parse().unwrap();
    assert_eq!(lower, color);

    assert_eq!("#000000".parse::<RgbColor>().unwrap(), RgbColor::BLACK);
    assert_eq!("#FFFFFF".parse::<RgbColor>().unwrap(), RgbColor::WHITE);
}

#[test]
fn test_color_rejects_malformed() {
    for input in ["1E90FF", "#1E90F", "#1E90FF0", "#GG90FF", "", "#", "#1E 0FF", "#ＡＢ0000"] {
        let result = input.parse::<RgbColor>();
        assert!(
            matches!(result, Err(ComposeError::InvalidConfiguration(_))),
            "accepted {:?}",
            input
        );
    }
}

#[test]
fn test_color_display() {
    assert_eq!(RgbColor::new(30, 144, 255).to_string(), "#1E90FF");
    assert_eq!(RgbColor::new(0, 1, 2).to_string(), "#000102");
}

#[test]
fn test_color_to_unit() {
    let [r, g, b] = RgbColor::new(0, 51, 255).to_unit();
    assert_eq!(r, 0.0);
    assert!((g - 0.2).abs() < 1e-6);
    assert_eq!(b, 1.0);
}

#[test]
fn test_margins_default() {
    let margins = Margins::default();
    assert_eq!(margins.top_mm, 10.0);
    assert_eq!(margins.bottom_mm, 10.0);
    assert_eq!(margins.left_mm, 10.0);
    assert_eq!(margins.right_mm, 10.0);
}

#[test]
fn test_error_messages() {
    let err = ComposeError::ImageProcessing {
        index: 2,
        reason: "image has no pixels (0x0)".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Failed to process image 2: image has no pixels (0x0)"
    );

    let err = ComposeError::InvalidConfiguration("No images to compose".to_string());
    assert_eq!(err.to_string(), "Invalid configuration: No images to compose");
}
