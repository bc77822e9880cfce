use hexlayout::{Layout, LayoutConfig, Orientation, OrientationKind, Point2};
use validator::ValidationErrors;

#[test]
fn test_layout_config_validation() {
    let config = LayoutConfig {
        orientation: OrientationKind::Flat,         // valid
        scale: Point2::new(f64::INFINITY, 1.0),     // invalid
        origin: Point2::new(0.0, f64::NAN),         // invalid
    };

    // This is a bit of a lazy check but it works well enough
    let err = Layout::from_config(config).unwrap_err();
    let validation_errors = err.downcast::<ValidationErrors>().unwrap();
    let mut error_fields = validation_errors
        .errors()
        .keys()
        .copied()
        .collect::<Vec<&str>>();
    error_fields.sort_unstable();
    assert_eq!(
        error_fields,
        vec!["origin", "scale"],
        "incorrect validation errors in {:#?}",
        validation_errors
    );
}

/// Degenerate geometry is weird but it isn't invalid
#[test]
fn test_layout_config_degenerate_scale() {
    let config = LayoutConfig {
        orientation: OrientationKind::Pointy,
        scale: Point2::new(0.0, -3.0),
        origin: Point2::new(-100.0, 100.0),
    };
    let layout = Layout::from_config(config).unwrap();
    assert_eq!(
        layout,
        Layout::new(Orientation::POINTY, 0.0, -3.0, Point2::new(-100.0, 100.0))
    );
}

#[test]
fn test_layout_config_default() {
    let layout = Layout::from_config(LayoutConfig::default()).unwrap();
    assert_eq!(*layout.orientation(), Orientation::POINTY);
    assert_eq!(layout.scale(), Point2::new(1.0, 1.0));
    assert_eq!(layout.origin(), Point2::ORIGIN);
}
