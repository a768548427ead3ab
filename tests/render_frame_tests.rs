use splash_rs::core::Viewport;
use splash_rs::error::SplashError;
use splash_rs::render::{
    Color, MarkerPrimitive, NullRenderer, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

fn marker(x: f64, y: f64) -> MarkerPrimitive {
    MarkerPrimitive::new(
        x,
        y,
        12.0,
        Color::rgb8(31, 119, 180).with_alpha(0.8),
        Color::rgba8(217, 217, 217, 0.14),
        0.5,
    )
}

#[test]
fn frames_accumulate_primitives() {
    let frame = RenderFrame::new(Viewport::new(800, 600))
        .with_marker(marker(100.0, 120.0))
        .with_marker(marker(220.0, 80.0))
        .with_text(TextPrimitive::new(
            "Albania",
            100.0,
            100.0,
            12.0,
            Color::rgb8(68, 68, 68),
            TextHAlign::Center,
        ));

    frame.validate().expect("frame is valid");
    assert!(!frame.is_empty());
    assert_eq!(frame.markers.len(), 2);
    assert_eq!(frame.texts.len(), 1);
}

#[test]
fn invalid_viewports_fail_validation() {
    let frame = RenderFrame::new(Viewport::new(800, 0));
    let err = frame.validate().expect_err("zero height must fail");
    assert!(matches!(
        err,
        SplashError::InvalidViewport {
            width: 800,
            height: 0
        }
    ));
}

#[test]
fn invalid_primitives_fail_validation() {
    let frame = RenderFrame::new(Viewport::new(800, 600)).with_marker(marker(f64::NAN, 10.0));
    assert!(matches!(
        frame.validate(),
        Err(SplashError::InvalidData(_))
    ));

    let frame = RenderFrame::new(Viewport::new(800, 600)).with_text(TextPrimitive::new(
        "",
        10.0,
        10.0,
        12.0,
        Color::rgb8(0, 0, 0),
        TextHAlign::Left,
    ));
    assert!(matches!(
        frame.validate(),
        Err(SplashError::InvalidData(_))
    ));
}

#[test]
fn null_renderer_counts_submitted_frames() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(640, 480))
        .with_marker(marker(10.0, 10.0))
        .with_marker(marker(20.0, 20.0))
        .with_marker(marker(30.0, 30.0));

    renderer.render(&frame).expect("render succeeds");
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_marker_count, 3);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn null_renderer_rejects_invalid_frames_without_counting() {
    let mut renderer = NullRenderer::default();
    let frame = RenderFrame::new(Viewport::new(640, 480)).with_marker(marker(f64::NAN, 10.0));

    renderer.render(&frame).expect_err("invalid frame must fail");
    assert_eq!(renderer.frames_rendered, 0);
}
