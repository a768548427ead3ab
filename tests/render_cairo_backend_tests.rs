#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use splash_rs::SplashError;
use splash_rs::api::{ChartView, ChartViewConfig, ColumnMapping};
use splash_rs::core::Viewport;
use splash_rs::render::CairoRenderer;

const CSV: &str = "\
x,y,z,Country
1.5,2.5,3.5,Argentina
-0.5,4.0,1.0,Belgium
2.0,-1.0,0.5,Chile
";

fn loaded_view(renderer: CairoRenderer, width: u32, height: u32) -> ChartView<CairoRenderer> {
    let config = ChartViewConfig::new(Viewport::new(width, height));
    let mut view = ChartView::new(renderer, config).expect("view init");
    view.load_csv_text(CSV, &ColumnMapping::default())
        .expect("load csv");
    view
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_one_marker_and_label_per_row() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let mut view = loaded_view(renderer, 900, 500);

    view.render().expect("render");
    let renderer = view.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.markers_drawn, 3);
    assert_eq!(stats.texts_drawn, 3);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let mut view = loaded_view(renderer, 600, 320);

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    view.render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = view.into_renderer();
    assert_eq!(renderer.last_stats().markers_drawn, 3);
}

#[test]
fn rendering_without_a_series_leaves_the_backend_untouched() {
    let renderer = CairoRenderer::new(400, 300).expect("renderer");
    let config = ChartViewConfig::new(Viewport::new(400, 300));
    let mut view = ChartView::new(renderer, config).expect("view init");

    view.render().expect("render");

    assert_eq!(view.render_count(), 0);
    assert_eq!(view.renderer().last_stats().markers_drawn, 0);
}

#[test]
fn cairo_backend_reports_its_name() {
    let renderer = CairoRenderer::new(64, 64).expect("renderer");
    assert_eq!(renderer.backend_name(), "cairo+pango+pangocairo");
}
