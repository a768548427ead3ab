use splash_rs::api::{
    AnchorClickOutcome, ChartView, ChartViewConfig, ColumnMapping, DEFAULT_DATASET_URL,
    PageEngine, PageEngineConfig,
};
use splash_rs::core::{PageAnchor, PageModel, Viewport};
use splash_rs::render::NullRenderer;

fn view() -> ChartView<NullRenderer> {
    let config = ChartViewConfig::new(Viewport::new(800, 600));
    ChartView::new(NullRenderer::default(), config).expect("view init")
}

#[test]
fn default_mapping_targets_the_stock_columns() {
    let mapping = ColumnMapping::default();
    assert_eq!(mapping.x, "x");
    assert_eq!(mapping.y, "y");
    assert_eq!(mapping.z, "z");
    assert_eq!(mapping.label, "Country");
}

#[test]
fn default_dataset_url_is_pinned() {
    assert_eq!(
        DEFAULT_DATASET_URL,
        "https://raw.githubusercontent.com/philliphuang/cs109-proj/master/data/pca/food_by_country.csv"
    );
}

#[test]
fn loading_marks_the_dataset_timestamp() {
    let mut view = view();
    assert!(view.loaded_at().is_none());
    view.load_csv_text("x,y,z,Country\n1,2,3,A\n", &ColumnMapping::default())
        .expect("csv loads");
    assert!(view.loaded_at().is_some());
    assert_eq!(view.series().expect("series present").len(), 1);
}

#[test]
fn skip_loader_reports_success() {
    let mut view = view();
    assert!(view.load_csv_text_or_skip("x,y,z,Country\n1,2,3,A\n", &ColumnMapping::default()));
    assert!(view.has_series());
}

#[test]
fn skip_loader_degrades_to_an_absent_chart() {
    let mut view = view();
    assert!(!view.load_csv_text_or_skip("x,y\n1,2\n", &ColumnMapping::default()));
    assert!(!view.has_series());
    assert!(view.loaded_at().is_none());

    view.render().expect("empty render is a no-op");
    assert_eq!(view.renderer().frames_rendered, 0);
}

#[test]
fn chart_failure_leaves_the_page_engine_functional() {
    let model = PageModel::new()
        .with_section("intro", 0.0)
        .with_section("features", 600.0)
        .with_anchor(PageAnchor::marked("features-link", "#features"));
    let mut engine = PageEngine::new(model, PageEngineConfig::default()).expect("engine init");

    let mut view = view();
    assert!(!view.load_csv_text_or_skip("not,a\nvalid csv", &ColumnMapping::default()));

    assert!(engine.on_scroll(100.0));
    assert!(engine.nav_collapsed());
    assert_eq!(
        engine.click_anchor("features-link"),
        AnchorClickOutcome::ScrollStarted {
            target_offset_px: 600.0
        }
    );
    engine.advance(1500.0).expect("valid delta");
    assert_eq!(engine.scroll_offset_px(), 600.0);
}
