use splash_rs::core::reveal::{
    PAGE_REVEAL_DELAY_MS, PAGE_REVEAL_FADE_MS, TITLE_FADE_MS, TITLE_FIRST_DELAY_MS,
    TITLE_STAGGER_MS,
};
use splash_rs::core::{RevealSequence, RevealStep, RevealTarget};
use splash_rs::error::SplashError;

#[test]
fn default_choreography_matches_stock_page() {
    let sequence = RevealSequence::default();
    assert_eq!(sequence.len(), 8);

    for index in 1..=5u8 {
        let step = sequence
            .step_for(RevealTarget::Title(index))
            .expect("title step present");
        let expected_delay = TITLE_FIRST_DELAY_MS + TITLE_STAGGER_MS * f64::from(index - 1);
        assert!((step.delay_ms - expected_delay).abs() <= 1e-12);
        assert!((step.fade_ms - TITLE_FADE_MS).abs() <= 1e-12);
    }

    for target in [RevealTarget::Subtitle, RevealTarget::Nav, RevealTarget::Sections] {
        let step = sequence.step_for(target).expect("page step present");
        assert!((step.delay_ms - PAGE_REVEAL_DELAY_MS).abs() <= 1e-12);
        assert!((step.fade_ms - PAGE_REVEAL_FADE_MS).abs() <= 1e-12);
    }

    assert!((sequence.total_duration_ms() - 3100.0).abs() <= 1e-12);
}

#[test]
fn title_delays_are_strictly_increasing() {
    let sequence = RevealSequence::default();
    let mut previous = f64::NEG_INFINITY;
    for index in 1..=5u8 {
        let step = sequence
            .step_for(RevealTarget::Title(index))
            .expect("title step present");
        assert!(step.delay_ms > previous);
        previous = step.delay_ms;
    }
}

#[test]
fn subtitle_nav_and_sections_share_one_wave() {
    let sequence = RevealSequence::default();
    let subtitle = sequence
        .step_for(RevealTarget::Subtitle)
        .expect("subtitle step");
    let nav = sequence.step_for(RevealTarget::Nav).expect("nav step");
    let sections = sequence
        .step_for(RevealTarget::Sections)
        .expect("sections step");
    assert_eq!(subtitle.delay_ms, nav.delay_ms);
    assert_eq!(nav.delay_ms, sections.delay_ms);
    assert_eq!(subtitle.fade_ms, sections.fade_ms);
}

#[test]
fn duplicate_targets_are_rejected() {
    let err = RevealSequence::new([
        RevealStep::new(RevealTarget::Nav, 100.0, 50.0),
        RevealStep::new(RevealTarget::Nav, 200.0, 50.0),
    ])
    .expect_err("duplicate targets must be rejected");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn decreasing_delays_are_rejected() {
    let err = RevealSequence::new([
        RevealStep::new(RevealTarget::Title(1), 500.0, 300.0),
        RevealStep::new(RevealTarget::Title(2), 400.0, 300.0),
    ])
    .expect_err("delays must be non-decreasing");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn title_index_zero_is_rejected() {
    let err = RevealSequence::new([RevealStep::new(RevealTarget::Title(0), 100.0, 50.0)])
        .expect_err("title indices start at 1");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn negative_delay_and_zero_fade_are_rejected() {
    let err = RevealSequence::new([RevealStep::new(RevealTarget::Nav, -1.0, 50.0)])
        .expect_err("negative delay");
    assert!(matches!(err, SplashError::InvalidData(_)));

    let err = RevealSequence::new([RevealStep::new(RevealTarget::Nav, 100.0, 0.0)])
        .expect_err("zero fade");
    assert!(matches!(err, SplashError::InvalidData(_)));
}

#[test]
fn empty_sequence_is_valid() {
    let sequence = RevealSequence::empty();
    sequence.validate().expect("empty sequence is valid");
    assert!(sequence.is_empty());
    assert!(sequence.total_duration_ms().abs() <= 1e-12);
}
