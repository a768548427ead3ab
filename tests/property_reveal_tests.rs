use proptest::prelude::*;
use splash_rs::api::RevealTimeline;
use splash_rs::core::{RevealSequence, RevealTarget};

fn any_target() -> impl Strategy<Value = RevealTarget> {
    prop_oneof![
        Just(RevealTarget::Nav),
        Just(RevealTarget::Subtitle),
        Just(RevealTarget::Sections),
        (1u8..=5).prop_map(RevealTarget::Title),
    ]
}

fn deltas() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.1f64..500.0, 1..40)
}

proptest! {
    #[test]
    fn opacity_stays_in_the_unit_interval(deltas in deltas(), target in any_target()) {
        let mut timeline =
            RevealTimeline::new(RevealSequence::default()).expect("default sequence is valid");
        timeline.begin();
        for delta in deltas {
            timeline.advance(delta).expect("valid delta");
            let opacity = timeline.opacity_of(target);
            prop_assert!((0.0..=1.0).contains(&opacity));
        }
    }

    #[test]
    fn opacity_never_decreases(deltas in deltas(), target in any_target()) {
        let mut timeline =
            RevealTimeline::new(RevealSequence::default()).expect("default sequence is valid");
        timeline.begin();
        let mut previous = timeline.opacity_of(target);
        for delta in deltas {
            timeline.advance(delta).expect("valid delta");
            let current = timeline.opacity_of(target);
            prop_assert!(current >= previous - 1e-12);
            previous = current;
        }
    }

    #[test]
    fn completion_tracks_the_total_duration(deltas in deltas()) {
        let mut timeline =
            RevealTimeline::new(RevealSequence::default()).expect("default sequence is valid");
        let total = timeline.sequence().total_duration_ms();
        timeline.begin();
        for delta in deltas {
            timeline.advance(delta).expect("valid delta");
            prop_assert_eq!(timeline.is_complete(), timeline.clock_ms() >= total);
        }
    }

    #[test]
    fn each_fade_starts_exactly_once_per_run(deltas in deltas()) {
        let mut timeline =
            RevealTimeline::new(RevealSequence::default()).expect("default sequence is valid");
        timeline.begin();

        let mut started = 0usize;
        let mut completed = 0usize;
        for delta in deltas {
            for transition in timeline.advance(delta).expect("valid delta") {
                match transition {
                    splash_rs::api::RevealTransition::FadeStarted(_) => started += 1,
                    splash_rs::api::RevealTransition::FadeCompleted(_) => completed += 1,
                }
            }
        }
        let steps = timeline.sequence().len();
        prop_assert!(started <= steps);
        prop_assert!(completed <= started);
        if timeline.is_complete() {
            prop_assert_eq!(started, steps);
            prop_assert_eq!(completed, steps);
        }
    }
}
