use approx::assert_relative_eq;
use proptest::prelude::*;
use splash_rs::core::Easing;

const EASINGS: [Easing; 3] = [Easing::Linear, Easing::Swing, Easing::EaseInOutExpo];

#[test]
fn endpoints_are_exact() {
    for easing in EASINGS {
        assert_relative_eq!(easing.eval(0.0), 0.0);
        assert_relative_eq!(easing.eval(1.0), 1.0);
    }
}

#[test]
fn symmetric_curves_meet_at_one_half() {
    assert_relative_eq!(Easing::Swing.eval(0.5), 0.5, epsilon = 1e-12);
    assert_relative_eq!(Easing::EaseInOutExpo.eval(0.5), 0.5, epsilon = 1e-12);
}

#[test]
fn non_finite_inputs_collapse_to_zero() {
    for easing in EASINGS {
        assert_relative_eq!(easing.eval(f64::NAN), 0.0);
        assert_relative_eq!(easing.eval(f64::INFINITY), 0.0);
    }
}

proptest! {
    #[test]
    fn eval_stays_in_the_unit_interval(t in -2.0f64..3.0) {
        for easing in EASINGS {
            let value = easing.eval(t);
            prop_assert!((0.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn eval_is_monotone(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for easing in EASINGS {
            prop_assert!(easing.eval(lo) <= easing.eval(hi) + 1e-12);
        }
    }

    #[test]
    fn inputs_outside_the_interval_clamp(t in 1.0f64..100.0) {
        for easing in EASINGS {
            prop_assert!((easing.eval(t) - 1.0).abs() <= 1e-12);
            prop_assert!(easing.eval(-t).abs() <= 1e-12);
        }
    }

    #[test]
    fn swing_and_expo_are_point_symmetric(t in 0.0f64..=1.0) {
        for easing in [Easing::Swing, Easing::EaseInOutExpo] {
            let sum = easing.eval(t) + easing.eval(1.0 - t);
            prop_assert!((sum - 1.0).abs() <= 1e-9);
        }
    }
}
