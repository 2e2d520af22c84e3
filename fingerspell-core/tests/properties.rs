use fingerspell_core::{
    vector, Dispatcher, FeatureSet, Handedness, LetterA, LetterB, LetterClassifier, Point3,
    LANDMARK_COUNT,
};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point3> {
    (0.0f32..1.0, 0.0f32..1.0, -0.3f32..0.3).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn finite_vector() -> impl Strategy<Value = Point3> {
    let finite = || prop::num::f32::NORMAL | prop::num::f32::SUBNORMAL | prop::num::f32::ZERO;
    (finite(), finite(), finite()).prop_map(|(x, y, z)| Point3::new(x, y, z))
}

fn skeleton() -> impl Strategy<Value = Vec<Point3>> {
    prop::collection::vec(point(), LANDMARK_COUNT)
}

fn handedness() -> impl Strategy<Value = Handedness> {
    prop_oneof![Just(Handedness::Left), Just(Handedness::Right)]
}

proptest! {
    #[test]
    fn extraction_is_deterministic(landmarks in skeleton(), hand in handedness()) {
        let first = FeatureSet::extract(&landmarks, hand).unwrap();
        let second = FeatureSet::extract(&landmarks, hand).unwrap();

        for ((_, a), (_, b)) in first.joint_angles.iter().zip(second.joint_angles.iter()) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
        prop_assert_eq!(&first, &second);

        let dispatcher = Dispatcher::reference();
        prop_assert_eq!(dispatcher.letter_detected(&first), dispatcher.letter_detected(&second));
    }

    #[test]
    fn joint_angles_stay_within_half_turn(landmarks in skeleton(), hand in handedness()) {
        let features = FeatureSet::extract(&landmarks, hand).unwrap();
        for (key, angle) in features.joint_angles.iter() {
            prop_assert!((0.0..=180.0).contains(&angle), "{} = {}", key, angle);
        }
    }

    #[test]
    fn palm_normal_is_unit_or_zero(landmarks in skeleton(), hand in handedness()) {
        let features = FeatureSet::extract(&landmarks, hand).unwrap();
        let normal = features.hand_orientation.palm_normal_vector;
        if normal != Point3::zero() {
            prop_assert!((normal.magnitude() - 1.0).abs() < 1e-4, "|n| = {}", normal.magnitude());
        }
    }

    #[test]
    fn distances_are_non_negative(landmarks in skeleton(), hand in handedness()) {
        let features = FeatureSet::extract(&landmarks, hand).unwrap();
        for (key, value) in features.relative_distances.iter() {
            prop_assert!(value >= 0.0, "{} = {}", key, value);
        }
    }

    #[test]
    fn a_and_b_never_both_match(landmarks in skeleton(), hand in handedness()) {
        let features = FeatureSet::extract(&landmarks, hand).unwrap();
        prop_assert!(!(LetterA.matches(&features) && LetterB.matches(&features)));
    }

    #[test]
    fn wrong_sized_skeleton_never_matches(
        landmarks in prop::collection::vec(point(), 0..40usize),
        hand in handedness(),
    ) {
        prop_assume!(landmarks.len() != LANDMARK_COUNT);
        prop_assert!(FeatureSet::extract(&landmarks, hand).is_err());

        let mut features = FeatureSet::extract(&vec![Point3::zero(); LANDMARK_COUNT], hand).unwrap();
        features.landmarks = landmarks;
        prop_assert!(!LetterA.matches(&features));
        prop_assert!(!LetterB.matches(&features));
    }

    #[test]
    fn angle_between_is_bounded(a in point(), b in point()) {
        let angle = vector::angle_between(a, b);
        prop_assert!((0.0..=180.0).contains(&angle));
        prop_assert_eq!(angle.to_bits(), vector::angle_between(a, b).to_bits());
    }

    #[test]
    fn angle_between_is_bounded_for_any_finite_vector(a in finite_vector(), b in finite_vector()) {
        let angle = vector::angle_between(a, b);
        prop_assert!((0.0..=180.0).contains(&angle), "{:?} vs {:?} = {}", a, b, angle);
    }
}

#[test]
fn palm_normal_unit_length_for_fixed_triangle() {
    let mut landmarks = vec![Point3::zero(); LANDMARK_COUNT];
    landmarks[0] = Point3::new(0.5, 0.9, -0.01);
    landmarks[5] = Point3::new(0.4, 0.6, 0.02);
    landmarks[17] = Point3::new(0.7, 0.65, 0.05);
    let features = FeatureSet::extract(&landmarks, Handedness::Right).unwrap();
    let normal = features.hand_orientation.palm_normal_vector;
    assert!((normal.magnitude() - 1.0).abs() < 1e-6);
}
