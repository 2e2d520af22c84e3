//! Rule-based letter predicates over a [`FeatureSet`].

use crate::features::FeatureSet;
use crate::skeleton::{FINGERTIPS, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP};
use crate::vector::Point3;

/// One letter of the alphabet, recognised from a single frame
pub trait LetterClassifier: Sync {
    /// Label reported when this classifier matches
    fn letter(&self) -> &'static str;

    fn matches(&self, features: &FeatureSet) -> bool;
}

/// Tip strictly below its MCP knuckle in image space (y grows downward)
fn is_curled(landmarks: &[Point3], tip: usize) -> bool {
    landmarks[tip].y > landmarks[tip - 3].y
}

/// Tip strictly above every other joint of its own chain
fn is_extended(landmarks: &[Point3], tip: usize) -> bool {
    let y = landmarks[tip].y;
    y < landmarks[tip - 1].y && y < landmarks[tip - 2].y && y < landmarks[tip - 3].y
}

/// `a` lies toward the thumb side of `b`: left of it for a right hand,
/// right of it for a left hand.
fn thumbward_of(features: &FeatureSet, a: usize, b: usize) -> bool {
    let sign = features.handedness.sign();
    sign * (features.landmarks[b].x - features.landmarks[a].x) > 0.0
}

/// Fist with the thumb resting along the side of the index finger
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterA;

impl LetterClassifier for LetterA {
    fn letter(&self) -> &'static str {
        "A"
    }

    fn matches(&self, features: &FeatureSet) -> bool {
        if !features.is_complete() {
            return false;
        }

        let landmarks = &features.landmarks;
        if !FINGERTIPS.iter().all(|&tip| is_curled(landmarks, tip)) {
            return false;
        }

        thumbward_of(features, THUMB_TIP, THUMB_IP) && thumbward_of(features, THUMB_IP, THUMB_MCP)
    }
}

/// Flat open hand with the thumb folded across the palm
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterB;

impl LetterClassifier for LetterB {
    fn letter(&self) -> &'static str {
        "B"
    }

    fn matches(&self, features: &FeatureSet) -> bool {
        if !features.is_complete() {
            return false;
        }

        let landmarks = &features.landmarks;
        if !FINGERTIPS.iter().all(|&tip| is_extended(landmarks, tip)) {
            return false;
        }

        // Only the tip against the base of the thumb is compared
        thumbward_of(features, THUMB_TIP, THUMB_CMC)
    }
}
