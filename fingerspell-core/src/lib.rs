#![cfg_attr(not(feature = "std"), no_std)]

//! Feature extraction and letter classification for 21-point hand skeletons.
//!
//! Every function in this crate is a pure function of its input frame, so it
//! runs the same on native targets, in `no_std` firmware and in the browser.

extern crate alloc;

pub mod classifier;
pub mod dispatch;
pub mod features;
pub mod skeleton;
pub mod vector;

pub use classifier::{LetterA, LetterB, LetterClassifier};
pub use dispatch::{Dispatcher, MAX_LETTERS};
pub use features::{
    DistancePair, FeatureError, FeatureSet, HandOrientation, Joint, JointAngles,
    RelativeDistances,
};
pub use skeleton::{Finger, FingerTable, Handedness, FINGER_TABLE, LANDMARK_COUNT};
pub use vector::Point3;
