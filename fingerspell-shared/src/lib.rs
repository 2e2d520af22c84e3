#![cfg_attr(not(feature = "std"), no_std)]

//! Messages exchanged with the hand landmark estimator and with whatever
//! displays the recognised letters.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use fingerspell_core::{Dispatcher, FeatureError, FeatureSet, Handedness, Point3};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    #[error("hand {0} has landmarks but no handedness category")]
    MissingHandedness(usize),

    #[error("unknown handedness label {0:?}")]
    UnknownHandedness(String),

    #[error(transparent)]
    Features(#[from] FeatureError),

    #[cfg(feature = "std")]
    #[error("malformed landmarker result: {0}")]
    Json(#[from] serde_json::Error),
}

/// One classification candidate, as reported by the estimator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_name: String,
    #[serde(default)]
    pub score: f32,
}

/// Per-frame output of the hand landmark estimator.
///
/// Hands appear in detection order; `landmarks[i]` and `handedness[i]` belong
/// to the same hand. Fields the kernel does not read are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HandLandmarkerResult {
    #[serde(default)]
    pub landmarks: Vec<Vec<Point3>>,
    #[serde(default, alias = "handednesses")]
    pub handedness: Vec<Vec<Category>>,
}

/// A single detected hand, borrowed from a [`HandLandmarkerResult`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandObservation<'a> {
    pub landmarks: &'a [Point3],
    pub handedness: Handedness,
    pub score: f32,
}

impl HandLandmarkerResult {
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, FrameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn hand_count(&self) -> usize {
        self.landmarks.len()
    }

    /// The first detected hand, or `None` when the frame has no hands
    pub fn first_hand(&self) -> Result<Option<HandObservation<'_>>, FrameError> {
        let Some(landmarks) = self.landmarks.first() else {
            return Ok(None);
        };

        let category = self
            .handedness
            .first()
            .and_then(|categories| categories.first())
            .ok_or(FrameError::MissingHandedness(0))?;
        let handedness = Handedness::from_label(&category.category_name)
            .ok_or_else(|| FrameError::UnknownHandedness(category.category_name.clone()))?;

        Ok(Some(HandObservation {
            landmarks,
            handedness,
            score: category.score,
        }))
    }
}

/// What was recognised on one hand
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LetterReport {
    /// Detected letter, empty when no letter matched
    pub letter: &'static str,
    pub handedness: Handedness,
    pub handedness_score: f32,
    /// Wrist position, where an overlay label can be placed
    pub anchor: Point3,
    pub features: FeatureSet,
}

impl LetterReport {
    pub fn has_letter(&self) -> bool {
        !self.letter.is_empty()
    }
}

/// Result of running one estimator frame through the classifier
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    NoHand,
    Hand(LetterReport),
}

impl FrameOutcome {
    pub fn report(&self) -> Option<&LetterReport> {
        match self {
            FrameOutcome::NoHand => None,
            FrameOutcome::Hand(report) => Some(report),
        }
    }

    /// Detected letter; `None` both without a hand and without a match
    pub fn letter(&self) -> Option<&'static str> {
        self.report()
            .filter(|report| report.has_letter())
            .map(|report| report.letter)
    }
}

/// Classify the first hand of an estimator frame
pub fn analyze(
    result: &HandLandmarkerResult,
    dispatcher: &Dispatcher<'_>,
) -> Result<FrameOutcome, FrameError> {
    let Some(hand) = result.first_hand()? else {
        log::debug!("frame has no hand");
        return Ok(FrameOutcome::NoHand);
    };

    let features = FeatureSet::extract(hand.landmarks, hand.handedness)?;
    let letter = dispatcher.letter_detected(&features);

    Ok(FrameOutcome::Hand(LetterReport {
        letter,
        handedness: hand.handedness,
        handedness_score: hand.score,
        anchor: features.wrist().unwrap_or_default(),
        features,
    }))
}
