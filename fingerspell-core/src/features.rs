//! Per-frame geometric features of one hand.

use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::skeleton::{
    Finger, FingerTable, Handedness, FINGER_TABLE, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_TIP, PINKY_MCP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};
use crate::vector::{angle_between, cross, displacement, distance, normalize, Point3};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("hand skeleton needs {expected} landmarks, got {found}")]
    LandmarkCount { expected: usize, found: usize },
    #[error("{finger} chain refers to landmark {index}, skeleton has {count}")]
    ChainIndex {
        finger: &'static str,
        index: usize,
        count: usize,
    },
}

/// The two measured joints of a finger chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Joint {
    /// Between the first and second bone segments
    Base,
    /// Between the second and third bone segments
    Tip,
}

impl Joint {
    pub const ALL: [Joint; 2] = [Joint::Base, Joint::Tip];
}

const JOINT_KEYS: [[&str; 2]; 5] = [
    ["thumb_base", "thumb_tip"],
    ["index_base", "index_tip"],
    ["middle_base", "middle_tip"],
    ["ring_base", "ring_tip"],
    ["pinky_base", "pinky_tip"],
];

/// Flexion per finger joint in degrees. Straight segments read near 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointAngles {
    angles: [[f32; 2]; 5],
}

impl JointAngles {
    pub fn get(&self, finger: Finger, joint: Joint) -> f32 {
        self.angles[finger.ordinal()][joint as usize]
    }

    pub fn set(&mut self, finger: Finger, joint: Joint, degrees: f32) {
        self.angles[finger.ordinal()][joint as usize] = degrees;
    }

    /// Look up by the `{finger}_{base|tip}` key, e.g. `"index_tip"`
    pub fn by_key(&self, key: &str) -> Option<f32> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        Finger::ALL.into_iter().flat_map(move |finger| {
            Joint::ALL.into_iter().map(move |joint| {
                (
                    JOINT_KEYS[finger.ordinal()][joint as usize],
                    self.get(finger, joint),
                )
            })
        })
    }
}

/// Landmark pairs whose separation is part of the feature set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistancePair {
    ThumbIndex,
    IndexMiddle,
    MiddleRing,
    RingPinky,
    WristMiddle,
}

impl DistancePair {
    pub const ALL: [DistancePair; 5] = [
        DistancePair::ThumbIndex,
        DistancePair::IndexMiddle,
        DistancePair::MiddleRing,
        DistancePair::RingPinky,
        DistancePair::WristMiddle,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DistancePair::ThumbIndex => "thumb_index",
            DistancePair::IndexMiddle => "index_middle",
            DistancePair::MiddleRing => "middle_ring",
            DistancePair::RingPinky => "ring_pinky",
            DistancePair::WristMiddle => "wrist_middle",
        }
    }

    pub fn landmarks(&self) -> (usize, usize) {
        match self {
            DistancePair::ThumbIndex => (THUMB_TIP, INDEX_TIP),
            DistancePair::IndexMiddle => (INDEX_TIP, MIDDLE_TIP),
            DistancePair::MiddleRing => (MIDDLE_TIP, RING_TIP),
            DistancePair::RingPinky => (RING_TIP, PINKY_TIP),
            DistancePair::WristMiddle => (WRIST, MIDDLE_TIP),
        }
    }
}

/// Distances in the same normalized units as the landmarks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelativeDistances {
    values: [f32; 5],
}

impl RelativeDistances {
    pub fn get(&self, pair: DistancePair) -> f32 {
        self.values[pair as usize]
    }

    pub fn set(&mut self, pair: DistancePair, value: f32) {
        self.values[pair as usize] = value;
    }

    pub fn by_key(&self, key: &str) -> Option<f32> {
        DistancePair::ALL
            .iter()
            .find(|pair| pair.key() == key)
            .map(|pair| self.get(*pair))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        DistancePair::ALL
            .into_iter()
            .map(move |pair| (pair.key(), self.get(pair)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct HandOrientation {
    /// Unit palm normal, or zero when wrist and knuckles are collinear.
    /// Its sign flips between left and right hands.
    pub palm_normal_vector: Point3,
}

/// Everything the letter classifiers know about one hand in one frame
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct FeatureSet {
    pub handedness: Handedness,
    pub landmarks: Vec<Point3>,
    pub joint_angles: JointAngles,
    pub relative_distances: RelativeDistances,
    pub hand_orientation: HandOrientation,
}

impl FeatureSet {
    /// Extract features using the standard finger layout
    pub fn extract(landmarks: &[Point3], handedness: Handedness) -> Result<Self, FeatureError> {
        Self::extract_with(&FINGER_TABLE, landmarks, handedness)
    }

    /// Extract features measuring finger chains from `fingers`.
    /// A chain index at or past [`LANDMARK_COUNT`] is rejected before any measurement.
    pub fn extract_with(
        fingers: &FingerTable,
        landmarks: &[Point3],
        handedness: Handedness,
    ) -> Result<Self, FeatureError> {
        if landmarks.len() != LANDMARK_COUNT {
            return Err(FeatureError::LandmarkCount {
                expected: LANDMARK_COUNT,
                found: landmarks.len(),
            });
        }

        for (finger, chain) in fingers.iter() {
            if let Some(&index) = chain.iter().find(|&&idx| idx >= LANDMARK_COUNT) {
                return Err(FeatureError::ChainIndex {
                    finger: finger.name(),
                    index,
                    count: LANDMARK_COUNT,
                });
            }
        }

        let mut joint_angles = JointAngles::default();
        for (finger, chain) in fingers.iter() {
            let [p0, p1, p2, p3] = chain.map(|idx| landmarks[idx]);
            let v1 = displacement(p0, p1);
            let v2 = displacement(p1, p2);
            let v3 = displacement(p2, p3);
            joint_angles.set(*finger, Joint::Base, angle_between(v1, v2));
            joint_angles.set(*finger, Joint::Tip, angle_between(v2, v3));
        }

        let mut relative_distances = RelativeDistances::default();
        for pair in DistancePair::ALL {
            let (a, b) = pair.landmarks();
            relative_distances.set(pair, distance(landmarks[a], landmarks[b]));
        }

        let to_index = displacement(landmarks[WRIST], landmarks[INDEX_MCP]);
        let to_pinky = displacement(landmarks[WRIST], landmarks[PINKY_MCP]);
        let hand_orientation = HandOrientation {
            palm_normal_vector: normalize(cross(to_index, to_pinky)),
        };

        Ok(Self {
            handedness,
            landmarks: landmarks.to_vec(),
            joint_angles,
            relative_distances,
            hand_orientation,
        })
    }

    /// Whether the retained skeleton has the full 21 points
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() == LANDMARK_COUNT
    }

    pub fn wrist(&self) -> Option<Point3> {
        self.landmarks.get(WRIST).copied()
    }
}

#[cfg(feature = "serde")]
fn serialize_keyed<S, I>(serializer: S, len: usize, entries: I) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: Iterator<Item = (&'static str, f32)>,
{
    let mut map = serializer.serialize_map(Some(len))?;
    for (key, value) in entries {
        map.serialize_entry(key, &value)?;
    }
    map.end()
}

#[cfg(feature = "serde")]
impl Serialize for JointAngles {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_keyed(serializer, JOINT_KEYS.len() * Joint::ALL.len(), self.iter())
    }
}

#[cfg(feature = "serde")]
impl Serialize for RelativeDistances {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_keyed(serializer, DistancePair::ALL.len(), self.iter())
    }
}
