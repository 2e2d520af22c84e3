//! Fixed landmark layout of a hand skeleton.
//!
//! Positions follow the MediaPipe hand landmark model; every computation in
//! this crate addresses landmarks by these indices.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of landmarks in a complete hand skeleton
pub const LANDMARK_COUNT: usize = 21;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Tips of the four non-thumb fingers
pub const FINGERTIPS: [usize; 4] = [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }

    /// Position of this finger in [`Finger::ALL`]
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Finger to landmark chain mapping, ordered base to tip
pub type FingerTable = [(Finger, [usize; 4]); 5];

pub const FINGER_TABLE: FingerTable = [
    (Finger::Thumb, [THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP]),
    (Finger::Index, [INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP]),
    (Finger::Middle, [MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP]),
    (Finger::Ring, [RING_MCP, RING_PIP, RING_DIP, RING_TIP]),
    (Finger::Pinky, [PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP]),
];

/// Which hand the estimator believes it saw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    /// Parse the estimator's category label (`"Left"` / `"Right"`)
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Left" => Some(Handedness::Left),
            "Right" => Some(Handedness::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Handedness::Left => "Left",
            Handedness::Right => "Right",
        }
    }

    /// Mirrors horizontal comparisons: `+1` for a right hand, `-1` for a left one.
    ///
    /// A right-hand rule "a is left of b" is `sign * (b.x - a.x) > 0`, which
    /// becomes "a is right of b" for a left hand.
    pub fn sign(&self) -> f32 {
        match self {
            Handedness::Left => -1.0,
            Handedness::Right => 1.0,
        }
    }
}

impl core::fmt::Display for Handedness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finger_table_chains_are_contiguous() {
        for (finger, chain) in FINGER_TABLE.iter() {
            assert_eq!(chain[0], 1 + finger.ordinal() * 4);
            for pair in chain.windows(2) {
                assert_eq!(pair[1], pair[0] + 1);
            }
        }
    }

    #[test]
    fn test_finger_table_order_matches_all() {
        let fingers: [Finger; 5] = FINGER_TABLE.map(|(finger, _)| finger);
        assert_eq!(fingers, Finger::ALL);
    }

    #[test]
    fn test_fingertips_are_chain_ends() {
        for (tip, (_, chain)) in FINGERTIPS.iter().zip(FINGER_TABLE.iter().skip(1)) {
            assert_eq!(*tip, chain[3]);
        }
    }

    #[test]
    fn test_handedness_labels() {
        assert_eq!(Handedness::from_label("Left"), Some(Handedness::Left));
        assert_eq!(Handedness::from_label("Right"), Some(Handedness::Right));
        assert_eq!(Handedness::from_label("right"), None);
        assert_eq!(Handedness::Right.as_str(), "Right");
    }

    #[test]
    fn test_handedness_sign() {
        assert_eq!(Handedness::Right.sign(), 1.0);
        assert_eq!(Handedness::Left.sign(), -1.0);
    }
}
