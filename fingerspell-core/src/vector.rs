#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A landmark position or a 3D direction between two landmarks
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    pub fn dot(&self, other: &Point3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Point3) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit vector in the same direction, or the zero vector when there is no direction
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            *self / mag
        } else {
            Self::zero()
        }
    }

    pub fn distance(&self, other: &Point3) -> f32 {
        displacement(*self, *other).magnitude()
    }
}

impl core::ops::Sub for Point3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl core::ops::Div<f32> for Point3 {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

/// Vector pointing from `a` to `b`
pub fn displacement(a: Point3, b: Point3) -> Point3 {
    b - a
}

pub fn magnitude(v: Point3) -> f32 {
    v.magnitude()
}

pub fn dot(v1: Point3, v2: Point3) -> f32 {
    v1.dot(&v2)
}

pub fn cross(v1: Point3, v2: Point3) -> Point3 {
    v1.cross(&v2)
}

pub fn normalize(v: Point3) -> Point3 {
    v.normalize()
}

pub fn distance(a: Point3, b: Point3) -> f32 {
    a.distance(&b)
}

/// Angle between two directions in degrees, within `[0, 180]`.
///
/// A zero-length input has no direction; it is reported as no rotation (`0`).
/// The cosine is computed in `f64` so squared components of any finite `f32`
/// input stay finite.
pub fn angle_between(v1: Point3, v2: Point3) -> f32 {
    let a = [v1.x as f64, v1.y as f64, v1.z as f64];
    let b = [v2.x as f64, v2.y as f64, v2.z as f64];
    let dot: f64 = a.iter().zip(&b).map(|(p, q)| p * q).sum();
    let mag = libm::sqrt(a.iter().map(|p| p * p).sum()) * libm::sqrt(b.iter().map(|q| q * q).sum());
    if mag == 0.0 {
        return 0.0;
    }

    // Rounding can push the cosine just outside the acos domain
    let cos_angle = (dot / mag).clamp(-1.0, 1.0);
    libm::acos(cos_angle).to_degrees() as f32
}
