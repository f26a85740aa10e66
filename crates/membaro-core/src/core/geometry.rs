use nalgebra::Vector3;

/// The three edge vectors of the periodic simulation box, in reduced form:
/// `a` along x, `b` in the xy plane, `c` anywhere. Volume and cross-sectional
/// area are read off the diagonal elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxVectors {
    pub a: Vector3<f64>,
    pub b: Vector3<f64>,
    pub c: Vector3<f64>,
}

impl BoxVectors {
    pub fn new(a: Vector3<f64>, b: Vector3<f64>, c: Vector3<f64>) -> Self {
        Self { a, b, c }
    }

    /// An orthorhombic box with the given edge lengths.
    pub fn from_lengths(lx: f64, ly: f64, lz: f64) -> Self {
        Self {
            a: Vector3::new(lx, 0.0, 0.0),
            b: Vector3::new(0.0, ly, 0.0),
            c: Vector3::new(0.0, 0.0, lz),
        }
    }

    /// Box volume, the product of the diagonal elements.
    pub fn volume(&self) -> f64 {
        self.a.x * self.b.y * self.c.z
    }

    /// Cross-sectional area of the xy plane (the membrane plane).
    pub fn xy_area(&self) -> f64 {
        self.a.x * self.b.y
    }

    /// Each edge vector multiplied by its per-axis length scale factor.
    pub fn scaled(&self, scale: &Vector3<f64>) -> Self {
        Self {
            a: self.a * scale.x,
            b: self.b * scale.y,
            c: self.c * scale.z,
        }
    }
}
