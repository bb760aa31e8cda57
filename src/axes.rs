//! Sensor axes alignment for different mounting orientations
//!
//! The e-compass expects X forward, Y left and Z up in body axes. Sensors
//! soldered in another orientation are remapped with [`axes_swap`] before
//! their readings reach the angle computation.
//!
//! # Example
//! ```
//! use nalgebra::Vector3;
//! use fixed_ecompass::{AxesAlignment, axes_swap};
//!
//! let sensor = Vector3::new(100, 200, 300);
//!
//! // Sensor mounted with Y pointing forward and X pointing right
//! let body = axes_swap(sensor, AxesAlignment::PyNxPz);
//!
//! assert_eq!(body, Vector3::new(200, -100, 300));
//! ```

use nalgebra::Vector3;

/// Axes alignment describing the sensor axes relative to the body axes.
///
/// The three letter pairs give the source of body X, Y and Z in turn: `P` or
/// `N` for the sign, then the sensor axis. `PyNxPz` reads body X from +Sensor
/// Y, body Y from -Sensor X and body Z from +Sensor Z. All 24 variants are
/// proper rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AxesAlignment {
    /// +X+Y+Z (identity)
    #[default]
    PxPyPz,
    /// +X-Z+Y
    PxNzPy,
    /// +X-Y-Z
    PxNyNz,
    /// +X+Z-Y
    PxPzNy,
    /// -X+Y-Z
    NxPyNz,
    /// -X+Z+Y
    NxPzPy,
    /// -X-Y+Z
    NxNyPz,
    /// -X-Z-Y
    NxNzNy,
    /// +Y-X+Z
    PyNxPz,
    /// +Y-Z-X
    PyNzNx,
    /// +Y+X-Z
    PyPxNz,
    /// +Y+Z+X
    PyPzPx,
    /// -Y+X+Z
    NyPxPz,
    /// -Y-Z+X
    NyNzPx,
    /// -Y-X-Z
    NyNxNz,
    /// -Y+Z-X
    NyPzNx,
    /// +Z+Y-X
    PzPyNx,
    /// +Z+X+Y
    PzPxPy,
    /// +Z-Y+X
    PzNyPx,
    /// +Z-X-Y
    PzNxNy,
    /// -Z+Y+X
    NzPyPx,
    /// -Z-X+Y
    NzNxPy,
    /// -Z-Y-X
    NzNyNx,
    /// -Z+X-Y
    NzPxNy,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Pos(usize),
    Neg(usize),
}

impl Source {
    #[inline]
    fn read(self, sensor: &Vector3<i16>) -> i16 {
        match self {
            Source::Pos(axis) => sensor[axis],
            Source::Neg(axis) => sensor[axis].saturating_neg(),
        }
    }
}

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

impl AxesAlignment {
    /// Every alignment, identity first
    pub const ALL: [AxesAlignment; 24] = [
        AxesAlignment::PxPyPz,
        AxesAlignment::PxNzPy,
        AxesAlignment::PxNyNz,
        AxesAlignment::PxPzNy,
        AxesAlignment::NxPyNz,
        AxesAlignment::NxPzPy,
        AxesAlignment::NxNyPz,
        AxesAlignment::NxNzNy,
        AxesAlignment::PyNxPz,
        AxesAlignment::PyNzNx,
        AxesAlignment::PyPxNz,
        AxesAlignment::PyPzPx,
        AxesAlignment::NyPxPz,
        AxesAlignment::NyNzPx,
        AxesAlignment::NyNxNz,
        AxesAlignment::NyPzNx,
        AxesAlignment::PzPyNx,
        AxesAlignment::PzPxPy,
        AxesAlignment::PzNyPx,
        AxesAlignment::PzNxNy,
        AxesAlignment::NzPyPx,
        AxesAlignment::NzNxPy,
        AxesAlignment::NzNyNx,
        AxesAlignment::NzPxNy,
    ];

    fn sources(self) -> [Source; 3] {
        use Source::{Neg, Pos};

        match self {
            AxesAlignment::PxPyPz => [Pos(X), Pos(Y), Pos(Z)],
            AxesAlignment::PxNzPy => [Pos(X), Neg(Z), Pos(Y)],
            AxesAlignment::PxNyNz => [Pos(X), Neg(Y), Neg(Z)],
            AxesAlignment::PxPzNy => [Pos(X), Pos(Z), Neg(Y)],
            AxesAlignment::NxPyNz => [Neg(X), Pos(Y), Neg(Z)],
            AxesAlignment::NxPzPy => [Neg(X), Pos(Z), Pos(Y)],
            AxesAlignment::NxNyPz => [Neg(X), Neg(Y), Pos(Z)],
            AxesAlignment::NxNzNy => [Neg(X), Neg(Z), Neg(Y)],
            AxesAlignment::PyNxPz => [Pos(Y), Neg(X), Pos(Z)],
            AxesAlignment::PyNzNx => [Pos(Y), Neg(Z), Neg(X)],
            AxesAlignment::PyPxNz => [Pos(Y), Pos(X), Neg(Z)],
            AxesAlignment::PyPzPx => [Pos(Y), Pos(Z), Pos(X)],
            AxesAlignment::NyPxPz => [Neg(Y), Pos(X), Pos(Z)],
            AxesAlignment::NyNzPx => [Neg(Y), Neg(Z), Pos(X)],
            AxesAlignment::NyNxNz => [Neg(Y), Neg(X), Neg(Z)],
            AxesAlignment::NyPzNx => [Neg(Y), Pos(Z), Neg(X)],
            AxesAlignment::PzPyNx => [Pos(Z), Pos(Y), Neg(X)],
            AxesAlignment::PzPxPy => [Pos(Z), Pos(X), Pos(Y)],
            AxesAlignment::PzNyPx => [Pos(Z), Neg(Y), Pos(X)],
            AxesAlignment::PzNxNy => [Pos(Z), Neg(X), Neg(Y)],
            AxesAlignment::NzPyPx => [Neg(Z), Pos(Y), Pos(X)],
            AxesAlignment::NzNxPy => [Neg(Z), Neg(X), Pos(Y)],
            AxesAlignment::NzNyNx => [Neg(Z), Neg(Y), Neg(X)],
            AxesAlignment::NzPxNy => [Neg(Z), Pos(X), Neg(Y)],
        }
    }
}

/// Remaps a sensor reading from sensor axes to body axes.
///
/// Negated components saturate, so `-32768` becomes `32767`.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use fixed_ecompass::{AxesAlignment, axes_swap};
///
/// // Sensor mounted with Z pointing forward and X pointing down
/// let body = axes_swap(Vector3::new(10, 20, 30), AxesAlignment::PzPyNx);
/// assert_eq!(body, Vector3::new(30, 20, -10));
/// ```
#[inline]
pub fn axes_swap(sensor: Vector3<i16>, alignment: AxesAlignment) -> Vector3<i16> {
    let [x, y, z] = alignment.sources().map(|source| source.read(&sensor));
    Vector3::new(x, y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_alignment() {
        let sensor = Vector3::new(1, -2, 3);
        assert_eq!(axes_swap(sensor, AxesAlignment::PxPyPz), sensor);
    }

    #[test]
    fn test_specific_alignments() {
        let sensor = Vector3::new(1, 2, 3);

        assert_eq!(axes_swap(sensor, AxesAlignment::PxNzPy), Vector3::new(1, -3, 2));
        assert_eq!(axes_swap(sensor, AxesAlignment::PyNxPz), Vector3::new(2, -1, 3));
        assert_eq!(axes_swap(sensor, AxesAlignment::NxNyPz), Vector3::new(-1, -2, 3));
        assert_eq!(axes_swap(sensor, AxesAlignment::PzPxPy), Vector3::new(3, 1, 2));
        assert_eq!(axes_swap(sensor, AxesAlignment::NzPxNy), Vector3::new(-3, 1, -2));
    }

    #[test]
    fn test_all_alignments_are_permutations() {
        let sensor = Vector3::new(1, 2, 3);
        for alignment in AxesAlignment::ALL {
            let body = axes_swap(sensor, alignment);
            let mut magnitudes = [body.x.abs(), body.y.abs(), body.z.abs()];
            magnitudes.sort_unstable();
            assert_eq!(magnitudes, [1, 2, 3], "{:?} lost an axis", alignment);
        }
    }

    #[test]
    fn test_all_alignments_are_rotations() {
        // A proper rotation maps the right-handed basis onto a right-handed basis
        for alignment in AxesAlignment::ALL {
            let ex = axes_swap(Vector3::new(1, 0, 0), alignment);
            let ey = axes_swap(Vector3::new(0, 1, 0), alignment);
            let ez = axes_swap(Vector3::new(0, 0, 1), alignment);
            assert_eq!(ex.cross(&ey), ez, "{:?} is a reflection", alignment);
        }
    }

    #[test]
    fn test_negation_saturates() {
        let sensor = Vector3::new(i16::MIN, 0, i16::MIN);
        assert_eq!(
            axes_swap(sensor, AxesAlignment::NxNyPz),
            Vector3::new(i16::MAX, 0, i16::MIN)
        );
    }

    #[test]
    fn test_inverse_round_trip() {
        let inverse_pairs = [
            (AxesAlignment::PyNxPz, AxesAlignment::NyPxPz), // 90° about Z
            (AxesAlignment::NxNyPz, AxesAlignment::NxNyPz), // 180° about Z
            (AxesAlignment::PxNzPy, AxesAlignment::PxPzNy), // 90° about X
            (AxesAlignment::PzPyNx, AxesAlignment::NzPyPx), // 90° about Y
        ];

        let sensor = Vector3::new(-5, 7, 11);
        for (forward, inverse) in inverse_pairs {
            let recovered = axes_swap(axes_swap(sensor, forward), inverse);
            assert_eq!(recovered, sensor, "{:?} then {:?}", forward, inverse);
        }
    }
}
