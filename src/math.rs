//! Fixed-point arithmetic kernels for the e-compass
//!
//! Every kernel runs in 16/32-bit integer arithmetic with a fixed number of
//! binary-search rounds, so execution time does not depend on the input.
//! Ratios and trig values use the Q15 format: `32767` stands for `0.99997`.

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Number of centi-degrees in one degree
pub const CENTIDEGREES_PER_DEGREE: i16 = 100;

/// Fifth order polynomial coefficients for `atan` on [0, 1], 0.05° max error
pub const K1: i32 = 5701;
pub const K2: i32 = -1645;
pub const K3: i32 = 446;

/// Final binary-search step of [`divide`]
pub const MIN_DELTA_DIV: i16 = 1;
/// Final binary-search step of [`trig`]
pub const MIN_DELTA_TRIG: i16 = 1;

/// First binary-search step, 0.5 in Q15
const INITIAL_DELTA: i16 = 16384;

/// Operands are doubled while both stay below this value
const BOOST_LIMIT: i16 = 16384;

/// Fixed-point ratio `iy / ix` in Q15
///
/// Requires `0 <= iy <= ix` and `ix > 0`. The result lies in `[0, 32767]`
/// and approximates `32768 * iy / ix`, saturating at `32767` when the
/// operands are equal.
///
/// Both operands are first boosted towards the top of the 16-bit range to
/// limit quantization, then the quotient is found bit by bit in 15 rounds,
/// solving `ir * ix = iy` without a hardware divide.
///
/// A zero or negative denominator yields `0` when `iy <= 0` and `32767`
/// otherwise.
///
/// # Example
/// ```
/// use fixed_ecompass::math::divide;
///
/// let half = divide(1, 2);
/// assert!((half - 16384).abs() <= 1);
/// ```
pub fn divide(iy: i16, ix: i16) -> i16 {
    debug_assert!(iy >= 0, "divide numerator must be non-negative");
    debug_assert!(iy <= ix, "divide numerator must not exceed denominator");

    if ix <= 0 {
        return if iy <= 0 { 0 } else { i16::MAX };
    }

    let (mut iy, mut ix) = (iy.max(0), ix);
    while ix < BOOST_LIMIT && iy < BOOST_LIMIT {
        ix += ix;
        iy += iy;
    }

    let mut ratio: i16 = 0;
    let mut delta = INITIAL_DELTA;
    while delta >= MIN_DELTA_DIV {
        // ratio never has bits at or below delta set, so the sum stays in range
        let candidate = i32::from(ratio + delta);
        if (candidate * i32::from(ix)) >> 15 <= i32::from(iy) {
            ratio += delta;
        }
        delta >>= 1;
    }

    ratio
}

/// `100 * atan(iy / ix)` in degrees for non-negative operands
///
/// Returns centi-degrees in `[0, 9000]`. The ratio of the smaller to the
/// larger operand feeds a fifth order odd polynomial; above 45° the result is
/// reflected as `9000 - angle`.
///
/// # Example
/// ```
/// use fixed_ecompass::math::atan_deg;
///
/// assert_eq!(atan_deg(0, 100), 0);
/// assert_eq!(atan_deg(100, 0), 9000);
/// assert!((atan_deg(500, 500) - 4500).abs() <= 5);
/// ```
pub fn atan_deg(iy: i16, ix: i16) -> i16 {
    debug_assert!(iy >= 0 && ix >= 0, "atan_deg operands must be non-negative");

    if ix == 0 && iy == 0 {
        return 0;
    }
    if ix == 0 {
        return 9000;
    }

    let ratio = i32::from(if iy <= ix {
        divide(iy, ix)
    } else {
        divide(ix, iy)
    });

    // r, r^3 and r^5 terms; the >> 5 pre-shifts keep the products within i32
    let reduced = ratio >> 5;
    let mut angle = K1 * ratio;
    let mut term = reduced * reduced * reduced;
    angle += (term >> 15) * K2;
    term = (term >> 20) * reduced * reduced;
    angle += (term >> 15) * K3;
    angle >>= 15;

    if iy > ix {
        angle = 9000 - angle;
    }

    angle.clamp(0, 9000) as i16
}

/// `100 * atan2(iy, ix)` in degrees over all four quadrants
///
/// Returns centi-degrees in `(-18000, 18000]`. An input of `-32768` is
/// treated as `-32767` so that it can be negated.
///
/// # Example
/// ```
/// use fixed_ecompass::math::atan2_deg;
///
/// assert_eq!(atan2_deg(0, 1000), 0);
/// assert_eq!(atan2_deg(1000, 0), 9000);
/// assert_eq!(atan2_deg(0, -1000), 18000);
/// assert_eq!(atan2_deg(-1000, 0), -9000);
/// ```
pub fn atan2_deg(iy: i16, ix: i16) -> i16 {
    let iy = iy.max(-i16::MAX);
    let ix = ix.max(-i16::MAX);

    match (ix >= 0, iy >= 0) {
        // 0 to 90 degrees
        (true, true) => atan_deg(iy, ix),
        // 90 to 180 degrees
        (false, true) => 18000 - atan_deg(iy, -ix),
        // -180 to -90 degrees
        (false, false) => -18000 + atan_deg(-iy, -ix),
        // -90 to 0 degrees
        (true, false) => -atan_deg(-iy, ix),
    }
}

/// Q15 value of `ix / sqrt(ix^2 + iy^2)`
///
/// Called with `(opposite, adjacent)` this is the sine, with
/// `(adjacent, opposite)` the cosine, of the angle between the vector and the
/// `iy` axis. The result carries the sign of `ix` and lies in
/// `[-32767, 32767]`.
///
/// The kernel solves `ir^2 * (ix^2 + iy^2) = ix^2` by the same 15-round
/// binary search as [`divide`], so no square root is taken. A zero vector is
/// treated as `(1, 1)`.
///
/// # Example
/// ```
/// use fixed_ecompass::math::trig;
///
/// // sin(90°) and cos(90°) for a vector along the first axis
/// assert_eq!(trig(1000, 0), 32767);
/// assert!(trig(0, 1000) < 200);
/// ```
pub fn trig(ix: i16, iy: i16) -> i16 {
    let (ix, iy) = if ix == 0 && iy == 0 { (1, 1) } else { (ix, iy) };
    let ix = ix.max(-i16::MAX);
    let iy = iy.max(-i16::MAX);

    let negative = ix < 0;
    let mut ix = ix.abs();
    let mut iy = iy.abs();
    while ix < BOOST_LIMIT && iy < BOOST_LIMIT {
        ix += ix;
        iy += iy;
    }

    // ix^2 <= 32767^2 and ix^2 + iy^2 <= 2 * 32767^2, both fit in u32
    let ix_sq = u32::from(ix.unsigned_abs()).pow(2);
    let hyp_sq = ix_sq + u32::from(iy.unsigned_abs()).pow(2);

    let mut ratio: i16 = 0;
    let mut delta = INITIAL_DELTA;
    while delta >= MIN_DELTA_TRIG {
        let candidate = u32::from((ratio + delta).unsigned_abs());
        if ((candidate * candidate) >> 15) * (hyp_sq >> 15) <= ix_sq {
            ratio += delta;
        }
        delta >>= 1;
    }

    if negative { -ratio } else { ratio }
}

/// Narrow a Q15 product back to `i16`, saturating at the type bounds
#[inline]
pub(crate) fn narrow_q15(value: i32) -> i16 {
    (value >> 15).clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
