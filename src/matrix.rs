//! The 3x3 transform matrix.
//!
//! [`Matrix`] holds an affine or perspective transform over user-space
//! coordinates.  It classifies itself into a [`TypeMask`] (translate, scale,
//! skew/rotate, perspective, rect-preserving) so that point mapping can
//! dispatch to a specialized kernel, and supports composition, inversion,
//! and rectangle/point/vector mapping.
//!
//! The classification is cached and recomputed lazily: raw element writes
//! mark it unknown, and the next query recomputes it from the element
//! values, so derived dispatch information is never stale.

use std::cell::Cell;

use bitflags::bitflags;

use crate::error::GeometryError;
use crate::float_eq::SCALAR_TOLERANCE;
use crate::point::Point;
use crate::rect::Rect;

/// Index of the horizontal scale factor, for [`Matrix::value`]/[`Matrix::set_value`].
pub const MSCALE_X: usize = 0;
/// Index of the horizontal skew factor.
pub const MSKEW_X: usize = 1;
/// Index of the horizontal translation.
pub const MTRANS_X: usize = 2;
/// Index of the vertical skew factor.
pub const MSKEW_Y: usize = 3;
/// Index of the vertical scale factor.
pub const MSCALE_Y: usize = 4;
/// Index of the vertical translation.
pub const MTRANS_Y: usize = 5;
/// Index of the first perspective factor.
pub const MPERSP_0: usize = 6;
/// Index of the second perspective factor.
pub const MPERSP_1: usize = 7;
/// Index of the perspective bias.
pub const MPERSP_2: usize = 8;

bitflags! {
    /// Classification of the transform a matrix currently represents.
    ///
    /// An empty mask is the identity.  `RECT_STAYS_RECT` is reported
    /// through [`Matrix::rect_stays_rect`] rather than [`Matrix::get_type`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TypeMask: u8 {
        /// The matrix translates.
        const TRANSLATE = 0x01;
        /// The matrix scales in X or Y.
        const SCALE = 0x02;
        /// The matrix skews or rotates.
        const AFFINE = 0x04;
        /// The matrix has perspective components.
        const PERSPECTIVE = 0x08;
        /// The matrix maps axis-aligned rectangles to axis-aligned
        /// rectangles: identity, scales, translations, and rotations by
        /// multiples of 90 degrees.
        const RECT_STAYS_RECT = 0x10;
    }
}

// Cached-mask latch: when set, the stored mask is stale and must be
// recomputed before use.
const UNKNOWN_MASK: u8 = 0x80;

// sin/cos of angles that are exact multiples of 90 degrees come back on the
// order of 1e-16 rather than exact zero; the classification needs exact
// zeros to recognize those rotations as rect-preserving.
fn snap_trig(v: f64) -> f64 {
    if v.abs() < 1e-15 {
        0.0
    } else {
        v
    }
}

fn rowcol3(row: &[f64; 9], r: usize, col: &[f64; 9], c: usize) -> f64 {
    row[r] * col[c] + row[r + 1] * col[c + 3] + row[r + 2] * col[c + 6]
}

// Keeps repeated perspective products well-conditioned.
fn normalize_perspective(mat: &mut [f64; 9]) {
    if mat[MPERSP_2].abs() > 1.0 {
        for v in mat.iter_mut() {
            *v *= 0.5;
        }
    }
}

fn inv_determinant(mat: &[f64; 9], perspective: bool) -> Option<f64> {
    let det = if perspective {
        mat[MSCALE_X] * (mat[MSCALE_Y] * mat[MPERSP_2] - mat[MTRANS_Y] * mat[MPERSP_1])
            + mat[MSKEW_X] * (mat[MTRANS_Y] * mat[MPERSP_0] - mat[MSKEW_Y] * mat[MPERSP_2])
            + mat[MTRANS_X] * (mat[MSKEW_Y] * mat[MPERSP_1] - mat[MSCALE_Y] * mat[MPERSP_0])
    } else {
        mat[MSCALE_X] * mat[MSCALE_Y] - mat[MSKEW_X] * mat[MSKEW_Y]
    };

    // The determinant is on the order of the cube of the elements, so it is
    // compared against the cube of the nearly-zero tolerance.
    if det.abs() < SCALAR_TOLERANCE * SCALAR_TOLERANCE * SCALAR_TOLERANCE {
        None
    } else {
        Some(1.0 / det)
    }
}

/// A 3x3 row-major transform matrix.
///
/// The default value is the identity.  All `set_*` operations overwrite the
/// whole matrix to represent only that transform; `pre_*`/`post_*`
/// operations compose with the current value.
#[derive(Debug, Clone)]
pub struct Matrix {
    mat: [f64; 9],
    type_mask: Cell<u8>,
}

impl Default for Matrix {
    #[inline]
    fn default() -> Matrix {
        Matrix::new()
    }
}

impl PartialEq for Matrix {
    /// Two matrices are equal when their elements are equal, regardless of
    /// the cached classification state.
    fn eq(&self, other: &Matrix) -> bool {
        self.mat == other.mat
    }
}

impl Matrix {
    /// Creates an identity matrix.
    pub fn new() -> Matrix {
        Matrix {
            mat: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
            type_mask: Cell::new(TypeMask::RECT_STAYS_RECT.bits()),
        }
    }

    /// Resets the matrix to the identity.
    pub fn reset(&mut self) {
        *self = Matrix::new();
    }

    /// Copies the elements and classification of `src` into `self`.
    pub fn set_from(&mut self, src: &Matrix) {
        self.mat = src.mat;
        self.type_mask.set(src.type_mask.get());
    }

    fn mark_unknown(&self) {
        self.type_mask.set(UNKNOWN_MASK);
    }

    fn stored_mask(&self) -> u8 {
        if self.type_mask.get() & UNKNOWN_MASK != 0 {
            self.type_mask.set(self.compute_type_mask());
        }
        self.type_mask.get()
    }

    fn compute_type_mask(&self) -> u8 {
        let m = &self.mat;
        let mut mask = TypeMask::empty();

        if m[MPERSP_0] != 0.0 || m[MPERSP_1] != 0.0 || m[MPERSP_2] != 1.0 {
            mask |= TypeMask::PERSPECTIVE;
        }

        if m[MTRANS_X] != 0.0 || m[MTRANS_Y] != 0.0 {
            mask |= TypeMask::TRANSLATE;
        }

        if m[MSKEW_X] != 0.0 || m[MSKEW_Y] != 0.0 {
            mask |= TypeMask::AFFINE;
        }

        if m[MSCALE_X] != 1.0 || m[MSCALE_Y] != 1.0 {
            mask |= TypeMask::SCALE;
        }

        if !mask.contains(TypeMask::PERSPECTIVE) {
            let m00 = m[MSCALE_X] != 0.0;
            let m01 = m[MSKEW_X] != 0.0;
            let m10 = m[MSKEW_Y] != 0.0;
            let m11 = m[MSCALE_Y] != 0.0;

            // rect-preserving iff the primary diagonal is wholly nonzero and
            // the secondary wholly zero, or vice versa
            if (m00 && m11 && !m01 && !m10) || (!m00 && !m11 && m01 && m10) {
                mask |= TypeMask::RECT_STAYS_RECT;
            }
        }

        mask.bits()
    }

    /// Returns the transform classes this matrix currently represents.
    ///
    /// An empty mask means the matrix is the identity.
    pub fn get_type(&self) -> TypeMask {
        TypeMask::from_bits_truncate(self.stored_mask() & 0x0f)
    }

    /// Returns true if the matrix is the identity.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.get_type().is_empty()
    }

    /// Returns true if the matrix maps any axis-aligned rectangle to
    /// another axis-aligned rectangle.
    pub fn rect_stays_rect(&self) -> bool {
        TypeMask::from_bits_truncate(self.stored_mask()).contains(TypeMask::RECT_STAYS_RECT)
    }

    /// Returns true if the matrix has perspective components.
    #[inline]
    pub fn has_perspective(&self) -> bool {
        self.get_type().contains(TypeMask::PERSPECTIVE)
    }

    /// Returns the raw element at `index` (one of the `M*` constants).
    #[inline]
    pub fn value(&self, index: usize) -> f64 {
        self.mat[index]
    }

    /// Overwrites the raw element at `index` (one of the `M*` constants).
    #[inline]
    pub fn set_value(&mut self, index: usize, value: f64) {
        self.mat[index] = value;
        self.mark_unknown();
    }

    pub fn scale_x(&self) -> f64 {
        self.mat[MSCALE_X]
    }

    pub fn scale_y(&self) -> f64 {
        self.mat[MSCALE_Y]
    }

    pub fn skew_x(&self) -> f64 {
        self.mat[MSKEW_X]
    }

    pub fn skew_y(&self) -> f64 {
        self.mat[MSKEW_Y]
    }

    pub fn translate_x(&self) -> f64 {
        self.mat[MTRANS_X]
    }

    pub fn translate_y(&self) -> f64 {
        self.mat[MTRANS_Y]
    }

    pub fn persp_x(&self) -> f64 {
        self.mat[MPERSP_0]
    }

    pub fn persp_y(&self) -> f64 {
        self.mat[MPERSP_1]
    }

    pub fn set_scale_x(&mut self, v: f64) {
        self.set_value(MSCALE_X, v);
    }

    pub fn set_scale_y(&mut self, v: f64) {
        self.set_value(MSCALE_Y, v);
    }

    pub fn set_skew_x(&mut self, v: f64) {
        self.set_value(MSKEW_X, v);
    }

    pub fn set_skew_y(&mut self, v: f64) {
        self.set_value(MSKEW_Y, v);
    }

    pub fn set_translate_x(&mut self, v: f64) {
        self.set_value(MTRANS_X, v);
    }

    pub fn set_translate_y(&mut self, v: f64) {
        self.set_value(MTRANS_Y, v);
    }

    pub fn set_persp_x(&mut self, v: f64) {
        self.set_value(MPERSP_0, v);
    }

    pub fn set_persp_y(&mut self, v: f64) {
        self.set_value(MPERSP_1, v);
    }

    /// Copies the 9 elements into `values`.
    ///
    /// Fails if `values` holds fewer than 9 elements.
    pub fn get_values(&self, values: &mut [f64]) -> Result<(), GeometryError> {
        if values.len() < 9 {
            return Err(GeometryError::MatrixValues(values.len()));
        }
        values[..9].copy_from_slice(&self.mat);
        Ok(())
    }

    /// Overwrites the 9 elements from `values`.
    ///
    /// Fails if `values` holds fewer than 9 elements.
    pub fn set_values(&mut self, values: &[f64]) -> Result<(), GeometryError> {
        if values.len() < 9 {
            return Err(GeometryError::MatrixValues(values.len()));
        }
        self.mat.copy_from_slice(&values[..9]);
        self.mark_unknown();
        Ok(())
    }

    /// Sets the matrix to translate by `(dx, dy)`.
    pub fn set_translate(&mut self, dx: f64, dy: f64) {
        if dx != 0.0 || dy != 0.0 {
            self.mat = [1.0, 0.0, dx, 0.0, 1.0, dy, 0.0, 0.0, 1.0];
            self.type_mask
                .set((TypeMask::TRANSLATE | TypeMask::RECT_STAYS_RECT).bits());
        } else {
            self.reset();
        }
    }

    /// Sets the matrix to scale by `(sx, sy)` about the origin.
    pub fn set_scale(&mut self, sx: f64, sy: f64) {
        self.mat = [sx, 0.0, 0.0, 0.0, sy, 0.0, 0.0, 0.0, 1.0];
        self.type_mask
            .set((TypeMask::SCALE | TypeMask::RECT_STAYS_RECT).bits());
    }

    /// Sets the matrix to scale by `(sx, sy)` with the pivot point
    /// `(px, py)` remaining fixed.
    pub fn set_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        self.mat = [
            sx,
            0.0,
            px - sx * px,
            0.0,
            sy,
            py - sy * py,
            0.0,
            0.0,
            1.0,
        ];
        self.type_mask
            .set((TypeMask::SCALE | TypeMask::TRANSLATE | TypeMask::RECT_STAYS_RECT).bits());
    }

    /// Sets the matrix to rotate by `degrees` about the origin.
    pub fn set_rotate(&mut self, degrees: f64) {
        let (s, c) = degrees.to_radians().sin_cos();
        self.set_sin_cos(s, c);
    }

    /// Sets the matrix to rotate by `degrees` about `(px, py)`.
    pub fn set_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let (s, c) = degrees.to_radians().sin_cos();
        self.set_sin_cos_about(s, c, px, py);
    }

    /// Sets the matrix to rotate by the given sine and cosine values about
    /// the origin.
    pub fn set_sin_cos(&mut self, sin_v: f64, cos_v: f64) {
        let sin_v = snap_trig(sin_v);
        let cos_v = snap_trig(cos_v);

        self.mat = [cos_v, -sin_v, 0.0, sin_v, cos_v, 0.0, 0.0, 0.0, 1.0];
        self.mark_unknown();
    }

    /// Sets the matrix to rotate by the given sine and cosine values about
    /// `(px, py)`.
    pub fn set_sin_cos_about(&mut self, sin_v: f64, cos_v: f64, px: f64, py: f64) {
        let sin_v = snap_trig(sin_v);
        let cos_v = snap_trig(cos_v);
        let one_minus_cos = 1.0 - cos_v;

        self.mat = [
            cos_v,
            -sin_v,
            sin_v * py + one_minus_cos * px,
            sin_v,
            cos_v,
            -sin_v * px + one_minus_cos * py,
            0.0,
            0.0,
            1.0,
        ];
        self.mark_unknown();
    }

    /// Sets the matrix to skew by `(kx, ky)` about the origin.
    pub fn set_skew(&mut self, kx: f64, ky: f64) {
        self.mat = [1.0, kx, 0.0, ky, 1.0, 0.0, 0.0, 0.0, 1.0];
        self.mark_unknown();
    }

    /// Sets the matrix to skew by `(kx, ky)` about `(px, py)`.
    pub fn set_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        self.mat = [1.0, kx, -kx * py, ky, 1.0, -ky * px, 0.0, 0.0, 1.0];
        self.mark_unknown();
    }

    /// Returns the product `a * b`.
    ///
    /// When either operand is the identity, the other is copied bit-for-bit
    /// instead of multiplied, avoiding float round-off.
    #[must_use]
    pub fn concat(a: &Matrix, b: &Matrix) -> Matrix {
        if a.is_identity() {
            return b.clone();
        }
        if b.is_identity() {
            return a.clone();
        }

        let mut out = Matrix::new();

        if (a.get_type() | b.get_type()).contains(TypeMask::PERSPECTIVE) {
            out.mat[MSCALE_X] = rowcol3(&a.mat, 0, &b.mat, 0);
            out.mat[MSKEW_X] = rowcol3(&a.mat, 0, &b.mat, 1);
            out.mat[MTRANS_X] = rowcol3(&a.mat, 0, &b.mat, 2);
            out.mat[MSKEW_Y] = rowcol3(&a.mat, 3, &b.mat, 0);
            out.mat[MSCALE_Y] = rowcol3(&a.mat, 3, &b.mat, 1);
            out.mat[MTRANS_Y] = rowcol3(&a.mat, 3, &b.mat, 2);
            out.mat[MPERSP_0] = rowcol3(&a.mat, 6, &b.mat, 0);
            out.mat[MPERSP_1] = rowcol3(&a.mat, 6, &b.mat, 1);
            out.mat[MPERSP_2] = rowcol3(&a.mat, 6, &b.mat, 2);

            normalize_perspective(&mut out.mat);
        } else {
            out.mat[MSCALE_X] =
                a.mat[MSCALE_X] * b.mat[MSCALE_X] + a.mat[MSKEW_X] * b.mat[MSKEW_Y];
            out.mat[MSKEW_X] = a.mat[MSCALE_X] * b.mat[MSKEW_X] + a.mat[MSKEW_X] * b.mat[MSCALE_Y];
            out.mat[MTRANS_X] = a.mat[MSCALE_X] * b.mat[MTRANS_X]
                + a.mat[MSKEW_X] * b.mat[MTRANS_Y]
                + a.mat[MTRANS_X];

            out.mat[MSKEW_Y] = a.mat[MSKEW_Y] * b.mat[MSCALE_X] + a.mat[MSCALE_Y] * b.mat[MSKEW_Y];
            out.mat[MSCALE_Y] =
                a.mat[MSKEW_Y] * b.mat[MSKEW_X] + a.mat[MSCALE_Y] * b.mat[MSCALE_Y];
            out.mat[MTRANS_Y] = a.mat[MSKEW_Y] * b.mat[MTRANS_X]
                + a.mat[MSCALE_Y] * b.mat[MTRANS_Y]
                + a.mat[MTRANS_Y];

            out.mat[MPERSP_0] = 0.0;
            out.mat[MPERSP_1] = 0.0;
            out.mat[MPERSP_2] = 1.0;
        }

        out.mark_unknown();
        out
    }

    /// Sets the matrix to the concatenation `a * b`.
    pub fn set_concat(&mut self, a: &Matrix, b: &Matrix) {
        *self = Matrix::concat(a, b);
    }

    /// Preconcatenates: `M' = M * other`.  A no-op when `other` is the
    /// identity.
    pub fn pre_concat(&mut self, other: &Matrix) {
        if !other.is_identity() {
            *self = Matrix::concat(self, other);
        }
    }

    /// Postconcatenates: `M' = other * M`.  A no-op when `other` is the
    /// identity.
    pub fn post_concat(&mut self, other: &Matrix) {
        if !other.is_identity() {
            *self = Matrix::concat(other, self);
        }
    }

    /// Preconcatenates a translation: `M' = M * T(dx, dy)`.
    pub fn pre_translate(&mut self, dx: f64, dy: f64) {
        if self.has_perspective() {
            let mut t = Matrix::new();
            t.set_translate(dx, dy);
            self.pre_concat(&t);
            return;
        }

        if dx != 0.0 || dy != 0.0 {
            self.mat[MTRANS_X] += self.mat[MSCALE_X] * dx + self.mat[MSKEW_X] * dy;
            self.mat[MTRANS_Y] += self.mat[MSKEW_Y] * dx + self.mat[MSCALE_Y] * dy;
            self.mark_unknown();
        }
    }

    /// Postconcatenates a translation: `M' = T(dx, dy) * M`.
    pub fn post_translate(&mut self, dx: f64, dy: f64) {
        if self.has_perspective() {
            let mut t = Matrix::new();
            t.set_translate(dx, dy);
            self.post_concat(&t);
            return;
        }

        if dx != 0.0 || dy != 0.0 {
            self.mat[MTRANS_X] += dx;
            self.mat[MTRANS_Y] += dy;
            self.mark_unknown();
        }
    }

    /// Preconcatenates a scale: `M' = M * S(sx, sy)`.
    pub fn pre_scale(&mut self, sx: f64, sy: f64) {
        let mut m = Matrix::new();
        m.set_scale(sx, sy);
        self.pre_concat(&m);
    }

    /// Preconcatenates a pivoted scale: `M' = M * S(sx, sy, px, py)`.
    pub fn pre_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        let mut m = Matrix::new();
        m.set_scale_about(sx, sy, px, py);
        self.pre_concat(&m);
    }

    /// Preconcatenates a rotation: `M' = M * R(degrees)`.
    pub fn pre_rotate(&mut self, degrees: f64) {
        let mut m = Matrix::new();
        m.set_rotate(degrees);
        self.pre_concat(&m);
    }

    /// Preconcatenates a pivoted rotation: `M' = M * R(degrees, px, py)`.
    pub fn pre_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let mut m = Matrix::new();
        m.set_rotate_about(degrees, px, py);
        self.pre_concat(&m);
    }

    /// Preconcatenates a skew: `M' = M * K(kx, ky)`.
    pub fn pre_skew(&mut self, kx: f64, ky: f64) {
        let mut m = Matrix::new();
        m.set_skew(kx, ky);
        self.pre_concat(&m);
    }

    /// Preconcatenates a pivoted skew: `M' = M * K(kx, ky, px, py)`.
    pub fn pre_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        let mut m = Matrix::new();
        m.set_skew_about(kx, ky, px, py);
        self.pre_concat(&m);
    }

    /// Postconcatenates a scale: `M' = S(sx, sy) * M`.
    pub fn post_scale(&mut self, sx: f64, sy: f64) {
        let mut m = Matrix::new();
        m.set_scale(sx, sy);
        self.post_concat(&m);
    }

    /// Postconcatenates a pivoted scale: `M' = S(sx, sy, px, py) * M`.
    pub fn post_scale_about(&mut self, sx: f64, sy: f64, px: f64, py: f64) {
        let mut m = Matrix::new();
        m.set_scale_about(sx, sy, px, py);
        self.post_concat(&m);
    }

    /// Postconcatenates a rotation: `M' = R(degrees) * M`.
    pub fn post_rotate(&mut self, degrees: f64) {
        let mut m = Matrix::new();
        m.set_rotate(degrees);
        self.post_concat(&m);
    }

    /// Postconcatenates a pivoted rotation: `M' = R(degrees, px, py) * M`.
    pub fn post_rotate_about(&mut self, degrees: f64, px: f64, py: f64) {
        let mut m = Matrix::new();
        m.set_rotate_about(degrees, px, py);
        self.post_concat(&m);
    }

    /// Postconcatenates a skew: `M' = K(kx, ky) * M`.
    pub fn post_skew(&mut self, kx: f64, ky: f64) {
        let mut m = Matrix::new();
        m.set_skew(kx, ky);
        self.post_concat(&m);
    }

    /// Postconcatenates a pivoted skew: `M' = K(kx, ky, px, py) * M`.
    pub fn post_skew_about(&mut self, kx: f64, ky: f64, px: f64, py: f64) {
        let mut m = Matrix::new();
        m.set_skew_about(kx, ky, px, py);
        self.post_concat(&m);
    }

    /// Returns the inverse of this matrix, or `None` if it is singular.
    ///
    /// Callers must not substitute any fallback for a `None`; a
    /// non-invertible matrix has no meaningful inverse.
    #[must_use]
    pub fn invert(&self) -> Option<Matrix> {
        let persp = self.has_perspective();
        let scale = inv_determinant(&self.mat, persp)?;
        let m = &self.mat;

        let mut inv = Matrix::new();

        if persp {
            inv.mat[MSCALE_X] = (m[MSCALE_Y] * m[MPERSP_2] - m[MTRANS_Y] * m[MPERSP_1]) * scale;
            inv.mat[MSKEW_X] = (m[MTRANS_X] * m[MPERSP_1] - m[MSKEW_X] * m[MPERSP_2]) * scale;
            inv.mat[MTRANS_X] = (m[MSKEW_X] * m[MTRANS_Y] - m[MTRANS_X] * m[MSCALE_Y]) * scale;

            inv.mat[MSKEW_Y] = (m[MTRANS_Y] * m[MPERSP_0] - m[MSKEW_Y] * m[MPERSP_2]) * scale;
            inv.mat[MSCALE_Y] = (m[MSCALE_X] * m[MPERSP_2] - m[MTRANS_X] * m[MPERSP_0]) * scale;
            inv.mat[MTRANS_Y] = (m[MTRANS_X] * m[MSKEW_Y] - m[MSCALE_X] * m[MTRANS_Y]) * scale;

            inv.mat[MPERSP_0] = (m[MSKEW_Y] * m[MPERSP_1] - m[MSCALE_Y] * m[MPERSP_0]) * scale;
            inv.mat[MPERSP_1] = (m[MSKEW_X] * m[MPERSP_0] - m[MSCALE_X] * m[MPERSP_1]) * scale;
            inv.mat[MPERSP_2] = (m[MSCALE_X] * m[MSCALE_Y] - m[MSKEW_X] * m[MSKEW_Y]) * scale;
        } else {
            inv.mat[MSCALE_X] = m[MSCALE_Y] * scale;
            inv.mat[MSKEW_X] = -m[MSKEW_X] * scale;
            inv.mat[MTRANS_X] = (m[MSKEW_X] * m[MTRANS_Y] - m[MSCALE_Y] * m[MTRANS_X]) * scale;

            inv.mat[MSKEW_Y] = -m[MSKEW_Y] * scale;
            inv.mat[MSCALE_Y] = m[MSCALE_X] * scale;
            inv.mat[MTRANS_Y] = (m[MSKEW_Y] * m[MTRANS_X] - m[MSCALE_X] * m[MTRANS_Y]) * scale;

            inv.mat[MPERSP_0] = 0.0;
            inv.mat[MPERSP_1] = 0.0;
            inv.mat[MPERSP_2] = 1.0;
        }

        inv.mark_unknown();
        Some(inv)
    }

    /// Maps the points in place through this matrix.
    pub fn map_points(&self, pts: &mut [Point]) {
        let mask = self.get_type();

        if mask.contains(TypeMask::PERSPECTIVE) {
            persp_pts(&self.mat, pts);
            return;
        }

        match mask & (TypeMask::TRANSLATE | TypeMask::SCALE | TypeMask::AFFINE) {
            m if m.is_empty() => {}
            m if m == TypeMask::TRANSLATE => trans_pts(&self.mat, pts),
            m if m == TypeMask::SCALE => scale_pts(&self.mat, pts),
            m if m == TypeMask::SCALE | TypeMask::TRANSLATE => scale_trans_pts(&self.mat, pts),
            m if m == TypeMask::AFFINE => rot_pts(&self.mat, pts),
            _ => rot_trans_pts(&self.mat, pts),
        }
    }

    /// Maps a single point through this matrix.
    pub fn map_point(&self, x: f64, y: f64) -> (f64, f64) {
        let mut pts = [Point::new(x, y)];
        self.map_points(&mut pts);
        (pts[0].x, pts[0].y)
    }

    /// Maps the direction vectors in place through this matrix.
    ///
    /// Unlike points, vectors are not affected by translation.  For a
    /// perspective matrix, the image of the origin is subtracted from each
    /// mapped point instead.
    pub fn map_vectors(&self, vecs: &mut [Point]) {
        if self.has_perspective() {
            let (ox, oy) = self.map_point(0.0, 0.0);
            for v in vecs.iter_mut() {
                let (x, y) = self.map_point(v.x, v.y);
                v.x = x - ox;
                v.y = y - oy;
            }
        } else {
            let mut tmp = self.clone();
            tmp.mat[MTRANS_X] = 0.0;
            tmp.mat[MTRANS_Y] = 0.0;
            tmp.type_mask
                .set(self.stored_mask() & !TypeMask::TRANSLATE.bits());
            tmp.map_points(vecs);
        }
    }

    /// Maps a single direction vector through this matrix.
    pub fn map_vector(&self, dx: f64, dy: f64) -> (f64, f64) {
        let mut vecs = [Point::new(dx, dy)];
        self.map_vectors(&mut vecs);
        (vecs[0].x, vecs[0].y)
    }

    /// Maps a rectangle through this matrix, returning the axis-aligned
    /// bounds of the mapped corners.
    ///
    /// The second return value is [`Matrix::rect_stays_rect`]: when false,
    /// the mapped quadrilateral was not itself a rectangle, though the
    /// returned rectangle still bounds it correctly.
    pub fn map_rect(&self, src: &Rect) -> (Rect, bool) {
        if self.rect_stays_rect() {
            let mut pts = [Point::new(src.x0, src.y0), Point::new(src.x1, src.y1)];
            self.map_points(&mut pts);

            let mut dst = Rect::new(pts[0].x, pts[0].y, pts[1].x, pts[1].y);
            dst.sort();
            (dst, true)
        } else {
            let mut quad = [
                Point::new(src.x0, src.y0),
                Point::new(src.x1, src.y0),
                Point::new(src.x1, src.y1),
                Point::new(src.x0, src.y1),
            ];
            self.map_points(&mut quad);

            let mut dst = Rect::new(quad[0].x, quad[0].y, quad[0].x, quad[0].y);
            for p in &quad[1..] {
                if p.x < dst.x0 {
                    dst.x0 = p.x;
                } else if p.x > dst.x1 {
                    dst.x1 = p.x;
                }
                if p.y < dst.y0 {
                    dst.y0 = p.y;
                } else if p.y > dst.y1 {
                    dst.y1 = p.y;
                }
            }
            (dst, false)
        }
    }

    /// Returns the mean radius of a circle of the given radius after
    /// mapping.  Under perspective, the circle is assumed centered at the
    /// origin.
    pub fn map_radius(&self, radius: f64) -> f64 {
        let mut vecs = [Point::new(radius, 0.0), Point::new(0.0, radius)];
        self.map_vectors(&mut vecs);

        let d0 = vecs[0].x.hypot(vecs[0].y);
        let d1 = vecs[1].x.hypot(vecs[1].y);
        (d0 * d1).sqrt()
    }

    /// Sets the matrix to the scale and translation that map `src` into
    /// `dst` under the given alignment policy.
    ///
    /// Returns false (and resets to the identity) when `src` is empty.
    pub fn set_rect_to_rect(&mut self, src: &Rect, dst: &Rect, stf: ScaleToFit) -> bool {
        if src.is_empty() {
            self.reset();
            return false;
        }

        if dst.is_empty() {
            self.mat = [0.0; 9];
            self.type_mask
                .set((TypeMask::SCALE | TypeMask::RECT_STAYS_RECT).bits());
        } else {
            let mut sx = dst.width() / src.width();
            let mut sy = dst.height() / src.height();
            let mut x_larger = false;

            if stf != ScaleToFit::Fill {
                if sx > sy {
                    x_larger = true;
                    sx = sy;
                } else {
                    sy = sx;
                }
            }

            let mut tx = dst.x0 - src.x0 * sx;
            let mut ty = dst.y0 - src.y0 * sy;
            if stf == ScaleToFit::Center || stf == ScaleToFit::End {
                let mut diff = if x_larger {
                    dst.width() - src.width() * sy
                } else {
                    dst.height() - src.height() * sy
                };

                if stf == ScaleToFit::Center {
                    diff /= 2.0;
                }

                if x_larger {
                    tx += diff;
                } else {
                    ty += diff;
                }
            }

            self.mat = [sx, 0.0, tx, 0.0, sy, ty, 0.0, 0.0, 0.0];
            self.type_mask.set(
                (TypeMask::SCALE | TypeMask::TRANSLATE | TypeMask::RECT_STAYS_RECT).bits(),
            );
        }

        // shared cleanup
        self.mat[MPERSP_2] = 1.0;
        true
    }

    /// Sets the matrix so that each `src` point maps to the corresponding
    /// `dst` point.  Handles 0 to 4 correspondences: 0 resets to identity,
    /// 1 translates, 2 rotates/scales/translates, 3 solves the exact
    /// affine, 4 solves the exact perspective mapping.
    ///
    /// Returns false, leaving the matrix untouched, when there are more
    /// than 4 points, the slices disagree in length, or the configuration
    /// is degenerate.
    pub fn set_poly_to_poly(&mut self, src: &[Point], dst: &[Point]) -> bool {
        let count = src.len();
        if count > 4 || dst.len() != count {
            return false;
        }

        if count == 0 {
            self.reset();
            return true;
        }

        if count == 1 {
            self.set_translate(dst[0].x - src[0].x, dst[0].y - src[0].y);
            return true;
        }

        let scale = match poly_to_point(src, count) {
            Some(s) => s,
            None => return false,
        };
        if scale.0.abs() < SCALAR_TOLERANCE || scale.1.abs() < SCALAR_TOLERANCE {
            return false;
        }

        let poly_proc: fn(&[Point], (f64, f64)) -> Option<Matrix> = match count {
            2 => poly2_proc,
            3 => poly3_proc,
            _ => poly4_proc,
        };

        let src_map = match poly_proc(src, scale) {
            Some(m) => m,
            None => return false,
        };

        let inverse = match src_map.invert() {
            Some(m) => m,
            None => return false,
        };

        let dst_map = match poly_proc(dst, scale) {
            Some(m) => m,
            None => return false,
        };

        *self = Matrix::concat(&dst_map, &inverse);
        true
    }
}

// Specialized per-point mapping kernels, selected by the type mask.

fn trans_pts(m: &[f64; 9], pts: &mut [Point]) {
    let tx = m[MTRANS_X];
    let ty = m[MTRANS_Y];
    for p in pts.iter_mut() {
        p.x += tx;
        p.y += ty;
    }
}

fn scale_pts(m: &[f64; 9], pts: &mut [Point]) {
    let mx = m[MSCALE_X];
    let my = m[MSCALE_Y];
    for p in pts.iter_mut() {
        p.x *= mx;
        p.y *= my;
    }
}

fn scale_trans_pts(m: &[f64; 9], pts: &mut [Point]) {
    let mx = m[MSCALE_X];
    let my = m[MSCALE_Y];
    let tx = m[MTRANS_X];
    let ty = m[MTRANS_Y];
    for p in pts.iter_mut() {
        p.x = p.x * mx + tx;
        p.y = p.y * my + ty;
    }
}

fn rot_pts(m: &[f64; 9], pts: &mut [Point]) {
    let mx = m[MSCALE_X];
    let my = m[MSCALE_Y];
    let kx = m[MSKEW_X];
    let ky = m[MSKEW_Y];
    for p in pts.iter_mut() {
        let (sx, sy) = (p.x, p.y);
        p.x = sx * mx + sy * kx;
        p.y = sx * ky + sy * my;
    }
}

fn rot_trans_pts(m: &[f64; 9], pts: &mut [Point]) {
    let mx = m[MSCALE_X];
    let my = m[MSCALE_Y];
    let kx = m[MSKEW_X];
    let ky = m[MSKEW_Y];
    let tx = m[MTRANS_X];
    let ty = m[MTRANS_Y];
    for p in pts.iter_mut() {
        let (sx, sy) = (p.x, p.y);
        p.x = sx * mx + sy * kx + tx;
        p.y = sx * ky + sy * my + ty;
    }
}

fn persp_pts(m: &[f64; 9], pts: &mut [Point]) {
    for p in pts.iter_mut() {
        let (sx, sy) = (p.x, p.y);
        let x = sx * m[MSCALE_X] + sy * m[MSKEW_X] + m[MTRANS_X];
        let y = sx * m[MSKEW_Y] + sy * m[MSCALE_Y] + m[MTRANS_Y];
        let mut z = sx * m[MPERSP_0] + sy * m[MPERSP_1] + m[MPERSP_2];
        if z != 0.0 {
            z = 1.0 / z;
        }
        p.x = x * z;
        p.y = y * z;
    }
}

/// How a source rectangle aligns into a destination rectangle for
/// [`Matrix::set_rect_to_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleToFit {
    /// Scale X and Y independently so that `src` matches `dst` exactly.
    /// This may change the aspect ratio of `src`.
    Fill,
    /// Preserve the aspect ratio, fit entirely inside `dst`, and align to
    /// the left and top edges.
    Start,
    /// Preserve the aspect ratio, fit entirely inside `dst`, and center.
    Center,
    /// Preserve the aspect ratio, fit entirely inside `dst`, and align to
    /// the right and bottom edges.
    End,
}

// Effective scale of the source polygon's basis; the poly-to-poly solvers
// divide by these.
fn poly_to_point(poly: &[Point], count: usize) -> Option<(f64, f64)> {
    let mut x = 1.0;
    let mut y = 1.0;

    if count > 1 {
        let d = Point::new(poly[1].x - poly[0].x, poly[1].y - poly[0].y);
        y = d.x.hypot(d.y);
        if y * y == 0.0 {
            return None;
        }
        match count {
            2 => {}
            3 => {
                let p = Point::new(poly[0].y - poly[2].y, poly[2].x - poly[0].x);
                x = (d.x * p.x + d.y * p.y) / y;
            }
            _ => {
                let p = Point::new(poly[0].y - poly[3].y, poly[3].x - poly[0].x);
                x = (d.x * p.x + d.y * p.y) / y;
            }
        }
    }

    Some((x, y))
}

fn poly2_proc(pts: &[Point], scale: (f64, f64)) -> Option<Matrix> {
    let inv_scale = 1.0 / scale.1;

    let mut m = Matrix::new();
    m.mat[MSCALE_X] = (pts[1].y - pts[0].y) * inv_scale;
    m.mat[MSKEW_Y] = (pts[0].x - pts[1].x) * inv_scale;
    m.mat[MPERSP_0] = 0.0;
    m.mat[MSKEW_X] = (pts[1].x - pts[0].x) * inv_scale;
    m.mat[MSCALE_Y] = (pts[1].y - pts[0].y) * inv_scale;
    m.mat[MPERSP_1] = 0.0;
    m.mat[MTRANS_X] = pts[0].x;
    m.mat[MTRANS_Y] = pts[0].y;
    m.mat[MPERSP_2] = 1.0;
    m.mark_unknown();
    Some(m)
}

fn poly3_proc(pts: &[Point], scale: (f64, f64)) -> Option<Matrix> {
    let mut m = Matrix::new();

    let inv_scale = 1.0 / scale.0;
    m.mat[MSCALE_X] = (pts[2].x - pts[0].x) * inv_scale;
    m.mat[MSKEW_Y] = (pts[2].y - pts[0].y) * inv_scale;
    m.mat[MPERSP_0] = 0.0;

    let inv_scale = 1.0 / scale.1;
    m.mat[MSKEW_X] = (pts[1].x - pts[0].x) * inv_scale;
    m.mat[MSCALE_Y] = (pts[1].y - pts[0].y) * inv_scale;
    m.mat[MPERSP_1] = 0.0;

    m.mat[MTRANS_X] = pts[0].x;
    m.mat[MTRANS_Y] = pts[0].y;
    m.mat[MPERSP_2] = 1.0;
    m.mark_unknown();
    Some(m)
}

fn poly4_proc(pts: &[Point], scale: (f64, f64)) -> Option<Matrix> {
    let x0 = pts[2].x - pts[0].x;
    let y0 = pts[2].y - pts[0].y;
    let x1 = pts[2].x - pts[1].x;
    let y1 = pts[2].y - pts[1].y;
    let x2 = pts[2].x - pts[3].x;
    let y2 = pts[2].y - pts[3].y;

    let a1 = if x2.abs() > y2.abs() {
        let denom = x1 * y2 / x2 - y1;
        if denom * denom == 0.0 {
            return None;
        }
        ((x0 - x1) * y2 / x2 - y0 + y1) / denom
    } else {
        let denom = x1 - y1 * x2 / y2;
        if denom * denom == 0.0 {
            return None;
        }
        (x0 - x1 - (y0 - y1) * x2 / y2) / denom
    };

    let a2 = if x1.abs() > y1.abs() {
        let denom = y2 - x2 * y1 / x1;
        if denom * denom == 0.0 {
            return None;
        }
        (y0 - y2 - (x0 - x2) * y1 / x1) / denom
    } else {
        let denom = y2 * x1 / y1 - x2;
        if denom * denom == 0.0 {
            return None;
        }
        ((y0 - y2) * x1 / y1 - x0 + x2) / denom
    };

    let mut m = Matrix::new();

    let inv_scale = 1.0 / scale.0;
    m.mat[MSCALE_X] = (a2 * pts[3].x + pts[3].x - pts[0].x) * inv_scale;
    m.mat[MSKEW_Y] = (a2 * pts[3].y + pts[3].y - pts[0].y) * inv_scale;
    m.mat[MPERSP_0] = a2 * inv_scale;

    let inv_scale = 1.0 / scale.1;
    m.mat[MSKEW_X] = (a1 * pts[1].x + pts[1].x - pts[0].x) * inv_scale;
    m.mat[MSCALE_Y] = (a1 * pts[1].y + pts[1].y - pts[0].y) * inv_scale;
    m.mat[MPERSP_1] = a1 * inv_scale;

    m.mat[MTRANS_X] = pts[0].x;
    m.mat[MTRANS_Y] = pts[0].y;
    m.mat[MPERSP_2] = 1.0;
    m.mark_unknown();
    Some(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq_surface;
    use crate::float_eq::ApproxEqSurface;

    fn assert_point_approx(p: (f64, f64), x: f64, y: f64) {
        assert_approx_eq_surface!(p.0, x);
        assert_approx_eq_surface!(p.1, y);
    }

    #[test]
    fn identity_classifies_empty() {
        let m = Matrix::new();
        assert!(m.get_type().is_empty());
        assert!(m.is_identity());
        assert!(m.rect_stays_rect());
    }

    #[test]
    fn translate_classifies() {
        let mut m = Matrix::new();
        m.set_translate(5.0, 0.0);
        assert_eq!(m.get_type(), TypeMask::TRANSLATE);
        assert!(m.rect_stays_rect());

        m.set_translate(0.0, 0.0);
        assert!(m.is_identity());
    }

    #[test]
    fn rotation_classifies() {
        let mut m = Matrix::new();
        m.set_rotate(45.0);
        assert!(m.get_type().contains(TypeMask::AFFINE));
        assert!(!m.rect_stays_rect());

        m.set_rotate(90.0);
        assert!(m.rect_stays_rect());

        m.set_rotate(180.0);
        assert!(m.rect_stays_rect());
    }

    #[test]
    fn raw_writes_invalidate_classification() {
        let mut m = Matrix::new();
        m.set_value(MPERSP_0, 0.25);
        assert!(m.has_perspective());
        m.set_value(MPERSP_0, 0.0);
        assert!(!m.has_perspective());
    }

    #[test]
    fn pre_post_identity_are_bit_for_bit_noops() {
        let mut m = Matrix::new();
        m.set_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 1.0])
            .unwrap();
        let before = m.clone();

        m.pre_concat(&Matrix::new());
        assert_eq!(m, before);

        m.post_concat(&Matrix::new());
        assert_eq!(m, before);
    }

    #[test]
    fn concat_with_identity_copies() {
        let mut a = Matrix::new();
        a.set_values(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 0.0, 0.0, 1.0])
            .unwrap();

        assert_eq!(Matrix::concat(&a, &Matrix::new()), a);
        assert_eq!(Matrix::concat(&Matrix::new(), &a), a);
    }

    #[test]
    fn concat_composes_left_to_right() {
        let mut scale = Matrix::new();
        scale.set_scale(2.0, 2.0);
        let mut translate = Matrix::new();
        translate.set_translate(10.0, 0.0);

        // scale * translate applies the translation first
        let m = Matrix::concat(&scale, &translate);
        assert_point_approx(m.map_point(1.0, 1.0), 22.0, 2.0);

        let m = Matrix::concat(&translate, &scale);
        assert_point_approx(m.map_point(1.0, 1.0), 12.0, 2.0);
    }

    #[test]
    fn invert_round_trips_points() {
        let mut m = Matrix::new();
        m.set_rotate_about(30.0, 5.0, 5.0);
        m.pre_scale(2.0, 3.0);
        m.post_translate(-7.0, 11.0);

        let inv = m.invert().unwrap();
        let (x, y) = m.map_point(10.0, 10.0);
        assert_point_approx(inv.map_point(x, y), 10.0, 10.0);
    }

    #[test]
    fn invert_perspective_round_trips_points() {
        let mut m = Matrix::new();
        m.set_values(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.001, 0.002, 1.0])
            .unwrap();
        assert!(m.has_perspective());

        let inv = m.invert().unwrap();
        let (x, y) = m.map_point(10.0, 10.0);
        assert_point_approx(inv.map_point(x, y), 10.0, 10.0);
    }

    #[test]
    fn invert_singular_fails() {
        let mut m = Matrix::new();
        m.set_scale(2.0, 0.0);
        assert!(m.invert().is_none());
    }

    #[test]
    fn values_slices_must_hold_nine() {
        let mut m = Matrix::new();
        assert_eq!(
            m.set_values(&[1.0; 5]),
            Err(GeometryError::MatrixValues(5))
        );

        let mut short = [0.0; 4];
        assert_eq!(
            m.get_values(&mut short),
            Err(GeometryError::MatrixValues(4))
        );

        let mut out = [0.0; 9];
        m.set_translate(3.0, 4.0);
        m.get_values(&mut out).unwrap();
        assert_eq!(out[MTRANS_X], 3.0);
        assert_eq!(out[MTRANS_Y], 4.0);
    }

    #[test]
    fn scale_rect_mapping_round_trips() {
        let mut up = Matrix::new();
        up.set_scale(2.0, 4.0);
        let mut down = Matrix::new();
        down.set_scale(0.5, 0.25);

        let src = Rect::new(1.0, 2.0, 3.0, 4.0);
        let (mapped, stays) = up.map_rect(&src);
        assert!(stays);
        let (back, stays) = down.map_rect(&mapped);
        assert!(stays);
        assert!(back.approx_eq(&src));
    }

    #[test]
    fn rotated_rect_mapping_returns_bounds() {
        let mut m = Matrix::new();
        m.set_rotate(45.0);

        let (bounds, stays) = m.map_rect(&Rect::new(-1.0, -1.0, 1.0, 1.0));
        assert!(!stays);
        let half_diag = 2.0_f64.sqrt();
        assert_approx_eq_surface!(bounds.x0, -half_diag);
        assert_approx_eq_surface!(bounds.x1, half_diag);
        assert_approx_eq_surface!(bounds.y0, -half_diag);
        assert_approx_eq_surface!(bounds.y1, half_diag);
    }

    #[test]
    fn vectors_ignore_translation() {
        let mut m = Matrix::new();
        m.set_translate(100.0, 200.0);
        assert_point_approx(m.map_vector(3.0, 4.0), 3.0, 4.0);

        m.set_scale_about(2.0, 2.0, 50.0, 50.0);
        assert_point_approx(m.map_vector(3.0, 4.0), 6.0, 8.0);
    }

    #[test]
    fn map_radius_takes_geometric_mean() {
        let mut m = Matrix::new();
        m.set_scale(2.0, 8.0);
        assert_approx_eq_surface!(m.map_radius(1.0), 4.0);
    }

    #[test]
    fn rect_to_rect_policies() {
        let src = Rect::new(0.0, 0.0, 10.0, 10.0);
        let dst = Rect::new(0.0, 0.0, 20.0, 40.0);

        let mut m = Matrix::new();
        assert!(m.set_rect_to_rect(&src, &dst, ScaleToFit::Fill));
        assert_point_approx(m.map_point(10.0, 10.0), 20.0, 40.0);

        assert!(m.set_rect_to_rect(&src, &dst, ScaleToFit::Start));
        assert_point_approx(m.map_point(10.0, 10.0), 20.0, 20.0);

        assert!(m.set_rect_to_rect(&src, &dst, ScaleToFit::Center));
        assert_point_approx(m.map_point(0.0, 0.0), 0.0, 10.0);
        assert_point_approx(m.map_point(10.0, 10.0), 20.0, 30.0);

        assert!(m.set_rect_to_rect(&src, &dst, ScaleToFit::End));
        assert_point_approx(m.map_point(10.0, 10.0), 20.0, 40.0);
        assert_point_approx(m.map_point(0.0, 0.0), 0.0, 20.0);

        assert!(!m.set_rect_to_rect(&Rect::default(), &dst, ScaleToFit::Fill));
        assert!(m.is_identity());
    }

    #[test]
    fn poly_to_poly_translates_single_point() {
        let mut m = Matrix::new();
        assert!(m.set_poly_to_poly(&[Point::new(1.0, 2.0)], &[Point::new(4.0, 6.0)]));
        assert_point_approx(m.map_point(1.0, 2.0), 4.0, 6.0);
    }

    #[test]
    fn poly_to_poly_two_points() {
        let src = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
        let dst = [Point::new(0.0, 0.0), Point::new(0.0, 2.0)];

        let mut m = Matrix::new();
        assert!(m.set_poly_to_poly(&src, &dst));
        for (s, d) in src.iter().zip(dst.iter()) {
            assert_point_approx(m.map_point(s.x, s.y), d.x, d.y);
        }
    }

    #[test]
    fn poly_to_poly_three_points() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        let dst = [
            Point::new(10.0, 10.0),
            Point::new(12.0, 10.0),
            Point::new(10.0, 13.0),
        ];

        let mut m = Matrix::new();
        assert!(m.set_poly_to_poly(&src, &dst));
        for (s, d) in src.iter().zip(dst.iter()) {
            assert_point_approx(m.map_point(s.x, s.y), d.x, d.y);
        }
    }

    #[test]
    fn poly_to_poly_four_points_solves_perspective() {
        let src = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        let dst = [
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.5),
            Point::new(3.0, 3.0),
            Point::new(-0.5, 2.0),
        ];

        let mut m = Matrix::new();
        assert!(m.set_poly_to_poly(&src, &dst));
        for (s, d) in src.iter().zip(dst.iter()) {
            assert_point_approx(m.map_point(s.x, s.y), d.x, d.y);
        }
    }

    #[test]
    fn poly_to_poly_degenerate_fails() {
        let p = Point::new(1.0, 1.0);
        let mut m = Matrix::new();
        assert!(!m.set_poly_to_poly(&[p, p], &[p, Point::new(2.0, 2.0)]));
        assert!(!m.set_poly_to_poly(&[p; 5], &[p; 5]));
    }
}
