//! Load model strategies used when filling the stress grids.
//!
//! The bending moment along the span and the first moment of area of the
//! section are supplied as strategies so alternative load cases can be
//! evaluated without touching the grid-fill algorithm. The defaults reproduce
//! the sample policies: a uniformly distributed load of 10 N/m and a shear
//! force of the same magnitude.

/// Magnitude of the sample distributed load and shear force.
pub const SAMPLE_LOAD: f64 = 10.0;

/// Bending moment as a function of position along the span.
pub trait MomentFunction {
    /// Bending moment in newton-metres at distance `x` from the origin.
    fn moment(&self, x: f64) -> f64;
}

impl<F> MomentFunction for F
where
    F: Fn(f64) -> f64,
{
    fn moment(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Moment produced by a constant distributed load applied from `0` to `x`.
///
/// Integrating the constant load twice gives `M(x) = w x^2 / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformLoadMoment {
    /// Load per unit length in newtons per metre.
    pub intensity: f64,
}

impl UniformLoadMoment {
    /// Create a moment function for the given load intensity.
    #[must_use]
    pub const fn new(intensity: f64) -> Self {
        Self { intensity }
    }
}

impl Default for UniformLoadMoment {
    fn default() -> Self {
        Self::new(SAMPLE_LOAD)
    }
}

impl MomentFunction for UniformLoadMoment {
    fn moment(&self, x: f64) -> f64 {
        0.5 * x.powi(2) * self.intensity
    }
}

/// First moment of area about the neutral axis.
pub trait FirstMomentOfArea {
    /// First moment of area for the region above `pos_above_y`.
    fn first_moment(&self, length: f64, thickness: f64, pos_above_y: f64) -> f64;
}

/// Rectangular region approximation, `Q = length * thickness * pos_above_y`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectangularFirstMoment;

impl FirstMomentOfArea for RectangularFirstMoment {
    fn first_moment(&self, length: f64, thickness: f64, pos_above_y: f64) -> f64 {
        length * thickness * pos_above_y
    }
}

/// Load case applied to a [`Beam`](crate::Beam).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadModel<M = UniformLoadMoment, Q = RectangularFirstMoment> {
    /// Bending moment along the span.
    pub moment: M,
    /// Shear force in newtons used for every shear sample.
    pub shear_force: f64,
    /// First moment of area of the section.
    pub first_moment: Q,
}

impl Default for LoadModel {
    fn default() -> Self {
        Self {
            moment: UniformLoadMoment::default(),
            shear_force: SAMPLE_LOAD,
            first_moment: RectangularFirstMoment,
        }
    }
}

impl<M, Q> LoadModel<M, Q>
where
    M: MomentFunction,
    Q: FirstMomentOfArea,
{
    /// Combine the three load strategies.
    ///
    /// # Examples
    /// ```
    /// use beamstress::{LoadModel, MomentFunction, RectangularFirstMoment};
    ///
    /// let point_load = LoadModel::new(|x: f64| 25.0 * x, 25.0, RectangularFirstMoment);
    /// assert_eq!(point_load.moment.moment(2.0), 50.0);
    /// ```
    pub fn new(moment: M, shear_force: f64, first_moment: Q) -> Self {
        Self {
            moment,
            shear_force,
            first_moment,
        }
    }
}
