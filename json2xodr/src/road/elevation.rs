use serde::Serialize;

/// Cubic `a + b*s + c*s^2 + d*s^3` of road height along the reference line
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ElevationPolynomial {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl ElevationPolynomial {
    /// Flat road at height zero
    pub const FLAT: Self = Self {
        a: 0.0_f64,
        b: 0.0_f64,
        c: 0.0_f64,
        d: 0.0_f64,
    };
}
