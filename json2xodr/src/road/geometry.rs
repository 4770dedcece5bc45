use serde::Serialize;

use crate::metric::Metre;

/// A piece of the reference line, starting at `(start_x, start_y)` with `heading` in radians.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Geometry {
    pub start_x: f64,
    pub start_y: f64,
    pub heading: f64,
    pub length: Metre,
    #[serde(flatten)]
    pub kind: GeometryKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryKind {
    Line,
    /// Clothoid, curvature changes linearly from `curv_start` to `curv_end`
    Spiral { curv_start: f64, curv_end: f64 },
    /// Constant curvature
    Arc { curvature: f64 },
}

impl GeometryKind {
    /// The tag used by the editor and by OpenDRIVE for this kind of geometry
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Spiral { .. } => "spiral",
            Self::Arc { .. } => "arc",
        }
    }
}

impl Geometry {
    #[must_use]
    pub fn line(start_x: f64, start_y: f64, heading: f64, length: Metre) -> Self {
        Self {
            start_x,
            start_y,
            heading,
            length,
            kind: GeometryKind::Line,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: GeometryKind) -> Self {
        self.kind = kind;
        self
    }
}
