use serde::Serialize;

use crate::metric::Metre;

/// A single lane, identified by its signed OpenDRIVE id.
///
/// Positive ids are left of the reference line, negative ids right of it.
/// The center lane (id 0) has no width.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "side", rename_all = "snake_case")]
pub enum Lane {
    Center {
        road_mark: RoadMark,
    },
    Side {
        id: i32,
        width: WidthPolynomial,
        road_mark: RoadMark,
    },
}

impl Lane {
    #[must_use]
    pub const fn id(&self) -> i32 {
        match self {
            Self::Center { .. } => 0,
            Self::Side { id, .. } => *id,
        }
    }

    #[must_use]
    pub const fn road_mark(&self) -> &RoadMark {
        match self {
            Self::Center { road_mark } | Self::Side { road_mark, .. } => road_mark,
        }
    }

    #[must_use]
    pub const fn width(&self) -> Option<&WidthPolynomial> {
        match self {
            Self::Center { .. } => None,
            Self::Side { width, .. } => Some(width),
        }
    }
}

/// Cross section of every lane, from the start of the road
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LaneSection(Vec<Lane>);

impl LaneSection {
    #[must_use]
    pub fn new(lanes: Vec<Lane>) -> Self {
        Self(lanes)
    }
}

impl std::ops::Deref for LaneSection {
    type Target = Vec<Lane>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Cubic lane width, starting `s` metres into the lane section
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WidthPolynomial {
    pub s: Metre,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl WidthPolynomial {
    /// Constant width from the start of the section
    #[must_use]
    pub const fn constant(width: Metre) -> Self {
        Self {
            s: Metre::ZERO,
            a: width.val(),
            b: 0.0_f64,
            c: 0.0_f64,
            d: 0.0_f64,
        }
    }
}

/// Painted marking on the outer edge of a lane.
///
/// `type`, `weight` and `color` are passed through as written by the editor,
/// e.g. `solid`, `broken broken`, `standard`, `yellow`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadMark {
    pub r#type: String,
    pub weight: String,
    pub color: String,
    pub width: Metre,
}

impl RoadMark {
    pub const DEFAULT_WIDTH: Metre = Metre::new(0.13);

    #[must_use]
    pub fn new(r#type: &str, color: &str) -> Self {
        Self {
            r#type: r#type.to_owned(),
            weight: String::from("standard"),
            color: color.to_owned(),
            width: Self::DEFAULT_WIDTH,
        }
    }
}
