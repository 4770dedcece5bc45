use serde::Serialize;

mod geometry;
pub use geometry::{Geometry, GeometryKind};

mod lane;
pub use lane::{Lane, LaneSection, RoadMark, WidthPolynomial};

mod elevation;
pub use elevation::ElevationPolynomial;

/// One road as saved by the editor, before merging.
///
/// Only the first lane section and the first elevation polynomial of a segment are ever used.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoadSegment {
    pub id: i64,
    pub geometries: Vec<Geometry>,
    pub lane_sections: Vec<LaneSection>,
    pub elevations: Vec<ElevationPolynomial>,
}

impl RoadSegment {
    /// A segment without any geometry, lanes or elevation filled out
    #[must_use]
    pub fn empty(id: i64) -> Self {
        Self {
            id,
            geometries: Vec::new(),
            lane_sections: Vec::new(),
            elevations: Vec::new(),
        }
    }

    #[must_use]
    pub fn lane_section(&self) -> Option<&LaneSection> {
        self.lane_sections.first()
    }

    #[must_use]
    pub fn elevation(&self) -> Option<&ElevationPolynomial> {
        self.elevations.first()
    }
}
