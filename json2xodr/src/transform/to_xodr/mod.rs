#![allow(clippy::module_name_repetitions)]

use xml_tree::{Declaration, Document, Element, Indent};

use super::merge::MergedRoad;
use super::ConvertError;

mod number;
pub use number::scientific;

mod geometry;
pub use geometry::geometry_element;

mod lanes;
pub use lanes::{lane_element, lane_section_element, ClassifiedLanes, LANE_TYPE};

mod elevation;
pub use elevation::elevation_element;

#[non_exhaustive]
pub struct Config {
    pub indent: Indent,
    pub declaration: Declaration,
}

impl Config {
    #[must_use]
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            declaration: Declaration::default(),
        }
    }
}

/// Build the OpenDRIVE document for one merged road.
///
/// The element order is fixed:
/// `OpenDRIVE > road > { planView > geometry*, elevationProfile > elevation, lanes > laneSection }`
///
/// # Errors
///
/// `InvalidLaneSection` if the lanes of the road cannot be split into left, center and right.
pub fn road_to_xodr(road: &MergedRoad<'_>, config: &Config) -> Result<Document, ConvertError> {
    let lanes = ClassifiedLanes::classify(road.lane_section)?;
    log::trace!(
        "road {}: {} left, {} right lanes",
        road.id,
        lanes.left.len(),
        lanes.right.len()
    );

    let plan_view =
        Element::new("planView").with_children(road.geometries.iter().map(geometry_element));
    let elevation_profile =
        Element::new("elevationProfile").child(elevation_element(road.elevation));
    let lanes = Element::new("lanes").child(lane_section_element(&lanes));

    let road = Element::new("road")
        .attr("length", scientific(road.length.val()))
        .attr("id", road.id.to_string())
        .child(plan_view)
        .child(elevation_profile)
        .child(lanes);

    Ok(Document::new(Element::new("OpenDRIVE").child(road))
        .with_declaration(config.declaration.clone()))
}
