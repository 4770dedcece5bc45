use std::collections::BTreeSet;

use xml_tree::Element;

use super::number::scientific;
use crate::road::{Lane, LaneSection, RoadMark, WidthPolynomial};
use crate::transform::ConvertError;

/// Every lane is encoded with this OpenDRIVE lane type
pub const LANE_TYPE: &str = "driving";

/// Lanes of a section split by side of the reference line.
///
/// Each side keeps the order of the section.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifiedLanes<'a> {
    pub left: Vec<&'a Lane>,
    pub center: &'a Lane,
    pub right: Vec<&'a Lane>,
}

impl<'a> ClassifiedLanes<'a> {
    /// # Errors
    ///
    /// `InvalidLaneSection` unless there is exactly one lane with id 0 and all ids are unique.
    pub fn classify(section: &'a LaneSection) -> Result<Self, ConvertError> {
        let mut left = Vec::new();
        let mut centers = Vec::new();
        let mut right = Vec::new();
        for lane in section.iter() {
            match lane.id() {
                id if id > 0 => left.push(lane),
                0 => centers.push(lane),
                _ => right.push(lane),
            }
        }
        let center = match centers.as_slice() {
            [center] => *center,
            _ => return Err(ConvertError::center_lane_count(centers.len())),
        };

        let mut seen = BTreeSet::new();
        if let Some(duplicate) = left
            .iter()
            .chain(right.iter())
            .map(|lane| lane.id())
            .find(|id| !seen.insert(*id))
        {
            return Err(ConvertError::duplicate_lane_id(duplicate));
        }
        Ok(Self {
            left,
            center,
            right,
        })
    }
}

/// `<laneSection>` holding the `left`, `center` and `right` groups.
///
/// Empty sides are left out, the center is always written.
#[must_use]
pub fn lane_section_element(lanes: &ClassifiedLanes<'_>) -> Element {
    let mut section = Element::new("laneSection").attr("s", scientific(0.0_f64));
    if !lanes.left.is_empty() {
        section.push(
            Element::new("left").with_children(lanes.left.iter().map(|lane| lane_element(lane))),
        );
    }
    section.push(Element::new("center").child(lane_element(lanes.center)));
    if !lanes.right.is_empty() {
        section.push(
            Element::new("right").with_children(lanes.right.iter().map(|lane| lane_element(lane))),
        );
    }
    section
}

/// `<lane>` with its width, if any, then its road mark
#[must_use]
pub fn lane_element(lane: &Lane) -> Element {
    let mut element = Element::new("lane")
        .attr("id", lane.id().to_string())
        .attr("type", LANE_TYPE)
        .attr("level", "0");
    if let Some(width) = lane.width() {
        element.push(width_element(width));
    }
    element.child(road_mark_element(lane.road_mark()))
}

fn width_element(width: &WidthPolynomial) -> Element {
    Element::new("width")
        .attr("sOffset", scientific(width.s.val()))
        .attr("a", scientific(width.a))
        .attr("b", scientific(width.b))
        .attr("c", scientific(width.c))
        .attr("d", scientific(width.d))
}

/// Road marks always start at the beginning of the lane section
fn road_mark_element(road_mark: &RoadMark) -> Element {
    Element::new("roadMark")
        .attr("sOffset", scientific(0.0_f64))
        .attr("type", road_mark.r#type.as_str())
        .attr("weight", road_mark.weight.as_str())
        .attr("color", road_mark.color.as_str())
        .attr("width", scientific(road_mark.width.val()))
}
