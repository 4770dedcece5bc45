use xml_tree::Element;

use super::number::scientific;
use crate::road::GeometryKind;
use crate::transform::merge::PlacedGeometry;

/// `<geometry>` with exactly one child describing the curve
#[must_use]
pub fn geometry_element(placed: &PlacedGeometry<'_>) -> Element {
    let geometry = placed.geometry;
    Element::new("geometry")
        .attr("s", scientific(placed.s.val()))
        .attr("x", scientific(geometry.start_x))
        .attr("y", scientific(geometry.start_y))
        .attr("hdg", scientific(geometry.heading))
        .attr("length", scientific(geometry.length.val()))
        .child(kind_element(&geometry.kind))
}

fn kind_element(kind: &GeometryKind) -> Element {
    let element = Element::new(kind.tag());
    match *kind {
        GeometryKind::Line => element,
        GeometryKind::Spiral {
            curv_start,
            curv_end,
        } => element
            .attr("curvStart", scientific(curv_start))
            .attr("curvEnd", scientific(curv_end)),
        GeometryKind::Arc { curvature } => element.attr("curvature", scientific(curvature)),
    }
}
