use serde::Serialize;

use super::ConvertError;
use crate::metric::Metre;
use crate::road::{ElevationPolynomial, Geometry, LaneSection, RoadSegment};

/// A geometry positioned along the merged reference line
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlacedGeometry<'a> {
    /// Start of the geometry, from the start of the first segment
    pub s: Metre,
    #[serde(flatten)]
    pub geometry: &'a Geometry,
}

/// All segments as one continuous road.
///
/// Lanes and elevation are those of the first segment only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedRoad<'a> {
    pub id: i64,
    pub length: Metre,
    pub geometries: Vec<PlacedGeometry<'a>>,
    pub lane_section: &'a LaneSection,
    pub elevation: &'a ElevationPolynomial,
}

/// Concatenate the segments' geometries into one road, with offsets from the start of the
/// first segment.
///
/// # Errors
///
/// - `EmptyInput` if there are no segments
/// - `MalformedInput` if the first segment has no lane section or no elevation
pub fn merge(segments: &[RoadSegment]) -> Result<MergedRoad<'_>, ConvertError> {
    let first = segments.first().ok_or_else(ConvertError::empty_input)?;
    let lane_section = first.lane_section().ok_or_else(|| {
        ConvertError::malformed(&format!("road {} has no lane section", first.id))
    })?;
    let elevation = first.elevation().ok_or_else(|| {
        ConvertError::malformed(&format!("road {} has no elevation", first.id))
    })?;

    let length = segments
        .iter()
        .flat_map(|segment| segment.geometries.iter())
        .map(|geometry| geometry.length)
        .sum::<Metre>();

    let mut s = Metre::ZERO;
    let geometries = segments
        .iter()
        .flat_map(|segment| segment.geometries.iter())
        .map(|geometry| {
            let placed = PlacedGeometry { s, geometry };
            s += geometry.length;
            placed
        })
        .collect::<Vec<_>>();

    if segments.len() > 1 {
        log::debug!(
            "merged {} segments into road {}, using lanes and elevation of the first",
            segments.len(),
            first.id
        );
    }
    log::trace!("road {} length {} in {} geometries", first.id, length, geometries.len());

    Ok(MergedRoad {
        id: first.id,
        length,
        geometries,
        lane_section,
        elevation,
    })
}

#[cfg(test)]
mod tests {
    use super::merge;
    use crate::metric::Metre;
    use crate::road::{
        ElevationPolynomial, Geometry, GeometryKind, Lane, LaneSection, RoadMark, RoadSegment,
    };
    use crate::transform::ConvertIssue;

    fn segment(id: i64, lengths: &[f64], elevation: f64) -> RoadSegment {
        RoadSegment {
            geometries: lengths
                .iter()
                .map(|length| Geometry::line(0.0, 0.0, 0.0, Metre::new(*length)))
                .collect(),
            lane_sections: vec![LaneSection::new(vec![Lane::Center {
                road_mark: RoadMark::new("solid", "yellow"),
            }])],
            elevations: vec![ElevationPolynomial {
                a: elevation,
                ..ElevationPolynomial::FLAT
            }],
            ..RoadSegment::empty(id)
        }
    }

    #[test]
    fn test_two_segments() {
        let segments = [segment(1, &[10.0], 1.0), segment(2, &[5.0], 2.0)];
        let road = merge(&segments).unwrap();
        assert_eq!(road.id, 1);
        assert_eq!(road.length, Metre::new(15.0));
        assert_eq!(road.geometries.len(), 2);
        assert_eq!(road.geometries[0].s, Metre::ZERO);
        assert_eq!(road.geometries[1].s, Metre::new(10.0));
        assert_eq!(road.elevation.a, 1.0);
        assert!(std::ptr::eq(road.lane_section, &segments[0].lane_sections[0]));
    }

    #[test]
    fn test_offsets_are_prefix_sums() {
        let segments = [
            segment(3, &[1.5, 0.0, 2.25], 0.0),
            segment(4, &[], 0.0),
            segment(5, &[4.0, 0.125], 0.0),
        ];
        let road = merge(&segments).unwrap();
        let lengths: Vec<f64> = segments
            .iter()
            .flat_map(|s| s.geometries.iter())
            .map(|g| g.length.val())
            .collect();
        let mut expected = 0.0;
        for (placed, length) in road.geometries.iter().zip(&lengths) {
            assert_eq!(placed.s.val(), expected);
            expected += length;
        }
        assert!(road.geometries.windows(2).all(|w| w[0].s <= w[1].s));
        assert_eq!(road.length.val(), lengths.iter().sum::<f64>());
        assert_eq!(road.length, Metre::new(7.875));
    }

    #[test]
    fn test_keeps_geometry_kind() {
        let arc = GeometryKind::Arc { curvature: 0.01 };
        let mut second = segment(2, &[3.0], 0.0);
        second.geometries[0] = second.geometries[0].clone().with_kind(arc);
        let segments = [segment(1, &[2.0], 0.0), second];
        let road = merge(&segments).unwrap();
        assert_eq!(road.geometries[1].geometry.kind, arc);
        assert_eq!(road.geometries[1].s, Metre::new(2.0));
    }

    #[test]
    fn test_empty() {
        assert_eq!(merge(&[]).unwrap_err().issue(), &ConvertIssue::EmptyInput);
    }

    #[test]
    fn test_first_segment_without_lanes() {
        let mut first = segment(1, &[1.0], 0.0);
        first.lane_sections.clear();
        assert!(merge(&[first, segment(2, &[1.0], 0.0)])
            .unwrap_err()
            .is_malformed());

        // Later segments are never consulted
        let mut second = segment(2, &[1.0], 0.0);
        second.elevations.clear();
        assert!(merge(&[segment(1, &[1.0], 0.0), second]).is_ok());
    }
}
