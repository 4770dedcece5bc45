//! Schema of the road editor's saved JSON, and its validation into [`RoadSegment`]s.
//!
//! The editor writes more than is needed here (`s`, `offset`, `signals`, `objects`, and both
//! `spiral` and `arc` payloads on every geometry), so unknown fields are ignored.

use serde::Deserialize;

use crate::metric::Metre;
use crate::road::{
    ElevationPolynomial, Geometry, GeometryKind, Lane, LaneSection, RoadMark, RoadSegment,
    WidthPolynomial,
};
use crate::transform::ConvertError;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRoad {
    id: i64,
    geometries: Vec<RawGeometry>,
    lane_sections: Vec<Vec<RawLane>>,
    elevations: Vec<RawElevation>,
}

#[derive(Deserialize)]
struct RawGeometry {
    r#type: String,
    sx: f64,
    sy: f64,
    heading: f64,
    length: f64,
    spiral: Option<RawSpiral>,
    arc: Option<RawArc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSpiral {
    curv_start: f64,
    curv_end: f64,
}

#[derive(Deserialize)]
struct RawArc {
    curvature: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLane {
    id: i32,
    width: Option<RawWidth>,
    road_mark: RawRoadMark,
}

#[derive(Deserialize)]
struct RawWidth {
    s: f64,
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

#[derive(Deserialize)]
struct RawRoadMark {
    r#type: String,
    weight: String,
    color: String,
    width: f64,
}

#[derive(Deserialize)]
struct RawElevation {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = ConvertError;
    fn try_from(raw: RawGeometry) -> Result<Self, Self::Error> {
        let kind = match raw.r#type.as_str() {
            "line" => GeometryKind::Line,
            "spiral" => {
                let spiral = raw
                    .spiral
                    .ok_or_else(|| ConvertError::malformed("spiral geometry without 'spiral'"))?;
                GeometryKind::Spiral {
                    curv_start: spiral.curv_start,
                    curv_end: spiral.curv_end,
                }
            },
            "arc" => {
                let arc = raw
                    .arc
                    .ok_or_else(|| ConvertError::malformed("arc geometry without 'arc'"))?;
                GeometryKind::Arc {
                    curvature: arc.curvature,
                }
            },
            other => return Err(ConvertError::unsupported_geometry_type(other)),
        };
        if raw.length < 0.0_f64 {
            return Err(ConvertError::malformed(&format!(
                "negative geometry length {}",
                raw.length
            )));
        }
        Ok(Geometry {
            start_x: raw.sx,
            start_y: raw.sy,
            heading: raw.heading,
            length: Metre::new(raw.length),
            kind,
        })
    }
}

impl TryFrom<RawLane> for Lane {
    type Error = ConvertError;
    fn try_from(raw: RawLane) -> Result<Self, Self::Error> {
        let road_mark = RoadMark {
            r#type: raw.road_mark.r#type,
            weight: raw.road_mark.weight,
            color: raw.road_mark.color,
            width: Metre::new(raw.road_mark.width),
        };
        if raw.id == 0 {
            // A width on the center lane is written by some editor versions and has no meaning
            return Ok(Lane::Center { road_mark });
        }
        let width = raw.width.ok_or_else(|| {
            ConvertError::malformed(&format!("lane {} without 'width'", raw.id))
        })?;
        Ok(Lane::Side {
            id: raw.id,
            width: WidthPolynomial {
                s: Metre::new(width.s),
                a: width.a,
                b: width.b,
                c: width.c,
                d: width.d,
            },
            road_mark,
        })
    }
}

impl TryFrom<RawRoad> for RoadSegment {
    type Error = ConvertError;
    fn try_from(raw: RawRoad) -> Result<Self, Self::Error> {
        let geometries = raw
            .geometries
            .into_iter()
            .map(Geometry::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let lane_sections = raw
            .lane_sections
            .into_iter()
            .map(|lanes| {
                lanes
                    .into_iter()
                    .map(Lane::try_from)
                    .collect::<Result<Vec<_>, _>>()
                    .map(LaneSection::new)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let elevations = raw
            .elevations
            .into_iter()
            .map(|e| ElevationPolynomial {
                a: e.a,
                b: e.b,
                c: e.c,
                d: e.d,
            })
            .collect();
        Ok(RoadSegment {
            id: raw.id,
            geometries,
            lane_sections,
            elevations,
        })
    }
}

fn validate(raw: Vec<RawRoad>) -> Result<Vec<RoadSegment>, ConvertError> {
    let segments = raw
        .into_iter()
        .map(RoadSegment::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("read {} road segments", segments.len());
    Ok(segments)
}

/// Parse the editor's JSON, a top-level array of roads.
///
/// # Errors
///
/// - `MalformedInput` for invalid JSON, missing or mistyped fields
/// - `UnsupportedGeometryType` for a geometry that is not a line, spiral or arc
pub fn segments_from_json(json: &str) -> Result<Vec<RoadSegment>, ConvertError> {
    let raw: Vec<RawRoad> = serde_json::from_str(json)?;
    validate(raw)
}

/// Same as [`segments_from_json`], for an already parsed value.
///
/// # Errors
///
/// See [`segments_from_json`].
pub fn segments_from_value(value: serde_json::Value) -> Result<Vec<RoadSegment>, ConvertError> {
    let raw: Vec<RawRoad> = serde_json::from_value(value)?;
    validate(raw)
}
