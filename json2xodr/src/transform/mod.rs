mod error;
pub use error::{ConvertError, ConvertIssue};

mod merge;
pub use merge::{merge, MergedRoad, PlacedGeometry};

mod to_xodr;
pub use to_xodr::{
    elevation_element, geometry_element, lane_element, lane_section_element, road_to_xodr,
    scientific, ClassifiedLanes, Config as ToXodrConfig, LANE_TYPE,
};

use crate::input::segments_from_json;

/// Convert the editor's JSON into OpenDRIVE text, merging every road into one.
///
/// # Errors
///
/// Any of:
/// - malformed JSON or unsupported geometry type
/// - no roads
/// - first road's lanes without exactly one center lane
pub fn json_to_xodr(json: &str, config: &ToXodrConfig) -> Result<String, ConvertError> {
    let segments = segments_from_json(json)?;
    let road = merge(&segments)?;
    let doc = road_to_xodr(&road, config)?;
    Ok(doc.to_string_with(config.indent))
}

#[cfg(test)]
mod tests {
    use super::{json_to_xodr, ConvertIssue, ToXodrConfig};

    fn road(id: i64, geometries: &str, lanes: &str) -> String {
        format!(
            r#"{{"id": {id}, "geometries": [{geometries}], "laneSections": [[{lanes}]],
                "elevations": [{{"a": {id}, "b": 0, "c": 0, "d": 0}}]}}"#
        )
    }

    const LINE_10: &str = r#"{"type": "line", "sx": 0, "sy": 0, "heading": 0, "length": 10.0}"#;
    const LINE_5: &str = r#"{"type": "line", "sx": 10, "sy": 0, "heading": 0, "length": 5.0}"#;
    const CENTER: &str =
        r#"{"id": 0, "roadMark": {"type": "solid", "weight": "standard", "color": "yellow", "width": 0.13}}"#;

    fn side(id: i32) -> String {
        format!(
            r#"{{"id": {id}, "width": {{"s": 0, "a": 3.25, "b": 0, "c": 0, "d": 0}},
                "roadMark": {{"type": "broken", "weight": "standard", "color": "standard", "width": 0.13}}}}"#
        )
    }

    #[test]
    fn test_reparse() {
        let lanes = format!("{},{},{}", side(-1), CENTER, side(1));
        let second_lanes = side(-7);
        let json = format!(
            "[{},{}]",
            road(1, LINE_10, &lanes),
            road(2, LINE_5, &second_lanes)
        );
        let text = json_to_xodr(&json, &ToXodrConfig::default()).unwrap();
        let doc = roxmltree::Document::parse(&text).unwrap();
        let road = doc
            .descendants()
            .find(|n| n.has_tag_name("road"))
            .unwrap();
        assert_eq!(road.attribute("id"), Some("1"));
        let length: f64 = road.attribute("length").unwrap().parse().unwrap();
        assert!((length - 15.0).abs() < 1e-12);

        let offsets: Vec<f64> = doc
            .descendants()
            .filter(|n| n.has_tag_name("geometry"))
            .map(|n| n.attribute("s").unwrap().parse().unwrap())
            .collect();
        assert_eq!(offsets, [0.0, 10.0]);

        // Lanes and elevation of the second road are dropped
        let lane_ids: Vec<&str> = doc
            .descendants()
            .filter(|n| n.has_tag_name("lane"))
            .filter_map(|n| n.attribute("id"))
            .collect();
        assert_eq!(lane_ids, ["1", "0", "-1"]);
        let elevation = doc
            .descendants()
            .find(|n| n.has_tag_name("elevation"))
            .unwrap();
        assert_eq!(elevation.attribute("a"), Some("1.0000000000000000e+00"));
    }

    #[test]
    fn test_tab_indent() {
        let json = format!("[{}]", road(3, LINE_10, CENTER));
        let text = json_to_xodr(&json, &ToXodrConfig::default()).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" standalone=\"yes\"?>\n<OpenDRIVE>\n\t<road "));
        assert!(text.contains("\n\t\t\t\t<line/>\n"));
    }

    #[test]
    fn test_errors() {
        let err = json_to_xodr("[]", &ToXodrConfig::default()).unwrap_err();
        assert_eq!(err.issue(), &ConvertIssue::EmptyInput);

        let json = format!("[{}]", road(1, LINE_10, &side(1)));
        let err = json_to_xodr(&json, &ToXodrConfig::default()).unwrap_err();
        assert!(err.is_invalid_lane_section());

        let helix = LINE_10.replace("line", "helix");
        let json = format!("[{}]", road(1, &helix, CENTER));
        let err = json_to_xodr(&json, &ToXodrConfig::default()).unwrap_err();
        assert_eq!(
            err.issue(),
            &ConvertIssue::UnsupportedGeometryType(String::from("helix"))
        );

        let err = json_to_xodr("not json", &ToXodrConfig::default()).unwrap_err();
        assert!(err.is_malformed());
    }
}
