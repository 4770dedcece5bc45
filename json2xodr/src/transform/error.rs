use std::panic::Location;

/// Conversion Issue
///
/// ```
/// use json2xodr::transform::{ConvertError, ConvertIssue};
/// let err = ConvertError::unsupported_geometry_type("helix");
/// assert_eq!(err.issue(), &ConvertIssue::UnsupportedGeometryType(String::from("helix")));
/// assert!(err.to_string().starts_with("unsupported geometry type 'helix' - "));
/// ```
#[derive(Clone, Debug)]
pub struct ConvertError {
    location: &'static Location<'static>,
    issue: ConvertIssue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertIssue {
    /// No road segments to merge
    EmptyInput,
    /// Lane section without exactly one center lane, or with repeated lane ids
    InvalidLaneSection {
        center_lanes: usize,
        duplicate_id: Option<i32>,
    },
    /// Geometry type tag other than line, spiral or arc
    UnsupportedGeometryType(String),
    /// Input that does not match the expected shape
    MalformedInput(String),
}

impl ConvertError {
    #[must_use]
    #[track_caller]
    pub fn empty_input() -> Self {
        ConvertError {
            location: Location::caller(),
            issue: ConvertIssue::EmptyInput,
        }
    }

    #[must_use]
    #[track_caller]
    pub fn center_lane_count(center_lanes: usize) -> Self {
        ConvertError {
            location: Location::caller(),
            issue: ConvertIssue::InvalidLaneSection {
                center_lanes,
                duplicate_id: None,
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn duplicate_lane_id(id: i32) -> Self {
        ConvertError {
            location: Location::caller(),
            issue: ConvertIssue::InvalidLaneSection {
                center_lanes: 1,
                duplicate_id: Some(id),
            },
        }
    }

    #[must_use]
    #[track_caller]
    pub fn unsupported_geometry_type(tag: &str) -> Self {
        ConvertError {
            location: Location::caller(),
            issue: ConvertIssue::UnsupportedGeometryType(tag.to_owned()),
        }
    }

    #[must_use]
    #[track_caller]
    pub fn malformed(description: &str) -> Self {
        ConvertError {
            location: Location::caller(),
            issue: ConvertIssue::MalformedInput(description.to_owned()),
        }
    }

    #[must_use]
    pub fn issue(&self) -> &ConvertIssue {
        &self.issue
    }

    #[must_use]
    pub fn is_invalid_lane_section(&self) -> bool {
        matches!(self.issue, ConvertIssue::InvalidLaneSection { .. })
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self.issue, ConvertIssue::MalformedInput(_))
    }
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self.issue {
            ConvertIssue::EmptyInput => write!(f, "no road segments - {}", self.location),
            ConvertIssue::InvalidLaneSection {
                duplicate_id: Some(id),
                ..
            } => write!(
                f,
                "invalid lane section: lane id {} repeated - {}",
                id, self.location
            ),
            ConvertIssue::InvalidLaneSection {
                center_lanes,
                duplicate_id: None,
            } => write!(
                f,
                "invalid lane section: expected one center lane, found {} - {}",
                center_lanes, self.location
            ),
            ConvertIssue::UnsupportedGeometryType(tag) => {
                write!(f, "unsupported geometry type '{}' - {}", tag, self.location)
            },
            ConvertIssue::MalformedInput(description) => {
                write!(f, "malformed input: {} - {}", description, self.location)
            },
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<serde_json::Error> for ConvertError {
    #[track_caller]
    fn from(e: serde_json::Error) -> Self {
        ConvertError {
            location: Location::caller(),
            issue: ConvertIssue::MalformedInput(e.to_string()),
        }
    }
}
