//! This crate turns the roads saved by the road editor into an OpenDRIVE (`.xodr`) document.
//!
//! All roads of a file are merged into a single OpenDRIVE road, so that simulation tools see one
//! unbroken reference line. Lanes and elevation are taken from the first road.

#![warn(clippy::pedantic, clippy::cargo, clippy::restriction)]
// Allow cargo lints
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
// Allow restriction lints
#![allow(
    clippy::blanket_clippy_restriction_lints,
    clippy::exhaustive_enums,
    clippy::exhaustive_structs,
    clippy::expect_used,
    clippy::float_arithmetic,
    clippy::implicit_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_inline_in_public_items,
    clippy::mod_module_files,
    clippy::module_name_repetitions,
    clippy::pattern_type_mismatch,
    clippy::pub_use,
    clippy::separated_literal_suffix,
    clippy::shadow_reuse,
    clippy::shadow_same,
    clippy::shadow_unrelated,
    clippy::single_char_lifetime_names,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::wildcard_enum_match_arm
)]

pub mod input;
pub mod metric;
pub mod road;
pub mod transform;
