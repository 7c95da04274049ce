//! Spatial integration tests.
//!
//! These exercise the public API the way a database mapping layer does:
//! building values, moving them through the text codecs and comparing
//! bounding rectangles.

mod codec_test;
mod mbr_equals_test;
mod multi_polygon_test;
