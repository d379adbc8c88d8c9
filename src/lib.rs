//! Rangemark precomputes range-overlap flags for form-submitted numeric
//! intervals. A submission is a from/till pair of optional text values, and
//! the calling context supplies a list of named reference intervals
//! ("buckets") as textual descriptors like `300-600` or `901-`. On each save,
//! every bucket is tested for overlap with the submitted interval and the
//! results are stored as a map of boolean flags keyed by the descriptor
//! string, so that a search can later filter on a single stored flag instead
//! of redoing interval arithmetic per query. Every operation is a pure
//! function over its arguments; the bucket list is caller-supplied input,
//! never process-wide state.

pub mod bucket;
pub mod interval;
pub mod number;
pub mod query;
pub mod record;
pub mod render;
