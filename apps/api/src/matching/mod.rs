// Typed similarity matching for cached AI profile responses.
// Pure and synchronous apart from the single store read in `find_similar_response`.

pub mod distance;
pub mod normalize;
pub mod ranker;
pub mod scoring;

pub use ranker::{find_similar_response, SIMILARITY_THRESHOLD};
