//! Core building blocks: the query doc parser and the render parameters.
//! These are consumed by the high-level `api` module.
pub mod params;
pub mod parser;
