//! Core building blocks: the typed conversion parameter set consumed by the
//! high-level `api` module and the `encoder` command builder.
pub mod params;
