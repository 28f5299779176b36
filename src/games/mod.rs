//! Game implementations built on the core types.

pub mod judgement;
