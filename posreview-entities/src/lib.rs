#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # posreview-entities
//!
//! Reusable, agnostic domain entities for reviews of points of sale.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod id;
pub mod pos;
pub mod quorum;
pub mod review;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
