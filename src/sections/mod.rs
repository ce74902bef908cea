//! Password scoring sections
//!
//! Each section computes one part of the strength score.

pub mod classes;
mod comprehensive;
mod dictionary;
mod length;

pub use comprehensive::{calc_comp8, unq_points};
pub use length::calc_basic16;
