//! Frame-level marker detection.
//!
//! Pure image math over decoded frames; sampling and decoding live in
//! [`crate::video`].

mod layout;
mod similarity;

pub use layout::is_split_in_three;
pub use similarity::{mean_squared_diff, regions_similar};
