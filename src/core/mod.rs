//! Interaction state for the landing page: testimonial carousel and waitlist signup

#[cfg(feature = "ssr")]
pub mod api;
#[cfg(feature = "ssr")]
pub mod config;
mod entrance;
mod rotator;
mod submission;
#[cfg(test)]
mod tests;
pub mod validation;
mod waitlist;

pub use entrance::*;
pub use rotator::*;
pub use submission::*;
pub use waitlist::*;
