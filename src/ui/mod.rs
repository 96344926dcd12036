pub mod common;
pub mod icon;
pub mod in_view;
pub mod pages;
pub mod testimonials;
pub mod waitlist_form;

pub use icon::{Icon, icons};
pub use in_view::{InViewOptions, use_entrance, use_in_view};
pub use pages::{LandingPage, NotFoundPage};
pub use testimonials::{Testimonial, TestimonialsSection, testimonials};
pub use waitlist_form::{WaitlistHandle, WaitlistSection};
