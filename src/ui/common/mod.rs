//! Common reusable UI components
//!
//! Buttons and form fields shared by the landing page sections.

pub mod button;
pub mod form;

pub use button::{Button, ButtonSize, ButtonVariant, IconButton};
pub use form::FormField;
