//! Page components.
//!
//! Each component receives the theme state it needs as a [`ThemeHandle`](crate::ThemeHandle)
//! when it is constructed; nothing is looked up implicitly.

mod button;
mod home;
mod icon;

pub use button::{ButtonState, ThemeButton, TOGGLE_LABEL};
pub use home::{Home, DEFAULT_GREETING};
pub(crate) use home::HomeView;
pub use icon::Icon;
