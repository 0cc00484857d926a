//! HTML rendering of the page through MiniJinja templates.

mod filters;
mod renderer;

pub use renderer::{Renderer, PAGE_TEMPLATE};
