//! Charts module - Layout, figure composition and plotting

mod figure;
mod layout;
mod plotter;
mod renderer;
mod style;

pub use figure::{Figure, Tick};
pub use layout::BarLayout;
pub use plotter::ChartPlotter;
pub use renderer::{ChartRenderer, RenderError};
pub use style::{FontSpec, StyleConfig};
