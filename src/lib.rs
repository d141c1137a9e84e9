pub mod config;
pub mod demo;
pub mod diagram;
pub mod display_width;
pub mod error;
pub mod layout;
pub mod loader;
pub mod renderer;
pub mod span;

use std::path::Path;

pub use config::{Config, DEFAULT_SCREEN_WIDTH};
pub use diagram::{Diagram, Interaction};
pub use error::{Error, LoadError, RenderError, Result};
pub use layout::Layout;
pub use renderer::Lines;

pub fn render(diagram: &Diagram) -> Result<String, RenderError> {
    render_with_config(diagram, &Config::default())
}

pub fn render_with_config(diagram: &Diagram, config: &Config) -> Result<String, RenderError> {
    let layout = layout::compute(diagram, config)?;
    Ok(renderer::render(&layout))
}

/// Loads flow `flow_index` of a JSON flow file and renders it.
pub fn render_file(path: &Path, flow_index: usize, config: &Config) -> Result<String> {
    let diagram = loader::load_file(path, flow_index)?;
    Ok(render_with_config(&diagram, config)?)
}
