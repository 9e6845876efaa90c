//! Markup parsing module.

mod builder;
mod inline;
mod line;
mod markup;
mod options;
mod state;

pub use builder::{DocumentBuilder, ModelBuilder};
pub use inline::{format_inline, InlineSpanFormatter};
pub use line::{classify, split_cells, LineKind};
pub use markup::MarkupRenderer;
pub use options::RenderConfig;
pub use state::{Input, State};
