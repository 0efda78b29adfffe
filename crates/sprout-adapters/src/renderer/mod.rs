//! Source code renderers.

mod source;

pub use source::SpringSourceWriter;
