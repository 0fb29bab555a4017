pub mod error;
pub mod order;
pub mod overlap;
pub mod resolver;
pub mod span;

// Re-export main types for convenient access
pub use error::ResolveError;
pub use order::span_order;
pub use overlap::{classify, Overlap};
pub use resolver::{resolve_spans, SpanSet};
pub use span::Span;
