pub mod artifact;
pub mod fallback;
pub mod runtime;

pub use fallback::*;
pub use runtime::*;
