//! Pipeline module - mapping load, line rewrite, and archive batch steps

pub mod batch;
pub mod error;
pub mod mapping;
pub mod rewrite;

pub use batch::*;
pub use error::*;
pub use mapping::*;
pub use rewrite::*;
