pub mod assembler;
pub mod classifier;
pub mod decision;

pub use assembler::{assemble_collections, find_abandoned};
pub use classifier::{classify_group, classify_groups};
pub use decision::plan_cleanup;
