pub mod search;
pub mod snapshot;
pub mod tree;
pub mod values;
