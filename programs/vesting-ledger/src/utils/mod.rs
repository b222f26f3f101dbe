pub mod accounting;
pub mod batch;
pub mod vault;
