pub mod clone_batch;

pub use clone_batch::{BatchReport, CloneBatchConfig, CloneBatchUseCase, ItemOutcome, ItemReport};
