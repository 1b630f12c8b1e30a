pub mod args;
pub mod error;
pub mod metadata;
pub mod mode;
pub mod output;
pub mod syncer;
pub mod utils;
