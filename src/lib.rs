pub mod cli;
pub mod data_paths;
pub use data_paths as data;
pub mod ledger;
pub mod logging;
