pub mod assets;
pub mod config;
pub mod forwarder;
pub mod models;
pub mod storage;
pub mod test_utils;
pub mod utils;
pub mod waitlist;
pub mod web;

pub use utils::state;
