pub mod ledger;
pub mod service;
pub mod stats;

pub use ledger::WaitlistLedger;
pub use service::{SignupOutcome, WaitlistService};
pub use stats::format_signup_count;
