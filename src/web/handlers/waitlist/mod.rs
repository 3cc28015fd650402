pub mod check;
pub mod error;
pub mod signup;
pub mod stats;

pub use check::check_email;
pub use error::WaitlistError;
pub use signup::add_signup;
pub use stats::get_stats;
