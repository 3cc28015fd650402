pub mod assets;
pub mod waitlist;

pub use assets::resolve_asset;
pub use waitlist::{add_signup, check_email, get_stats};
