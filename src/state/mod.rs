mod delegation;
mod delegation_info;
mod utils;

pub use delegation::*;
pub use delegation_info::*;
