pub mod report;
pub mod shoe;

pub use report::*;
pub use shoe::*;
