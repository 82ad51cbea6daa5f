pub mod deploy;
pub mod encode;
pub mod utils;
