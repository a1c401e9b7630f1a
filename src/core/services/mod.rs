pub mod browser;
pub mod codec;
pub mod storage;

pub use codec::*;
pub use storage::*;
