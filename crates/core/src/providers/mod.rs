pub mod mock;
pub mod traits;
