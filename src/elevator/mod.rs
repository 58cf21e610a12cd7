pub mod car;
pub mod error;
pub mod stop_queue;

pub use car::{Car, DEFAULT_SPEED};
pub use error::CarError;
