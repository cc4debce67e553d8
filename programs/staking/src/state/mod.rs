pub mod config;
pub mod pools;
pub mod stakers;

pub use config::*;
pub use pools::*;
pub use stakers::*;
