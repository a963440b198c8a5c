pub mod assemble;
pub use assemble::*;
pub mod cache;
pub use cache::*;
pub mod container;
pub use container::*;
pub mod decoder;
pub use decoder::*;
pub mod dump;
pub use dump::*;
pub mod extended_arg;
pub use extended_arg::*;
pub mod instruction;
pub use instruction::*;
