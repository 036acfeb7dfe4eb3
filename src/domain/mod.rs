pub mod chunk;
pub mod company;
pub mod corpus;

pub use chunk::*;
pub use company::*;
pub use corpus::*;
