mod dataset;
mod error;
mod model;

pub use dataset::Dex;
pub use error::DexError;
pub use model::{Move, Pokemon};
