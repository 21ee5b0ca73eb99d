mod answers;
mod error;
mod participant;
mod summary;
mod week;

pub use answers::*;
pub use error::*;
pub use participant::*;
pub use summary::*;
pub use week::*;
