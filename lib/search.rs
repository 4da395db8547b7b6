mod agent;
mod deadline;
mod engine;
mod info;
mod options;
mod score;

pub use agent::*;
pub use deadline::*;
pub use info::*;
pub use options::*;
pub use score::*;
