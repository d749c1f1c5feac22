pub mod context;
pub mod errors;
pub mod ids;
pub mod plan;
pub mod report;
pub mod safepath;

pub use context::*;
pub use errors::*;
pub use ids::*;
pub use plan::*;
pub use report::*;
pub use safepath::*;
