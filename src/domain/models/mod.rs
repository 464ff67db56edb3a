pub mod site;
pub mod upload;

pub use site::*;
pub use upload::*;
