pub mod client;
pub mod endpoint;
pub mod endpoints;
pub mod registry;
pub mod request;
pub mod response;
pub mod tool;

pub use crate::domain::ports::{Tool, ToolDescriptor, ToolOutput};
pub use crate::utils::error::{Result, ToolError};
