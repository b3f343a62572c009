/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the resolution layer isolated.
mod mine_request;
mod mine_response;
mod output_format;

pub use mine_request::{MineRequest, MineRequestBuilder};
pub use mine_response::MineResponse;
pub use output_format::OutputFormat;
