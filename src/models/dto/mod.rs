pub mod request;
pub mod response;
pub use request::SubmitTestRequest;
pub use response::{PublishedTest, SubmitTestResponse};
