pub mod account;
pub mod message;
pub use account::*;
pub use message::Message;

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(components(schemas(
    NewAccount,
    UpdateAccount,
    AccountResponse,
    Message,
)))]
/// Captures OpenAPI schemas defined in the DTO module
pub struct OpenApiSchemas;
