pub mod admin;
pub mod response;
pub mod session;

pub use admin::admin_token_middleware;
pub use response::{ApiResponse, ApiResult, Message};
pub use session::{
    expired_session_cookie, session_context_middleware, session_cookie,
    session_token, SessionContext,
};
