// handlers/public/auth/mod.rs - Account creation and session lifecycle
pub mod login;    // POST /api/login
pub mod logout;   // POST /api/logout
pub mod register; // POST /api/register

pub use login::login_post;
pub use logout::logout_post;
pub use register::register_post;
