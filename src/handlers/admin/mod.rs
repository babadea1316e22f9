// handlers/admin/mod.rs - Admin console endpoints (/api/admin/*)
//
// Gated by `admin_token_middleware` when ADMIN_TOKEN is set.
pub mod challenges; // GET /api/admin/challenges
pub mod stats;      // GET /api/admin/stats
pub mod surveys;    // GET /api/admin/surveys
pub mod users;      // GET /api/admin/users, DELETE /api/admin/users/:id

pub use challenges::challenges_get;
pub use stats::stats_get;
pub use surveys::surveys_get;
pub use users::{user_delete, users_get};
