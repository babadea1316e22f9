pub mod account_service;
pub mod admin_service;
pub mod challenge_service;
pub mod profile_service;
pub mod survey_service;

pub use account_service::{AccountError, AccountService, Credentials};
pub use admin_service::{AdminService, AdminStats, AdminUser};
pub use challenge_service::ChallengeService;
pub use profile_service::ProfileService;
pub use survey_service::SurveyService;
