pub mod challenge;
pub mod profile;
pub mod survey;
pub mod user;

pub use challenge::Challenge;
pub use profile::{MaybeStats, Profile, ProfileStats, ProfileUpdate};
pub use survey::{AdminSurvey, SurveyAnswers, SurveyResponse};
pub use user::{PublicUser, User};
