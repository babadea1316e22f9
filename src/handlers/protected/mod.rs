// handlers/protected/mod.rs - Endpoints that require a live session
//
// Each handler checks `SessionContext::require` itself, so the 401 message
// can differ per endpoint.
pub mod profile; // PUT /api/update-profile
pub mod survey;  // POST /api/submit-survey

pub use profile::update_profile_put;
pub use survey::submit_survey_post;
