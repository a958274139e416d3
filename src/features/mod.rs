pub mod appointments;
pub mod auth;
pub mod documents;
pub mod notes;
pub mod pregnancy;
