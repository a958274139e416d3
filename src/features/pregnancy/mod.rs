pub mod dto;
pub mod handler;
pub mod model;
pub mod routes;
pub mod service;

pub use routes::routes;
pub use service::PregnancyService;
