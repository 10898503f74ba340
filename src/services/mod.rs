pub mod quiz_renderer;
pub mod quiz_service;
