pub mod app_state_builder;
pub mod auth_helper;
pub mod page_fixtures;
pub mod stubs;
