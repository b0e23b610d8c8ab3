//! Endpoint tests grouped by resource

mod auth_test;
mod postgres_test;
mod posts_test;
