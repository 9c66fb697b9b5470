pub mod app;
pub mod config;
pub mod depot;
pub mod error;
pub mod middleware;
pub mod seeder;
pub mod store_handler;

#[cfg(test)]
pub(crate) mod test_support;
