pub mod authentication;
pub mod config;
pub mod requests;
pub mod responses;
pub mod test;
