// ABOUTME: Configuration package for Blueprint
// ABOUTME: Environment variable names and typed lookup helpers

pub mod constants;
pub mod env;
