mod config_tests;
mod generate_tests;
