mod filter_tests;
mod validation_tests;
