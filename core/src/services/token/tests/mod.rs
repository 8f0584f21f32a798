mod cleanup_tests;
mod store_tests;
