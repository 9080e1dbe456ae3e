mod catalog_tests;
mod health_tests;
mod lookup_tests;
mod upload_tests;
