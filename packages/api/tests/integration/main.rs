mod access_tests;
mod guests_tests;
mod health_tests;
