mod completion_provider_tests;
mod test_utils;
mod variable_definition_tracker_tests;
