mod config_tests;
mod ordered_map_tests;
