// Integration tests module

mod integration {
    mod api_test;
    mod config_test;
    mod loader_test;
    mod output_test;
    mod registry_test;
}
