pub mod api_paths;
