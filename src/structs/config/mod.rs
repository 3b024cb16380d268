pub mod generation_config;
