pub mod ai_providers;
