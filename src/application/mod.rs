/// Application layer: registry loading and the classify → resolve → dispatch pipeline
pub mod services;
pub mod use_cases;
