pub mod diagnostic_helpers;
pub mod model_fixtures;
