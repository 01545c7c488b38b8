pub mod analytics;
pub mod composer;
pub mod reports;
