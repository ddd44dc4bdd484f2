pub mod analytics;
pub mod dom;
pub mod scroll;
