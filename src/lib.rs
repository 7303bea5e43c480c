pub mod confirm;
pub mod corpus;
pub mod output;
pub mod scoring;
pub mod sheets;
pub mod validate;
