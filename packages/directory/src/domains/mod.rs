// Listing domains
pub mod academy;
pub mod ecosystem;
pub mod jobs;
pub mod tag;
