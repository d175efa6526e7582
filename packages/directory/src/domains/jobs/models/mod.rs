pub mod job;

pub use job::{Compensation, Job};
