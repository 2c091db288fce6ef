pub mod add;
pub mod backup;
pub mod del;
pub mod list;
pub mod log;
pub mod review;
pub mod scheduler;
