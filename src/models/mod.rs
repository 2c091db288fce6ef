pub mod outcome;
pub mod problem;

pub use outcome::Outcome;
pub use problem::{Problem, ProblemView};
