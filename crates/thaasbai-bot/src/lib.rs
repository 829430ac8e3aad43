#![deny(warnings)]
pub mod driver;
pub mod policy;

pub use driver::run_computer_turns;
pub use policy::{HeuristicPolicy, Policy, PolicyContext};
