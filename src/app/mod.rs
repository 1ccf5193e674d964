pub mod runner;

pub use runner::{DemoKind, DemoRunner};
