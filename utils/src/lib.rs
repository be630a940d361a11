//! Helpers shared by the daily solvers: counting utilities, input loading,
//! logging setup and the parse error every day reports through.

mod counting;
mod error;
pub mod input;
pub mod telemetry;

pub use counting::{count_if, counter};
pub use error::ParseError;
pub use input::InputError;
