/*!
## Rust Machine Module

This Rust module is the MIEP interpreter. There is no compiler: the
program text is scanned and executed in one pass, with the scan
position acting as program counter.

*/

mod eval;
mod flow;
mod frame;
mod io;
mod memory;
mod operation;
mod program;
mod runtime;
mod stack;
mod var;

#[cfg(test)]
mod tests;

pub use frame::Frame;
pub use io::{justify, parse_number, Input};
pub use memory::{Memory, MEMORY_SIZE};
pub use operation::{Operation, Operator, UnaryOperator};
pub use program::{Program, LINE_END, LINE_NONE};
pub use runtime::Event;
pub use runtime::Runtime;
pub use stack::Stack;
pub use var::Var;
