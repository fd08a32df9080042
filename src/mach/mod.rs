/*!
## Rust Machine Module

This Rust module is the virtual machine for BASM.

*/

pub type Address = usize;

mod flag;
mod listing;
mod memory;
mod opcode;
mod operation;
mod runtime;
mod val;

pub use flag::Flag;
pub use listing::Listing;
pub use memory::Memory;
pub use memory::ADDRESS_PREFIX;
pub use memory::MAX_MEMORY;
pub use opcode::Opcode;
pub use operation::Directive;
pub use operation::Machine;
pub use operation::Operation;
pub use runtime::exit_status;
pub use runtime::Event;
pub use runtime::Runtime;
pub use val::Val;

#[cfg(test)]
mod tests;
