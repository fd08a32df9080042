//! # BASM
//!
//! A tiny assembly-like language: nine instructions, 2048 memory cells,
//! one comparison flag.
//!
//! ```
//! use basm::mach::{Event, Listing, Runtime};
//!
//! let mut runtime = Runtime::default();
//! runtime.load("MOV 0x00, 5\nADD 0x00, 3\nOUT 0x00\nRET".parse::<Listing>().unwrap());
//! assert_eq!(runtime.execute(100), Event::Print("8".to_string()));
//! assert_eq!(runtime.execute(100), Event::End(0));
//! assert_eq!(runtime.execute(100), Event::Stopped);
//! ```
//!
//! The `basm` executable runs a program file on the console with
//! timestamped output and a memory dump at the end.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/instructions.rs"]
#[allow(non_snake_case)]
pub mod __Instructions;

pub mod lang;
pub mod mach;
