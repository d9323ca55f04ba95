//! # MIEP
//!
//! A tiny line-numbered language of one character statements,
//! interpreted straight from its source text.
//!
//! Install with `cargo install miep-lang` and run a program with
//! `miep program.mp`.
//! ```text
//! 10 "Hello World"/
//! 20 *QU
//! ```
//!
//! The interpreter can also be embedded. A `Runtime` is driven by
//! calling `execute` and handling the `Event` it returns.
//! ```
//! use miep::mach::{Event, Runtime};
//! let mut runtime = Runtime::default();
//! runtime.load("10 ?=6*7 /\n");
//! runtime.start();
//! let mut output = String::new();
//! loop {
//!     match runtime.execute(1000) {
//!         Event::Print(s) => output.push_str(&s),
//!         Event::Running => {}
//!         _ => break,
//!     }
//! }
//! assert_eq!(output, "42\n");
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/chapter_3.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_3;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
