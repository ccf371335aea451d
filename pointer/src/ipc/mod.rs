//! Line-oriented s-expression interface for recorded or piped frames.

pub mod sexp;

pub use sexp::{frame_to_sexp, parse_frame};
