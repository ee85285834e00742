//! Diagnostics derived from the token stream.
//!
//! The scanner reports unrecognised input in-band as `Illegal` tokens. This
//! module turns those tokens into line-tagged errors with optional tips so a
//! driver can report them or fail on them.

pub mod errors;
