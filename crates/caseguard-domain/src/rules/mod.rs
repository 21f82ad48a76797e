//! Rule groups, one module per tier of the evaluation order.
//!
//! Each `apply` returns `Some(decision)` to short-circuit or `None` to pass
//! evaluation to the next tier. The engine owns the ordering; later tiers
//! only see inputs the earlier tiers declined.

pub mod admin;
pub mod guest;
pub mod rejected;
pub mod user;
