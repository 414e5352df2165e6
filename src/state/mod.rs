//! Application state: composition root, re-entrancy guards and screen routing.
//!
//! DESIGN
//! ======
//! Nothing here is a global. [`context::AppContext`] is built once at startup
//! and provided to the component tree; the router state is a signal owned by
//! the root component.

pub mod context;
pub mod guard;
pub mod router;

#[cfg(test)]
pub mod test_helpers;
