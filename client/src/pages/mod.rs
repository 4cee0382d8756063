//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped state and orchestration; `state` and `util`
//! hold the framework-free pieces.

pub mod sign_in;
