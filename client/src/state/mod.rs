//! Client-side state models.
//!
//! DESIGN
//! ======
//! Models are plain structs with synchronous setters so pages can hold them in
//! a single `RwSignal` and tests can drive them without a reactive runtime.

pub mod sign_in;
