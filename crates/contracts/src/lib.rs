//! Shared data contracts between the admin frontend and the backend API.
//!
//! The backend is the single source of truth; these types only mirror its
//! wire format (camelCase JSON) and carry the client-side rules that gate
//! which actions the UI may offer for a given order/quote state.

pub mod domain;
pub mod system;
