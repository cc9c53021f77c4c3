//! Shared contracts between the admin frontend and the REST backend:
//! entity shapes, form DTOs with their validation rules, and the
//! session / password-recovery payloads.

pub mod domain;
pub mod shared;
pub mod system;
