//! # Route Modules
//!
//! | Path                         | Module              |
//! |------------------------------|---------------------|
//! | `/`, `/schema`, `/test`      | [`system`]          |
//! | `/health/*`, `/metrics`      | [`system`]          |
//! | `/api/create`, `/api/list/*` | [`crud`]            |
//! | `/api/ai/*`                  | [`ai`]              |
//! | `/api/seed/demo`             | [`seed`]            |

pub mod ai;
pub mod crud;
pub mod seed;
pub mod system;
