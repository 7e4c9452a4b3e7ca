//! Data Transfer Objects for the evaluation API
//!
//! This module contains the request and response bodies exchanged with the
//! evaluation service. DTOs are lightweight representations optimized for
//! network transfer; anything the client keeps around lives in `domain`.

pub mod evaluate;
pub mod health;
