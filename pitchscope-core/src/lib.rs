//! Pitchscope Core
//!
//! Core types for the pitchscope startup idea evaluator.
//!
//! This crate contains:
//! - Domain types: Core business entities (EvaluationResult, JobStatus, etc.)
//! - DTOs: Data transfer objects exchanged with the evaluation API

pub mod domain;
pub mod dto;
