//! Pay package and gross margin engine for travel-nurse staffing contracts.
//!
//! This crate prices a contract from its bill rates, pay rate, hours,
//! stipends and one-time payments: what the candidate is paid, what the
//! client is billed after the agency fee, and the gross margin left over.
//! Evaluation is a pure function of the input record and a rate card
//! ([`config::EngineConfig`]); see [`calculation::compute`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
