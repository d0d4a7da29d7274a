//! Request handlers

pub mod depreciation;
pub mod health;
