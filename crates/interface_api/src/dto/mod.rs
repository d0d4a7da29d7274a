//! Request and response bodies

pub mod depreciation;
