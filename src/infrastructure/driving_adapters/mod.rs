//! Driving Adapters

pub mod api_rest;
