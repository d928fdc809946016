//! Domain layer for sand replacement field density testing

pub mod constants;
pub mod model;
pub mod repository;
pub mod service;
