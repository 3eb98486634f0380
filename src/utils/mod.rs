// src/utils/mod.rs

pub mod extract;
pub mod paginate;
pub mod quiz;
