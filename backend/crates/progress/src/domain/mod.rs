//! Progress Domain Layer

pub mod achievements;
pub mod badges;
pub mod catalog;
pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
