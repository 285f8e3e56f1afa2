pub mod disease_service;
pub mod models;
