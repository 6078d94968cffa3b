// Handlers module - API endpoint handlers

pub mod claude;
pub mod health;
