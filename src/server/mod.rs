pub mod app;
pub mod deserializers;
pub mod errors;
pub mod pagination;
mod routes;
