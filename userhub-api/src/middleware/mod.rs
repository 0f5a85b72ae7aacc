/// Middleware modules for the API server
///
/// - `security`: Security response headers
/// - `cors`: CORS layer built from configuration

pub mod cors;
pub mod security;
