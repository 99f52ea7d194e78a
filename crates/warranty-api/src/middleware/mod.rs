//! Request middleware

pub mod route_gate;

pub use route_gate::route_gate;
