pub mod client_type;

pub use client_type::ClientType;
