pub use netorder_bytes as bytes;
pub use netorder_text as text;
