pub mod persistence;

pub use persistence::FieldMemory;
