// Display-time field sanitizers for product records

pub mod fields;

pub use fields::*;
