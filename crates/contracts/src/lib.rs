pub mod elements;
pub mod navigation;
pub mod parameters;
