pub mod display;
pub mod pagination;
pub mod surface;
pub mod worker;
