pub mod canvas;
pub mod controls;
