pub mod style;
pub mod theme;
pub mod tree;
pub mod page;
pub mod markup;
pub mod app;
pub mod mount;
