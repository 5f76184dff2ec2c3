pub mod design;
pub mod product;
