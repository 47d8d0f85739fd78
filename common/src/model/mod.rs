pub mod practitioner;
pub mod product;
