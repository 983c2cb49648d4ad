pub mod header;
pub mod html;
pub mod id_generator;
