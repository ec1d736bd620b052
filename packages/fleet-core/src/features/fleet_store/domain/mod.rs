pub mod post;
pub mod teleport;
