pub mod store;
pub mod teleport_arena;
