pub mod distance_engine;
