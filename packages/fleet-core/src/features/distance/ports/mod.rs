pub mod ship_distance;
