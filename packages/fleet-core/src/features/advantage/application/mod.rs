pub mod lower_bound;
