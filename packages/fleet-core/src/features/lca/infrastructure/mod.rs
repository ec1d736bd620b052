pub mod jump_table;
