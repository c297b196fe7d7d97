pub mod feeding_store;
