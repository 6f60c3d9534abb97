pub mod coordinates_field;
