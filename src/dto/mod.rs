pub mod productos;
