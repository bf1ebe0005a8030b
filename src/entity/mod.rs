pub mod productos;

pub use productos::Entity as Productos;
