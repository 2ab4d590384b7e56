mod products;
mod root;

pub use products::{create_product, delete_product, get_product, list_products, update_product};
pub use root::greeting;
