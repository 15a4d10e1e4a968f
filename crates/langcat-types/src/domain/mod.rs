mod catalog;
mod item;
mod lenient;

pub use catalog::Catalog;
pub use item::Item;
