pub mod category;
pub mod product;
pub mod supplier;

pub use category::CategoryRepository;
pub use product::ProductRepository;
pub use supplier::SupplierRepository;
