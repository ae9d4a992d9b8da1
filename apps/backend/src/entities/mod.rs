pub mod categories;
pub mod questions;

pub use categories::Entity as Categories;
pub use categories::Model as Category;
pub use questions::Entity as Questions;
pub use questions::Model as Question;
