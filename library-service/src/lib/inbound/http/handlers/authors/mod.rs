pub mod activate_author;
pub mod create_author;
pub mod deactivate_author;
pub mod delete_author;
pub mod get_author;
pub mod list_authors;
pub mod update_author;

pub use activate_author::activate_author;
pub use create_author::create_author;
pub use deactivate_author::deactivate_author;
pub use delete_author::delete_author;
pub use get_author::get_author;
pub use list_authors::list_authors;
pub use update_author::update_author;
