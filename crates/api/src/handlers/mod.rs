pub mod movies;
pub mod page;
pub mod trending;
