pub mod book_model;
pub mod paging;
pub mod response_model;
