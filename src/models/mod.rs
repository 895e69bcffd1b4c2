//! Data models for the library server

pub mod book;
pub mod member;

// Re-export commonly used types
pub use book::{Book, BookSearch, CreateBook, UpdateBook};
pub use member::{CreateMember, Member, MemberShort, UpdateMember};
