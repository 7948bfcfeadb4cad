pub mod book;
pub mod cancel;
pub mod clock;
pub mod windows;
