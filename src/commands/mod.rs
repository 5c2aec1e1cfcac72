pub mod export;
pub mod feed;
pub mod import;
pub mod popups;
pub mod search;
