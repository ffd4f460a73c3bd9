//! Demo pages

pub mod feed;
