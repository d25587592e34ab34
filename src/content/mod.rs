//! Content module - blog posts and block classification

mod blocks;
mod post;

pub use blocks::{classify_line, render_blocks, Block};
pub use post::{categories, find_post, posts, slugs, BlogPost, ContentError};
