//! Volatile blog-list state for the home feed.
//!
//! DESIGN
//! ======
//! Pure in-memory transformations over the fetched list; none of these
//! operations perform I/O or can fail. Identity key is the blog `id` and
//! the list holds at most one entry per id.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::types::Blog;

/// Shared blog-list state plus loading/error flags.
#[derive(Clone, Debug, Default)]
pub struct BlogsState {
    /// Most-recently-created-first after a local create, otherwise
    /// server-supplied order.
    pub blogs: Vec<Blog>,
    pub loading: bool,
    pub error: Option<String>,
}

impl BlogsState {
    /// Replace the entire list and clear any stored error.
    pub fn set_blogs(&mut self, blogs: Vec<Blog>) {
        self.blogs = blogs;
        self.error = None;
    }

    /// Prepend one blog and clear any stored error.
    pub fn add_blog(&mut self, blog: Blog) {
        self.blogs.insert(0, blog);
        self.error = None;
    }

    /// Replace the entry whose id matches; no insert when absent.
    pub fn update_blog(&mut self, id: i64, updated: Blog) {
        if let Some(slot) = self.blogs.iter_mut().find(|blog| blog.id == id) {
            *slot = updated;
        }
    }

    /// Drop the entry whose id matches; no-op when absent.
    pub fn remove_blog(&mut self, id: i64) {
        self.blogs.retain(|blog| blog.id != id);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
