pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
