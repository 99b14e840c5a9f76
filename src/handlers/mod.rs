pub mod create;
pub mod dispatch;
pub mod get;
pub mod health;
pub mod list;

#[cfg(test)]
pub(crate) mod test_support;

pub use create::create_handler;
pub use dispatch::dispatch_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use list::list_handler;
