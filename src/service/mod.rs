mod command;
#[cfg(test)]
mod mock;
mod query;

pub use self::command::ProductCommandService;
pub use self::query::ProductQueryService;
