/// Catalog core: view models and the mapping rules that turn loose
/// upstream records into them.
pub mod domain;
pub mod services;
