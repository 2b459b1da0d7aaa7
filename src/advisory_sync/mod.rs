/// Advisory sync - Core domain and services of the pipeline
///
/// - **Domain** (`domain`): advisory record and version manifest models
/// - **Services** (`services`): version lister, advisory fetcher, record
///   splitter, and record writer used by the update use case
pub mod domain;
pub mod services;
