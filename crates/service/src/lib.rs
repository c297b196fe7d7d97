//! Service layer for the feeding resource.
//! - `db`: free functions over a SeaORM connection, one transaction per mutation.
//! - `feeding`: repository seam and the service holding the NotFound/BadRequest policy.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod feeding;
