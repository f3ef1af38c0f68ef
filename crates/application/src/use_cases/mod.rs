pub mod lookup;

pub use lookup::{LookupReport, LookupRequest, LookupUseCase, QueryMode};
