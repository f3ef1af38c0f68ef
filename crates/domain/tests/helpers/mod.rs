#![allow(dead_code)]
mod builders;

pub use builders::DecodedRecordBuilder;
