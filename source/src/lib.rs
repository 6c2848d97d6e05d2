pub mod blocks;
pub mod database;
pub mod error;
pub mod hex;
pub mod properties;
pub mod ranges;
pub mod record;
pub mod unicode;

pub use blocks::BlockRange;
pub use blocks::BlockTable;

pub use database::plane_name;
pub use database::CodepointDescription;
pub use database::UnicodeDatabase;

pub use error::CodepointNotFound;
pub use error::UcdError;

pub use properties::CodepointRecord;
pub use properties::GeneralCategory;

pub use ranges::AlgorithmicRange;

pub use unicode::Classification;
pub use unicode::CodepointStore;
