pub mod token_hash;
pub mod uid_codec;
