pub mod info_hash;
pub mod tracker_address;
