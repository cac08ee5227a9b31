pub mod lat_long_location;
pub mod place_record;
