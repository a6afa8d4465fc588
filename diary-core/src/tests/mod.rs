mod common;
mod round_trip;
