pub mod a001_boat_type;
pub mod a002_boat;
pub mod a003_marina;
pub mod a004_itinerary;
pub mod a005_country;
pub mod a006_state;
pub mod a007_city;
pub mod a008_article;
