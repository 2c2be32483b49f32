pub mod d400_overview;
pub mod d401_geo_risk;
