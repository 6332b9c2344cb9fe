pub mod binary_system;
pub mod circumbinary;
pub mod circumstellar;
pub mod constants;
pub mod dihz_errors;
pub mod eccentricity;
pub mod insolation;
pub mod regime;
pub mod semianalytic;
pub mod single_star;
pub mod stability;
pub mod sweep;
pub mod system;
pub mod zone_map;
