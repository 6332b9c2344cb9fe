use approx::assert_relative_eq;
use dihz::binary_system::BinarySystem;
use dihz::system::{BinaryOrbit, HzBoundaries, StarParams};

pub fn assert_boundaries_close(actual: &HzBoundaries, expected: &HzBoundaries, max_relative: f64) {
    assert_relative_eq!(actual.inner, expected.inner, max_relative = max_relative);
    assert_relative_eq!(actual.outer, expected.outer, max_relative = max_relative);
}

pub fn sun() -> StarParams {
    StarParams::new(1.0, 5777.0, 1.0).unwrap()
}

/// Faint K dwarf on a wide orbit around the Sun: weakly perturbed S-type system.
pub fn wide_k_dwarf_system(eb: f64) -> BinarySystem {
    BinarySystem::new(
        sun(),
        StarParams::new(0.05, 4000.0, 0.6).unwrap(),
        BinaryOrbit::new(20.0, eb).unwrap(),
    )
    .unwrap()
}

/// Tight Sun + K-type pair: weakly perturbed P-type system.
pub fn tight_pair_system(ab: f64, eb: f64) -> BinarySystem {
    BinarySystem::new(
        sun(),
        StarParams::new(0.3, 4500.0, 0.5).unwrap(),
        BinaryOrbit::new(ab, eb).unwrap(),
    )
    .unwrap()
}
