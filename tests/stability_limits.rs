use approx::assert_relative_eq;
use dihz::dihz_errors::DihzError;
use dihz::stability::{hw99_p, hw99_s, stability_limit, stability_limit_for_tag};
use dihz::system::BinaryType;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn tags_are_case_insensitive_aliases() {
    let s = hw99_s(1.0, 0.5, 0.2, 0.3);
    let p = hw99_p(1.0, 0.5, 0.2, 0.3);

    for tag in ["S", "s", "S-Type", "circumstellar", " Circumstellar "] {
        assert_eq!(stability_limit_for_tag(tag, 1.0, 0.5, 0.2, 0.3).unwrap(), s);
    }
    for tag in ["P", "p-type", "CIRCUMBINARY"] {
        assert_eq!(stability_limit_for_tag(tag, 1.0, 0.5, 0.2, 0.3).unwrap(), p);
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let invalid = |r: Result<f64, DihzError>| matches!(r, Err(DihzError::InvalidInput(_)));

    assert!(invalid(stability_limit_for_tag("S", 1.0, 0.5, 0.2, 1.0)));
    assert!(invalid(stability_limit_for_tag("S", 1.0, 0.5, 0.0, 0.3)));
    assert!(invalid(stability_limit_for_tag("X", 1.0, 0.5, 0.2, 0.3)));
    assert!(invalid(stability_limit_for_tag("stype", 1.0, 0.5, 0.2, 0.3)));
    assert!(invalid(stability_limit(BinaryType::PType, 1.0, 0.5, -1.0, 0.3)));
}

#[test]
fn circumstellar_limit_lies_inside_the_binary() {
    let mut rng = StdRng::seed_from_u64(42_u64);
    for _ in 0..1000 {
        // the fits are calibrated for a secondary no heavier than the primary
        let m_a = rng.random_range(0.2..2.0);
        let m_b = rng.random_range(0.1..m_a);
        let ab = rng.random_range(0.1..100.0);
        let eb = rng.random_range(0.0..0.8);

        let s = stability_limit(BinaryType::SType, m_a, m_b, ab, eb).unwrap();
        let p = stability_limit(BinaryType::PType, m_a, m_b, ab, eb).unwrap();

        assert!(s > 0.0 && s < ab * (1.0 - eb), "S-type limit {s} for ab={ab} eb={eb}");
        assert!(p > ab, "P-type limit {p} for ab={ab} eb={eb}");
    }
}

#[test]
fn limits_scale_with_binary_separation() {
    let s1 = hw99_s(1.0, 0.5, 1.0, 0.2);
    let p1 = hw99_p(1.0, 0.5, 1.0, 0.2);
    assert_relative_eq!(hw99_s(1.0, 0.5, 7.5, 0.2), 7.5 * s1, max_relative = 1e-14);
    assert_relative_eq!(hw99_p(1.0, 0.5, 7.5, 0.2), 7.5 * p1, max_relative = 1e-14);
}
