use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dihz::binary_system::{BinarySystem, Formulation};
use dihz::semianalytic::{RootMethod, SolverParams};
use dihz::system::{BinaryOrbit, BinaryType, StarParams};
use dihz::zone_map::ZoneMap;

/// Sun-like primary with a random fainter companion.
#[inline]
fn make_system(rng: &mut StdRng, ab_range: std::ops::Range<f64>, eb_max: f64) -> BinarySystem {
    let primary = StarParams {
        luminosity: 1.0,
        teff: 5777.0,
        mass: 1.0,
    };
    let secondary = StarParams {
        luminosity: rng.random_range(0.01..0.5),
        teff: rng.random_range(3500.0..5500.0),
        mass: rng.random_range(0.2..0.9),
    };
    let orbit = BinaryOrbit {
        semi_major_axis: rng.random_range(ab_range),
        eccentricity: rng.random_range(0.0..eb_max),
    };
    BinarySystem {
        primary,
        secondary,
        orbit,
    }
}

/// Circumstellar PHZ, wide companions: ab ∈ [10, 50] au, eb ∈ [0, 0.3]
fn bench_phz_s(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 1_000usize;

    for method in [RootMethod::Secant, RootMethod::Newton] {
        let params = SolverParams::builder().method(method).build().unwrap();
        c.bench_function(&format!("phz_s_numeric/{method}"), |b| {
            b.iter_batched(
                || {
                    // Pre-generate systems to keep the RNG out of the timed section
                    (0..samples)
                        .map(|_| make_system(&mut rng, 10.0..50.0, 0.3))
                        .collect::<Vec<_>>()
                },
                |systems| {
                    for system in systems {
                        let sol = system.phz_numeric(BinaryType::SType, black_box(&params));
                        black_box(sol.ok());
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
}

/// Circumbinary PHZ, tight pairs: ab ∈ [0.05, 0.3] au, eb ∈ [0, 0.3]
fn bench_phz_p(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 1_000usize;
    let params = SolverParams::default();

    c.bench_function("phz_p_numeric/secant", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| make_system(&mut rng, 0.05..0.3, 0.3))
                    .collect::<Vec<_>>()
            },
            |systems| {
                for system in systems {
                    let sol = system.phz_numeric(BinaryType::PType, black_box(&params));
                    black_box(sol.ok());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Full summary plus a default 201 × 201 map for a fixed system.
fn bench_zone_map(c: &mut Criterion) {
    let system = BinarySystem::new(
        StarParams::new(1.0, 5777.0, 1.0).unwrap(),
        StarParams::new(0.05, 4000.0, 0.6).unwrap(),
        BinaryOrbit::new(20.0, 0.1).unwrap(),
    )
    .unwrap();
    let formulation = Formulation::SemiAnalytic(SolverParams::default());

    c.bench_function("zone_map/s_type_default_grid", |b| {
        b.iter(|| {
            let summary = system
                .summary(BinaryType::SType, black_box(&formulation))
                .unwrap();
            let map = ZoneMap::with_defaults(&summary, BinaryType::SType).unwrap();
            black_box(map);
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_phz_s, bench_phz_p, bench_zone_map
);
criterion_main!(benches);
