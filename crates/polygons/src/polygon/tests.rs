use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn poly(n: u32, r: f64) -> Polygon {
    Polygon::new(n, r).expect("valid polygon")
}

fn touch_all(p: &Polygon) -> [f64; 5] {
    [
        p.interior_angle(),
        p.edge_length(),
        p.apothem(),
        p.area(),
        p.perimeter(),
    ]
}

#[test]
fn accessors_and_aliases() {
    let p = poly(3, 1.0);
    assert_eq!(p.edge_count(), 3);
    assert_eq!(p.vertex_count(), 3);
    assert_eq!(p.circumradius(), 1.0);
}

#[test]
fn triangle_and_square_values() {
    let p3 = poly(3, 1.0);
    assert_eq!(p3.interior_angle(), 60.0);

    let p4 = poly(4, 1.0);
    assert_eq!(p4.interior_angle(), 90.0);
    assert!((p4.edge_length() - std::f64::consts::SQRT_2).abs() < 1e-12);
    assert!((p4.apothem() - 0.707).abs() < 1e-3);
    assert!((p4.area() - 2.0).abs() < 1e-12);
    assert!((p4.perimeter() - 4.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn hexagon_edge_equals_radius() {
    // Six equilateral triangles: s = R, area = 3√3/2 R².
    let p = poly(6, 2.5);
    assert!((p.edge_length() - 2.5).abs() < 1e-12);
    assert!((p.area() - 1.5 * 3f64.sqrt() * 2.5 * 2.5).abs() < 1e-12);
    assert_eq!(p.interior_angle(), 120.0);
}

#[test]
fn display_repr() {
    assert_eq!(poly(3, 1.0).to_string(), "Polygon(n=3, circumradius=1)");
    assert_eq!(poly(5, 15.8).to_string(), "Polygon(n=5, circumradius=15.8)");
}

#[test]
fn cache_starts_empty_and_fills_lazily() {
    let p = poly(7, 10.0);
    assert!(p.cache.is_empty());
    let _ = p.area();
    // area pulls in edge_length and apothem, but not the angle or perimeter.
    assert!(!p.cache.is_empty());
    assert!(p.cache.interior_angle.get().is_none());
    assert!(p.cache.perimeter.get().is_none());
    assert!(p.cache.edge_length.get().is_some());
    assert!(p.cache.apothem.get().is_some());
    let _ = touch_all(&p);
    assert!(p.cache.is_full());
}

#[test]
fn mutation_invalidates_cache() {
    let mut p = poly(7, 10.0);
    let before = touch_all(&p);
    assert!(p.cache.is_full());

    p.set_edge_count(6).unwrap();
    assert!(p.cache.is_empty());
    let after_n = touch_all(&p);
    assert_eq!(after_n, touch_all(&poly(6, 10.0)));
    assert_ne!(before, after_n);

    p.set_circumradius(3.0).unwrap();
    assert!(p.cache.is_empty());
    assert_eq!(touch_all(&p), touch_all(&poly(6, 3.0)));

    p.set_vertex_count(9).unwrap();
    assert!(p.cache.is_empty());
    assert_eq!(p.edge_count(), 9);
    assert_eq!(touch_all(&p), touch_all(&poly(9, 3.0)));
}

#[test]
fn failed_mutation_leaves_polygon_untouched() {
    let mut p = poly(5, 2.0);
    let vals = touch_all(&p);
    assert!(p.set_edge_count(2).unwrap_err().is_validation());
    assert!(p.set_vertex_count(0).unwrap_err().is_validation());
    assert!(p.set_circumradius(-1.0).unwrap_err().is_validation());
    assert!(p.set_circumradius(f64::NAN).unwrap_err().is_validation());
    assert_eq!(p.edge_count(), 5);
    assert_eq!(p.circumradius(), 2.0);
    assert!(p.cache.is_full());
    assert_eq!(touch_all(&p), vals);
}

#[test]
fn equality_is_exact_on_both_parameters() {
    assert_eq!(poly(8, 12.0), poly(8, 12.0));
    assert_ne!(poly(10, 11.0), poly(10, 22.0));
    assert_ne!(poly(3, 1.0), poly(4, 1.0));
    assert_ne!(poly(8, 1.0), poly(8, 1.0 + f64::EPSILON));

    // Cache state plays no part.
    let a = poly(8, 12.0);
    let _ = touch_all(&a);
    assert_eq!(a, poly(8, 12.0));
}

#[test]
fn ordering_uses_edge_count_only() {
    let p1 = poly(3, 10.0);
    let p2 = poly(10, 10.0);
    let p3 = poly(15, 10.0);
    assert!(p2 > p1);
    assert!(p2 < p3);
    assert!(poly(4, 100.0) < poly(5, 0.1));

    let same_n = (poly(6, 1.0), poly(6, 2.0));
    assert!(!(same_n.0 < same_n.1) && !(same_n.0 > same_n.1));
    assert_eq!(same_n.0.partial_cmp(&same_n.1), None);
    assert_eq!(poly(6, 1.0).partial_cmp(&poly(6, 1.0)), Some(Ordering::Equal));
}

#[test]
fn constructor_errors() {
    assert!(Polygon::new(2, 12.0).unwrap_err().is_validation());
    assert!(Polygon::new(5, -12.0).unwrap_err().is_validation());
    assert!(Polygon::new(5, 0.0).unwrap_err().is_validation());
    assert!(Polygon::new(5, f64::INFINITY).unwrap_err().is_validation());

    assert!(Polygon::from_scalars(2, 12).unwrap_err().is_validation());
    assert!(Polygon::from_scalars(5, -12).unwrap_err().is_validation());
    assert!(Polygon::from_scalars(7.3, 12).unwrap_err().is_validation());
    assert!(Polygon::from_scalars("a", 12).unwrap_err().is_type());
    assert!(Polygon::from_scalars(Scalar::complex(5.0, 5.0), 12)
        .unwrap_err()
        .is_type());
    assert!(Polygon::from_scalars(7, "12").unwrap_err().is_type());
    assert!(Polygon::from_scalars(7, Scalar::complex(12.0, 0.0))
        .unwrap_err()
        .is_type());
}

#[test]
fn from_scalars_accepts_numeric_kinds() {
    assert_eq!(Polygon::from_scalars(7, 12).unwrap(), poly(7, 12.0));
    assert_eq!(Polygon::from_scalars(7.0, 12.5).unwrap(), poly(7, 12.5));
    assert_eq!(Polygon::from_scalars(5u32, 15.8f64).unwrap(), poly(5, 15.8));
}

#[test]
fn vertices_lie_on_circumcircle_and_span_edges() {
    let p = poly(9, 3.0);
    let vs = p.vertices();
    assert_eq!(vs.len(), 9);
    assert!((vs[0] - Vector2::new(3.0, 0.0)).norm() < 1e-12);
    for (i, v) in vs.iter().enumerate() {
        assert!((v.norm() - 3.0).abs() < 1e-12);
        let w = vs[(i + 1) % vs.len()];
        assert!(((w - v).norm() - p.edge_length()).abs() < 1e-12);
        // CCW: consecutive vertices turn left.
        assert!(v.x * w.y - v.y * w.x > 0.0);
    }
}

#[test]
fn efficiency_is_half_apothem_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..32 {
        let n = rng.gen_range(3..200u32);
        let r = rng.gen_range(0.01..100.0);
        let p = poly(n, r);
        assert!((p.efficiency() - p.apothem() / 2.0).abs() < 1e-9 * r);
    }
}

#[test]
fn clone_carries_cache_but_not_shared() {
    let a = poly(5, 1.0);
    let _ = touch_all(&a);
    let mut b = a.clone();
    assert!(b.cache.is_full());
    b.set_circumradius(2.0).unwrap();
    assert!(b.cache.is_empty());
    assert!(a.cache.is_full());
}

proptest! {
    #[test]
    fn interior_angle_bounded_and_increasing(n in 3u32..10_000, r in 1e-6f64..1e6) {
        let a = poly(n, r).interior_angle();
        let b = poly(n + 1, r).interior_angle();
        prop_assert!(a > 0.0 && a < 180.0);
        prop_assert!(b > a);
    }

    #[test]
    fn perimeter_is_edge_count_times_edge_length(n in 3u32..100_000, r in 1e-6f64..1e6) {
        let p = poly(n, r);
        prop_assert_eq!(p.perimeter(), f64::from(n) * p.edge_length());
    }

    #[test]
    fn equality_reflexive_and_symmetric(
        n1 in 3u32..50, r1 in 0.1f64..10.0,
        n2 in 3u32..50, r2 in 0.1f64..10.0,
    ) {
        let a = poly(n1, r1);
        let b = poly(n2, r2);
        prop_assert!(a == a.clone());
        prop_assert_eq!(a == b, b == a);
        prop_assert_eq!(a == b, n1 == n2 && r1 == r2);
    }

    #[test]
    fn ordering_matches_edge_count(
        n1 in 3u32..50, n2 in 3u32..50, r1 in 0.1f64..10.0, r2 in 0.1f64..10.0,
    ) {
        let a = poly(n1, r1);
        let b = poly(n2, r2);
        prop_assert_eq!(a > b, n1 > n2);
        prop_assert_eq!(a < b, n1 < n2);
    }

    #[test]
    fn recompute_after_mutation_matches_fresh(
        n in 3u32..500, r in 0.1f64..10.0, n2 in 3u32..500, r2 in 0.1f64..10.0,
    ) {
        let mut p = poly(n, r);
        let _ = touch_all(&p);
        p.set_edge_count(n2).unwrap();
        p.set_circumradius(r2).unwrap();
        prop_assert_eq!(touch_all(&p), touch_all(&poly(n2, r2)));
    }
}
