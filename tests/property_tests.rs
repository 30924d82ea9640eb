//! Randomized law tests: algebraic properties that must hold for any
//! input, checked over seeded random vectors and masks.

use lanewise::prelude::*;
use rand::prelude::*;

fn random_vector<const N: usize>(rng: &mut StdRng) -> Vector<i32, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    Vector::from_fn(|_| rng.gen())
}

fn random_mask<const N: usize>(rng: &mut StdRng) -> Mask<N>
where
    LaneCount<N>: SupportedLaneCount,
{
    Mask::from_fn(|_| rng.gen_bool(0.5))
}

fn random_divisor<const N: usize>(rng: &mut StdRng) -> Vector<i32, N>
where
    LaneCount<N>: SupportedLaneCount,
{
    // Magnitude at least 2: excludes zero and the MIN / -1 overflow.
    Vector::from_fn(|_| {
        let magnitude = rng.gen_range(2..=64);
        if rng.gen_bool(0.5) {
            magnitude
        } else {
            -magnitude
        }
    })
}

#[test]
fn test_masked_ops_decompose_lane_by_lane() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let w: Vector<i32, 8> = random_vector(&mut rng);
        let m: Mask<8> = random_mask(&mut rng);

        // Deselected divisor lanes are zero on purpose: masked_div must
        // leave them untouched, never divide by them.
        let d = m.select(random_divisor(&mut rng), Vector::splat(0));

        let added = v.masked_add(m, w);
        let subbed = v.masked_sub(m, w);
        let multiplied = v.masked_mul(m, w);
        let divided = v.masked_div(m, d);
        for i in 0..8 {
            let expect_add = if m[i] { v[i].wrapping_add(w[i]) } else { v[i] };
            assert_eq!(added[i], expect_add);
            let expect_sub = if m[i] { v[i].wrapping_sub(w[i]) } else { v[i] };
            assert_eq!(subbed[i], expect_sub);
            let expect_mul = if m[i] { v[i].wrapping_mul(w[i]) } else { v[i] };
            assert_eq!(multiplied[i], expect_mul);
            let expect_div = if m[i] { v[i] / d[i] } else { v[i] };
            assert_eq!(divided[i], expect_div);
        }
    }
}

#[test]
fn test_select_symmetry() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let a: Vector<i32, 4> = random_vector(&mut rng);
        let b: Vector<i32, 4> = random_vector(&mut rng);
        let m: Mask<4> = random_mask(&mut rng);
        assert_eq!(m.select(a, b), (!m).select(b, a));
        assert_eq!(Mask::splat(true).select(a, b), a);
        assert_eq!(Mask::splat(false).select(a, b), b);
    }
}

#[test]
fn test_operator_and_assign_forms_agree() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let w: Vector<i32, 8> = random_vector(&mut rng);

        let mut assigned = v;
        assigned += w;
        assert_eq!(assigned, v + w);
        assigned = v;
        assigned *= w;
        assert_eq!(assigned, v * w);
        assigned = v;
        assigned ^= w;
        assert_eq!(assigned, v ^ w);

        let d: Vector<i32, 8> = random_divisor(&mut rng);
        assigned = v;
        assigned /= d;
        assert_eq!(assigned, v / d);
    }
}

#[test]
fn test_mul_then_div_inverts_with_exact_divisors() {
    let mut rng = StdRng::seed_from_u64(67);
    for _ in 0..200 {
        // Small factors keep the product in range, so the quotient is
        // exact and recovers the multiplicand.
        let a = Vector::<i32, 8>::from_fn(|_| rng.gen_range(-1000..=1000));
        let b: Vector<i32, 8> = random_divisor(&mut rng);
        assert_eq!((a * b) / b, a);

        // Power-of-two divisors keep float division exact.
        let f = Vector::<f32, 4>::from_fn(|_| rng.gen_range(-1000.0..1000.0));
        let p = Vector::<f32, 4>::from_fn(|_| (1 << rng.gen_range(0..8)) as f32);
        assert_eq!((f * p) / p, f);
    }
}

#[test]
fn test_comparison_complements() {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..200 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let w: Vector<i32, 8> = random_vector(&mut rng);
        assert_eq!(v.cmp_ne(w), !v.cmp_eq(w));
        assert_eq!(v.cmp_ge(w), !v.cmp_lt(w));
        assert_eq!(v.cmp_le(w), !v.cmp_gt(w));
        assert_eq!(v.cmp_lt(w) | v.cmp_eq(w), v.cmp_le(w));
        assert_eq!((v.cmp_lt(w) & v.cmp_gt(w)).count_true(), 0);
    }
}

#[test]
fn test_whole_vector_equality_matches_all_lanes() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..100 {
        let v: Vector<i32, 4> = random_vector(&mut rng);
        let mut w = v;
        assert_eq!(v, w);
        assert!(v.cmp_eq(w).all());
        let lane = rng.gen_range(0..4);
        w[lane] = w[lane].wrapping_add(1);
        assert_ne!(v, w);
        assert!(!v.cmp_eq(w).all());
    }
}

#[test]
fn test_integer_sum_matches_fold_at_accelerated_width() {
    // Wrapping addition is associative, so the accelerated 8-lane path
    // must agree with a plain fold bit for bit.
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..200 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let folded = v.to_array().iter().fold(0i32, |acc, &x| acc.wrapping_add(x));
        assert_eq!(v.horizontal_sum(), folded);
    }
}

#[test]
fn test_float_sum_close_to_fold() {
    // Accelerated float sums may reassociate; they stay within a tight
    // tolerance of the sequential fold for well-scaled inputs.
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..200 {
        let v = Vector::<f32, 8>::from_fn(|_| rng.gen::<f32>());
        let folded: f32 = v.to_array().iter().sum();
        assert!((v.horizontal_sum() - folded).abs() < 1e-4);
    }
}

#[test]
fn test_masked_reduction_equals_filtered_fold() {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..200 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let m: Mask<8> = random_mask(&mut rng);
        let filtered = v
            .to_array()
            .iter()
            .zip(m.to_array())
            .filter(|&(_, keep)| keep)
            .fold(0i32, |acc, (&x, _)| acc.wrapping_add(x));
        assert_eq!(v.masked_horizontal_sum(m), filtered);

        let max_filtered = v
            .to_array()
            .iter()
            .zip(m.to_array())
            .filter(|&(_, keep)| keep)
            .map(|(&x, _)| x)
            .max()
            .unwrap_or(i32::MIN);
        assert_eq!(v.masked_horizontal_max(m), max_filtered);
    }
}

#[test]
fn test_rotate_round_trip() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let v = Vector::<u32, 4>::from_fn(|_| rng.gen());
        let counts = Vector::<u32, 4>::from_fn(|_| rng.gen_range(0..64));
        assert_eq!(v.rotl(counts).rotr(counts), v);
        assert_eq!(v.rotl(counts), v.rotr(Vector::splat(32) - counts));
    }
}

#[test]
fn test_shift_masks_counts() {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..100 {
        let v = Vector::<u32, 4>::from_fn(|_| rng.gen());
        let raw: u32 = rng.gen_range(32..256);
        assert_eq!(v << raw, v << (raw % 32));
        assert_eq!(v >> raw, v >> (raw % 32));
    }
}

#[test]
fn test_pack_unpack_round_trip() {
    let mut rng = StdRng::seed_from_u64(41);
    for _ in 0..100 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        assert_eq!(Vector::<i32, 8>::pack(v.unpack_lo(), v.unpack_hi()), v);

        let lo: Vector<i32, 4> = random_vector(&mut rng);
        let hi: Vector<i32, 4> = random_vector(&mut rng);
        let packed = Vector::<i32, 8>::pack(lo, hi);
        assert_eq!(packed.unpack(), (lo, hi));
    }
}

#[test]
fn test_widen_narrow_round_trips_in_range() {
    let mut rng = StdRng::seed_from_u64(43);
    for _ in 0..100 {
        let v = Vector::<i16, 8>::from_fn(|_| rng.gen());
        assert_eq!(v.widen().narrow(), v, "widen then narrow is lossless");

        let f = Vector::<f32, 4>::from_fn(|_| rng.gen::<f32>());
        assert_eq!(f.widen().narrow(), f, "f32 through f64 is lossless");
    }
}

#[test]
fn test_bitcast_round_trips() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..100 {
        let v = Vector::<u32, 4>::from_fn(|_| rng.gen());
        assert_eq!(v.bitcast_i32().bitcast_u32(), v);

        let f = Vector::<f32, 4>::from_fn(|_| rng.gen::<f32>());
        assert_eq!(f.bitcast_u32().bitcast_f32(), f);
        assert_eq!(f.bitcast_i32().bitcast_f32(), f);
    }
}

#[test]
fn test_swizzle_identity_and_reverse() {
    let mut rng = StdRng::seed_from_u64(53);
    for _ in 0..100 {
        let v: Vector<i32, 4> = random_vector(&mut rng);
        assert_eq!(v.swizzle(&[0, 1, 2, 3]).unwrap(), v);
        assert_eq!(v.swizzle(&[3, 2, 1, 0]).unwrap(), v.reverse());
        assert_eq!(v.reverse().reverse(), v);
    }
}

#[test]
fn test_store_load_round_trip_random_lengths() {
    let mut rng = StdRng::seed_from_u64(59);
    for _ in 0..100 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let extra = rng.gen_range(0..4);
        let mut buf = vec![0i32; 8 + extra];
        v.store(&mut buf).unwrap();
        assert_eq!(Vector::<i32, 8>::load(&buf).unwrap(), v);
        assert_eq!(Vector::<i32, 8>::load_or_zero(&buf), v);
    }
}

#[test]
fn test_masked_store_then_load_preserves_blend() {
    let mut rng = StdRng::seed_from_u64(61);
    for _ in 0..100 {
        let v: Vector<i32, 8> = random_vector(&mut rng);
        let background: Vector<i32, 8> = random_vector(&mut rng);
        let m: Mask<8> = random_mask(&mut rng);

        let mut buf = background.to_array();
        v.masked_store(m, &mut buf).unwrap();
        let reread = Vector::<i32, 8>::load(&buf).unwrap();
        assert_eq!(reread, m.select(v, background));
    }
}
