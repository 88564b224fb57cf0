use lockstep_math::*;

fn random_scalar(rng: &mut fastrand::Rng, range: i64) -> Fixed64 {
    Fixed64::from_raw(rng.i64(-(range << 20)..(range << 20)))
}

fn random_rotator(rng: &mut fastrand::Rng) -> fx64rot {
    Rotator::new(
        Fixed64::from_ratio(rng.i64(-89_000..89_000), 1000),
        Fixed64::from_ratio(rng.i64(-180_000..180_000), 1000),
        Fixed64::from_ratio(rng.i64(-180_000..180_000), 1000),
    )
}

fn random_transform(rng: &mut fastrand::Rng) -> fx64transform {
    // uniform positive scale, so the closed-form composition applies
    let scale = Fixed64::from_ratio(rng.i64(500..4000), 1000);
    Transform::new(
        random_rotator(rng).quaternion(),
        Vec3::new(random_scalar(rng, 10), random_scalar(rng, 10), random_scalar(rng, 10)),
        Vec3::splat(scale),
    )
}

/// Replaying the same seeded input stream must produce bit-identical raw state.
#[test]
fn same_inputs_give_bit_identical_results() {
    fn run(seed: u64) -> Vec<i64> {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut position = fx64v3::zero();
        let mut tf = fx64transform::identity();
        let mut trace = Vec::new();

        for _ in 0..200 {
            let step = fx64transform::new(
                random_rotator(&mut rng).quaternion(),
                Vec3::new(random_scalar(&mut rng, 2), random_scalar(&mut rng, 2), random_scalar(&mut rng, 2)),
                Vec3::one(),
            );
            tf = tf * step;
            tf.rotation = tf.rotation.normalize(Fixed64::SMALL);
            position = tf.transform_position(position.clamped_to_max_len(Fixed64::from_i64(100)));

            trace.push(position.x.raw());
            trace.push(position.y.raw());
            trace.push(position.z.raw());
            trace.push(tf.rotation.w.raw());
        }
        trace
    }

    assert_eq!(run(0xD5EA), run(0xD5EA), "identical seeds must replay identically");
    assert_ne!(run(0xD5EA), run(0xD5EB), "different seeds should diverge");
}

/// The §-level fixed-point contract: exact construction, exact perfect-square
/// roots, shift-based rounding, wrapping add.
#[test]
fn fixed_point_contract() {
    assert_eq!(Fixed64::from_i64(16).sqrt(), Fixed64::from_i64(4));
    assert_eq!(Fixed32::from_i32(16).sqrt(), Fixed32::from_i32(4));

    let neg = Fixed64::from_ratio(-11, 2);
    assert_eq!(neg.ceil(), Fixed64::from_i64(-5));
    assert_eq!(neg.floor(), Fixed64::from_i64(-6));

    let val = Fixed64::from_raw(123_456_789);
    assert_eq!(Fixed64::from_raw(val.raw()), val, "raw roundtrip must be exact");

    assert_eq!(
        (Fixed64::from_raw(i64::MAX) + <Fixed64 as MathConsts>::EPSILON).raw(),
        i64::MIN,
        "addition wraps in two's complement",
    );
}

#[test]
fn pythagorean_identity_on_all_backends() {
    fn check<T: DetReal>(steps: i64) {
        // the fixed backends quantize the identity-derived cosine to
        // 2^-(FRAC/2) per sqrt, which squares into the identity
        let tolerance = T::from_ratio(1, 50);
        for i in -steps..steps {
            let angle = T::TWO_PI * T::from_ratio(i, steps);
            let (s, c) = angle.sin_cos();
            assert!(
                (s * s + c * c).is_close_to(T::one(), tolerance),
                "sin^2 + cos^2 != 1 at step {i}",
            );
        }
    }
    check::<Fixed64>(64);
    check::<Fixed32>(64);
    check::<Det64>(64);
}

/// The fixed and double backends run the same algorithms, so they should agree
/// to within the fixed backend's precision.
#[test]
fn backends_agree_on_transcendentals() {
    let mut rng = fastrand::Rng::with_seed(42);
    for _ in 0..500 {
        let raw = rng.i64(-(8 << 20)..(8 << 20));
        let fixed = Fixed64::from_raw(raw);
        let double = Det64::from_ratio(raw, 1 << 20);

        // the fixed sqrt step inside acos and cos is 2^-10, scaled by up
        // to pi/2 by the polynomial
        let close = |a: Fixed64, b: Det64, what: &str| {
            assert!(
                (a.to_f64() - b.to_f64()).abs() < 5.0e-3,
                "{what}({fixed}): {a} vs {b}",
            );
        };
        close(fixed.sin(), double.sin(), "sin");
        close(fixed.cos(), double.cos(), "cos");
        close(fixed.atan(), double.atan(), "atan");
        if fixed.abs() <= Fixed64::one() {
            close(fixed.acos(), double.acos(), "acos");
        }
    }
}

#[test]
fn quat_inverse_returns_to_identity() {
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..100 {
        let q = random_rotator(&mut rng).quaternion();
        let composed = q * q.inverse();
        // the half-angle cosines are sqrt-quantized, so |q|^2 can sit a
        // few 2^-10 steps off 1
        assert!(
            composed.equals(Quat::identity(), Fixed64::from_ratio(1, 50)),
            "q * q^-1 = {composed} for q = {q}",
        );

        let v = fx64v3::from_i32_array([1, -2, 3]);
        let roundtrip = q.unrotate_vector(q.rotate_vector(v));
        assert!(roundtrip.is_close_to(v, Fixed64::from_ratio(1, 100)), "{roundtrip}");
    }
}

#[test]
fn matrix_inverse_roundtrip_and_singular_fallback() {
    let mut rng = fastrand::Rng::with_seed(99);
    for _ in 0..50 {
        let tf = random_transform(&mut rng);
        let mat = tf.to_matrix();
        let product = mat * mat.inverse();
        let identity = fx64mat4::identity();
        for i in 0..16 {
            assert!(
                product[i].is_close_to(identity[i], Fixed64::from_ratio(5, 1000)),
                "element {i} of M * M^-1 is {}",
                product[i],
            );
        }
    }

    // zero determinant substitutes the identity instead of dividing
    let mut flat = fx64mat4::identity();
    flat[(1, 1)] = Fixed64::zero();
    assert_eq!(flat.inverse(), fx64mat4::identity());
    assert_eq!(fx64mat4::zero().inverse(), fx64mat4::identity());
}

/// A quarter yaw turn must land a unit x vector on the unit y axis to within
/// 2^-12 per component on the 64-bit backend.
#[test]
fn quarter_turn_accuracy() {
    let rotated = fx64rot::from_i32_angles(0, 90, 0).rotate_vector(Vec3::forward());
    assert!(
        rotated.is_close_to(Vec3::right(), Fixed64::from_ratio(1, 4096)),
        "90 degree yaw gave {rotated}",
    );

    // the 16-bit fraction gives up a few bits
    let rotated = fx32rot::from_i32_angles(0, 90, 0).rotate_vector(Vec3::forward());
    assert!(
        rotated.is_close_to(Vec3::right(), Fixed32::from_ratio(1, 256)),
        "90 degree yaw gave {rotated}",
    );
}

#[test]
fn transform_composition_is_consistent() {
    let mut rng = fastrand::Rng::with_seed(1234);
    for _ in 0..50 {
        let a = random_transform(&mut rng);
        let b = random_transform(&mut rng);
        let v = Vec3::new(random_scalar(&mut rng, 4), random_scalar(&mut rng, 4), random_scalar(&mut rng, 4));

        // quantization compounds through two scaled rotations, so positions
        // of this magnitude can disagree by a few tenths
        let composed = (a * b).transform_position(v);
        let sequential = b.transform_position(a.transform_position(v));
        assert!(
            composed.is_close_to(sequential, Fixed64::from_ratio(1, 2)),
            "composed {composed} vs sequential {sequential}",
        );

        let via_matrix = (a.to_matrix() * b.to_matrix()).transform_position(v);
        assert!(
            composed.is_close_to(via_matrix, Fixed64::from_ratio(1, 2)),
            "composed {composed} vs matrix path {via_matrix}",
        );
    }
}

/// Serialized fixed-point state is the raw integer, so a round trip through
/// JSON is bit-exact.
#[test]
fn serde_roundtrip_is_bit_exact() {
    let val = Fixed64::from_ratio(-355, 113);
    let json = serde_json::to_string(&val).unwrap();
    assert_eq!(json, val.raw().to_string(), "fixed point serializes as its raw integer");
    let back: Fixed64 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, val);

    let mut rng = fastrand::Rng::with_seed(5);
    let tf = random_transform(&mut rng);
    let json = serde_json::to_string(&tf).unwrap();
    let back: fx64transform = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tf, "transform must roundtrip bit-exactly through JSON");

    let vec = det64v3::from_f64_array([0.1, -2.5, 1.0e-9]);
    let json = serde_json::to_string(&vec).unwrap();
    let back: det64v3 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec);
}

/// The text form writes translation, rotator degrees, then scale; parsing it
/// back reproduces the same transform up to the degree formatting precision.
#[test]
fn transform_text_format() {
    let tf = fx64transform::new(
        fx64rot::from_i32_angles(10, -45, 0).quaternion(),
        Vec3::from_i32_array([1, 2, 3]),
        Vec3::from_i32_array([2, 2, 2]),
    );
    let text = tf.to_string();
    assert_eq!(text.matches('|').count(), 2, "expected Tx,Ty,Tz|P,Y,R|Sx,Sy,Sz, got {text}");

    let parsed: fx64transform = text.parse().unwrap();
    assert!(parsed.equals(&tf, Fixed64::from_ratio(1, 100)), "{parsed:?} vs {tf:?}");

    assert!("not a transform".parse::<fx64transform>().is_err());
    assert!("1,2,3|0,0|1,1,1".parse::<fx64transform>().is_err());
}
