#![cfg(feature = "serde")]

use approx::assert_relative_eq;
use fad::math::sin;
use fad::{Scalar, ScalarSnapshot};

#[test]
fn roundtrip_snapshot_json() {
    let a = Scalar::variable(0.25, "a");
    let b = Scalar::variable(-1.5, "b");
    let y = Scalar::from(sin(&a) * &b);

    let snap = y.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: ScalarSnapshot = serde_json::from_str(&json).unwrap();

    // serde_json does not guarantee bit-exact float parsing.
    assert_relative_eq!(back.value, snap.value, max_relative = 1e-12);
    assert_eq!(back.partials.len(), snap.partials.len());
    for (d, o) in back.partials.iter().zip(&snap.partials) {
        assert_eq!(d.name, o.name);
        assert_eq!(d.values.len(), o.values.len());
        for (dv, ov) in d.values.iter().zip(&o.values) {
            assert_relative_eq!(*dv, *ov, max_relative = 1e-12);
        }
    }
    assert_eq!(back.partials[0].name, "a");
    assert_eq!(back.partials[1].name, "b");
}

#[test]
fn constant_snapshot_has_no_partials() {
    let json = serde_json::to_string(&Scalar::constant(2.0).snapshot()).unwrap();
    assert_eq!(json, r#"{"value":2.0,"partials":[]}"#);
}
