use exact_float::{parse, parse_partial, ParseFloat};

macro_rules! check_ok {
    ($s:expr, $x:expr) => {
        let s = $s;
        check_ok!(s, $x, f32);
        check_ok!(s.as_bytes(), $x, f32);
        check_ok!(s, $x, f64);
        check_ok!(s.as_bytes(), $x, f64);
    };
    ($s:expr, $x:expr, $ty:ty) => {
        assert_eq!(<$ty>::parse_float($s).unwrap(), $x);
        assert_eq!(<$ty>::parse_float_partial($s).unwrap(), ($x, $s.len()));
        assert_eq!(parse::<$ty, _>($s).unwrap(), $x);
        assert_eq!(parse_partial::<$ty, _>($s).unwrap(), ($x, $s.len()));
    };
}

macro_rules! check_ok_partial {
    ($s:expr, $x:expr, $n:expr) => {
        let s = $s;
        check_ok_partial!(s, $x, $n, f32);
        check_ok_partial!(s.as_bytes(), $x, $n, f32);
        check_ok_partial!(s, $x, $n, f64);
        check_ok_partial!(s.as_bytes(), $x, $n, f64);
    };
    ($s:expr, $x:expr, $n:expr, $ty:ty) => {
        assert!(<$ty>::parse_float($s).is_err());
        assert_eq!(<$ty>::parse_float_partial($s).unwrap(), ($x, $n));
        assert!(parse::<$ty, _>($s).is_err());
        assert_eq!(parse_partial::<$ty, _>($s).unwrap(), ($x, $n));
    };
}

macro_rules! check_err {
    ($s:expr, $msg:expr) => {
        let s = $s;
        check_err!(s, $msg, f32);
        check_err!(s.as_bytes(), $msg, f32);
        check_err!(s, $msg, f64);
        check_err!(s.as_bytes(), $msg, f64);
    };
    ($s:expr, $msg:expr, $ty:ty) => {
        assert_eq!(<$ty>::parse_float($s).unwrap_err().message(), $msg);
        assert!(<$ty>::parse_float_partial($s).is_err());
        assert!(parse::<$ty, _>($s).is_err());
        assert!(parse_partial::<$ty, _>($s).is_err());
    };
}

#[test]
fn test_api() {
    check_ok!("1.23", 1.23);
    check_ok!("0.", 0.);
    check_ok!("-0", -0.);
    check_ok!("+00", 0.);
    check_ok!("-0001e-02", -0.01);
    check_ok!("345", 345.);
    check_ok!(".5", 0.5);

    check_ok_partial!("1a", 1., 1);
    check_ok_partial!("-2e-1x", -0.2, 5);
    check_ok_partial!("2e2.", 200., 3);
    check_ok_partial!("2ea", 2., 1);
    check_ok_partial!("2e+", 2., 1);
}

#[test]
fn test_errors() {
    check_err!("", "Floating point conversion error");
    check_err!(" ", "No digits seen.");
    check_err!(".", "No digits seen.");
    check_err!(".e1", "No digits seen.");
    check_err!("+", "Unexpected end of input");
    check_err!("-", "Unexpected end of input");
    check_err!("x", "No digits seen.");
    check_err!("a123", "No digits seen.");
    check_err!("e10", "No digits seen.");
    check_err!("in", "error converting input to floating point");
    check_err!("nax", "error converting input to floating point");
    check_err!("+i", "error converting input to floating point");
}

#[test]
fn test_strict_mode_rejects_tail() {
    assert!(parse::<f64, _>("1.23 ").is_err());
    assert_eq!(
        parse::<f64, _>("1.23x").unwrap_err().message(),
        "Floating point conversion error"
    );
    assert_eq!(parse_partial::<f64, _>("1.23x").unwrap(), (1.23, 4));
}

#[test]
fn test_specials() {
    for s in ["inf", "INF", "Inf", "+inf", "infinity", "INFINITY", "+Infinity"] {
        let x = parse::<f64, _>(s).unwrap();
        assert!(x.is_infinite() && x.is_sign_positive(), "{:?}", s);
    }
    for s in ["-inf", "-Infinity", "-INF"] {
        let x = parse::<f64, _>(s).unwrap();
        assert!(x.is_infinite() && x.is_sign_negative(), "{:?}", s);
    }
    for s in ["nan", "NaN", "NAN", "+nan", "-nan"] {
        assert!(parse::<f64, _>(s).unwrap().is_nan(), "{:?}", s);
        assert!(parse::<f32, _>(s).unwrap().is_nan(), "{:?}", s);
    }
    // exactly three or eight letters
    check_ok_partial!("infx", f32::INFINITY, 3, f32);
    check_ok_partial!("infx", f64::INFINITY, 3, f64);
    check_ok_partial!("infinit", f64::INFINITY, 3, f64);
    check_ok_partial!("infinityy", f64::INFINITY, 8, f64);
}

// `check_ok_partial` compares with `==`, which a NaN never satisfies
macro_rules! check_ok_partial_nan {
    ($s:expr, $n:expr) => {
        assert!(parse::<f64, _>($s).is_err());
        let (x, n) = parse_partial::<f64, _>($s).unwrap();
        assert!(x.is_nan());
        assert_eq!(n, $n);
    };
}

#[test]
fn test_nan_partial() {
    check_ok_partial_nan!("nan(123)", 3);
    check_ok_partial_nan!("nanx", 3);
}

#[test]
fn test_signed_zero() {
    assert!(parse::<f64, _>("0").unwrap().is_sign_positive());
    assert!(parse::<f64, _>("-0").unwrap().is_sign_negative());
    assert!(parse::<f64, _>("+0.0e0").unwrap().is_sign_positive());
    assert!(parse::<f64, _>("-0.0e0").unwrap().is_sign_negative());
    assert!(parse::<f32, _>("-0").unwrap().is_sign_negative());
}

#[test]
fn test_sign_symmetry() {
    for s in ["1.5", "0.1", "1e300", "5e-324", "12345.6789e-40", "inf"] {
        let pos = parse::<f64, _>(s).unwrap();
        let neg = parse::<f64, _>(format!("-{}", s)).unwrap();
        assert_eq!((-pos).to_bits(), neg.to_bits(), "{:?}", s);
    }
}

#[test]
fn test_error_display() {
    let err = parse::<f64, _>("").unwrap_err();
    assert_eq!(err.to_string(), "Floating point conversion error");
    assert_eq!(err.message(), "Floating point conversion error");
}
