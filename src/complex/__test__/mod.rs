use crate::Complex;


#[test]
fn test_display_sign_rules() {
    assert_eq!(Complex::new(3.0, -4.0).to_string(), "3 - 4i");
    assert_eq!(Complex::new(3.0, 0.0).to_string(), "3 + 0i");
    assert_eq!(Complex::new(-1.5, 2.25).to_string(), "-1.5 + 2.25i");
    // -0은 음수가 아니므로 '+'
    assert_eq!(Complex::new(1.0, -0.0).to_string(), "1 + 0i");
}

#[test]
fn test_display_never_uses_exponent_notation() {
    assert_eq!(
        Complex::new(1e21, 1e-7).to_string(),
        "1000000000000000000000 + 0.0000001i"
    );
    assert_eq!(Complex::new(f64::NAN, f64::NEG_INFINITY).to_string(), "NaN - infi");
}

#[test]
fn test_negative_zero_is_preserved() {
    let z = Complex::new(2.0, -0.0);
    assert!(z.imaginary.is_sign_negative());
    assert!(Complex::new(1.0, 0.0).conjugate().imaginary.is_sign_negative());
}

#[test]
fn test_parse_from_str() {
    let z: Complex = "4,3".parse().unwrap();
    assert_eq!(z, Complex::new(4.0, 3.0));

    let w: Complex = " -2 , 1.5 ".parse().unwrap();
    assert_eq!(w, Complex::new(-2.0, 1.5));

    assert!("4".parse::<Complex>().is_err());
    assert!("4,x".parse::<Complex>().is_err());
}
