use lumenrig::color::ColorParseError;
use lumenrig::input::{ClampPolicy, ControlInput, InputError};

#[test]
fn test_hash_prefix_parses_as_color() {
    let input = ControlInput::parse("#A0FFFF", ClampPolicy::Clamp).unwrap();
    let ControlInput::Color(color) = input else {
        panic!("expected a color input");
    };
    assert_eq!(color.red, 160.0 / 255.0);
    assert_eq!(color.green, 1.0);
    assert_eq!(color.blue, 1.0);
}

#[test]
fn test_numeric_parses_as_intensity() {
    assert_eq!(
        ControlInput::parse("40", ClampPolicy::Clamp).unwrap(),
        ControlInput::Intensity(0.4)
    );
}

#[test]
fn test_intensity_boundaries() {
    assert_eq!(
        ControlInput::parse("0", ClampPolicy::Reject).unwrap(),
        ControlInput::Intensity(0.0)
    );
    assert_eq!(
        ControlInput::parse("100", ClampPolicy::Reject).unwrap(),
        ControlInput::Intensity(1.0)
    );
}

#[test]
fn test_fractional_percentage() {
    assert_eq!(
        ControlInput::parse("12.5", ClampPolicy::Reject).unwrap(),
        ControlInput::Intensity(0.125)
    );
}

#[test]
fn test_surrounding_whitespace_trimmed() {
    assert_eq!(
        ControlInput::parse("  40  ", ClampPolicy::Clamp).unwrap(),
        ControlInput::Intensity(0.4)
    );
    assert!(matches!(
        ControlInput::parse(" #ff0000 ", ClampPolicy::Clamp).unwrap(),
        ControlInput::Color(_)
    ));
}

#[test]
fn test_clamp_policy_clamps_high_and_low() {
    assert_eq!(
        ControlInput::parse("150", ClampPolicy::Clamp).unwrap(),
        ControlInput::Intensity(1.0)
    );
    assert_eq!(
        ControlInput::parse("-5", ClampPolicy::Clamp).unwrap(),
        ControlInput::Intensity(0.0)
    );
}

#[test]
fn test_reject_policy_errors_out_of_range() {
    assert_eq!(
        ControlInput::parse("150", ClampPolicy::Reject).unwrap_err(),
        InputError::OutOfRange(150.0)
    );
    assert_eq!(
        ControlInput::parse("-5", ClampPolicy::Reject).unwrap_err(),
        InputError::OutOfRange(-5.0)
    );
}

#[test]
fn test_non_numeric_rejected() {
    assert_eq!(
        ControlInput::parse("abc", ClampPolicy::Clamp).unwrap_err(),
        InputError::InvalidIntensity("abc".to_string())
    );
    assert_eq!(
        ControlInput::parse("", ClampPolicy::Clamp).unwrap_err(),
        InputError::InvalidIntensity(String::new())
    );
}

#[test]
fn test_non_finite_rejected_under_both_policies() {
    for raw in ["NaN", "inf", "-inf"] {
        for policy in [ClampPolicy::Clamp, ClampPolicy::Reject] {
            assert!(matches!(
                ControlInput::parse(raw, policy).unwrap_err(),
                InputError::InvalidIntensity(_)
            ));
        }
    }
}

#[test]
fn test_malformed_color_rejected() {
    assert_eq!(
        ControlInput::parse("#12ZZ34", ClampPolicy::Clamp).unwrap_err(),
        InputError::InvalidColor(ColorParseError::BadHexDigit('Z'))
    );
    assert_eq!(
        ControlInput::parse("#FFF", ClampPolicy::Clamp).unwrap_err(),
        InputError::InvalidColor(ColorParseError::BadLength(4))
    );
}

#[test]
fn test_intensity_constructor_matches_parse() {
    assert_eq!(
        ControlInput::intensity(40.0, ClampPolicy::Reject).unwrap(),
        ControlInput::parse("40", ClampPolicy::Reject).unwrap()
    );
}
