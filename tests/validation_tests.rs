use registrar::validate::{
    validate_course_code, validate_course_fee, validate_email, validate_payment_amount,
    validate_student_id,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn course_codes_matching_the_pattern_are_accepted() {
    for good in ["C101", "c101", "A000", "Z999", "m450"] {
        assert!(validate_course_code(good).is_ok(), "rejected {good:?}");
    }
}

#[test]
fn course_codes_outside_the_pattern_are_rejected() {
    for bad in [
        "", "C", "C10", "C1011", "1234", "CS101", "C10x", "C101 ", " C101", "Ç101",
    ] {
        assert!(validate_course_code(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn student_ids_require_exact_shape() {
    assert!(validate_student_id("S000").is_ok());
    assert!(validate_student_id("S123").is_ok());

    for bad in ["", "s123", "S12", "S1234", "X123", "S12a", "SS123"] {
        assert!(validate_student_id(bad).is_err(), "accepted {bad:?}");
    }
}

#[test]
fn payment_amounts_must_be_non_negative() {
    assert!(validate_payment_amount(Decimal::ZERO).is_ok());
    assert!(validate_payment_amount(dec!(0.01)).is_ok());
    assert!(validate_payment_amount(dec!(1000)).is_ok());
    assert!(validate_payment_amount(dec!(-0.01)).is_err());
    assert!(validate_payment_amount(dec!(-500)).is_err());
}

#[test]
fn course_fees_must_be_strictly_positive() {
    assert!(validate_course_fee(dec!(0.01)).is_ok());
    assert!(validate_course_fee(dec!(700)).is_ok());
    assert!(validate_course_fee(Decimal::ZERO).is_err());
    assert!(validate_course_fee(dec!(-1)).is_err());
}

#[test]
fn emails_must_end_in_com_or_edu() {
    for good in ["alice@gmail.com", "eve@test.edu", "a.b@c.d.edu"] {
        assert!(validate_email(good).is_ok(), "rejected {good:?}");
    }
    for bad in [
        "",
        "alice",
        "alice@gmail.org",
        "alice@gmail.net",
        "@gmail.com",
        "alice@",
        "alice@@gmail.com",
        "alicegmail.com",
        "alice@gmail.comx",
    ] {
        assert!(validate_email(bad).is_err(), "accepted {bad:?}");
    }
}
