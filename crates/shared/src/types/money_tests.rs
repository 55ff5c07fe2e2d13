use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;

#[rstest]
#[case(dec!(0), "0.00")]
#[case(dec!(10), "10.00")]
#[case(dec!(7.5), "7.50")]
#[case(dec!(12.345), "12.35")]
#[case(dec!(12.344), "12.34")]
#[case(dec!(0.005), "0.01")]
#[case(dec!(1234567.891), "1234567.89")]
fn test_format_amount(#[case] amount: Decimal, #[case] expected: &str) {
    assert_eq!(format_amount(amount), expected);
}

#[test]
fn test_max_amount_value() {
    assert_eq!(MAX_AMOUNT, dec!(999999999999.99));
    assert_eq!(format_amount(MAX_AMOUNT), "999999999999.99");
}
