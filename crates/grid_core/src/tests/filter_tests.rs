use super::*;

#[test]
fn parses_plain_integers() {
    assert_eq!(parse_integer_prefix("42"), Some(42));
    assert_eq!(parse_integer_prefix("-7"), Some(-7));
    assert_eq!(parse_integer_prefix("+15"), Some(15));
}

#[test]
fn parses_leading_digits_like_parse_int() {
    assert_eq!(parse_integer_prefix("  4.7"), Some(4));
    assert_eq!(parse_integer_prefix("12px"), Some(12));
    assert_eq!(parse_integer_prefix("1e3"), Some(1));
}

#[test]
fn non_numeric_input_is_absent() {
    assert_eq!(parse_integer_prefix("abc"), None);
    assert_eq!(parse_integer_prefix("-"), None);
    assert_eq!(parse_integer_prefix(" "), None);
    assert_eq!(parse_integer_prefix("99999999999999999999"), None);
}

#[test]
fn empty_submit_is_rejected_by_the_form() {
    let mut form = FilterForm::default();
    assert_eq!(form.submit(), Err(FormError::Required));
    assert_eq!(form.error(), Some(&FormError::Required));

    form.input_mut().push_str("42");
    let values = form.submit().expect("values");
    assert_eq!(values.raw_input(), "42");
    assert_eq!(form.error(), None);
    assert_eq!(form.input(), "42");
}

#[test]
fn form_values_require_input() {
    assert_eq!(FilterFormValues::new(""), Err(FormError::Required));
    assert!(FilterFormValues::new("x").is_ok());
}

#[test]
fn popover_toggles_at_anchor() {
    let mut popover = FilterPopover::default();
    assert!(!popover.is_open());

    popover.toggle(PopoverAnchor::new(10.0, 20.0));
    assert!(popover.is_open());
    assert_eq!(popover.anchor(), Some(PopoverAnchor::new(10.0, 20.0)));

    popover.toggle(PopoverAnchor::new(99.0, 99.0));
    assert!(!popover.is_open());
    assert_eq!(popover.anchor(), None);
}
