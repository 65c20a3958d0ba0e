use crate::{CartLine, CoreError};

#[test]
fn test_valid_line_passes() {
    let line = CartLine {
        name: "pen".to_string(),
        quantity: 2,
    };

    assert!(line.validate().is_ok());
}

#[test]
fn test_zero_quantity_is_rejected() {
    let line = CartLine {
        name: "pen".to_string(),
        quantity: 0,
    };

    let err = line.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidQuantity { value: 0, .. }));
}

#[test]
fn test_negative_quantity_is_rejected() {
    let line = CartLine {
        name: "pen".to_string(),
        quantity: -1,
    };

    let err = line.validate().unwrap_err();
    assert!(matches!(err, CoreError::InvalidQuantity { value: -1, .. }));
}

#[test]
fn test_empty_name_is_rejected() {
    let line = CartLine {
        name: "   ".to_string(),
        quantity: 1,
    };

    let err = line.validate().unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
}

#[test]
fn test_validate_all_fails_on_first_bad_line() {
    let lines = vec![
        CartLine {
            name: "pen".to_string(),
            quantity: 2,
        },
        CartLine {
            name: "pencil".to_string(),
            quantity: 0,
        },
    ];

    let err = CartLine::validate_all(&lines).unwrap_err();
    assert!(matches!(err, CoreError::InvalidQuantity { value: 0, .. }));
}

#[test]
fn test_validate_all_accepts_empty_cart() {
    assert!(CartLine::validate_all(&[]).is_ok());
}
