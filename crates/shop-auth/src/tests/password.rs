use crate::{hash_password, verify_password};

// Minimum bcrypt cost keeps the tests fast
const TEST_COST: u32 = 4;

#[test]
fn test_hash_then_verify_roundtrip() {
    let hash = hash_password("hunter2", TEST_COST).unwrap();

    assert_ne!(hash, "hunter2");
    assert!(verify_password("hunter2", &hash).unwrap());
}

#[test]
fn test_wrong_password_does_not_verify() {
    let hash = hash_password("hunter2", TEST_COST).unwrap();

    assert!(!verify_password("hunter3", &hash).unwrap());
}

#[test]
fn test_hashes_are_salted() {
    let first = hash_password("hunter2", TEST_COST).unwrap();
    let second = hash_password("hunter2", TEST_COST).unwrap();

    assert_ne!(first, second);
}
