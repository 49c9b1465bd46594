use crate::UserRole;

use std::str::FromStr;

use googletest::prelude::*;
use proptest::prelude::*;

#[test]
fn given_legacy_document_roles_when_parsed_then_map_to_canonical() {
    assert_that!(UserRole::from_str("student").unwrap(), eq(UserRole::Student));
    assert_that!(UserRole::from_str("teacher").unwrap(), eq(UserRole::Teacher));
    assert_that!(
        UserRole::from_str("organization").unwrap(),
        eq(UserRole::OrgAdmin)
    );
    assert_that!(
        UserRole::from_str("admin").unwrap(),
        eq(UserRole::SuperAdmin)
    );
}

#[test]
fn given_relational_roles_when_parsed_then_map_to_canonical() {
    assert_that!(UserRole::from_str("user").unwrap(), eq(UserRole::Student));
    assert_that!(
        UserRole::from_str("org_admin").unwrap(),
        eq(UserRole::OrgAdmin)
    );
    assert_that!(
        UserRole::from_str("super_admin").unwrap(),
        eq(UserRole::SuperAdmin)
    );
}

#[test]
fn given_legacy_role_in_json_when_deserialized_then_serializes_canonical() {
    let role: UserRole = serde_json::from_str("\"organization\"").unwrap();
    let json = serde_json::to_string(&role).unwrap();

    assert_that!(json, eq("\"org_admin\""));
}

#[test]
fn given_unknown_role_when_parsed_then_error() {
    assert_that!(UserRole::from_str("owner"), err(anything()));
    assert_that!(
        serde_json::from_str::<UserRole>("\"owner\""),
        err(anything())
    );
}

#[test]
fn test_is_admin() {
    assert!(!UserRole::Student.is_admin());
    assert!(!UserRole::Teacher.is_admin());
    assert!(UserRole::OrgAdmin.is_admin());
    assert!(UserRole::SuperAdmin.is_admin());
}

#[test]
fn test_aliases_parse_back_to_same_role() {
    for role in UserRole::ALL {
        assert_eq!(role.aliases()[0], role.as_str());
        for alias in role.aliases() {
            assert_eq!(UserRole::from_str(alias).unwrap(), role);
        }
    }
}

proptest! {
    #[test]
    fn given_canonical_role_when_round_tripped_through_str_then_unchanged(
        role in prop_oneof![
            Just(UserRole::Student),
            Just(UserRole::Teacher),
            Just(UserRole::OrgAdmin),
            Just(UserRole::SuperAdmin),
        ]
    ) {
        prop_assert_eq!(UserRole::from_str(role.as_str()).unwrap(), role);
    }

    #[test]
    fn given_random_string_when_parsed_then_only_known_spellings_succeed(s in "[a-z_]{1,12}") {
        let known = [
            "student", "teacher", "organization", "admin",
            "user", "org_admin", "super_admin",
        ];
        prop_assert_eq!(UserRole::from_str(&s).is_ok(), known.contains(&s.as_str()));
    }
}
