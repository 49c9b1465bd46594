use crate::{EducationPatch, ExperiencePatch, LanguagePatch, SkillLevel, SkillPatch};

use chrono::NaiveDate;
use googletest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn given_blank_title_when_experience_patch_validated_then_error() {
    let patch = ExperiencePatch {
        title: Some("  ".to_string()),
        ..ExperiencePatch::default()
    };

    assert_that!(patch.validate(date(2021, 3, 1), None), err(anything()));
}

#[test]
fn given_end_before_stored_start_when_experience_patch_validated_then_error() {
    let patch = ExperiencePatch {
        end_date: Some(date(2000, 1, 1)),
        ..ExperiencePatch::default()
    };

    assert_that!(patch.validate(date(2021, 3, 1), None), err(anything()));
}

#[test]
fn given_start_after_stored_end_when_experience_patch_validated_then_error() {
    let patch = ExperiencePatch {
        start_date: Some(date(2024, 1, 1)),
        ..ExperiencePatch::default()
    };

    assert_that!(
        patch.validate(date(2021, 3, 1), Some(date(2022, 6, 30))),
        err(anything())
    );
}

#[test]
fn given_both_dates_patched_in_order_when_experience_patch_validated_then_ok() {
    let patch = ExperiencePatch {
        start_date: Some(date(1999, 1, 1)),
        end_date: Some(date(2000, 1, 1)),
        ..ExperiencePatch::default()
    };

    assert_that!(patch.validate(date(2021, 3, 1), None), ok(anything()));
}

#[test]
fn given_blank_degree_when_education_patch_validated_then_error() {
    let patch = EducationPatch {
        degree: Some(String::new()),
        ..EducationPatch::default()
    };

    assert_that!(patch.validate(date(2015, 9, 1), None), err(anything()));
}

#[test]
fn given_end_before_stored_start_when_education_patch_validated_then_error() {
    let patch = EducationPatch {
        end_date: Some(date(2014, 6, 1)),
        ..EducationPatch::default()
    };

    assert_that!(patch.validate(date(2015, 9, 1), None), err(anything()));
}

#[test]
fn given_blank_name_when_skill_patch_validated_then_error() {
    let patch = SkillPatch {
        name: Some(" ".to_string()),
        level: None,
    };

    assert_that!(patch.validate(), err(anything()));
}

#[test]
fn given_level_only_when_skill_patch_validated_then_ok() {
    let patch = SkillPatch {
        name: None,
        level: Some(SkillLevel::Expert),
    };

    assert_that!(patch.validate(), ok(anything()));
}

#[test]
fn given_blank_name_when_language_patch_validated_then_error() {
    let patch = LanguagePatch {
        name: Some(String::new()),
        ..LanguagePatch::default()
    };

    assert_that!(patch.validate(), err(anything()));
}
