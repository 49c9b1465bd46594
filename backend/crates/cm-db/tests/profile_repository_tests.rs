mod common;

use common::{
    create_test_education, create_test_experience, create_test_language, create_test_pool,
    create_test_skill, date,
};

use cm_core::{EducationPatch, ExperiencePatch, LanguagePatch, LanguageProficiency, SkillLevel, SkillPatch};
use cm_db::{EducationRepository, ExperienceRepository, LanguageRepository, SkillRepository};

use googletest::prelude::*;
use uuid::Uuid;

// =========================================================================
// Experiences
// =========================================================================

#[tokio::test]
async fn given_experiences_when_found_by_user_then_ordered_by_start_date_desc() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let early = create_test_experience(user_id, date(2018, 5, 1));
    let late = create_test_experience(user_id, date(2023, 2, 1));
    let middle = create_test_experience(user_id, date(2020, 9, 1));
    for e in [&early, &late, &middle] {
        ExperienceRepository::create(&pool, e).await.unwrap();
    }
    ExperienceRepository::create(&pool, &create_test_experience(Uuid::new_v4(), date(2024, 1, 1)))
        .await
        .unwrap();

    // When
    let found = ExperienceRepository::find_by_user(&pool, user_id)
        .await
        .unwrap();

    // Then
    let ids: Vec<Uuid> = found.iter().map(|e| e.id).collect();
    assert_that!(ids, elements_are![eq(&late.id), eq(&middle.id), eq(&early.id)]);
}

#[tokio::test]
async fn given_experience_when_patched_then_unset_fields_kept() {
    // Given
    let pool = create_test_pool().await;
    let experience = create_test_experience(Uuid::new_v4(), date(2021, 1, 1));
    ExperienceRepository::create(&pool, &experience).await.unwrap();

    // When
    let patch = ExperiencePatch {
        end_date: Some(date(2024, 6, 30)),
        current: Some(false),
        ..ExperiencePatch::default()
    };
    let updated = ExperienceRepository::update(&pool, experience.id, &patch)
        .await
        .unwrap();

    // Then
    assert_that!(updated, eq(true));
    let found = ExperienceRepository::find_by_id(&pool, experience.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.end_date, some(eq(date(2024, 6, 30))));
    assert_that!(found.current, eq(false));
    assert_that!(found.title, eq(&experience.title));
    assert_that!(found.location, eq(&experience.location));
}

// =========================================================================
// Educations
// =========================================================================

#[tokio::test]
async fn given_education_when_created_then_round_trips() {
    let pool = create_test_pool().await;
    let education = create_test_education(Uuid::new_v4(), date(2015, 9, 1));

    EducationRepository::create(&pool, &education).await.unwrap();

    let found = EducationRepository::find_by_id(&pool, education.id)
        .await
        .unwrap();
    assert_that!(found, some(eq(&education)));
}

#[tokio::test]
async fn given_education_when_grade_patched_then_degree_kept() {
    let pool = create_test_pool().await;
    let education = create_test_education(Uuid::new_v4(), date(2015, 9, 1));
    EducationRepository::create(&pool, &education).await.unwrap();

    let patch = EducationPatch {
        grade: Some("First".to_string()),
        ..EducationPatch::default()
    };
    EducationRepository::update(&pool, education.id, &patch)
        .await
        .unwrap();

    let found = EducationRepository::find_by_id(&pool, education.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.grade, some(eq("First")));
    assert_that!(found.degree, eq(&education.degree));
}

#[tokio::test]
async fn given_educations_of_user_when_deleted_by_user_then_count_returned() {
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    EducationRepository::create(&pool, &create_test_education(user_id, date(2010, 1, 1)))
        .await
        .unwrap();
    EducationRepository::create(&pool, &create_test_education(user_id, date(2012, 1, 1)))
        .await
        .unwrap();

    let deleted = EducationRepository::delete_by_user(&pool, user_id)
        .await
        .unwrap();

    assert_that!(deleted, eq(2));
    assert_that!(
        EducationRepository::find_by_user(&pool, user_id).await.unwrap(),
        len(eq(0))
    );
}

// =========================================================================
// Skills and languages
// =========================================================================

#[tokio::test]
async fn given_skill_when_level_patched_then_name_kept() {
    let pool = create_test_pool().await;
    let skill = create_test_skill(Uuid::new_v4(), "Rust");
    SkillRepository::create(&pool, &skill).await.unwrap();

    let patch = SkillPatch {
        level: Some(SkillLevel::Expert),
        ..SkillPatch::default()
    };
    SkillRepository::update(&pool, skill.id, &patch).await.unwrap();

    let found = SkillRepository::find_by_id(&pool, skill.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.level, eq(SkillLevel::Expert));
    assert_that!(found.name, eq("Rust"));
}

#[tokio::test]
async fn given_skills_when_found_by_user_then_newest_first() {
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let mut old = create_test_skill(user_id, "SQL");
    old.created_at -= chrono::Duration::minutes(5);
    let new = create_test_skill(user_id, "Rust");
    SkillRepository::create(&pool, &old).await.unwrap();
    SkillRepository::create(&pool, &new).await.unwrap();

    let found = SkillRepository::find_by_user(&pool, user_id).await.unwrap();

    let names: Vec<&str> = found.iter().map(|s| s.name.as_str()).collect();
    assert_that!(names, elements_are![eq(&"Rust"), eq(&"SQL")]);
}

#[tokio::test]
async fn given_language_when_deleted_then_not_found() {
    let pool = create_test_pool().await;
    let language = create_test_language(Uuid::new_v4(), "German");
    LanguageRepository::create(&pool, &language).await.unwrap();

    let deleted = LanguageRepository::delete(&pool, language.id).await.unwrap();

    assert_that!(deleted, eq(true));
    assert_that!(
        LanguageRepository::find_by_id(&pool, language.id)
            .await
            .unwrap(),
        none()
    );
}

#[tokio::test]
async fn given_language_when_proficiency_patched_then_persisted() {
    let pool = create_test_pool().await;
    let language = create_test_language(Uuid::new_v4(), "Spanish");
    LanguageRepository::create(&pool, &language).await.unwrap();

    let patch = LanguagePatch {
        proficiency: Some(LanguageProficiency::Native),
        ..LanguagePatch::default()
    };
    let updated = LanguageRepository::update(&pool, language.id, &patch)
        .await
        .unwrap();

    assert_that!(updated, eq(true));
    let found = LanguageRepository::find_by_id(&pool, language.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.proficiency, eq(LanguageProficiency::Native));
}
