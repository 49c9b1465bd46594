mod common;

use common::{create_test_context, date, new_education, new_experience, new_language, new_skill};

use cm_core::{
    EducationPatch, ExperiencePatch, LanguagePatch, LanguageProficiency, SkillLevel, SkillPatch,
};

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_experiences_when_listed_then_latest_start_date_first() {
    // Given
    let ctx = create_test_context().await;
    let owner = Uuid::new_v4();
    let older = ctx
        .data
        .experiences
        .add(new_experience(owner, "Intern", date(2018, 6, 1)))
        .await
        .unwrap();
    let newer = ctx
        .data
        .experiences
        .add(new_experience(owner, "Engineer", date(2021, 3, 1)))
        .await
        .unwrap();
    ctx.data
        .experiences
        .add(new_experience(Uuid::new_v4(), "Elsewhere", date(2022, 1, 1)))
        .await
        .unwrap();

    // When
    let listed = ctx.data.experiences.get_all(owner).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|e| e.id).collect();

    // Then
    assert_that!(ids, elements_are![eq(&newer), eq(&older)]);
}

#[tokio::test]
async fn given_experience_when_end_date_patched_then_other_fields_keep_their_values() {
    // Given
    let ctx = create_test_context().await;
    let owner = Uuid::new_v4();
    let id = ctx
        .data
        .experiences
        .add(new_experience(owner, "Engineer", date(2021, 3, 1)))
        .await
        .unwrap();

    // When
    let patch = ExperiencePatch {
        end_date: Some(date(2024, 2, 29)),
        ..ExperiencePatch::default()
    };
    let updated = ctx.data.experiences.update(id, patch).await.unwrap();
    let found = ctx.data.experiences.get_by_id(id).await.unwrap().unwrap();

    // Then
    assert_that!(updated, eq(true));
    assert_that!(found.end_date, some(eq(date(2024, 2, 29))));
    assert_that!(found.title, eq("Engineer"));
    assert_that!(found.company, eq("Test Corp"));
    assert_that!(found.start_date, eq(date(2021, 3, 1)));
}

#[tokio::test]
async fn given_blank_experience_title_when_added_then_validation_error() {
    // Given
    let ctx = create_test_context().await;

    // When
    let result = ctx
        .data
        .experiences
        .add(new_experience(Uuid::new_v4(), " ", date(2021, 3, 1)))
        .await;

    // Then
    assert_that!(result.map_err(|e| e.is_validation()), err(eq(true)));
}

#[tokio::test]
async fn given_education_when_grade_patched_then_degree_is_kept() {
    // Given
    let ctx = create_test_context().await;
    let owner = Uuid::new_v4();
    let id = ctx
        .data
        .educations
        .add(new_education(owner, "MSc", date(2019, 9, 1)))
        .await
        .unwrap();

    // When
    let patch = EducationPatch {
        grade: Some("Distinction".to_string()),
        ..EducationPatch::default()
    };
    ctx.data.educations.update(id, patch).await.unwrap();
    let found = ctx.data.educations.get_by_id(id).await.unwrap().unwrap();

    // Then
    assert_that!(found.grade, some(eq("Distinction")));
    assert_that!(found.degree, eq("MSc"));
}

#[tokio::test]
async fn given_education_when_deleted_then_it_is_gone() {
    // Given
    let ctx = create_test_context().await;
    let owner = Uuid::new_v4();
    let id = ctx
        .data
        .educations
        .add(new_education(owner, "BSc", date(2015, 9, 1)))
        .await
        .unwrap();

    // When
    let deleted = ctx.data.educations.delete(id).await.unwrap();
    let deleted_again = ctx.data.educations.delete(id).await.unwrap();

    // Then
    assert_that!(deleted, eq(true));
    assert_that!(deleted_again, eq(false));
    assert_that!(ctx.data.educations.get_by_id(id).await, ok(none()));
}

#[tokio::test]
async fn given_skills_for_two_owners_when_delete_all_then_only_one_owner_is_cleared() {
    // Given
    let ctx = create_test_context().await;
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();
    ctx.data.skills.add(new_skill(owner, "Rust")).await.unwrap();
    ctx.data.skills.add(new_skill(owner, "SQL")).await.unwrap();
    ctx.data.skills.add(new_skill(other, "Go")).await.unwrap();

    // When
    let removed = ctx.data.skills.delete_all(owner).await.unwrap();

    // Then
    assert_that!(removed, eq(2));
    assert_that!(ctx.data.skills.get_all(owner).await, ok(len(eq(0))));
    assert_that!(ctx.data.skills.get_all(other).await, ok(len(eq(1))));
}

#[tokio::test]
async fn given_skill_when_level_patched_then_name_is_kept() {
    // Given
    let ctx = create_test_context().await;
    let id = ctx
        .data
        .skills
        .add(new_skill(Uuid::new_v4(), "Rust"))
        .await
        .unwrap();

    // When
    let patch = SkillPatch {
        level: Some(SkillLevel::Expert),
        ..SkillPatch::default()
    };
    ctx.data.skills.update(id, patch).await.unwrap();
    let found = ctx.data.skills.get_by_id(id).await.unwrap().unwrap();

    // Then
    assert_that!(found.level, eq(SkillLevel::Expert));
    assert_that!(found.name, eq("Rust"));
}

#[tokio::test]
async fn given_languages_when_listed_then_newest_first() {
    // Given
    let ctx = create_test_context().await;
    let owner = Uuid::new_v4();
    ctx.data
        .languages
        .add(new_language(owner, "French"))
        .await
        .unwrap();
    ctx.data
        .languages
        .add(new_language(owner, "German"))
        .await
        .unwrap();

    // When
    let listed = ctx.data.languages.get_all(owner).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|l| l.name.as_str()).collect();

    // Then
    assert_that!(names, elements_are![eq(&"German"), eq(&"French")]);
}

#[tokio::test]
async fn given_language_when_proficiency_patched_then_it_round_trips() {
    // Given
    let ctx = create_test_context().await;
    let id = ctx
        .data
        .languages
        .add(new_language(Uuid::new_v4(), "Japanese"))
        .await
        .unwrap();

    // When
    let patch = LanguagePatch {
        proficiency: Some(LanguageProficiency::Fluent),
        ..LanguagePatch::default()
    };
    let updated = ctx.data.languages.update(id, patch).await.unwrap();
    let found = ctx.data.languages.get_by_id(id).await.unwrap().unwrap();

    // Then
    assert_that!(updated, eq(true));
    assert_that!(found.proficiency, eq(LanguageProficiency::Fluent));
    assert_that!(found.name, eq("Japanese"));
}

#[tokio::test]
async fn given_experience_when_patched_with_blank_title_and_early_end_then_rejected_and_unchanged() {
    // Given
    let ctx = create_test_context().await;
    let id = ctx
        .data
        .experiences
        .add(new_experience(Uuid::new_v4(), "Engineer", date(2021, 3, 1)))
        .await
        .unwrap();

    // When
    let blank_title = ctx
        .data
        .experiences
        .update(
            id,
            ExperiencePatch {
                title: Some("  ".to_string()),
                ..ExperiencePatch::default()
            },
        )
        .await;
    let early_end = ctx
        .data
        .experiences
        .update(
            id,
            ExperiencePatch {
                end_date: Some(date(2000, 1, 1)),
                ..ExperiencePatch::default()
            },
        )
        .await;
    let found = ctx.data.experiences.get_by_id(id).await.unwrap().unwrap();

    // Then
    assert_that!(blank_title.expect_err("blank title").is_validation(), eq(true));
    assert_that!(early_end.expect_err("end before start").is_validation(), eq(true));
    assert_that!(found.title, eq("Engineer"));
    assert_that!(found.end_date, none());
}

#[tokio::test]
async fn given_unknown_experience_when_updated_then_false() {
    // Given
    let ctx = create_test_context().await;

    // When
    let updated = ctx
        .data
        .experiences
        .update(Uuid::new_v4(), ExperiencePatch::default())
        .await;

    // Then
    assert_that!(updated, ok(eq(&false)));
}

#[tokio::test]
async fn given_education_with_end_date_when_start_moved_past_it_then_rejected() {
    // Given
    let ctx = create_test_context().await;
    let mut new = new_education(Uuid::new_v4(), "BSc", date(2015, 9, 1));
    new.end_date = Some(date(2019, 6, 30));
    let id = ctx.data.educations.add(new).await.unwrap();

    // When
    let result = ctx
        .data
        .educations
        .update(
            id,
            EducationPatch {
                start_date: Some(date(2020, 1, 1)),
                ..EducationPatch::default()
            },
        )
        .await;

    // Then
    assert_that!(result.expect_err("start after end").is_validation(), eq(true));
    let found = ctx.data.educations.get_by_id(id).await.unwrap().unwrap();
    assert_that!(found.start_date, eq(date(2015, 9, 1)));
}

#[tokio::test]
async fn given_skill_when_patched_with_blank_name_then_rejected_and_unchanged() {
    // Given
    let ctx = create_test_context().await;
    let id = ctx
        .data
        .skills
        .add(new_skill(Uuid::new_v4(), "Rust"))
        .await
        .unwrap();

    // When
    let result = ctx
        .data
        .skills
        .update(
            id,
            SkillPatch {
                name: Some(String::new()),
                level: None,
            },
        )
        .await;

    // Then
    assert_that!(result.expect_err("blank name").is_validation(), eq(true));
    let found = ctx.data.skills.get_by_id(id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Rust"));
}

#[tokio::test]
async fn given_language_when_patched_with_blank_name_then_rejected() {
    // Given
    let ctx = create_test_context().await;
    let id = ctx
        .data
        .languages
        .add(new_language(Uuid::new_v4(), "Spanish"))
        .await
        .unwrap();

    // When
    let result = ctx
        .data
        .languages
        .update(
            id,
            LanguagePatch {
                name: Some(" ".to_string()),
                proficiency: None,
            },
        )
        .await;

    // Then
    assert_that!(result.expect_err("blank name").is_validation(), eq(true));
}
