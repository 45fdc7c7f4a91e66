use shiori::application::commands::categories::{
    CreateCategoryCommand, DeleteCategoryCommand, UpdateCategoryCommand,
};
use shiori::application::error::ApplicationError;
use shiori::application::queries::posts::ListPostsQuery;
use shiori::domain::errors::DomainError;

mod support;

#[tokio::test]
async fn create_derives_slug_and_defaults_description() {
    let services = support::build_test_services().await;

    let created = services
        .category_commands
        .create_category(support::category("Rust & Systems"))
        .await
        .unwrap();

    assert!(created.id > 0);
    assert_eq!(created.name, "Rust & Systems");
    assert_eq!(created.slug, "rust-systems");
    assert_eq!(created.description, "");
}

#[tokio::test]
async fn list_returns_categories_sorted_by_name() {
    let services = support::build_test_services().await;
    for name in ["Travel", "Cooking", "Music"] {
        services
            .category_commands
            .create_category(support::category(name))
            .await
            .unwrap();
    }

    let names: Vec<String> = services
        .category_queries
        .list_categories()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Cooking", "Music", "Travel"]);
}

#[tokio::test]
async fn duplicate_slug_is_a_conflict() {
    let services = support::build_test_services().await;
    services
        .category_commands
        .create_category(support::category("Tech"))
        .await
        .unwrap();

    let err = services
        .category_commands
        .create_category(support::category("tech!"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
}

#[tokio::test]
async fn name_without_slug_characters_is_rejected() {
    let services = support::build_test_services().await;

    let err = services
        .category_commands
        .create_category(support::category("!!!"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn update_rewrites_name_slug_and_description() {
    let services = support::build_test_services().await;
    let created = services
        .category_commands
        .create_category(CreateCategoryCommand {
            name: "Tech".into(),
            description: Some("gadgets".into()),
        })
        .await
        .unwrap();

    let updated = services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id: created.id,
            name: "Technology News".into(),
            description: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.slug, "technology-news");
    assert_eq!(updated.description, "");
}

#[tokio::test]
async fn update_and_delete_of_missing_category_report_not_found() {
    let services = support::build_test_services().await;

    let update_err = services
        .category_commands
        .update_category(UpdateCategoryCommand {
            id: 404,
            name: "Ghost".into(),
            description: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        update_err,
        ApplicationError::Domain(DomainError::NotFound(_))
    ));

    let delete_err = services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: 404 })
        .await
        .unwrap_err();
    assert!(matches!(
        delete_err,
        ApplicationError::Domain(DomainError::NotFound(_))
    ));
}

#[tokio::test]
async fn deleting_a_category_detaches_it_from_posts() {
    let services = support::build_test_services().await;
    let tech = services
        .category_commands
        .create_category(support::category("Tech"))
        .await
        .unwrap();
    let life = services
        .category_commands
        .create_category(support::category("Life"))
        .await
        .unwrap();
    services
        .post_commands
        .create_post(support::post("Both Worlds", &[tech.id, life.id]))
        .await
        .unwrap();

    services
        .category_commands
        .delete_category(DeleteCategoryCommand { id: tech.id })
        .await
        .unwrap();

    let posts = services
        .post_queries
        .list_posts(ListPostsQuery::default())
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    let remaining: Vec<i64> = posts[0].categories.iter().map(|c| c.id).collect();
    assert_eq!(remaining, vec![life.id]);

    let by_tech = services
        .post_queries
        .list_posts(ListPostsQuery {
            category_id: Some(tech.id),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(by_tech.is_empty());
}
