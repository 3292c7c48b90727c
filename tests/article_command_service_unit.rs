use article_api::application::{
    commands::articles::{
        ArticleCommandService, CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand,
        UpdateMode,
    },
    error::ApplicationError,
    queries::articles::{ArticleQueryService, GetArticleQuery},
    validation::FieldValue,
};
use std::sync::Arc;

mod support;

use support::{ArticleBuilder, InMemoryArticleRepo};

fn services(repo: Arc<InMemoryArticleRepo>) -> (ArticleCommandService, ArticleQueryService) {
    (
        ArticleCommandService::new(repo.clone(), repo.clone()),
        ArticleQueryService::new(repo),
    )
}

fn valid_create() -> CreateArticleCommand {
    CreateArticleCommand {
        title: FieldValue::present("Hello"),
        author: FieldValue::present("Ann"),
        email: FieldValue::present("ann@x.io"),
        date: FieldValue::present("2024-01-01"),
    }
}

#[tokio::test]
async fn create_accepts_bare_date_as_midnight_utc() {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let (commands, _) = services(repo.clone());

    let dto = commands.create_article(valid_create()).await.unwrap();
    assert_eq!(dto.id, 1);
    assert_eq!(dto.date.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn create_collects_every_field_error() {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let (commands, _) = services(repo.clone());

    let err = commands
        .create_article(CreateArticleCommand::default())
        .await
        .unwrap_err();
    let ApplicationError::InvalidFields(errors) = err else {
        panic!("expected field errors, got {err:?}");
    };
    let fields: Vec<&str> = errors.fields().collect();
    assert_eq!(fields, ["author", "date", "email", "title"]);
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn full_update_requires_every_field() {
    let repo = Arc::new(InMemoryArticleRepo::with_articles([ArticleBuilder::new().build()]));
    let (commands, _) = services(repo.clone());

    let err = commands
        .update_article(UpdateArticleCommand {
            id: 1,
            mode: UpdateMode::Full,
            title: FieldValue::present("New"),
            ..Default::default()
        })
        .await
        .unwrap_err();
    let ApplicationError::InvalidFields(errors) = err else {
        panic!("expected field errors, got {err:?}");
    };
    assert!(errors.get("title").is_none());
    assert_eq!(errors.get("email"), Some(&["This field is required.".to_string()][..]));
}

#[tokio::test]
async fn partial_update_keeps_omitted_fields() {
    let repo = Arc::new(InMemoryArticleRepo::with_articles([ArticleBuilder::new()
        .author("Original")
        .build()]));
    let (commands, _) = services(repo.clone());

    let dto = commands
        .update_article(UpdateArticleCommand {
            id: 1,
            mode: UpdateMode::Partial,
            title: FieldValue::present("Renamed"),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(dto.title, "Renamed");
    assert_eq!(dto.author, "Original");
}

#[tokio::test]
async fn partial_update_rejects_explicit_null() {
    let repo = Arc::new(InMemoryArticleRepo::with_articles([ArticleBuilder::new().build()]));
    let (commands, _) = services(repo);

    let err = commands
        .update_article(UpdateArticleCommand {
            id: 1,
            mode: UpdateMode::Partial,
            email: FieldValue::Null,
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::InvalidFields(_)));
}

#[tokio::test]
async fn update_of_unknown_id_is_not_found() {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let (commands, _) = services(repo);

    for id in [0, -1, 5] {
        let err = commands
            .update_article(UpdateArticleCommand {
                id,
                mode: UpdateMode::Partial,
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound(_)), "id {id}: {err:?}");
    }
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let repo = Arc::new(InMemoryArticleRepo::with_articles([ArticleBuilder::new().id(3).build()]));
    let (commands, queries) = services(repo);

    commands
        .delete_article(DeleteArticleCommand { id: 3 })
        .await
        .unwrap();

    let err = queries.get_article(GetArticleQuery { id: 3 }).await.unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));

    let err = commands
        .delete_article(DeleteArticleCommand { id: 3 })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn list_returns_count_of_created_records() {
    let repo = Arc::new(InMemoryArticleRepo::default());
    let (commands, queries) = services(repo);

    for _ in 0..4 {
        commands.create_article(valid_create()).await.unwrap();
    }
    assert_eq!(queries.list_articles().await.unwrap().len(), 4);
}
