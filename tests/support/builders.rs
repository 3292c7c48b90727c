// tests/support/builders.rs
use article_api::domain::article::{
    Article, ArticleDate, ArticleId, ArticleTitle, AuthorName, EmailAddress,
};
use serde_json::{Value, json};

use super::mocks::fixed_now;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    author: String,
    email: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            title: "Test Article".into(),
            author: "Ann".into(),
            email: "ann@example.com".into(),
        }
    }

    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            author: AuthorName::new(self.author).unwrap(),
            email: EmailAddress::new(self.email).unwrap(),
            date: ArticleDate::from_datetime(fixed_now()),
        }
    }
}

/// A request body that passes every field validation.
pub fn article_payload(title: &str) -> Value {
    json!({
        "title": title,
        "author": "Ann",
        "email": "ann@x.io",
        "date": "2024-01-01T00:00:00Z",
    })
}
