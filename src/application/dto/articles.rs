use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Wire representation of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub email: String,
    #[serde(with = "serde_time")]
    pub date: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            author: article.author.into_inner(),
            email: article.email.into_inner(),
            date: article.date.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleDate, ArticleId, ArticleTitle, AuthorName, EmailAddress};

    #[test]
    fn serializes_date_with_utc_suffix() {
        let article = Article {
            id: ArticleId::new(4).unwrap(),
            title: ArticleTitle::new("Rust").unwrap(),
            author: AuthorName::new("Ferris").unwrap(),
            email: EmailAddress::new("ferris@example.com").unwrap(),
            date: ArticleDate::parse("2024-05-06T07:08:09.250+00:00").unwrap(),
        };

        let json = serde_json::to_value(ArticleDto::from(article)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 4,
                "title": "Rust",
                "author": "Ferris",
                "email": "ferris@example.com",
                "date": "2024-05-06T07:08:09.250000Z"
            })
        );
    }
}
