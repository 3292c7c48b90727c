// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleDate, ArticleId, ArticleTitle, AuthorName, EmailAddress,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub author: AuthorName,
    pub email: EmailAddress,
    pub date: ArticleDate,
}

impl Article {
    /// Applies the populated fields of `update` in place; omitted fields keep
    /// their current value.
    pub fn apply(&mut self, update: ArticleUpdate) {
        let ArticleUpdate {
            id: _,
            title,
            author,
            email,
            date,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(date) = date {
            self.date = date;
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub author: AuthorName,
    pub email: EmailAddress,
    pub date: ArticleDate,
}

impl NewArticle {
    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            author: self.author,
            email: self.email,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub author: Option<AuthorName>,
    pub email: Option<EmailAddress>,
    pub date: Option<ArticleDate>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId) -> Self {
        Self {
            id,
            title: None,
            author: None,
            email: None,
            date: None,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_author(mut self, author: AuthorName) -> Self {
        self.author = Some(author);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none() && self.email.is_none() && self.date.is_none()
    }
}
