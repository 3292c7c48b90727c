// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::{FieldErrors, FieldValue, required},
    },
    domain::article::{ArticleDate, ArticleTitle, AuthorName, EmailAddress, NewArticle},
};

#[derive(Debug, Default)]
pub struct CreateArticleCommand {
    pub title: FieldValue,
    pub author: FieldValue,
    pub email: FieldValue,
    pub date: FieldValue,
}

impl CreateArticleCommand {
    fn validate(self) -> ApplicationResult<NewArticle> {
        let mut errors = FieldErrors::new();
        let title = required(&mut errors, "title", self.title, ArticleTitle::new);
        let author = required(&mut errors, "author", self.author, AuthorName::new);
        let email = required(&mut errors, "email", self.email, EmailAddress::new);
        let date = required(&mut errors, "date", self.date, ArticleDate::parse);
        errors.into_result()?;

        match (title, author, email, date) {
            (Some(title), Some(author), Some(email), Some(date)) => Ok(NewArticle {
                title,
                author,
                email,
                date,
            }),
            _ => Err(ApplicationError::validation("incomplete article payload")),
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let new_article = command.validate()?;
        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
