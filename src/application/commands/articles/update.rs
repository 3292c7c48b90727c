use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::ApplicationResult,
        validation::{FieldErrors, FieldValue, optional, required},
    },
    domain::article::{
        ArticleDate, ArticleId, ArticleTitle, ArticleUpdate, AuthorName, EmailAddress,
    },
};

/// `Full` is a PUT: every field must be supplied. `Partial` is a PATCH:
/// omitted fields keep their stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    #[default]
    Full,
    Partial,
}

#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub mode: UpdateMode,
    pub title: FieldValue,
    pub author: FieldValue,
    pub email: FieldValue,
    pub date: FieldValue,
}

impl UpdateArticleCommand {
    fn validate(self, id: ArticleId) -> ApplicationResult<ArticleUpdate> {
        let mut errors = FieldErrors::new();
        let mut update = ArticleUpdate::new(id);

        match self.mode {
            UpdateMode::Full => {
                update.title = required(&mut errors, "title", self.title, ArticleTitle::new);
                update.author = required(&mut errors, "author", self.author, AuthorName::new);
                update.email = required(&mut errors, "email", self.email, EmailAddress::new);
                update.date = required(&mut errors, "date", self.date, ArticleDate::parse);
            }
            UpdateMode::Partial => {
                update.title = optional(&mut errors, "title", self.title, ArticleTitle::new);
                update.author = optional(&mut errors, "author", self.author, AuthorName::new);
                update.email = optional(&mut errors, "email", self.email, EmailAddress::new);
                update.date = optional(&mut errors, "date", self.date, ArticleDate::parse);
            }
        }

        errors.into_result()?;
        Ok(update)
    }
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let article = self.load_existing(command.id).await?;
        let update = command.validate(article.id)?;

        if update.is_empty() {
            return Ok(article.into());
        }

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
