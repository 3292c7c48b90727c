// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::error::ApplicationResult;

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let article = self.load_existing(command.id).await?;
        self.write_repo.delete(article.id).await?;
        tracing::info!(article_id = %article.id, "article deleted");
        Ok(())
    }
}
