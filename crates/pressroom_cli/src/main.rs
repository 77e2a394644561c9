//! Seed-and-query driver for the pressroom demo.
//!
//! # Responsibility
//! - Run the whole flow once: open store, migrate, seed, aggregate query,
//!   print the mapped result.
//!
//! # Invariants
//! - Single-threaded and linear; any failure aborts with a non-zero exit.
//! - The in-memory store lives exactly as long as this process.

use pressroom_core::db::open_db_in_memory;
use pressroom_core::{
    ArticleDraft, ArticleRepository, CategoryDraft, CategoryRepository, SqliteArticleRepository,
    SqliteCategoryRepository,
};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    pressroom_core::init_logging(pressroom_core::default_log_level())?;

    let conn = open_db_in_memory()?;
    let articles = SqliteArticleRepository::new(&conn);
    let categories = SqliteCategoryRepository::new(&conn);

    let article_id = articles.create(&ArticleDraft::new("Conversational rom-rb", true))?;
    let first_category = categories.create(&CategoryDraft::new("dry-rb"))?;
    let second_category = categories.create(&CategoryDraft::new("rom-rb"))?;
    categories.link_article(article_id, first_category)?;
    categories.link_article(article_id, second_category)?;

    let published = articles.published()?;

    println!("Published articles");
    match published.first() {
        Some(article) => println!("{}", serde_json::to_string_pretty(&article.categories)?),
        None => println!("(none)"),
    }

    Ok(())
}
