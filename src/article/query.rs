use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::article::{error::ArticleError, types::Article};

/// Maximum number of article ids reported per query
pub const MAX_ARTICLES: usize = 10;

/// A parsed `{tag}/{yyyymmdd}` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDateQuery {
    /// Lowercased tag
    pub tag: String,
    /// Date as stored on articles, `YYYY-MM-DD`
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResult {
    pub tag: String,
    pub count: usize,
    pub articles: Vec<String>,
    pub related_tags: BTreeSet<String>,
}

impl TagDateQuery {
    /// Parse the part of the path following `/tags/`.
    ///
    /// Grammar: `tag "/" date8 ["/"]`, both segments non-empty.
    pub fn parse(path: &str) -> Result<Self, ArticleError> {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let mut segments = trimmed.split('/');

        match (segments.next(), segments.next(), segments.next()) {
            (Some(tag), Some(date), None) if !tag.is_empty() && !date.is_empty() => {
                Self::new(tag, date)
            }
            _ => Err(ArticleError::InvalidQueryPath),
        }
    }

    /// Build a query from a tag and an 8 character `yyyymmdd` date.
    ///
    /// The date is not checked against the calendar: `99999999` becomes
    /// `9999-99-99` and simply matches nothing unless an article carries
    /// that literal date.
    pub fn new(tag: &str, date8: &str) -> Result<Self, ArticleError> {
        if date8.len() != 8 || !date8.is_ascii() {
            return Err(ArticleError::InvalidDate);
        }

        let date = format!("{}-{}-{}", &date8[..4], &date8[4..6], &date8[6..]);

        Ok(Self {
            tag: tag.to_lowercase(),
            date,
        })
    }

    /// Scan `articles` once, collecting matches and co-occurring tags.
    ///
    /// Every tag occurrence that equals the query tag counts, so an article
    /// listing the tag twice adds two to `count` and may appear twice in
    /// `articles`.
    pub fn run<'a, I>(&self, articles: I) -> QueryResult
    where
        I: IntoIterator<Item = (&'a i64, &'a Article)>,
    {
        let mut result = QueryResult {
            tag: self.tag.clone(),
            ..Default::default()
        };

        for (id, article) in articles {
            if article.date != self.date {
                continue;
            }

            for tag in &article.tags {
                if tag.to_lowercase() != self.tag {
                    continue;
                }

                if result.articles.len() < MAX_ARTICLES {
                    result.articles.push(id.to_string());
                }

                result.related_tags.extend(
                    article
                        .tags
                        .iter()
                        .filter(|related| related.to_lowercase() != self.tag)
                        .cloned(),
                );

                result.count += 1;
            }
        }

        debug!(
            "Query {}/{} matched {} tag occurrences, {} related tags",
            self.tag,
            self.date,
            result.count,
            result.related_tags.len()
        );

        result
    }
}
