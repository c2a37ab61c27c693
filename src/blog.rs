use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};
#[cfg(feature = "ssr")]
use regex::RegexBuilder;

#[cfg(feature = "ssr")]
use crate::highlight::highlight;

/// Number of article cards per page on the blog index.
pub const POSTS_PER_PAGE: usize = 4;

pub static POST_CACHE: LazyLock<DashMap<String, Option<Post>>> = LazyLock::new(DashMap::new);
pub static META_CACHE: LazyLock<DashMap<String, Vec<PostMeta>>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "blog"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Articles;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    excerpt: String,
    author: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMeta {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub meta: PostMeta,
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum BlogError {
    #[error("article not found")]
    NotFound,
    #[error("couldn't parse articles")]
    ParseError,
}

/// Every distinct tag across `posts`, sorted, for the filter bar.
pub fn collect_tags(posts: &[PostMeta]) -> Vec<String> {
    let mut tags: Vec<String> = posts.iter().flat_map(|p| p.tags.iter().cloned()).collect();
    tags.sort();
    tags.dedup();
    tags
}

pub fn total_pages(count: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 1;
    }
    count.div_ceil(per_page).max(1)
}

/// The slice of `items` shown on 1-based `page`. Out-of-range pages are
/// empty rather than an error; the filter bar resets to page 1 anyway.
pub fn page_slice<T>(items: &[T], per_page: usize, page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

#[cfg(feature = "ssr")]
#[tracing::instrument(skip_all, fields(pattern = %pattern))]
pub async fn get_meta(pattern: String) -> Option<Vec<PostMeta>> {
    let cache = &*META_CACHE;
    let is_base = pattern.is_empty();
    if is_base {
        if let Some(r) = cache.get(&pattern) {
            return Some(r.clone());
        }
    }
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .ok()?;
    let matter = Matter::<YAML>::new();
    let posts = Articles::iter()
        .map(|s| {
            let content = Articles::get(&s)?;
            let content = String::from_utf8(content.data.into()).ok()?;
            Some((s, content))
        })
        .collect::<Option<Vec<_>>>()?
        .into_iter()
        .filter(|(_, content)| is_base || re.is_match(content))
        .map(|(s, content)| {
            let fm = matter.parse_with_struct::<FrontMatter>(&content)?;
            Some(PostMeta {
                slug: s[..s.len() - 3].to_string(),
                title: fm.data.title,
                excerpt: fm.data.excerpt,
                author: fm.data.author,
                date: fm.data.date,
                tags: fm.data.tags,
            })
        })
        .collect::<Option<Vec<PostMeta>>>();
    let posts = posts.map(|mut pv| {
        pv.sort_by(|a, b| b.date.cmp(&a.date));
        pv
    });
    if is_base {
        cache.insert(pattern, posts.clone().unwrap_or_default());
    }

    posts
}

#[cfg(feature = "ssr")]
#[tracing::instrument(skip_all, fields(name = %name))]
pub async fn get_post(name: String) -> Option<Post> {
    let content = Articles::get(&name)?;

    let cache = &*POST_CACHE;
    cache
        .entry(name.clone())
        .or_insert_with(move || {
            let matter = Matter::<YAML>::new();
            let content = String::from_utf8(content.data.into()).ok()?;

            let fm = matter.parse_with_struct::<FrontMatter>(&content)?;
            let meta = PostMeta {
                slug: name[..name.len() - 3].to_string(),
                title: fm.data.title,
                excerpt: fm.data.excerpt,
                author: fm.data.author,
                date: fm.data.date,
                tags: fm.data.tags,
            };

            let parser = Parser::new_ext(&content, Options::all());
            let parser = highlight(parser);

            let mut html_output = String::new();
            pulldown_cmark::html::push_html(&mut html_output, parser);

            Some(Post {
                meta,
                content: html_output,
            })
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn meta(slug: &str, tags: &[&str]) -> PostMeta {
        PostMeta {
            slug: slug.to_string(),
            title: slug.to_string(),
            excerpt: String::new(),
            author: "Zentaza".to_string(),
            date: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn collect_tags_sorts_and_dedupes() {
        let posts = vec![
            meta("a", &["rust", "web"]),
            meta("b", &["ai", "rust"]),
            meta("c", &[]),
        ];
        assert_eq!(collect_tags(&posts), vec!["ai", "rust", "web"]);
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages(0, POSTS_PER_PAGE), 1);
        assert_eq!(total_pages(4, 4), 1);
        assert_eq!(total_pages(5, 4), 2);
        assert_eq!(total_pages(9, 4), 3);
        assert_eq!(total_pages(3, 0), 1);
    }

    #[test]
    fn page_slice_windows_the_items() {
        let items: Vec<u32> = (0..9).collect();
        assert_eq!(page_slice(&items, 4, 1), &[0, 1, 2, 3]);
        assert_eq!(page_slice(&items, 4, 2), &[4, 5, 6, 7]);
        assert_eq!(page_slice(&items, 4, 3), &[8]);
        assert!(page_slice(&items, 4, 4).is_empty());
        // Page 0 saturates to the first page.
        assert_eq!(page_slice(&items, 4, 0), &[0, 1, 2, 3]);
    }

    #[test]
    fn embedded_articles_use_markdown_names() {
        for name in Articles::iter() {
            assert!(name.ends_with(".md"), "unexpected asset {name}");
        }
    }
}
