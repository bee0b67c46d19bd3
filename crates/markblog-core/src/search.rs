//! Case-insensitive substring search over a post snapshot.

use crate::domain::Post;

/// Filter posts whose title or excerpt contains `query`, case-insensitively.
///
/// Stateless single pass: the relative order of `posts` is preserved and an
/// empty query is the identity filter. No tokenization, no ranking.
pub fn filter(posts: &[Post], query: &str) -> Vec<Post> {
    if query.is_empty() {
        return posts.to_vec();
    }
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.excerpt.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PostDraft;
    use chrono::Utc;

    fn post(id: &str, title: &str, content: &str) -> Post {
        let draft = PostDraft {
            title: title.to_owned(),
            content: content.to_owned(),
            author: "tester".to_owned(),
            tags: String::new(),
        };
        Post::from_draft(id.to_owned(), Utc::now(), &draft)
    }

    #[test]
    fn empty_query_is_identity() {
        let posts = vec![post("1", "Alpha", "one"), post("2", "Beta", "two")];
        let out = filter(&posts, "");
        assert_eq!(out, posts);
    }

    #[test]
    fn matches_title_or_excerpt_case_insensitively() {
        let posts = vec![
            post("1", "Rust Patterns", "ownership and borrowing"),
            post("2", "Cooking", "how to make BORSCHT"),
            post("3", "Gardening", "tomatoes"),
        ];
        let by_title = filter(&posts, "rust");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "1");

        let by_excerpt = filter(&posts, "borscht");
        assert_eq!(by_excerpt.len(), 1);
        assert_eq!(by_excerpt[0].id, "2");
    }

    #[test]
    fn no_match_returns_empty_and_order_is_preserved() {
        let posts = vec![
            post("1", "a story", "common word"),
            post("2", "b story", "common word"),
            post("3", "c story", "common word"),
        ];
        assert!(filter(&posts, "ZZZ-no-match").is_empty());
        let all = filter(&posts, "common");
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }
}
