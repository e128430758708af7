use std::collections::HashMap;

use nm_core::{Article, SourceGroup};

/// Partition a flat article list into per-source groups.
///
/// Single stable pass in provider order: group order is the first-occurrence
/// order of source names, article order within a group is provider order.
/// Articles without a source name land under `"Unknown"`. Articles are not
/// sorted and identical URLs are not deduplicated.
pub fn group_by_source(articles: Vec<Article>) -> Vec<SourceGroup> {
    let mut groups: Vec<SourceGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for article in articles {
        let name = article.source_name().to_string();
        match index.get(&name) {
            Some(&i) => groups[i].articles.push(article),
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(SourceGroup {
                    source: name,
                    articles: vec![article],
                });
            }
        }
    }

    groups
}
