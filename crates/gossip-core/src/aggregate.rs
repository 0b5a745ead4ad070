//! Source statistics for the sidebar, derived on demand from the catalog.

use std::collections::HashMap;
use gossip_types::article::{Article, SourceCount};

/// Count articles per exact `source` string.
///
/// Sources are compared case-sensitively without trimming. Rows come out
/// in order of first appearance.
pub fn aggregate(articles: &[Article]) -> Vec<SourceCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SourceCount> = Vec::new();

    for article in articles {
        match index.get(article.source.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(article.source.as_str(), counts.len());
                counts.push(SourceCount {
                    source: article.source.clone(),
                    count: 1,
                });
            }
        }
    }

    counts
}
