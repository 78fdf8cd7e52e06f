use pin_core::Article;
use rand::seq::SliceRandom;
use rand::Rng;

/// Up to `limit` other articles, drawn uniformly at random.
pub fn related_articles<R: Rng + ?Sized>(
    articles: &[Article],
    current_id: &str,
    limit: usize,
    rng: &mut R,
) -> Vec<Article> {
    let mut pool: Vec<&Article> = articles.iter().filter(|a| a.id != current_id).collect();
    let (chosen, _) = pool.partial_shuffle(rng, limit);
    chosen.iter().map(|a| (*a).clone()).collect()
}
