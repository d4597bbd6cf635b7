//! Random selection of songs

use crate::db::models::Song;
use crate::projection::SongSummary;
use rand::seq::index;
use rand::Rng;

/// Maximum number of songs returned by one `GET /songs`
pub const SAMPLE_SIZE: usize = 12;

/// Draw up to `amount` distinct songs uniformly at random, in random order
///
/// Returns every song (shuffled) when there are `amount` or fewer.
pub fn sample_songs<R: Rng + ?Sized>(
    songs: &[Song],
    amount: usize,
    rng: &mut R,
) -> Vec<SongSummary> {
    let amount = amount.min(songs.len());
    index::sample(rng, songs.len(), amount)
        .into_iter()
        .map(|i| SongSummary::from(&songs[i]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn songs(count: i64) -> Vec<Song> {
        let ts = NaiveDate::from_ymd_opt(2017, 11, 5)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        (1..=count)
            .map(|id| Song {
                id,
                title: Some(format!("Song {id}")),
                artist: None,
                year: None,
                created_at: ts,
                updated_at: ts,
            })
            .collect()
    }

    fn ids(sample: &[SongSummary]) -> HashSet<i64> {
        sample.iter().map(|s| s.id).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_songs(&[], SAMPLE_SIZE, &mut rng).is_empty());
    }

    #[test]
    fn test_small_input_returns_everything() {
        let mut rng = StdRng::seed_from_u64(2);
        let all = songs(3);
        let sample = sample_songs(&all, SAMPLE_SIZE, &mut rng);
        assert_eq!(ids(&sample), HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_exactly_sample_size_returns_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let all = songs(SAMPLE_SIZE as i64);
        assert_eq!(sample_songs(&all, SAMPLE_SIZE, &mut rng).len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_large_input_is_capped_and_distinct() {
        let all = songs(20);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = sample_songs(&all, SAMPLE_SIZE, &mut rng);
            assert_eq!(sample.len(), SAMPLE_SIZE);
            let distinct = ids(&sample);
            assert_eq!(distinct.len(), SAMPLE_SIZE, "duplicate in seed {seed}");
            assert!(distinct.iter().all(|id| (1..=20).contains(id)));
        }
    }

    #[test]
    fn test_same_seed_same_sample() {
        let all = songs(40);
        let first = sample_songs(&all, SAMPLE_SIZE, &mut StdRng::seed_from_u64(42));
        let second = sample_songs(&all, SAMPLE_SIZE, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_eventually_differ() {
        let all = songs(40);
        let baseline = ids(&sample_songs(&all, SAMPLE_SIZE, &mut StdRng::seed_from_u64(0)));
        let differs = (1..20).any(|seed| {
            ids(&sample_songs(&all, SAMPLE_SIZE, &mut StdRng::seed_from_u64(seed))) != baseline
        });
        assert!(differs);
    }
}
