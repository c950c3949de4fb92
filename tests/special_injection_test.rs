use anyhow::Result;
use passgen::core::inject::{catalog_contains, inject};
use passgen::core::{composer, Draft};
use passgen::WordList;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sample_list() -> WordList {
    WordList::new(
        ["apple", "river", "stone", "lantern", "über"]
            .iter()
            .map(|w| w.to_string())
            .collect(),
    )
}

#[test]
fn test_injected_draft_keeps_word_count() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(11);
    let draft = composer::compose(&sample_list(), 6, &mut rng)?;
    let injected = inject(&draft, &mut rng)?;

    assert_eq!(injected.len(), draft.len());
    Ok(())
}

#[test]
fn test_injected_word_carries_exactly_one_catalog_character() -> Result<()> {
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let draft = composer::compose(&sample_list(), 5, &mut rng)?;
        let injected = inject(&draft, &mut rng)?;

        let changed: Vec<usize> = (0..draft.len())
            .filter(|&i| injected.words[i] != draft.words[i])
            .collect();
        assert_eq!(changed.len(), 1, "seed {}: one word must change", seed);

        let rebuilt = &injected.words[changed[0]];
        let specials = rebuilt.chars().filter(|c| catalog_contains(*c)).count();
        assert_eq!(specials, 1, "seed {}: {:?}", seed, rebuilt);
    }
    Ok(())
}

#[test]
fn test_rebuilt_word_length_tracks_the_chosen_position() -> Result<()> {
    // new word is word[pos] + special + word[0..=pos], so its char length is
    // pos + 3 and never exceeds the original length + 2
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let draft = composer::compose(&sample_list(), 5, &mut rng)?;
        let injected = inject(&draft, &mut rng)?;

        let (index, rebuilt) = (0..draft.len())
            .find_map(|i| (injected.words[i] != draft.words[i]).then(|| (i, &injected.words[i])))
            .unwrap();

        let original_len = draft.words[index].chars().count();
        let rebuilt_len = rebuilt.chars().count();
        assert!(rebuilt_len >= 3 && rebuilt_len <= original_len + 2);
    }
    Ok(())
}

#[test]
fn test_single_character_word_becomes_three_characters() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(3);
    let injected = inject(&Draft::new(vec!["x".to_string()]), &mut rng)?;

    let chars: Vec<char> = injected.words[0].chars().collect();
    assert_eq!(chars.len(), 3);
    assert_eq!((chars[0], chars[2]), ('x', 'x'));
    assert!(catalog_contains(chars[1]));
    Ok(())
}
