use honggfuzz::fuzz;
use seedroll::{SeedrollError, Wordlist, WORD_COUNT};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let Ok(text) = std::str::from_utf8(data) else {
                return;
            };
            match Wordlist::parse(text) {
                Ok(list) => {
                    assert_eq!(list.len(), WORD_COUNT);
                    assert!(list.iter().all(|w| !w.is_empty() && w.trim() == w));
                }
                Err(SeedrollError::EmptyResource) => assert!(text.is_empty()),
                Err(SeedrollError::WrongWordCount { actual, .. }) => assert_ne!(actual, WORD_COUNT),
                Err(SeedrollError::DuplicateWord { first, second, .. }) => assert!(first < second),
                Err(e) => panic!("unexpected parse error: {e}"),
            }
        });
    }
}
