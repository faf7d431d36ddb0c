use std::sync::Barrier;
use std::thread;

use seedroll::{
    SeedrollError, Wordlist, WordlistService, CANONICAL_ENGLISH_SHA256, EMBEDDED_ENGLISH,
    WORD_COUNT,
};

fn english_lines() -> Vec<&'static str> {
    EMBEDDED_ENGLISH.lines().collect()
}

#[test]
fn first_and_last_words() {
    let service = WordlistService::new();
    assert_eq!(service.get_word(0).unwrap(), "abandon");
    assert_eq!(service.get_word(1).unwrap(), "ability");
    assert_eq!(service.get_word(2047).unwrap(), "zoo");
}

#[test]
fn out_of_range_indices() {
    let service = WordlistService::new();
    for index in [-1, 2048, i64::MIN, i64::MAX] {
        match service.get_word(index) {
            Err(SeedrollError::IndexOutOfRange { index: got, max }) => {
                assert_eq!(got, index);
                assert_eq!(max, WORD_COUNT);
            }
            other => panic!("index {index}: unexpected {other:?}"),
        }
    }
}

#[test]
fn lookup_initializes_lazily() {
    let service = WordlistService::new();
    assert!(!service.is_initialized());
    service.get_word(5).unwrap();
    assert!(service.is_initialized());
}

#[test]
fn initialize_is_idempotent() {
    let service = WordlistService::new();
    service.initialize().unwrap();
    let first = service.wordlist().unwrap() as *const Wordlist;
    service.initialize().unwrap();
    let second = service.wordlist().unwrap() as *const Wordlist;
    assert_eq!(first, second);
}

#[test]
fn wrong_line_counts_are_rejected() {
    let lines = english_lines();

    let short = lines[..WORD_COUNT - 1].join("\n");
    let service = WordlistService::with_source(short);
    match service.initialize() {
        Err(SeedrollError::WrongWordCount { expected, actual }) => {
            assert_eq!(expected, 2048);
            assert_eq!(actual, 2047);
        }
        other => panic!("unexpected {other:?}"),
    }

    let long = format!("{}\nextra\n", lines.join("\n"));
    let service = WordlistService::with_source(long);
    assert!(matches!(
        service.initialize(),
        Err(SeedrollError::WrongWordCount { actual: 2049, .. })
    ));
}

#[test]
fn empty_resource_is_rejected() {
    assert!(matches!(
        Wordlist::parse(""),
        Err(SeedrollError::EmptyResource)
    ));
}

#[test]
fn crlf_resource_parses_identically() {
    let crlf = EMBEDDED_ENGLISH.replace('\n', "\r\n");
    let parsed = Wordlist::parse(&crlf).unwrap();
    let embedded = Wordlist::parse(EMBEDDED_ENGLISH).unwrap();
    assert_eq!(parsed, embedded);
}

#[test]
fn embedded_list_is_canonical() {
    let service = WordlistService::new();
    let list = service.wordlist().unwrap();
    assert_eq!(list.len(), WORD_COUNT);
    assert_eq!(list.fingerprint(), CANONICAL_ENGLISH_SHA256);
}

#[test]
fn concurrent_first_calls_share_one_list() {
    const THREADS: usize = 8;
    let service = WordlistService::new();
    let barrier = Barrier::new(THREADS);

    let addrs: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    let list = service.wordlist().unwrap();
                    assert_eq!(list.len(), WORD_COUNT);
                    list as *const Wordlist as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn shared_instance_is_reused() {
    let a = WordlistService::shared();
    let b = WordlistService::shared();
    assert!(std::ptr::eq(a, b));
    assert_eq!(a.get_word(0).unwrap(), "abandon");
}

#[test]
fn verify_inverts_lookup() {
    let service = WordlistService::new();
    for index in 0..WORD_COUNT as i64 {
        let word = service.get_word(index).unwrap();
        let report = service.verify_word(word).unwrap();
        assert_eq!(report.index as i64, index);
        assert_eq!(report.sum, index + 1);
        if index < 2047 {
            assert_eq!(report.rolls.iter().sum::<i64>(), report.sum);
        } else {
            assert!(report.rolls.is_empty());
        }
    }
}

#[test]
fn verify_normalizes_input() {
    let service = WordlistService::new();
    let report = service.verify_word("  ZOO\n").unwrap();
    assert_eq!(report.word, "zoo");
    assert_eq!(report.index, 2047);

    match service.verify_word(" bitcoin ") {
        Err(SeedrollError::UnknownWord(w)) => assert_eq!(w, "bitcoin"),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn index_of_matches_capitalized_source() {
    let mut lines = english_lines();
    lines[0] = "Abandon";
    let service = WordlistService::with_source(lines.join("\n"));
    assert_eq!(service.index_of("Abandon").unwrap(), 0);
    assert_eq!(service.index_of("abandon").unwrap(), 0);
    assert_eq!(service.verify_word("ABANDON").unwrap().word, "Abandon");
}
