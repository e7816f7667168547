//! Integration tests for corpus ingestion and normalization.
//!
//! These tests verify that:
//! - Plain and gzip-compressed corpora read identically
//! - Every member of a concatenated gzip file is read
//! - Normalization is idempotent for arbitrary Cyrillic words

use flate2::Compression;
use flate2::write::GzEncoder;
use newsfacts_core::{BodyColumn, CorpusLines, LexiconAnalyzer, MorphAnalyzer, body_text, open_corpus};
use proptest::prelude::*;
use std::io::Write;
use std::path::PathBuf;

const SAMPLE: &str = "world\tЗаголовок\tИванов Иван родился 5 мая 1980 года в Москве\nпросто строка\n";

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("newsfacts_corpus_{}", uuid::Uuid::now_v7()));
    std::fs::create_dir_all(&dir).expect("Failed to create temp dir");
    dir
}

fn read_bodies(path: &std::path::Path) -> Vec<String> {
    let reader = open_corpus(path).expect("corpus should open");
    CorpusLines::from_reader(reader)
        .map(|item| {
            let (_, line) = item.expect("line should read");
            body_text(&line, BodyColumn::Last).to_string()
        })
        .collect()
}

#[test]
fn plain_and_gzip_corpora_match() {
    let dir = temp_dir();
    let plain = dir.join("news.txt");
    std::fs::write(&plain, SAMPLE).expect("Failed to write plain corpus");

    let gz = dir.join("news.txt.gz");
    let mut encoder = GzEncoder::new(std::fs::File::create(&gz).expect("Failed to create gzip corpus"), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).expect("Failed to compress");
    encoder.finish().expect("Failed to finish gzip stream");

    let from_plain = read_bodies(&plain);
    let from_gz = read_bodies(&gz);
    assert_eq!(from_plain, from_gz);
    assert_eq!(
        from_plain,
        vec![
            "Иванов Иван родился 5 мая 1980 года в Москве".to_string(),
            "просто строка".to_string()
        ]
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn concatenated_gzip_members_are_all_read() {
    let dir = temp_dir();
    let gz = dir.join("joined.txt.gz");
    let mut file = std::fs::File::create(&gz).expect("Failed to create gzip corpus");
    for part in ["sport\tМатч\tпервая часть\n", "sport\tМатч\tвторая часть\n"] {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(part.as_bytes()).expect("Failed to compress");
        let member = encoder.finish().expect("Failed to finish gzip member");
        file.write_all(&member).expect("Failed to append gzip member");
    }
    drop(file);

    assert_eq!(read_bodies(&gz), vec!["первая часть", "вторая часть"]);

    let _ = std::fs::remove_dir_all(&dir);
}

proptest! {
    #[test]
    fn normal_form_is_idempotent(word in "[а-яё]{1,14}") {
        let analyzer = LexiconAnalyzer::with_defaults();
        let once = analyzer.normal_form(&word);
        let twice = analyzer.normal_form(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn capitalized_normal_form_is_idempotent(word in "[А-Я][а-я]{2,12}") {
        let analyzer = LexiconAnalyzer::with_defaults();
        let once = analyzer.normal_form(&word);
        prop_assert_eq!(analyzer.normal_form(&once), once);
    }
}
