//! PHF compile-time syllable maps and longest-first syllable lists
use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const INVENTORY: &str = "data/syllables.txt";

fn main() {
    println!("cargo:rerun-if-changed={INVENTORY}");

    let source = fs::read_to_string(INVENTORY).expect("Failed to read syllable inventory");
    let pairs = read_pairs(&source);

    let path = Path::new(&env::var("OUT_DIR").expect("OUT_DIR not set")).join("codegen.rs");
    let mut out_file = BufWriter::new(File::create(path).expect("Failed to create codegen.rs"));

    write_map(&mut out_file, "PINYIN_TO_BOPOMOFO", pairs.iter().map(|(p, b)| (*p, *b)));
    write_map(&mut out_file, "BOPOMOFO_TO_PINYIN", pairs.iter().map(|(p, b)| (*b, *p)));
    write_list(&mut out_file, "PINYIN_SYLLABLES", pairs.iter().map(|(p, _)| *p));
    write_list(&mut out_file, "BOPOMOFO_SYLLABLES", pairs.iter().map(|(_, b)| *b));
}

/// Parse `pinyin<TAB>bopomofo` lines, rejecting duplicate spellings on either side
fn read_pairs(source: &str) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    let mut seen_pinyin = HashSet::new();
    let mut seen_bopomofo = HashSet::new();

    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(pinyin), Some(bopomofo), None) = (fields.next(), fields.next(), fields.next())
        else {
            panic!("{INVENTORY}:{}: expected two fields, got '{line}'", number + 1);
        };

        assert!(
            seen_pinyin.insert(pinyin),
            "{INVENTORY}:{}: duplicate pinyin '{pinyin}'",
            number + 1
        );
        assert!(
            seen_bopomofo.insert(bopomofo),
            "{INVENTORY}:{}: duplicate zhuyin '{bopomofo}'",
            number + 1
        );
        pairs.push((pinyin, bopomofo));
    }

    pairs
}

fn write_map<'a, W, I>(file: &mut W, name: &str, entries: I)
where
    W: Write,
    I: Iterator<Item = (&'a str, &'a str)>,
{
    let mut map = phf_codegen::Map::new();
    for (key, value) in entries {
        map.entry(key, &format!("{value:?}"));
    }

    writeln!(
        file,
        "static {name}: phf::Map<&'static str, &'static str> = {};",
        map.build()
    )
    .expect("Failed to write map");
}

/// Longest first, so the first prefix hit during segmentation is the longest match
fn write_list<'a, W, I>(file: &mut W, name: &str, entries: I)
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    let mut entries: Vec<&str> = entries.collect();
    entries.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    writeln!(file, "static {name}: [&str; {}] = {entries:?};", entries.len())
        .expect("Failed to write list");
}
