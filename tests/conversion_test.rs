use std::fs;

use pinyin_zhuyin::*;
use unicode_normalization::UnicodeNormalization;

struct Phrase {
    number: String,
    mark: String,
    zhuyin: String,
}

fn phrases() -> Vec<Phrase> {
    // Integration tests run from the crate root
    let source = fs::read_to_string("tests/phrases.txt").expect("Failed to read phrases.txt");
    source
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            let parts: Vec<&str> = line.split(';').collect();
            if parts.len() != 3 {
                panic!("Invalid line format: {}", line);
            }
            Phrase {
                number: parts[0].to_owned(),
                mark: parts[1].to_owned(),
                zhuyin: parts[2].to_owned(),
            }
        })
        .collect()
}

#[test]
fn phrases_every_direction_test() {
    for phrase in phrases() {
        let by_notation = [
            (Notation::PinyinNumber, &phrase.number),
            (Notation::PinyinToneMark, &phrase.mark),
            (Notation::Bopomofo, &phrase.zhuyin),
        ];
        for (from, input) in by_notation {
            for (to, expected) in by_notation {
                assert_eq!(
                    convert(input, from, to).as_ref(),
                    Ok(expected),
                    "Failed on {from} '{input}' to {to}"
                );
            }
        }
    }
}

#[test]
fn phrases_named_functions_test() {
    for phrase in phrases() {
        assert_eq!(pinyin_number_to_bopomofo(&phrase.number).as_ref(), Ok(&phrase.zhuyin));
        assert_eq!(pinyin_tone_mark_to_bopomofo(&phrase.mark).as_ref(), Ok(&phrase.zhuyin));
        assert_eq!(bopomofo_to_pinyin_tone_mark(&phrase.zhuyin).as_ref(), Ok(&phrase.mark));
        assert_eq!(bopomofo_to_pinyin_number(&phrase.zhuyin).as_ref(), Ok(&phrase.number));
    }
}

#[test]
fn decomposed_input_test() {
    for phrase in phrases() {
        let decomposed: String = phrase.mark.nfd().collect();
        assert_eq!(
            pinyin_tone_mark_to_bopomofo(&decomposed).as_ref(),
            Ok(&phrase.zhuyin),
            "Failed on input: {}",
            phrase.mark
        );
    }
}

#[test]
fn inventory_round_trip_test() {
    for base in STANDARD.pinyin_syllables() {
        for tone in Tone::ALL {
            let number = format!("{base}{tone}");
            let mark = pinyin_number_to_pinyin_tone_mark(&number).unwrap();
            let zhuyin = pinyin_tone_mark_to_bopomofo(&mark).unwrap();

            assert_eq!(bopomofo_to_pinyin_tone_mark(&zhuyin).as_ref(), Ok(&mark));
            assert_eq!(bopomofo_to_pinyin_number(&zhuyin).as_ref(), Ok(&number));
            assert_eq!(pinyin_tone_mark_to_pinyin_number(&mark).as_ref(), Ok(&number));
            assert_eq!(pinyin_number_to_bopomofo(&number).as_ref(), Ok(&zhuyin));
        }
    }
}

#[test]
fn neutral_tone_position_test() {
    assert_eq!(pinyin_number_to_bopomofo("ma5"), Ok("˙ㄇㄚ".to_owned()));
    for base in STANDARD.pinyin_syllables() {
        let zhuyin = pinyin_number_to_bopomofo(&format!("{base}5")).unwrap();
        assert!(zhuyin.starts_with('˙'), "{base}: {zhuyin}");
    }
}

#[test]
fn custom_dictionary_test() {
    #[derive(Debug)]
    struct Tiny;

    impl SyllableDictionary for Tiny {
        fn pinyin_syllables(&self) -> &[&str] {
            &["ma"]
        }

        fn bopomofo_syllables(&self) -> &[&str] {
            &["ㄇㄚ"]
        }

        fn bopomofo_for(&self, pinyin: &str) -> Option<&str> {
            (pinyin == "ma").then_some("ㄇㄚ")
        }

        fn pinyin_for(&self, bopomofo: &str) -> Option<&str> {
            (bopomofo == "ㄇㄚ").then_some("ma")
        }
    }

    let converter = Converter::new(PinyinToneMarkParser::new(&Tiny), BopomofoTransformer::new(&Tiny));
    assert_eq!(converter.convert("māma"), Ok("ㄇㄚ˙ㄇㄚ".to_owned()));
    assert!(matches!(
        converter.convert("mǎi"),
        Err(Error::UnsegmentableInput { offset: 2, .. })
    ));
}
