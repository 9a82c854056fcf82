//! End-to-end tests for script building.

use tanzil_model::{
    AyahNode, BISMILLAH, BismillahStatus, Corpus, Sajdeh, SajdehTable, StructuralWalker, SurahNode,
};
use tanzil_sql::ayahs::ayahs_statement;
use tanzil_sql::surahs::surahs_statement;
use tanzil_sql::{BuildError, ImportSummary, build_import_script};

fn two_surah_corpus() -> Corpus {
    Corpus::new(vec![
        SurahNode::new(
            "S1",
            vec![AyahNode::new(1, BISMILLAH), AyahNode::new(2, "x y")],
        ),
        SurahNode::new("S2", vec![AyahNode::new(1, "z ۩")]),
    ])
}

#[test]
fn two_surah_round_trip() {
    let table = SajdehTable::from_entries([((2, 1), Sajdeh::Vajib)]);
    let script = build_import_script(&two_surah_corpus(), &table).unwrap();

    assert_eq!(
        surahs_statement(&script.surahs).unwrap(),
        "INSERT INTO quran_surahs(name, period, number, bismillah_status, bismillah_text) \
         VALUES ('S1', NULL, 1, 'in_ayah', NULL),\n('S2', NULL, 2, 'false', NULL);"
    );
    assert_eq!(
        ayahs_statement(&script.ayahs).unwrap(),
        "INSERT INTO quran_ayahs(surah_id, ayah_number, sajdeh) \
         VALUES (1, 1, 'none'),\n(1, 2, 'none'),\n(2, 1, 'vajib');"
    );

    let mut expected_words: Vec<(u32, String)> = BISMILLAH
        .split(' ')
        .map(|word| (1, word.to_string()))
        .collect();
    expected_words.extend([(2, "x".to_string()), (2, "y".to_string()), (3, "z".to_string())]);
    let words: Vec<(u32, String)> = script
        .words
        .iter()
        .map(|record| (record.ayah_id, record.word.clone()))
        .collect();
    assert_eq!(words, expected_words);
}

#[test]
fn script_is_surahs_then_ayahs_then_words() {
    let script = build_import_script(&two_surah_corpus(), &SajdehTable::standard()).unwrap();
    let lines: Vec<&str> = script
        .sql()
        .lines()
        .filter(|line| line.starts_with("INSERT INTO"))
        .collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("INSERT INTO quran_surahs("));
    assert!(lines[1].starts_with("INSERT INTO quran_ayahs("));
    assert!(lines[2].starts_with("INSERT INTO quran_words("));
}

#[test]
fn full_script_snapshot() {
    let corpus = Corpus::new(vec![
        SurahNode::new(
            "Opening",
            vec![
                AyahNode::new(1, "in the name"),
                AyahNode::new(2, "praise be"),
            ],
        ),
        SurahNode::new(
            "Cow",
            vec![
                AyahNode::new(1, "alif lam mim").with_bismillah("in the name"),
                AyahNode::new(2, "that book ۩"),
            ],
        ),
    ]);
    let table = SajdehTable::from_entries([((2, 2), Sajdeh::Mustahab)]);
    let script = build_import_script(&corpus, &table).unwrap();

    insta::assert_snapshot!(script.sql(), @r"
    INSERT INTO quran_surahs(name, period, number, bismillah_status, bismillah_text) VALUES ('Opening', NULL, 1, 'false', NULL),
    ('Cow', NULL, 2, 'true', 'in the name');
    INSERT INTO quran_ayahs(surah_id, ayah_number, sajdeh) VALUES (1, 1, 'none'),
    (1, 2, 'none'),
    (2, 1, 'none'),
    (2, 2, 'mustahab');
    INSERT INTO quran_words(ayah_id, word) VALUES (1, 'in'),
    (1, 'the'),
    (1, 'name'),
    (2, 'praise'),
    (2, 'be'),
    (3, 'alif'),
    (3, 'lam'),
    (3, 'mim'),
    (4, 'that'),
    (4, 'book');
    ");

    assert_eq!(
        script.summary(),
        ImportSummary {
            surahs: 2,
            ayahs: 4,
            words: 10,
            vajib: 0,
            mustahab: 1,
        }
    );
}

#[test]
fn standard_table_tags_known_coordinates() {
    // 32 surahs of 20 ayahs: only coordinates inside that grid can be tagged.
    let surahs = (1..=32)
        .map(|number| {
            SurahNode::new(
                format!("S{number}"),
                (1..=20).map(|index| AyahNode::new(index, "w")).collect(),
            )
        })
        .collect();
    let corpus = Corpus::new(surahs);
    let script = build_import_script(&corpus, &SajdehTable::standard()).unwrap();

    let tagged: Vec<(u32, u32, Sajdeh)> = script
        .ayahs
        .iter()
        .filter(|record| record.sajdeh != Sajdeh::None)
        .map(|record| (record.surah_id, record.ayah_number.value(), record.sajdeh))
        .collect();
    assert_eq!(
        tagged,
        vec![
            (13, 15, Sajdeh::Mustahab),
            (22, 18, Sajdeh::Mustahab),
            (32, 15, Sajdeh::Vajib),
        ]
    );
}

#[test]
fn building_twice_is_byte_identical() {
    let table = SajdehTable::standard();
    let first = build_import_script(&two_surah_corpus(), &table).unwrap();
    let second = build_import_script(&two_surah_corpus(), &table).unwrap();
    assert_eq!(first.sql(), second.sql());
}

#[test]
fn bismillah_status_is_per_surah() {
    let corpus = Corpus::new(vec![
        SurahNode::new("S1", vec![AyahNode::new(1, BISMILLAH)]),
        SurahNode::new("S2", vec![AyahNode::new(1, "a").with_bismillah(BISMILLAH)]),
        SurahNode::new("S3", vec![AyahNode::new(1, "b")]),
    ]);
    let script = build_import_script(&corpus, &SajdehTable::standard()).unwrap();
    let statuses: Vec<BismillahStatus> = script
        .surahs
        .iter()
        .map(|record| record.bismillah_status)
        .collect();
    assert_eq!(
        statuses,
        vec![
            BismillahStatus::InAyah,
            BismillahStatus::Present,
            BismillahStatus::Absent
        ]
    );
}

#[test]
fn divergent_numbering_fails_the_whole_build() {
    let corpus = Corpus::new(vec![
        SurahNode::new("S1", vec![AyahNode::new(1, "a")]),
        SurahNode::new("S2", vec![AyahNode::new(2, "b")]),
    ]);
    let err = build_import_script(&corpus, &SajdehTable::standard()).unwrap_err();
    assert!(matches!(err, BuildError::SurahNumberingDiverged { .. }));
}

#[test]
fn corpus_without_words_cannot_be_rendered() {
    let corpus = Corpus::new(vec![SurahNode::new("S1", vec![AyahNode::new(1, "۩")])]);
    let err = build_import_script(&corpus, &SajdehTable::standard()).unwrap_err();
    assert_eq!(
        err,
        BuildError::EmptyTable {
            table: tanzil_sql::sql::INSERTABLE_WORDS
        }
    );
    // Walking alone is still fine.
    assert_eq!(StructuralWalker::new(&corpus).ayahs().count(), 1);
}
