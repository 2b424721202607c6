//! Property tests for the schema.ini formatter.

use common::model::column::{ColumnSpec, ColumnType};
use common::model::file_format::FileFormat;
use common::model::options::{OptionEntry, OptionKey};
use common::model::schema::{ScanMode, SchemaDescriptor};
use common::render::render;
use proptest::prelude::*;

fn format_strategy() -> impl Strategy<Value = FileFormat> {
    prop_oneof![
        Just(FileFormat::CommaDelimited),
        Just(FileFormat::TabDelimited),
        Just(FileFormat::FixedLength),
        prop::option::of(prop::sample::select(vec![';', '|', ',', '\t', '#']))
            .prop_map(FileFormat::CustomDelimited),
    ]
}

fn columns_strategy() -> impl Strategy<Value = Vec<ColumnSpec>> {
    prop::collection::vec(
        (
            "[a-z_]{0,6}",
            prop::option::of(prop::sample::select(ColumnType::ALL.to_vec())),
            prop::option::of(0u32..50),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .zip(1u32..)
            .map(|((name, col_type, width), index)| ColumnSpec {
                index,
                name,
                col_type,
                width,
            })
            .collect()
    })
}

fn options_strategy() -> impl Strategy<Value = Vec<OptionEntry>> {
    prop::collection::vec("[A-Za-z0-9/.]{0,4}", OptionKey::ALL.len())
        .prop_map(|values| {
            OptionKey::ALL
                .into_iter()
                .zip(values)
                .map(|(key, value)| OptionEntry::new(key, value))
                .collect::<Vec<_>>()
        })
        .prop_shuffle()
}

fn scan_mode_strategy() -> impl Strategy<Value = ScanMode> {
    prop_oneof![
        Just(ScanMode::Explicit),
        (0u32..1000).prop_map(|max_scan_rows| ScanMode::AutoDetect { max_scan_rows }),
    ]
}

fn descriptor_strategy() -> impl Strategy<Value = SchemaDescriptor> {
    (
        "[a-z]{1,8}\\.(csv|txt|dat)",
        format_strategy(),
        any::<bool>(),
        columns_strategy(),
        options_strategy(),
        scan_mode_strategy(),
    )
        .prop_map(
            |(filename, format, has_header, columns, options, scan_mode)| SchemaDescriptor {
                filename,
                format,
                has_header,
                columns,
                options,
                scan_mode,
            },
        )
}

fn col_lines(out: &str) -> Vec<&str> {
    out.lines()
        .filter(|line| {
            line.strip_prefix("Col")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_digit())
        })
        .collect()
}

proptest! {
    #[test]
    fn rendering_is_deterministic(descriptor in descriptor_strategy()) {
        let first = render(&descriptor).unwrap();
        let second = render(&descriptor.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_line_is_newline_terminated(descriptor in descriptor_strategy()) {
        let out = render(&descriptor).unwrap();
        prop_assert!(out.ends_with('\n'));
        let header = format!("[{}]", descriptor.filename);
        prop_assert_eq!(out.lines().next(), Some(header.as_str()));
    }

    #[test]
    fn options_emitted_in_canonical_order(descriptor in descriptor_strategy()) {
        let out = render(&descriptor).unwrap();
        let emitted: Vec<OptionKey> = out
            .lines()
            .filter_map(|line| line.split_once('='))
            .filter_map(|(key, _)| key.parse::<OptionKey>().ok())
            .collect();
        let expected: Vec<OptionKey> = OptionKey::ALL
            .into_iter()
            .filter(|key| {
                descriptor
                    .options
                    .iter()
                    .any(|entry| entry.key == *key && !entry.value.is_empty())
            })
            .collect();
        prop_assert_eq!(emitted, expected);
    }

    #[test]
    fn auto_detect_never_emits_columns(
        descriptor in descriptor_strategy(),
        max_scan_rows in 0u32..100,
    ) {
        let descriptor = SchemaDescriptor {
            scan_mode: ScanMode::AutoDetect { max_scan_rows },
            ..descriptor
        };
        let out = render(&descriptor).unwrap();
        prop_assert!(col_lines(&out).is_empty());
        let expected = format!("MaxScanRows={}", max_scan_rows);
        prop_assert_eq!(out.lines().last(), Some(expected.as_str()));
    }

    #[test]
    fn only_complete_rows_are_emitted(descriptor in descriptor_strategy()) {
        let descriptor = SchemaDescriptor {
            scan_mode: ScanMode::Explicit,
            ..descriptor
        };
        let out = render(&descriptor).unwrap();
        let lines = col_lines(&out);
        let fixed = descriptor.format == FileFormat::FixedLength;
        let expected: Vec<u32> = descriptor
            .columns
            .iter()
            .filter(|col| {
                !col.name.is_empty()
                    && col.col_type.is_some()
                    && (!fixed || col.width.is_some_and(|w| w >= 1))
            })
            .map(|col| col.index)
            .collect();
        let emitted: Vec<u32> = lines
            .iter()
            .filter_map(|line| line[3..].split_once('='))
            .filter_map(|(index, _)| index.parse().ok())
            .collect();
        prop_assert_eq!(emitted, expected);
    }
}
