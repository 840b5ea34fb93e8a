mod common;

use std::fs;
use std::path::PathBuf;

use common::ni_hao;
use scel2ibus::{
    convert_buffer, convert_file, discover_scel_files, output_path_for, plan_conversions,
    ConvertOptions, ScelError,
};

#[test]
fn converts_file_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("常用词.scel");
    let buffer = ni_hao()
        .name("常用词")
        .entry("你好", &[1, 2], "100")
        .entry("好", &[2], "9")
        .build();
    fs::write(&input, &buffer).unwrap();

    let output = output_path_for(&input, dir.path(), None);
    assert_eq!(output, dir.path().join("常用词.txt"));
    let report = convert_file(&input, &output, &ConvertOptions::default()).unwrap();

    assert_eq!(report.entries, 2);
    assert_eq!(report.metadata.unwrap().name, "常用词");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "你好\tni hao\t100\n好\thao\t9\n"
    );
    assert_eq!(convert_buffer(&buffer).unwrap(), fs::read_to_string(&output).unwrap());
}

#[test]
fn failed_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.scel");
    fs::write(&input, ni_hao().entry("你好", &[1, 2], "1").entry("坏", &[77], "1").build()).unwrap();
    let output = output_path_for(&input, dir.path(), None);

    let err = convert_file(&input, &output, &ConvertOptions::default()).unwrap_err();
    assert!(matches!(err, ScelError::UnknownPinyinIndex { pinyin_index: 77, .. }));
    assert!(!output.exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn refuses_to_overwrite_when_asked() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.scel");
    fs::write(&input, ni_hao().entry("你", &[1], "1").build()).unwrap();
    let output = dir.path().join("a.txt");
    fs::write(&output, "keep me").unwrap();

    let options = ConvertOptions {
        overwrite: false,
        ..ConvertOptions::default()
    };
    assert!(matches!(
        convert_file(&input, &output, &options),
        Err(ScelError::OutputExists(_))
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

    convert_file(&input, &output, &ConvertOptions::default()).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "你\tni\t1\n");
}

#[test]
fn enforces_size_limit() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("big.scel");
    let buffer = ni_hao().entry("你", &[1], "1").build();
    fs::write(&input, &buffer).unwrap();

    let options = ConvertOptions {
        max_input_bytes: buffer.len() as u64 - 1,
        ..ConvertOptions::default()
    };
    assert!(matches!(
        convert_file(&input, dir.path().join("big.txt"), &options),
        Err(ScelError::InputTooLarge { .. })
    ));
}

#[test]
fn missing_input_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        convert_file(dir.path().join("none.scel"), dir.path().join("none.txt"), &ConvertOptions::default()),
        Err(ScelError::Io(_))
    ));
}

#[test]
fn discovers_scel_files_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("b").join("c");
    fs::create_dir_all(&nested).unwrap();
    for path in [
        dir.path().join("z.scel"),
        dir.path().join("notes.txt"),
        nested.join("a.SCEL"),
        dir.path().join("b").join("m.scel"),
    ] {
        fs::write(path, b"").unwrap();
    }

    let found = discover_scel_files(dir.path()).unwrap();
    let relative: Vec<PathBuf> = found
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        vec![
            PathBuf::from("b/c/a.SCEL"),
            PathBuf::from("b/m.scel"),
            PathBuf::from("z.scel"),
        ]
    );

    let single = dir.path().join("notes.txt");
    assert_eq!(discover_scel_files(&single).unwrap(), vec![single]);
}

#[test]
fn never_overwrites_the_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dict.txt");
    let buffer = ni_hao().entry("你", &[1], "1").build();
    fs::write(&input, &buffer).unwrap();

    let found = discover_scel_files(&input).unwrap();
    assert_eq!(found, vec![input.clone()]);
    let output = output_path_for(&found[0], &input, None);
    assert_eq!(output, input);

    assert!(matches!(
        convert_file(&input, &output, &ConvertOptions::default()),
        Err(ScelError::OutputIsInput(_))
    ));
    assert_eq!(fs::read(&input).unwrap(), buffer);

    let through_dotdot = dir.path().join("sub").join("..").join("dict.txt");
    fs::create_dir(dir.path().join("sub")).unwrap();
    assert!(matches!(
        convert_file(&input, &through_dotdot, &ConvertOptions::default()),
        Err(ScelError::OutputIsInput(_))
    ));
    assert_eq!(fs::read(&input).unwrap(), buffer);
}

#[test]
fn same_named_files_keep_separate_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("dicts");
    let out = dir.path().join("out");
    fs::create_dir_all(root.join("a")).unwrap();
    fs::create_dir_all(root.join("b")).unwrap();
    fs::write(root.join("a").join("x.scel"), ni_hao().entry("你", &[1], "1").build()).unwrap();
    fs::write(root.join("b").join("x.scel"), ni_hao().entry("好", &[2], "2").build()).unwrap();

    let (planned, rejected) = plan_conversions(&[root.clone()], Some(out.as_path()));
    assert!(rejected.is_empty());
    assert_eq!(planned.len(), 2);
    for job in &planned {
        convert_file(&job.input, &job.output, &ConvertOptions::default()).unwrap();
    }

    assert_eq!(fs::read_to_string(out.join("a").join("x.txt")).unwrap(), "你\tni\t1\n");
    assert_eq!(fs::read_to_string(out.join("b").join("x.txt")).unwrap(), "好\thao\t2\n");
}

#[test]
fn colliding_outputs_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let first = dir.path().join("a").join("x.scel");
    let second = dir.path().join("b").join("x.scel");
    for path in [&first, &second] {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, ni_hao().entry("你", &[1], "1").build()).unwrap();
    }

    let (planned, rejected) = plan_conversions(&[first.clone(), second.clone()], Some(out.as_path()));
    assert_eq!(planned.len(), 1);
    assert_eq!(planned[0].input, first);
    assert_eq!(planned[0].output, out.join("x.txt"));

    assert_eq!(rejected.len(), 1);
    let (input, err) = &rejected[0];
    assert_eq!(input, &second);
    match err {
        ScelError::DuplicateOutput { output, first: claimed_by } => {
            assert_eq!(output, &out.join("x.txt"));
            assert_eq!(claimed_by, &first);
        }
        other => panic!("expected duplicate output, got {:?}", other),
    }
}

#[test]
fn failed_rename_leaves_no_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("a.scel");
    fs::write(&input, ni_hao().entry("你", &[1], "1").build()).unwrap();
    let output = dir.path().join("a.txt");
    fs::create_dir(&output).unwrap();
    fs::write(output.join("keep"), b"x").unwrap();

    assert!(matches!(
        convert_file(&input, &output, &ConvertOptions::default()),
        Err(ScelError::Io(_))
    ));
    assert!(!dir.path().join("a.txt.partial").exists());
    assert!(output.join("keep").exists());
}
