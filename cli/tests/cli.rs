use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn sample() -> Vec<u8> {
    b"It was the best of times, it was the worst of times. ".repeat(200)
}

#[test]
fn test_compress_then_decompress_round_trip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("story.txt");
    let restored = temp.path().join("restored.txt");
    fs::write(&input, sample()).unwrap();

    Command::cargo_bin("lzjb").unwrap().arg(&input).assert().success();

    let packed = temp.path().join("story.txt.lzjb");
    assert!(packed.exists());
    assert!(fs::metadata(&packed).unwrap().len() < sample().len() as u64);

    Command::cargo_bin("lzjb")
        .unwrap()
        .arg("-x")
        .arg("-o")
        .arg(&restored)
        .arg(&packed)
        .assert()
        .success();

    assert_eq!(fs::read(&restored).unwrap(), sample());
}

#[test]
fn test_default_decompress_name_strips_extension() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("data.bin");
    fs::write(&input, sample()).unwrap();

    Command::cargo_bin("lzjb").unwrap().arg("-c").arg(&input).assert().success();
    fs::remove_file(&input).unwrap();

    Command::cargo_bin("lzjb")
        .unwrap()
        .arg("--decompress")
        .arg(temp.path().join("data.bin.lzjb"))
        .assert()
        .success();

    assert_eq!(fs::read(&input).unwrap(), sample());
}

#[test]
fn test_empty_file_yields_single_byte_container() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("empty");
    fs::write(&input, b"").unwrap();

    Command::cargo_bin("lzjb").unwrap().arg(&input).assert().success();

    assert_eq!(fs::read(temp.path().join("empty.lzjb")).unwrap(), vec![0x80]);
}

#[test]
fn test_other_codec_round_trip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("story.txt");
    let packed = temp.path().join("story.zst");
    let restored = temp.path().join("story.back");
    fs::write(&input, sample()).unwrap();

    for (mode, src, dst) in [("-c", &input, &packed), ("-x", &packed, &restored)] {
        Command::cargo_bin("lzjb")
            .unwrap()
            .args(["--codec", "zstd", mode, "-o"])
            .arg(dst)
            .arg(src)
            .assert()
            .success();
    }

    assert_eq!(fs::read(&restored).unwrap(), sample());
}

#[test]
fn test_stats_prints_json() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("story.txt");
    fs::write(&input, sample()).unwrap();

    Command::cargo_bin("lzjb")
        .unwrap()
        .arg("--stats")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("\"bytes_raw\":{}", sample().len())));
}

#[test]
fn test_output_with_multiple_inputs_is_rejected() {
    let temp = tempdir().unwrap();
    let a = temp.path().join("a");
    let b = temp.path().join("b");
    fs::write(&a, b"a").unwrap();
    fs::write(&b, b"b").unwrap();

    Command::cargo_bin("lzjb")
        .unwrap()
        .arg("-o")
        .arg(temp.path().join("out"))
        .arg(&a)
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("single input"));
}

#[test]
fn test_first_failure_stops_processing() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("missing.txt");
    let present = temp.path().join("present.txt");
    fs::write(&present, sample()).unwrap();

    Command::cargo_bin("lzjb")
        .unwrap()
        .arg(&missing)
        .arg(&present)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));

    assert!(!temp.path().join("present.txt.lzjb").exists());
}

#[test]
fn test_corrupt_container_fails() {
    let temp = tempdir().unwrap();
    let bad = temp.path().join("bad.lzjb");
    // Declares 10 bytes, then a back-reference with nothing behind it.
    fs::write(&bad, [0x8A, 0x01, 0x00, 0x01]).unwrap();

    Command::cargo_bin("lzjb")
        .unwrap()
        .arg("-x")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("corrupt payload"));

    assert!(!temp.path().join("bad").exists());
}

#[test]
fn test_max_size_rejects_large_declared_length() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("story.txt");
    fs::write(&input, sample()).unwrap();
    Command::cargo_bin("lzjb").unwrap().arg(&input).assert().success();

    Command::cargo_bin("lzjb")
        .unwrap()
        .args(["-x", "--max-size", "100", "-o"])
        .arg(temp.path().join("never"))
        .arg(temp.path().join("story.txt.lzjb"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot allocate"));
}

#[test]
fn test_unknown_codec_is_rejected() {
    Command::cargo_bin("lzjb")
        .unwrap()
        .args(["--codec", "brotli", "whatever"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown codec"));
}
