#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().join("site");
        fs::create_dir_all(&root).expect("create site root");
        Self { _tmp: tmp, root }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("folio");
        cmd.env("FOLIO_LOG", "warn")
            .arg("--root")
            .arg(&self.root);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_failure(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .failure()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json error output")
    }

    pub fn write(&self, rel: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root.join(rel);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create parent dir");
        fs::write(&path, contents).expect("write fixture file");
        path
    }

    pub fn read_json(&self, rel: &str) -> Value {
        let raw = fs::read_to_string(self.root.join(rel)).expect("read json file");
        serde_json::from_str(&raw).expect("parse json file")
    }

    pub fn posts_json(&self) -> Value {
        self.read_json("src/data/posts.json")
    }

    pub fn travel_json(&self) -> Value {
        self.read_json("src/data/travel-data.json")
    }
}

pub fn write_fixture_posts(env: &TestEnv) {
    env.write(
        "content/posts/hello-world.md",
        "---\ntitle: Hello World\ndate: 2024-01-15\ntags: [Rust, meta]\ndescription: First post\npublished: true\n---\n\n# Hello\n\nFirst post body.\n",
    );
    env.write(
        "content/posts/tokyo-notes.md",
        "---\ntitle: Tokyo Notes\ndate: 2024-03-02\ntags: [travel]\npublished: true\ncover: /img/tokyo.jpg\n---\nRamen everywhere.\n",
    );
    env.write(
        "content/posts/draft.md",
        "---\ntitle: Not yet\ndate: 2024-06-01\npublished: false\n---\nWIP\n",
    );
    env.write("content/posts/notes.txt", "ignored");
}

/// A little-endian TIFF holding just enough EXIF for GPS and capture date.
/// Image readers sniff the TIFF magic, so the bytes can sit in a `.jpg`.
pub fn exif_tiff(lat: [u32; 3], lat_ref: u8, lng: [u32; 3], lng_ref: u8, datetime: &str) -> Vec<u8> {
    assert_eq!(datetime.len(), 19, "EXIF datetime is YYYY:MM:DD HH:MM:SS");

    const ASCII: u16 = 2;
    const LONG: u16 = 4;
    const RATIONAL: u16 = 5;

    let ifd0: u32 = 8;
    let exif_ifd = ifd0 + 2 + 2 * 12 + 4;
    let datetime_at = exif_ifd + 2 + 12 + 4;
    let gps_ifd = datetime_at + 20;
    let lat_at = gps_ifd + 2 + 4 * 12 + 4;
    let lng_at = lat_at + 24;

    let mut b = Vec::new();
    b.extend_from_slice(b"II");
    b.extend_from_slice(&42u16.to_le_bytes());
    b.extend_from_slice(&ifd0.to_le_bytes());

    let entry = |b: &mut Vec<u8>, tag: u16, kind: u16, count: u32, value: [u8; 4]| {
        b.extend_from_slice(&tag.to_le_bytes());
        b.extend_from_slice(&kind.to_le_bytes());
        b.extend_from_slice(&count.to_le_bytes());
        b.extend_from_slice(&value);
    };

    b.extend_from_slice(&2u16.to_le_bytes());
    entry(&mut b, 0x8769, LONG, 1, exif_ifd.to_le_bytes());
    entry(&mut b, 0x8825, LONG, 1, gps_ifd.to_le_bytes());
    b.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(b.len() as u32, exif_ifd);

    b.extend_from_slice(&1u16.to_le_bytes());
    entry(&mut b, 0x9003, ASCII, 20, datetime_at.to_le_bytes());
    b.extend_from_slice(&0u32.to_le_bytes());
    b.extend_from_slice(datetime.as_bytes());
    b.push(0);
    assert_eq!(b.len() as u32, gps_ifd);

    b.extend_from_slice(&4u16.to_le_bytes());
    entry(&mut b, 0x0001, ASCII, 2, [lat_ref, 0, 0, 0]);
    entry(&mut b, 0x0002, RATIONAL, 3, lat_at.to_le_bytes());
    entry(&mut b, 0x0003, ASCII, 2, [lng_ref, 0, 0, 0]);
    entry(&mut b, 0x0004, RATIONAL, 3, lng_at.to_le_bytes());
    b.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(b.len() as u32, lat_at);

    for v in lat.iter().chain(lng.iter()) {
        b.extend_from_slice(&v.to_le_bytes());
        b.extend_from_slice(&1u32.to_le_bytes());
    }
    b
}

/// Tokyo, 35°39'N 139°42'E, October 2023.
pub fn tokyo_photo() -> Vec<u8> {
    exif_tiff([35, 39, 0], b'N', [139, 42, 0], b'E', "2023:10:15 14:30:00")
}

/// Sydney, 33°52'S 151°12'E, February 2024.
pub fn sydney_photo() -> Vec<u8> {
    exif_tiff([33, 52, 0], b'S', [151, 12, 0], b'E', "2024:02:01 09:00:00")
}

pub fn assert_close(actual: &Value, expected: f64) {
    let v = actual.as_f64().expect("number");
    assert!((v - expected).abs() < 1e-6, "{} != {}", v, expected);
}

/// Installs a shell script standing in for the storage CLI. Every call is
/// appended to `calls.log` next to it; `r2 object list` prints `listing`;
/// `put` fails for keys containing `fail`.
#[cfg(unix)]
pub fn install_fake_storage_cli(dir: &Path, listing: &str) -> (PathBuf, PathBuf) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(dir).expect("create fake cli dir");
    let log = dir.join("calls.log");
    let listing_path = dir.join("listing.json");
    fs::write(&listing_path, listing).expect("write listing");
    let script = dir.join("fake-wrangler");
    fs::write(
        &script,
        format!(
            r#"#!/bin/sh
echo "$@" >> "{log}"
if [ "$1" = "--version" ]; then echo "wrangler 3.0.0"; exit 0; fi
if [ "$3" = "list" ]; then
  case "$5" in *slow*) exec sleep 5;; esac
  cat "{listing}"; exit 0
fi
if [ "$3" = "put" ]; then
  case "$4" in
    *fail*) echo "upload rejected" >&2; exit 1;;
    *slow*) exec sleep 5;;
  esac
  exit 0
fi
exit 2
"#,
            log = log.display(),
            listing = listing_path.display()
        ),
    )
    .expect("write fake cli");
    let mut perms = fs::metadata(&script).expect("stat fake cli").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&script, perms).expect("chmod fake cli");
    (script, log)
}
