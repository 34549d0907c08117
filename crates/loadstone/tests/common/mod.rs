//! Shared test support: builds the dummy shared library fixture.

use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

/// Source for the dummy library: an integer-pair function and a constant
/// byte string, both with unmangled names.
const FIXTURE_SRC: &str = r#"
#[no_mangle]
pub extern "C" fn add(a: i32, b: i32) -> i32 {
    a + b
}

#[no_mangle]
pub static abc: [u8; 4] = *b"abc\0";
"#;

/// Compile the dummy library once per test binary and return its path.
///
/// `name` keeps the artifacts of concurrently compiled test binaries apart.
pub fn fixture(name: &str) -> PathBuf {
    static BUILT: OnceLock<PathBuf> = OnceLock::new();
    BUILT
        .get_or_init(|| {
            let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
            std::fs::create_dir_all(&dir).expect("create fixture dir");

            let src = dir.join(format!("{name}.rs"));
            let out = dir.join(format!(
                "{}{name}{}",
                std::env::consts::DLL_PREFIX,
                std::env::consts::DLL_SUFFIX
            ));
            std::fs::write(&src, FIXTURE_SRC).expect("write fixture source");

            let status = Command::new("rustc")
                .arg("--crate-type=cdylib")
                .arg("--edition=2021")
                .arg(&src)
                .arg("-o")
                .arg(&out)
                .status()
                .expect("rustc not runnable");
            assert!(status.success(), "fixture build failed");
            out
        })
        .clone()
}
