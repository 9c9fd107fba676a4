//! Reproducer fixtures for tests.
//!
//! Documents follow the format Echidna writes to `reproducers/*.txt`.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// One deposit of 1000 from USER1.
pub const DEPOSIT_REPRODUCER: &str = r#"[
  {
    "call": {
      "contents": ["deposit", [{"contents": [256, "1000"], "tag": "AbiUInt"}]],
      "tag": "SolCall"
    },
    "dst": "0x7FA9385bE102ac3EAc297483Dd6233D62b3e1496",
    "src": "0x0000000000000000000000000000000000010000",
    "delay": ["0x0", "0x0"],
    "gas": 1000000,
    "gasprice": "0x0",
    "value": "0x0"
  }
]"#;

/// A withdraw from USER2 after a one minute delay.
pub const WITHDRAW_REPRODUCER: &str = r#"[
  {
    "call": {
      "contents": ["withdraw", [{"contents": [128, "5"], "tag": "AbiUInt"}]],
      "tag": "SolCall"
    },
    "dst": "0x7FA9385bE102ac3EAc297483Dd6233D62b3e1496",
    "src": "0x0000000000000000000000000000000000020000",
    "delay": ["0x3c", "0x0"],
    "gas": 1000000,
    "gasprice": "0x0",
    "value": "0x0"
  }
]"#;

/// Three calls from two actors with a NoCall time warp in between.
pub const MULTI_ACTOR_REPRODUCER: &str = r#"[
  {
    "call": {"contents": ["approve", [{"contents": ["7fa9385be102ac3eac297483dd6233d62b3e1496"], "tag": "AbiAddress"}, {"contents": [256, 1000000000000000000000000], "tag": "AbiUInt"}]], "tag": "SolCall"},
    "dst": "0x7FA9385bE102ac3EAc297483Dd6233D62b3e1496",
    "src": "0x0000000000000000000000000000000000010000",
    "delay": ["0x0", "0x0"], "gas": 12500000, "gasprice": "0x0", "value": "0x0"
  },
  {
    "call": {"tag": "NoCall"},
    "dst": "0x7FA9385bE102ac3EAc297483Dd6233D62b3e1496",
    "src": "0x0000000000000000000000000000000000010000",
    "delay": ["0x15180", "0x2"], "gas": 12500000, "gasprice": "0x0", "value": "0x0"
  },
  {
    "call": {"contents": ["setPaused", [{"contents": true, "tag": "AbiBool"}]], "tag": "SolCall"},
    "dst": "0x7FA9385bE102ac3EAc297483Dd6233D62b3e1496",
    "src": "0x0000000000000000000000000000000000010000",
    "delay": ["0x0", "0x0"], "gas": 12500000, "gasprice": "0x0", "value": "0x0"
  },
  {
    "call": {"contents": ["rename", [{"contents": ["vault"], "tag": "AbiString"}, {"contents": [4, "0xdeadbeef"], "tag": "AbiBytes"}]], "tag": "SolCall"},
    "dst": "0x7FA9385bE102ac3EAc297483Dd6233D62b3e1496",
    "src": "0x0000000000000000000000000000000000030000",
    "delay": ["0xe10", "0x0"], "gas": 12500000, "gasprice": "0x0", "value": "0x0"
  }
]"#;

/// Not a complete JSON document.
pub const BROKEN_REPRODUCER: &str = r#"[{"call": {"tag": "SolCall""#;

/// Write a reproducer into `dir`, stamped with `modified`.
pub fn write_reproducer_at(dir: &Path, name: &str, body: &str, modified: SystemTime) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write reproducer");
    File::options()
        .write(true)
        .open(&path)
        .and_then(|f| f.set_modified(modified))
        .expect("set modification time");
    path
}

/// Write a reproducer into `dir` with the shared batch timestamp.
pub fn write_reproducer(dir: &Path, name: &str, body: &str) -> PathBuf {
    write_reproducer_at(dir, name, body, batch_time())
}

/// A temporary directory holding one batch of reproducers.
///
/// Every file gets the same modification time so the batch never straddles
/// a minute boundary.
pub fn reproducer_dir(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (name, body) in files {
        write_reproducer(dir.path(), name, body);
    }
    dir
}

/// Start of the current minute.
pub fn batch_time() -> SystemTime {
    let now = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .expect("clock after epoch")
        .as_secs();
    SystemTime::UNIX_EPOCH + Duration::from_secs(now / 60 * 60)
}
