use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Write `content` to `root/rel`, creating parent directories.
pub(crate) fn write_file(root: &Path, rel: &str, content: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

pub(crate) fn read_file(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

/// A scratch project with AssemblyInfo files at several depths.
pub(crate) fn create_test_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_file(root, "AssemblyInfo.cs", SAMPLE_ASSEMBLY_INFO);
    write_file(root, "App/Properties/AssemblyInfo.cs", SAMPLE_ASSEMBLY_INFO);
    write_file(root, "Lib/Deep/Nested/Properties/AssemblyInfo.cs", SAMPLE_ASSEMBLY_INFO);
    write_file(root, "App/Program.cs", "class Program { }\n");
    write_file(root, "README.md", "[assembly: AssemblyVersion(\"1.0.0.0\")]\n");

    temp_dir
}

pub(crate) const SAMPLE_ASSEMBLY_INFO: &str = "\
using System.Reflection;
using System.Runtime.InteropServices;

[assembly: AssemblyTitle(\"Sample\")]
[assembly: ComVisible(false)]
[assembly: AssemblyVersion(\"1.0.0.0\")]
[assembly: AssemblyFileVersion(\"1.0.0.0\")]
";
