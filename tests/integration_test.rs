use std::collections::BTreeSet;
use std::fs;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use cachepack::prelude::*;
use tempfile::tempdir;
use zip::ZipArchive;

/// Build a project tree with the three expected dependency directories.
fn make_project(root: &Path) {
    let python = root.join("python-packages");
    fs::create_dir_all(python.join("site-packages/requests")).unwrap();
    fs::write(python.join("site-packages/requests/__init__.py"), "# requests").unwrap();
    fs::write(python.join("pip.txt"), "pip contents").unwrap();

    let server = root.join("ts/server/node_modules");
    fs::create_dir_all(server.join("express")).unwrap();
    fs::write(server.join("express/index.js"), "module.exports = {};").unwrap();
    // A package that ships an empty directory
    fs::create_dir_all(server.join("leftpad/empty")).unwrap();
    fs::write(server.join("leftpad/index.js"), "ok").unwrap();

    let webui = root.join("ts/webui/node_modules");
    fs::create_dir_all(&webui).unwrap();
    fs::write(webui.join("package.json"), "{}").unwrap();
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut contents = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut contents)
        .unwrap();
    contents
}

#[test]
fn test_pack_dependencies_end_to_end() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    make_project(root);
    #[cfg(unix)]
    std::os::unix::fs::symlink(
        "../express/index.js",
        root.join("ts/server/node_modules/leftpad/link.js"),
    )
    .unwrap();

    let summary = pack_dependencies(root).unwrap();

    // Sources were relocated into the staging root
    assert!(!root.join("python-packages").exists());
    assert!(!root.join("ts/server/node_modules").exists());
    assert!(root.join(STAGING_DIR).join("python-dependencies").is_dir());
    assert!(root.join(STAGING_DIR).join("server-dependencies").is_dir());
    assert!(root.join(STAGING_DIR).join("webui-dependencies").is_dir());

    // Archive landed at the fixed location
    let archive_path = root.join(ARCHIVE_DIR).join(ARCHIVE_FILE);
    assert_eq!(summary.archive_path, archive_path);
    assert!(archive_path.is_file());

    let mut archive = ZipArchive::new(File::open(&archive_path).unwrap()).unwrap();
    let names: BTreeSet<String> = archive.file_names().map(str::to_owned).collect();

    // Round-trip fidelity for a regular file
    assert!(names.contains("python-dependencies/site-packages/requests/__init__.py"));
    assert_eq!(
        read_entry(
            &mut archive,
            "python-dependencies/site-packages/requests/__init__.py"
        ),
        "# requests"
    );
    assert_eq!(
        read_entry(&mut archive, "webui-dependencies/package.json"),
        "{}"
    );

    // Empty directory survives only in the manifest, never as a file entry
    assert!(!names.contains("server-dependencies/leftpad/empty"));
    let dirs: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, DIRECTORIES_ENTRY)).unwrap();
    assert_eq!(
        dirs,
        serde_json::json!(["server-dependencies/leftpad/empty"])
    );

    let links: serde_json::Value =
        serde_json::from_str(&read_entry(&mut archive, SYMLINKS_ENTRY)).unwrap();
    #[cfg(unix)]
    {
        assert_eq!(
            links,
            serde_json::json!({
                "server-dependencies/leftpad/link.js": "../express/index.js"
            })
        );
        assert!(!names.contains("server-dependencies/leftpad/link.js"));
        assert_eq!(summary.symlinks_recorded, 1);
    }
    #[cfg(not(unix))]
    assert_eq!(links, serde_json::json!({}));

    assert_eq!(summary.files_written, 5);
    assert_eq!(summary.empty_dirs_recorded, 1);
}

#[test]
fn test_missing_source_aborts_before_archive_creation() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    make_project(root);
    fs::remove_dir_all(root.join("ts/webui/node_modules")).unwrap();

    let err = pack_dependencies(root).unwrap_err();
    assert!(matches!(err, Error::SourceMissing { .. }));
    assert!(!root.join(ARCHIVE_DIR).exists());
}

#[test]
fn test_second_run_without_cleanup_fails() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    make_project(root);
    pack_dependencies(root).unwrap();

    // Re-create the sources; the leftover staging root still collides
    make_project(root);
    let err = pack_dependencies(root).unwrap_err();
    assert!(matches!(err, Error::StagingRootExists { .. }));
}

#[test]
fn test_leftover_archive_dir_fails() {
    let temp = tempdir().unwrap();
    let root = temp.path();
    make_project(root);
    fs::create_dir(root.join(ARCHIVE_DIR)).unwrap();

    let err = pack_dependencies(root).unwrap_err();
    assert!(matches!(err, Error::OutputDirExists { .. }));
}

#[test]
fn test_progress_reports_compression_of_every_entry() {
    use std::sync::Mutex;

    let temp = tempdir().unwrap();
    let root = temp.path();
    make_project(root);

    let seen: Mutex<Vec<String>> = Mutex::new(Vec::new());
    cachepack::pack::pack_dependencies_with_progress(root, &|update| {
        if update.phase == PackPhase::Compressing {
            if let Some(file) = &update.current_file {
                seen.lock().unwrap().push(file.clone());
            }
        }
    })
    .unwrap();

    let seen = seen.into_inner().unwrap();
    // Every staged entry is reported, in sorted walk order
    assert!(seen.contains(&"python-dependencies/pip.txt".to_owned()));
    assert!(seen.contains(&"server-dependencies/leftpad/empty".to_owned()));
    let mut sorted = seen.clone();
    sorted.sort();
    assert_eq!(seen, sorted);
}
