#![allow(dead_code)]

pub mod command;
pub mod file;

const TMPDIR: &str = "../playground";

pub fn redirect_temp_dir() {
    unsafe {
        std::env::set_var("TMPDIR", TMPDIR);
    }

    // Ensure the TMPDIR exists
    if !std::path::Path::new(TMPDIR).exists() {
        std::fs::create_dir_all(TMPDIR).expect("Failed to create TMPDIR");
    }
}

/// Names of the artifacts currently in the staging directory, sorted
pub fn staged_artifacts(dir: &std::path::Path) -> Vec<String> {
    let mut names = std::fs::read_dir(dir.join("staging"))
        .expect("Failed to read staging directory")
        .map(|entry| {
            entry
                .expect("Failed to read staging entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect::<Vec<_>>();
    names.sort();
    names
}
