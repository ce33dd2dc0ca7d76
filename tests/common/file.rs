use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

/// Write `files_count` files with random names and distinct random contents
pub fn write_generated_files(dir: &Path, files_count: usize) -> Vec<FileSpec> {
    use fake::{
        Fake,
        faker::lorem::en::{Word, Words},
    };

    (0..files_count)
        .map(|index| {
            let file_name = format!("{}_{index}.txt", Word().fake::<String>());
            let file_path = dir.join(&file_name);
            let file_content = format!("{index} {}", Words(5..10).fake::<Vec<String>>().join(" "));

            let file_spec = FileSpec::new(file_path, file_content);
            write_file(file_spec.clone());

            file_spec
        })
        .collect::<Vec<_>>()
}

/// Artifact name `stage` produces for a file inside the repository at `root`
pub fn artifact_name(root: &Path, file_spec: &FileSpec) -> String {
    let digest = mygit::artifacts::objects::object_id::ObjectId::hash_bytes(&file_spec.content);
    let root = root.canonicalize().expect("Failed to resolve repository root");
    let path = file_spec
        .path
        .canonicalize()
        .expect("Failed to resolve file path");
    let relative = path
        .strip_prefix(&root)
        .expect("file spec outside the repository")
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("%2F");

    format!("{digest}_{relative}")
}
