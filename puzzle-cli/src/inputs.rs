//! Local puzzle input files

use crate::error::InputError;
use puzzle_solver::PuzzleId;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Read-only store of puzzle inputs
///
/// Directory structure: `{root}/{event}/{year}/day{day:02}.txt`, e.g.
/// `~/.cache/puzzle_inputs/ec/2024/day03.txt` for Everybody Codes quest 3.
#[derive(Debug, Clone)]
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Where the input for `id` is expected
    pub fn path(&self, id: PuzzleId) -> PathBuf {
        self.root
            .join(id.event.code())
            .join(id.year.to_string())
            .join(format!("day{:02}.txt", id.day))
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.path(id).is_file()
    }

    /// Read the input for `id`
    pub fn read(&self, id: PuzzleId) -> Result<String, InputError> {
        let path = self.path(id);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => InputError::Missing { path },
            _ => InputError::Io { path, source },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(root: &TempDir, rel: &str, content: &str) {
        let path = root.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_path_format() {
        let store = InputStore::new(PathBuf::from("/inputs"));
        assert_eq!(
            store.path(PuzzleId::aoc(2015, 1).unwrap()),
            PathBuf::from("/inputs/aoc/2015/day01.txt")
        );
        assert_eq!(
            store.path(PuzzleId::ec(2024, 12).unwrap()),
            PathBuf::from("/inputs/ec/2024/day12.txt")
        );
    }

    #[test]
    fn test_read_existing_input() {
        let temp = TempDir::new().unwrap();
        write(&temp, "aoc/2015/day01.txt", "(()\n");
        let store = InputStore::new(temp.path().to_path_buf());

        let id = PuzzleId::aoc(2015, 1).unwrap();
        assert!(store.contains(id));
        assert_eq!(store.read(id).unwrap(), "(()\n");
    }

    #[test]
    fn test_missing_input() {
        let temp = TempDir::new().unwrap();
        write(&temp, "aoc/2015/day01.txt", "(");
        let store = InputStore::new(temp.path().to_path_buf());

        let other = PuzzleId::aoc(2015, 2).unwrap();
        assert!(!store.contains(other));
        assert!(matches!(store.read(other), Err(InputError::Missing { path }) if path.ends_with("day02.txt")));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("ec/2024/day01.txt")).unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        let id = PuzzleId::ec(2024, 1).unwrap();
        assert!(!store.contains(id));
        assert!(store.read(id).is_err());
    }
}
