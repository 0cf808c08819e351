#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tasklist::libs::storage::{Storage, StorageError};
    use tasklist::libs::task::{Task, TaskList};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StorageTestContext {
        temp_dir: TempDir,
    }

    impl StorageTestContext {
        fn path(&self) -> PathBuf {
            self.temp_dir.path().join("tasks.json")
        }

        fn storage(&self) -> Storage {
            Storage::new(self.path())
        }
    }

    impl TestContext for StorageTestContext {
        fn setup() -> Self {
            StorageTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut StorageTestContext) {
        let mut tasks = TaskList::new();
        tasks.add("Buy milk").unwrap();
        tasks.add("Walk dog").unwrap();
        tasks.add("Ünïcödé and a rather long description").unwrap();
        tasks.mark_done(2);

        ctx.storage().try_save(&tasks).unwrap();
        let loaded = ctx.storage().try_load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_saved_file_is_plain_array(ctx: &mut StorageTestContext) {
        let mut tasks = TaskList::new();
        tasks.add("Buy milk").unwrap();
        assert!(ctx.storage().save(&tasks));

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(ctx.path()).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!([{ "id": 1, "description": "Buy milk", "done": false }]));

        // Indented for humans.
        assert!(fs::read_to_string(ctx.path()).unwrap().contains('\n'));
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_hand_written_file(ctx: &mut StorageTestContext) {
        fs::write(
            ctx.path(),
            r#"[{"id": 1, "description": "Pay rent", "done": true}, {"id": 2, "description": "Call mom", "done": false}]"#,
        )
        .unwrap();

        let tasks = ctx.storage().load();
        assert_eq!(
            tasks.as_slice(),
            &[
                Task {
                    id: 1,
                    description: "Pay rent".to_string(),
                    done: true
                },
                Task {
                    id: 2,
                    description: "Call mom".to_string(),
                    done: false
                },
            ]
        );
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_missing_file(ctx: &mut StorageTestContext) {
        assert!(ctx.storage().try_load().unwrap().is_empty());
        assert!(ctx.storage().load().is_empty());
        assert!(!ctx.path().exists());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_corrupted_file(ctx: &mut StorageTestContext) {
        fs::write(ctx.path(), "[{\"id\": 1, \"descr").unwrap();

        assert!(matches!(ctx.storage().try_load(), Err(StorageError::Corrupted { .. })));
        assert!(ctx.storage().load().is_empty());
        // The damaged file is left as it was.
        assert_eq!(fs::read_to_string(ctx.path()).unwrap(), "[{\"id\": 1, \"descr");
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_empty_file(ctx: &mut StorageTestContext) {
        fs::write(ctx.path(), "").unwrap();

        assert!(matches!(ctx.storage().try_load(), Err(StorageError::Corrupted { .. })));
        assert!(ctx.storage().load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_wrong_shape(ctx: &mut StorageTestContext) {
        fs::write(ctx.path(), r#"{"tasks": []}"#).unwrap();
        assert!(ctx.storage().load().is_empty());

        fs::write(ctx.path(), r#"[{"id": "one", "description": "x", "done": false}]"#).unwrap();
        assert!(ctx.storage().load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_load_unreadable_path(ctx: &mut StorageTestContext) {
        let storage = Storage::new(ctx.temp_dir.path());

        assert!(matches!(storage.try_load(), Err(StorageError::Io { .. })));
        assert!(storage.load().is_empty());
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_failure_keeps_list(ctx: &mut StorageTestContext) {
        let storage = Storage::new(ctx.temp_dir.path().join("missing-dir").join("tasks.json"));
        let mut tasks = TaskList::new();
        tasks.add("Buy milk").unwrap();
        let before = tasks.clone();

        assert!(matches!(storage.try_save(&tasks), Err(StorageError::Io { .. })));
        assert!(!storage.save(&tasks));
        assert_eq!(tasks, before);
    }

    #[test_context(StorageTestContext)]
    #[test]
    fn test_save_overwrites_whole_file(ctx: &mut StorageTestContext) {
        let mut tasks = TaskList::new();
        for name in ["a", "b", "c"] {
            tasks.add(name).unwrap();
        }
        ctx.storage().save(&tasks);

        tasks.delete(1);
        tasks.delete(1);
        ctx.storage().save(&tasks);

        let loaded = ctx.storage().load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get(1).unwrap().description, "c");
    }
}
