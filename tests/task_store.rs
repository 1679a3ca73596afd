#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use std::path::PathBuf;
    use taskr::db::tasks::{Tasks, TASKS_FILE_NAME};
    use taskr::libs::error::TaskError;
    use taskr::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskStoreTestContext {
        temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for TaskStoreTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join(TASKS_FILE_NAME);
            TaskStoreTestContext { temp_dir, path }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_tasks() -> Vec<Task> {
        let mut done = Task::new("alice", "Write docs", "User guide", date(2024, 1, 2), date(2024, 2, 1));
        done.finalize();
        vec![
            done,
            Task::new("bob", "Fix login", "Password check", date(2024, 1, 3), date(2024, 1, 20)),
            Task::new("alice", "", "", date(2024, 1, 4), date(2023, 12, 31)),
        ]
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_missing_file_loads_empty(ctx: &mut TaskStoreTestContext) {
        let tasks = Tasks::new(&ctx.path).load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_empty_file_loads_empty(ctx: &mut TaskStoreTestContext) {
        fs::write(&ctx.path, "").unwrap();
        let tasks = Tasks::new(&ctx.path).load().unwrap();
        assert!(tasks.is_empty());
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_save_and_load_round_trip(ctx: &mut TaskStoreTestContext) {
        let store = Tasks::new(&ctx.path);
        let tasks = sample_tasks();

        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_saved_format_is_plain_for_ordinary_fields(ctx: &mut TaskStoreTestContext) {
        let store = Tasks::new(&ctx.path);
        store.save(&sample_tasks()).unwrap();

        let content = fs::read_to_string(&ctx.path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "alice;Write docs;User guide;2024-01-02;2024-02-01;Complete",
                "bob;Fix login;Password check;2024-01-03;2024-01-20;Ongoing",
                "alice;;;2024-01-04;2023-12-31;Ongoing",
            ]
        );
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_delimiter_and_quotes_in_free_text_round_trip(ctx: &mut TaskStoreTestContext) {
        let store = Tasks::new(&ctx.path);
        let tasks = vec![Task::new(
            "alice",
            "Plan; then execute",
            "Say \"hello\"; wave\nand leave",
            date(2024, 5, 1),
            date(2024, 5, 31),
        )];

        store.save(&tasks).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_load_reads_original_format(ctx: &mut TaskStoreTestContext) {
        fs::write(
            &ctx.path,
            "admin;Register users;Add all team members;2024-01-01;2024-01-10;Complete\n\
             admin;Assign tasks;Spread the work;2024-01-02;2024-1-5;Ongoing",
        )
        .unwrap();

        let tasks = Tasks::new(&ctx.path).load().unwrap();

        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].completed);
        assert!(!tasks[1].completed);
        assert_eq!(tasks[1].heading, "Assign tasks");
        assert_eq!(tasks[1].due_date, date(2024, 1, 5));
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_leading_quote_in_plain_record_is_kept(ctx: &mut TaskStoreTestContext) {
        fs::write(
            &ctx.path,
            "admin;\"Urgent\" fix;desc;2024-01-01;2024-01-02;Ongoing\n\
             admin;B;desc;2024-01-01;2024-01-02;Ongoing\n",
        )
        .unwrap();
        let store = Tasks::new(&ctx.path);

        let tasks = store.load().unwrap();

        let headings: Vec<&str> = tasks.iter().map(|task| task.heading.as_str()).collect();
        assert_eq!(headings, vec!["\"Urgent\" fix", "B"]);

        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_unterminated_quote_does_not_swallow_following_records(ctx: &mut TaskStoreTestContext) {
        fs::write(
            &ctx.path,
            "admin;\"Hello;desc;2024-01-01;2024-01-02;Ongoing\n\
             admin;B;desc;2024-01-01;2024-01-02;Ongoing\n\
             admin;C;desc;2024-01-01;2024-01-02;Complete\n",
        )
        .unwrap();

        let tasks = Tasks::new(&ctx.path).load().unwrap();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].heading, "\"Hello");
        assert_eq!(tasks[1].heading, "B");
        assert!(tasks[2].completed);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_fully_quoted_plain_field_is_kept(ctx: &mut TaskStoreTestContext) {
        fs::write(&ctx.path, "admin;\"Quoted\";Say \"hi\";2024-01-01;2024-01-02;Ongoing\n").unwrap();
        let store = Tasks::new(&ctx.path);

        let tasks = store.load().unwrap();

        assert_eq!(tasks[0].heading, "\"Quoted\"");
        assert_eq!(tasks[0].description, "Say \"hi\"");
        store.save(&tasks).unwrap();
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_unpadded_dates_are_saved_canonically(ctx: &mut TaskStoreTestContext) {
        fs::write(&ctx.path, "admin;Heading;Description;2024-1-2;2024-3-4;Ongoing\n").unwrap();
        let store = Tasks::new(&ctx.path);

        let tasks = store.load().unwrap();
        store.save(&tasks).unwrap();

        let content = fs::read_to_string(&ctx.path).unwrap();
        assert_eq!(content, "admin;Heading;Description;2024-01-02;2024-03-04;Ongoing\n");
        assert_eq!(store.load().unwrap(), tasks);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_unknown_status_is_rejected(ctx: &mut TaskStoreTestContext) {
        fs::write(
            &ctx.path,
            "admin;A;B;2024-01-01;2024-01-02;Ongoing\nadmin;C;D;2024-01-01;2024-01-02;Done\n",
        )
        .unwrap();

        let result = Tasks::new(&ctx.path).load();

        match result {
            Err(TaskError::StoreFormat { line, reason, .. }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("Done"));
            }
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_wrong_field_count_is_rejected(ctx: &mut TaskStoreTestContext) {
        fs::write(&ctx.path, "admin;A;2024-01-01;2024-01-02;Ongoing\n").unwrap();

        let result = Tasks::new(&ctx.path).load();

        assert!(matches!(result, Err(TaskError::StoreFormat { line: 1, .. })));
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_invalid_due_date_is_rejected(ctx: &mut TaskStoreTestContext) {
        fs::write(&ctx.path, "admin;A;B;2024-01-01;2024-02-30;Ongoing\n").unwrap();

        let result = Tasks::new(&ctx.path).load();

        assert!(matches!(result, Err(TaskError::StoreFormat { .. })));
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_save_overwrites_previous_content(ctx: &mut TaskStoreTestContext) {
        let store = Tasks::new(&ctx.path);
        store.save(&sample_tasks()).unwrap();

        let single = vec![Task::new("carol", "Only", "One", date(2024, 6, 1), date(2024, 6, 2))];
        store.save(&single).unwrap();

        assert_eq!(store.load().unwrap(), single);
        let leftovers: Vec<_> = fs::read_dir(ctx.temp_dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_save_creates_missing_directory(ctx: &mut TaskStoreTestContext) {
        let nested = ctx.temp_dir.path().join("documents").join(TASKS_FILE_NAME);
        let store = Tasks::new(&nested);

        store.save(&sample_tasks()).unwrap();

        assert!(nested.exists());
        assert_eq!(store.load().unwrap().len(), 3);
    }

    #[test_context(TaskStoreTestContext)]
    #[test]
    fn test_directory_in_place_of_file_is_unavailable(ctx: &mut TaskStoreTestContext) {
        fs::create_dir(&ctx.path).unwrap();

        let result = Tasks::new(&ctx.path).load();

        assert!(matches!(result, Err(TaskError::ResourceUnavailable { .. })));
    }
}
