#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::fs;
    use taskr::libs::credential::Credential;
    use taskr::libs::report::{render_task_overview, render_user_overview, ReportSnapshot, Reports};
    use taskr::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ReportTestContext {
        temp_dir: TempDir,
        reports: Reports,
        snapshot: ReportSnapshot,
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    impl TestContext for ReportTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let reports = Reports::new(temp_dir.path());

            let tasks = vec![
                Task::new("admin", "Setup", "", date(2024, 1, 1), date(2024, 1, 31)),
                Task::new("bob", "Review", "", date(2024, 1, 2), date(2024, 3, 31)),
            ];
            let credentials = vec![Credential::new("admin", "adm1n"), Credential::new("bob", "pw")];
            let snapshot = ReportSnapshot::compute(&tasks, &credentials, date(2024, 2, 15));

            ReportTestContext { temp_dir, reports, snapshot }
        }
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_generate_writes_both_files(ctx: &mut ReportTestContext) {
        ctx.reports.generate(&ctx.snapshot).unwrap();

        let tasks_text = fs::read_to_string(ctx.reports.tasks_path()).unwrap();
        let users_text = fs::read_to_string(ctx.reports.users_path()).unwrap();
        assert_eq!(tasks_text, render_task_overview(&ctx.snapshot.tasks));
        assert_eq!(users_text, render_user_overview(&ctx.snapshot.users));
        assert!(tasks_text.contains("OVERDUE_TASKS: 1\n"));
        assert!(users_text.contains("STATISTICS_FOR BOB\n"));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_generate_overwrites_previous_reports(ctx: &mut ReportTestContext) {
        fs::write(ctx.reports.tasks_path(), "stale").unwrap();

        ctx.reports.generate(&ctx.snapshot).unwrap();

        let tasks_text = fs::read_to_string(ctx.reports.tasks_path()).unwrap();
        assert!(tasks_text.starts_with("*** TASKS OVERVIEW ***\n"));
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_ensure_creates_missing_files(ctx: &mut ReportTestContext) {
        let generated = ctx.reports.ensure(&ctx.snapshot).unwrap();

        assert!(generated.tasks);
        assert!(generated.users);
        assert!(ctx.reports.tasks_path().exists());
        assert!(ctx.reports.users_path().exists());
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_ensure_keeps_existing_files(ctx: &mut ReportTestContext) {
        fs::write(ctx.reports.tasks_path(), "kept").unwrap();

        let generated = ctx.reports.ensure(&ctx.snapshot).unwrap();

        assert!(!generated.tasks);
        assert!(generated.users);
        assert_eq!(fs::read_to_string(ctx.reports.tasks_path()).unwrap(), "kept");

        let again = ctx.reports.ensure(&ctx.snapshot).unwrap();
        assert!(!again.tasks);
        assert!(!again.users);
    }

    #[test_context(ReportTestContext)]
    #[test]
    fn test_generate_creates_report_directory(ctx: &mut ReportTestContext) {
        let reports = Reports::new(ctx.temp_dir.path().join("nested").join("documents"));

        reports.generate(&ctx.snapshot).unwrap();

        assert!(reports.tasks_path().exists());
        assert!(reports.users_path().exists());
    }
}
