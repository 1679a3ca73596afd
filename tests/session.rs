#[cfg(test)]
mod tests {
    use std::fs;
    use taskr::db::users::{Users, USERS_FILE_NAME};
    use taskr::libs::error::TaskError;
    use taskr::libs::session::{login, LoginAttempts, DEFAULT_LOGIN_ATTEMPTS};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SessionTestContext {
        _temp_dir: TempDir,
        users: Users,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join(USERS_FILE_NAME);
            fs::write(&path, "admin;adm1n\nalice;wonderland\n").unwrap();
            let users = Users::open(&path).unwrap();
            SessionTestContext { _temp_dir: temp_dir, users }
        }
    }

    fn pair(username: &str, password: &str) -> (String, String) {
        (username.to_string(), password.to_string())
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_login_succeeds_with_valid_credentials(ctx: &mut SessionTestContext) {
        let mut attempts = LoginAttempts::default();

        let user = login(&ctx.users, &mut attempts, || Ok(pair("alice", "wonderland"))).unwrap();

        assert_eq!(user, "alice");
        assert_eq!(attempts.remaining(), DEFAULT_LOGIN_ATTEMPTS);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_login_terminates_after_limit(ctx: &mut SessionTestContext) {
        let mut attempts = LoginAttempts::default();
        let mut calls = 0;

        let result = login(&ctx.users, &mut attempts, || {
            calls += 1;
            Ok(pair("admin", "wrong"))
        });

        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<TaskError>(), Some(TaskError::LoginAttemptsExceeded(5))));
        assert_eq!(calls, 5);
        assert_eq!(attempts.remaining(), 0);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_login_succeeds_on_third_attempt(ctx: &mut SessionTestContext) {
        let mut attempts = LoginAttempts::default();
        let mut answers = vec![pair("admin", "adm1n"), pair("mallory", "x"), pair("admin", "nope")];

        let user = login(&ctx.users, &mut attempts, || Ok(answers.pop().unwrap())).unwrap();

        assert_eq!(user, "admin");
        assert_eq!(attempts.remaining(), 3);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_login_rejects_other_users_password(ctx: &mut SessionTestContext) {
        let mut attempts = LoginAttempts::new(1);

        let result = login(&ctx.users, &mut attempts, || Ok(pair("admin", "wonderland")));

        assert!(result.is_err());
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn test_login_propagates_prompt_errors(ctx: &mut SessionTestContext) {
        let mut attempts = LoginAttempts::default();

        let result = login(&ctx.users, &mut attempts, || anyhow::bail!("input closed"));

        assert_eq!(result.unwrap_err().to_string(), "input closed");
        assert_eq!(attempts.remaining(), DEFAULT_LOGIN_ATTEMPTS);
    }

    #[test]
    fn test_login_attempts_count_down() {
        let mut attempts = LoginAttempts::default();

        let reported: Vec<u32> = (0..5).map(|_| attempts.fail()).collect();

        assert_eq!(reported, vec![4, 3, 2, 1, 0]);
        assert!(attempts.exhausted());
    }

    #[test]
    fn test_login_attempts_saturate_at_zero() {
        let mut attempts = LoginAttempts::new(2);

        assert_eq!(attempts.fail(), 1);
        assert_eq!(attempts.fail(), 0);
        assert_eq!(attempts.fail(), 0);
        assert!(attempts.exhausted());
        assert_eq!(attempts.limit(), 2);
    }
}
