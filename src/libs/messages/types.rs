#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Welcome(String), // version
    LoginHeader,
    LoginSuccessful,
    LoginFailed,
    LoginAttemptsRemaining(u32),
    SessionEnded,
    NoUsersRegistered(String), // credential file path

    // === MENU MESSAGES ===
    MainMenuHeader,
    MenuRegisterUser,
    MenuAddTask,
    MenuViewAll,
    MenuViewMine,
    MenuGenerateReports,
    MenuDisplayReports,
    MenuExit,
    EditMenuHeader,
    EditMenuFinalize,
    EditMenuReassign,
    EditMenuReschedule,
    EditMenuBack,

    // === USER MESSAGES ===
    UserCreated(String),

    // === TASK MESSAGES ===
    TaskCreated,
    TaskFinalized,
    TaskReassigned(String),
    TaskRescheduled(String),
    TaskAlreadyComplete,
    TasksHeader,
    MyTasksHeader(String),
    TasksNotFound,

    // === REPORT MESSAGES ===
    ReportsGenerated(String), // directory
    ReportFileGenerated(String),
    TaskOverviewHeader,
    UserOverviewHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    ConfigModuleSession,
    LoginAttemptsRange,

    // === PROMPTS ===
    PromptUsername,
    PromptPassword,
    PromptNewUsername,
    PromptNewPassword,
    PromptConfirmPassword,
    PromptAssignee,
    PromptNewAssignee,
    PromptHeading,
    PromptDescription,
    PromptDueDate,
    PromptNewDueDate,
    PromptTaskSelection,
    PromptDocumentsDir,
    PromptLoginAttempts,
}
